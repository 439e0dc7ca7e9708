/// Source d'aléa pour le tirage des marques zalgo.
///
/// Injectée dans le moteur plutôt qu'un générateur global : la production
/// utilise `fastrand::Rng`, les tests peuvent fixer une graine ou fournir
/// une séquence scriptée.
///
/// # Example
/// ```
/// use gf_core::traits::MarkSource;
///
/// struct AlwaysFirst;
/// impl MarkSource for AlwaysFirst {
///     fn pick(&mut self, _len: usize) -> usize { 0 }
/// }
///
/// let mut rng = fastrand::Rng::with_seed(7);
/// assert!(rng.pick(5) < 5);
/// assert_eq!(AlwaysFirst.pick(5), 0);
/// ```
pub trait MarkSource {
    /// Index uniforme dans `0..len`.
    ///
    /// CONTRAT : `len > 0`, le résultat est strictement inférieur à `len`.
    fn pick(&mut self, len: usize) -> usize;
}

impl MarkSource for fastrand::Rng {
    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        self.usize(..len)
    }
}

impl<T: MarkSource + ?Sized> MarkSource for &mut T {
    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}
