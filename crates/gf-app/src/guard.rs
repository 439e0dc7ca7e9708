use gf_core::config::Limits;
use gf_core::error::CoreError;
use gf_core::request::TransformRequest;

/// Validation des requêtes avant appel au moteur.
///
/// Le moteur n'impose aucune limite de taille : c'est ici que les plafonds
/// configurés sont appliqués. Longueurs comptées en scalaires Unicode.
#[derive(Clone, Copy, Debug)]
pub struct RequestGuard {
    limits: Limits,
}

impl RequestGuard {
    #[must_use]
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Texte d'une transformation simple (ou d'un élément de batch).
    ///
    /// # Errors
    /// [`CoreError::EmptyText`] ou [`CoreError::TextTooLong`].
    pub fn check_text(&self, text: &str) -> Result<(), CoreError> {
        check_len(text, self.limits.max_text_chars)
    }

    /// Texte soumis à tous les styles à la fois, plafond plus bas.
    ///
    /// # Errors
    /// [`CoreError::EmptyText`] ou [`CoreError::TextTooLong`].
    pub fn check_all_styles(&self, text: &str) -> Result<(), CoreError> {
        check_len(text, self.limits.max_all_styles_chars)
    }

    /// Taille du batch, puis texte de chaque élément.
    ///
    /// Les styles ne sont pas vérifiés : un nom inconnu reste un échec
    /// isolé de l'élément concerné.
    ///
    /// # Errors
    /// [`CoreError::EmptyBatch`], [`CoreError::BatchTooLarge`], ou l'erreur
    /// de texte du premier élément invalide.
    pub fn check_batch(&self, items: &[TransformRequest]) -> Result<(), CoreError> {
        if items.is_empty() {
            return Err(CoreError::EmptyBatch);
        }
        if items.len() > self.limits.max_batch_items {
            return Err(CoreError::BatchTooLarge {
                len: items.len(),
                max: self.limits.max_batch_items,
            });
        }
        items.iter().try_for_each(|item| self.check_text(&item.text))
    }
}

fn check_len(text: &str, max: usize) -> Result<(), CoreError> {
    if text.is_empty() {
        return Err(CoreError::EmptyText);
    }
    let len = text.chars().count();
    if len > max {
        return Err(CoreError::TextTooLong { len, max });
    }
    Ok(())
}
