use gf_core::options::ZalgoOptions;
use gf_core::traits::MarkSource;

use crate::symbols::{ZALGO_DOWN, ZALGO_MID, ZALGO_UP};

/// Ajoute à chaque scalaire des marques combinantes tirées des trois pools.
///
/// Pour chaque caractère, dans l'ordre : `up` marques du pool supérieur,
/// `mid` du pool médian, `down` du pool inférieur (comptes donnés par
/// l'intensité, pool désactivé = 0). Tirage uniforme avec remise, indépendant
/// par caractère et par pool. La base n'est jamais remplacée.
///
/// # Example
/// ```
/// use gf_core::options::{ZalgoIntensity, ZalgoOptions};
/// use gf_glyph::zalgo::zalgo;
///
/// let mut rng = fastrand::Rng::with_seed(1);
/// let out = zalgo("Hi", &ZalgoOptions::with_intensity(ZalgoIntensity::Mini), &mut rng);
/// // 2 bases + (1 dessus + 1 dessous) par base
/// assert_eq!(out.chars().count(), 6);
/// assert!(out.starts_with('H'));
/// ```
pub fn zalgo(text: &str, options: &ZalgoOptions, rng: &mut impl MarkSource) -> String {
    let (up, mid, down) = options.effective_counts();
    let per_char = 1 + up + mid + down;
    // Toutes les marques sont dans U+0300..U+036F : 2 octets en UTF-8.
    let mut out = String::with_capacity(text.len() + text.chars().count() * (per_char - 1) * 2);

    for c in text.chars() {
        out.push(c);
        push_marks(&mut out, &ZALGO_UP, up, rng);
        push_marks(&mut out, &ZALGO_MID, mid, rng);
        push_marks(&mut out, &ZALGO_DOWN, down, rng);
    }
    out
}

#[inline]
fn push_marks(out: &mut String, pool: &[char], count: usize, rng: &mut impl MarkSource) {
    for _ in 0..count {
        out.push(pool[rng.pick(pool.len())]);
    }
}

/// `true` si `c` appartient à l'un des trois pools.
#[must_use]
pub fn is_zalgo_mark(c: char) -> bool {
    ZALGO_UP.contains(&c) || ZALGO_MID.contains(&c) || ZALGO_DOWN.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_core::options::ZalgoIntensity;

    /// Source scriptée : renvoie toujours le dernier index du pool.
    struct Last;
    impl MarkSource for Last {
        fn pick(&mut self, len: usize) -> usize {
            len - 1
        }
    }

    /// Split output into (base, marks) runs.
    fn runs(out: &str) -> Vec<(char, Vec<char>)> {
        let mut runs: Vec<(char, Vec<char>)> = Vec::new();
        for c in out.chars() {
            if is_zalgo_mark(c) {
                runs.last_mut().unwrap().1.push(c);
            } else {
                runs.push((c, Vec::new()));
            }
        }
        runs
    }

    fn opts(intensity: ZalgoIntensity) -> ZalgoOptions {
        ZalgoOptions::with_intensity(intensity)
    }

    #[test]
    fn mini_appends_at_most_two_marks() {
        let mut rng = fastrand::Rng::new();
        for _ in 0..50 {
            let out = zalgo("Hello World", &opts(ZalgoIntensity::Mini), &mut rng);
            let runs = runs(&out);
            assert_eq!(runs.len(), 11);
            for (_, marks) in runs {
                assert!(marks.len() <= 2);
            }
        }
    }

    #[test]
    fn maxi_is_bounded_by_nineteen() {
        let mut rng = fastrand::Rng::new();
        let out = zalgo("abc", &opts(ZalgoIntensity::Maxi), &mut rng);
        for (_, marks) in runs(&out) {
            assert!(marks.len() <= 19);
            assert_eq!(marks.len(), 19);
        }
    }

    #[test]
    fn marks_come_from_the_right_pool_in_order() {
        let out = zalgo("x", &opts(ZalgoIntensity::Normal), &mut Last);
        let expected: String = std::iter::once('x')
            .chain([ZALGO_UP[47]; 3])
            .chain([ZALGO_MID[20]; 1])
            .chain([ZALGO_DOWN[39]; 3])
            .collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn disabled_pools_contribute_nothing() {
        let options = ZalgoOptions {
            intensity: ZalgoIntensity::Maxi,
            up: false,
            mid: true,
            down: false,
        };
        let mut rng = fastrand::Rng::with_seed(9);
        let out = zalgo("ab", &options, &mut rng);
        for (_, marks) in runs(&out) {
            assert_eq!(marks.len(), 3);
            assert!(marks.iter().all(|m| ZALGO_MID.contains(m)));
        }
    }

    #[test]
    fn no_pool_is_identity() {
        let options = ZalgoOptions {
            intensity: ZalgoIntensity::Maxi,
            up: false,
            mid: false,
            down: false,
        };
        assert_eq!(zalgo("Hello", &options, &mut fastrand::Rng::new()), "Hello");
    }

    #[test]
    fn same_seed_same_output() {
        let a = zalgo("seeded", &opts(ZalgoIntensity::Normal), &mut fastrand::Rng::with_seed(42));
        let b = zalgo("seeded", &opts(ZalgoIntensity::Normal), &mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn bases_are_preserved() {
        let mut rng = fastrand::Rng::new();
        let out = zalgo("Hé🦀", &opts(ZalgoIntensity::Maxi), &mut rng);
        let bases: String = runs(&out).into_iter().map(|(b, _)| b).collect();
        assert_eq!(bases, "Hé🦀");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(zalgo("", &opts(ZalgoIntensity::Maxi), &mut fastrand::Rng::new()), "");
    }
}
