use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Table de substitution : scalaire Unicode → chaîne de remplacement.
///
/// Immuable une fois construite. Un caractère absent de la table est
/// recopié tel quel (identité), jamais supprimé ni signalé en erreur.
///
/// # Example
/// ```
/// use gf_glyph::codepoint::CodepointMap;
/// let map = CodepointMap::builder().letters(0x1D400, 0x1D41A).build();
/// assert_eq!(map.apply("Ab!"), "\u{1D400}\u{1D41B}!");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CodepointMap {
    entries: HashMap<char, Box<str>>,
}

impl CodepointMap {
    #[must_use]
    pub fn builder() -> CodepointMapBuilder {
        CodepointMapBuilder::default()
    }

    /// Replacement for `c`, if the style defines one.
    #[inline]
    #[must_use]
    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(|s| &**s)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applique la table scalaire par scalaire.
    ///
    /// L'itération se fait par `char` (scalaire Unicode), donc les caractères
    /// hors BMP (les sorties mathématiques par exemple) ne sont jamais
    /// coupés.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 4);
        self.apply_into(text, &mut out);
        out
    }

    /// Variante sans allocation de [`CodepointMap::apply`] : écrit dans `out`.
    pub fn apply_into(&self, text: &str, out: &mut String) {
        for c in text.chars() {
            match self.entries.get(&c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
    }

    /// Build the reverse table (styled scalar → source character).
    ///
    /// Only single-scalar replacements are invertible. When several sources
    /// share a replacement (case-folded tables), the smallest source
    /// codepoint wins, so uppercase is restored.
    ///
    /// # Example
    /// ```
    /// use gf_glyph::codepoint::CodepointMap;
    /// let squared = CodepointMap::builder().letters(0x1F130, 0x1F130).build();
    /// let inverse = squared.inverse();
    /// assert_eq!(inverse.apply(&squared.apply("Hi")), "HI");
    /// ```
    #[must_use]
    pub fn inverse(&self) -> CodepointMap {
        let mut sources: Vec<(&char, &Box<str>)> = self.entries.iter().collect();
        sources.sort_unstable_by_key(|(c, _)| **c);

        let mut entries = HashMap::with_capacity(sources.len());
        for (&source, replacement) in sources {
            let mut scalars = replacement.chars();
            if let (Some(target), None) = (scalars.next(), scalars.next()) {
                entries
                    .entry(target)
                    .or_insert_with(|| source.to_string().into_boxed_str());
            }
        }
        CodepointMap { entries }
    }

    /// Iterate over `(source, replacement)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(c, s)| (*c, s.as_ref()))
    }
}

/// Construit une [`CodepointMap`] à partir de plages contiguës, d'entrées
/// explicites et d'un calque d'exceptions.
///
/// Les exceptions sont appliquées dans `build()`, après toutes les plages,
/// quel que soit l'ordre des appels : elles gagnent toujours.
///
/// # Example
/// ```
/// use gf_glyph::codepoint::CodepointMap;
/// // Italique : le 'h' minuscule vit à U+210E, hors du bloc mathématique.
/// let italic = CodepointMap::builder()
///     .exceptions(&[('h', '\u{210E}')])
///     .letters(0x1D434, 0x1D44E)
///     .build();
/// assert_eq!(italic.get('h'), Some("\u{210E}"));
/// assert_eq!(italic.get('i'), Some("\u{1D456}"));
/// ```
#[derive(Debug, Default)]
pub struct CodepointMapBuilder {
    entries: HashMap<char, Box<str>>,
    exceptions: Vec<(char, char)>,
}

impl CodepointMapBuilder {
    /// Map every character of `chars` to `base + (c - start)`.
    #[must_use]
    pub fn range(mut self, chars: RangeInclusive<char>, base: u32) -> Self {
        let start = u32::from(*chars.start());
        for c in chars {
            let target = base + (u32::from(c) - start);
            match char::from_u32(target) {
                Some(t) => {
                    self.entries.insert(c, t.to_string().into_boxed_str());
                }
                None => log::warn!("Codepoint invalide U+{target:X} pour '{c}', ignoré"),
            }
        }
        self
    }

    /// `A..=Z` from `upper`, `a..=z` from `lower`. Pass the same base twice
    /// for blocks that only encode one case.
    #[must_use]
    pub fn letters(self, upper: u32, lower: u32) -> Self {
        self.range('A'..='Z', upper).range('a'..='z', lower)
    }

    #[must_use]
    pub fn digits(self, base: u32) -> Self {
        self.range('0'..='9', base)
    }

    /// Explicit entries; a later entry for the same source replaces an earlier one.
    #[must_use]
    pub fn pairs(mut self, pairs: &[(char, &str)]) -> Self {
        for &(source, replacement) in pairs {
            self.entries.insert(source, replacement.into());
        }
        self
    }

    /// Codepoints pré-alloués hors du bloc contigu.
    #[must_use]
    pub fn exceptions(mut self, overrides: &[(char, char)]) -> Self {
        self.exceptions.extend_from_slice(overrides);
        self
    }

    /// Applique le calque d'exceptions et gèle la table.
    #[must_use]
    pub fn build(mut self) -> CodepointMap {
        for (source, replacement) in self.exceptions {
            self.entries
                .insert(source, replacement.to_string().into_boxed_str());
        }
        self.entries.shrink_to_fit();
        CodepointMap {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_offset_from_start() {
        let map = CodepointMap::builder().range('1'..='9', 0x2460).build();
        assert_eq!(map.get('1'), Some("\u{2460}"));
        assert_eq!(map.get('9'), Some("\u{2468}"));
        assert_eq!(map.get('0'), None);
        assert_eq!(map.len(), 9);
    }

    #[test]
    fn exceptions_win_regardless_of_order() {
        let before = CodepointMap::builder()
            .exceptions(&[('C', '\u{2102}')])
            .letters(0x1D538, 0x1D552)
            .build();
        let after = CodepointMap::builder()
            .letters(0x1D538, 0x1D552)
            .exceptions(&[('C', '\u{2102}')])
            .build();
        assert_eq!(before.get('C'), Some("\u{2102}"));
        assert_eq!(after.get('C'), Some("\u{2102}"));
    }

    #[test]
    fn absent_characters_pass_through() {
        let map = CodepointMap::builder().letters(0x1D400, 0x1D41A).build();
        assert_eq!(map.apply("7 é 🦀"), "7 é 🦀");
    }

    #[test]
    fn astral_input_is_not_split() {
        // Re-styling already-styled text leaves the astral scalars intact.
        let map = CodepointMap::builder().letters(0x1D400, 0x1D41A).build();
        let once = map.apply("AB");
        assert_eq!(map.apply(&once), once);
        assert_eq!(once.chars().count(), 2);
    }

    #[test]
    fn multi_scalar_values_are_skipped_by_inverse() {
        let map = CodepointMap::builder().pairs(&[('"', ",,"), ('a', "\u{0250}")]).build();
        let inverse = map.inverse();
        assert_eq!(inverse.get('\u{0250}'), Some("a"));
        assert_eq!(inverse.len(), 1);
    }

    #[test]
    fn empty_map_is_identity() {
        let map = CodepointMap::default();
        assert!(map.is_empty());
        assert_eq!(map.apply("Hello"), "Hello");
    }

    #[test]
    fn later_pair_replaces_earlier() {
        let map = CodepointMap::builder().pairs(&[('x', "1"), ('x', "2")]).build();
        assert_eq!(map.get('x'), Some("2"));
    }
}
