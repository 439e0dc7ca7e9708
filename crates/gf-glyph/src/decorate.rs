use crate::symbols::{SPARKLE, STRIKE_MARK, UNDERLINE_MARK, WAVE};
use crate::tables::tables;

/// Append `mark` after every scalar of `text` (never replaces the base).
///
/// # Example
/// ```
/// use gf_glyph::decorate::combine;
/// assert_eq!(combine("ab", '\u{0336}'), "a\u{0336}b\u{0336}");
/// ```
#[must_use]
pub fn combine(text: &str, mark: char) -> String {
    let mut out = String::with_capacity(text.len() + text.chars().count() * mark.len_utf8());
    for c in text.chars() {
        out.push(c);
        out.push(mark);
    }
    out
}

#[must_use]
pub fn strikethrough(text: &str) -> String {
    combine(text, STRIKE_MARK)
}

#[must_use]
pub fn underline(text: &str) -> String {
    combine(text, UNDERLINE_MARK)
}

/// Retire la marque ajoutée par [`combine`] ; inverse exact de celui-ci.
///
/// # Example
/// ```
/// use gf_glyph::decorate::{strip_mark, strikethrough};
/// assert_eq!(strip_mark(&strikethrough("Hello"), '\u{0336}'), "Hello");
/// ```
#[must_use]
pub fn strip_mark(text: &str, mark: char) -> String {
    text.chars().filter(|&c| c != mark).collect()
}

/// `✨ H ✨ i ✨` : le glyphe encadre la chaîne et sépare chaque scalaire.
///
/// # Example
/// ```
/// use gf_glyph::decorate::sparkles;
/// assert_eq!(sparkles("Hi"), "✨ H ✨ i ✨");
/// assert_eq!(sparkles(""), "✨  ✨");
/// ```
#[must_use]
pub fn sparkles(text: &str) -> String {
    let separator = format!(" {SPARKLE} ");
    let mut out = String::with_capacity(text.len() * 6 + 8);
    out.push(SPARKLE);
    out.push(' ');
    interleave(text, &separator, &mut out);
    out.push(' ');
    out.push(SPARKLE);
    out
}

/// `~H~i~`
///
/// # Example
/// ```
/// use gf_glyph::decorate::wave;
/// assert_eq!(wave("Hi"), "~H~i~");
/// assert_eq!(wave(""), "~~");
/// ```
#[must_use]
pub fn wave(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2 + 2);
    out.push(WAVE);
    interleave(text, WAVE.encode_utf8(&mut [0; 4]), &mut out);
    out.push(WAVE);
    out
}

/// Retourne le texte : substitution par glyphe puis inversion de la
/// séquence de scalaires produite (pas des octets).
///
/// # Example
/// ```
/// use gf_glyph::decorate::upside_down;
/// assert_eq!(upside_down("ab"), "q\u{0250}");
/// ```
#[must_use]
pub fn upside_down(text: &str) -> String {
    tables().upside_down.apply(text).chars().rev().collect()
}

fn interleave(text: &str, separator: &str, out: &mut String) {
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combining_marks_follow_each_scalar() {
        let out = underline("a🦀");
        let chars: Vec<char> = out.chars().collect();
        assert_eq!(chars, vec!['a', UNDERLINE_MARK, '🦀', UNDERLINE_MARK]);
    }

    #[test]
    fn empty_input_for_combining_styles() {
        assert_eq!(strikethrough(""), "");
        assert_eq!(underline(""), "");
    }

    #[test]
    fn upside_down_reverses_scalars() {
        assert_eq!(upside_down("Hello"), "oll\u{01DD}H");
        assert_eq!(upside_down("(1)"), "(\u{0196})");
        assert_eq!(upside_down(""), "");
    }

    #[test]
    fn upside_down_keeps_multi_scalar_glyphs_together() {
        // '"' devient ",," : deux virgules identiques, l'inversion ne change rien.
        assert_eq!(upside_down("a\""), ",,\u{0250}");
    }

    #[test]
    fn upside_down_passes_unknown_through() {
        assert_eq!(upside_down("é🦀"), "🦀é");
    }

    #[test]
    fn sparkles_separates_astral_scalars() {
        assert_eq!(sparkles("🦀"), "✨ 🦀 ✨");
    }
}
