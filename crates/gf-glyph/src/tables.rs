use std::collections::HashMap;
use std::sync::LazyLock;

use gf_core::style::Style;

use crate::codepoint::CodepointMap;
use crate::symbols;

// === Blocs mathématiques (U+1D400..U+1D7FF) ===
const BOLD: (u32, u32) = (0x1D400, 0x1D41A);
const BOLD_DIGITS: u32 = 0x1D7CE;
const ITALIC: (u32, u32) = (0x1D434, 0x1D44E);
const BOLD_ITALIC: (u32, u32) = (0x1D468, 0x1D482);
const SCRIPT: (u32, u32) = (0x1D49C, 0x1D4B6);
const BOLD_SCRIPT: (u32, u32) = (0x1D4D0, 0x1D4EA);
const FRAKTUR: (u32, u32) = (0x1D504, 0x1D51E);
const DOUBLE_STRUCK: (u32, u32) = (0x1D538, 0x1D552);
const DOUBLE_STRUCK_DIGITS: u32 = 0x1D7D8;
const BOLD_FRAKTUR: (u32, u32) = (0x1D56C, 0x1D586);
const MONOSPACE: (u32, u32) = (0x1D670, 0x1D68A);
const MONOSPACE_DIGITS: u32 = 0x1D7F6;

// === Alphanumériques encadrés ===
const CIRCLED: (u32, u32) = (0x24B6, 0x24D0);
/// ① .. ⑨ ; le zéro encerclé vit ailleurs (U+24EA).
const CIRCLED_ONE: u32 = 0x2460;
const PARENTHESIZED: u32 = 0x249C;
const SQUARED: u32 = 0x1F130;
const NEGATIVE_CIRCLED: u32 = 0x1F150;
const NEGATIVE_SQUARED: u32 = 0x1F170;
const REGIONAL: u32 = 0x1F1E6;
/// `!` → U+FF01 ; tout l'ASCII imprimable est décalé de 0xFEE0.
const FULLWIDTH_BANG: u32 = 0xFF01;

// === Calques d'exceptions ===
// Lettres pré-allouées dans Letterlike Symbols avant l'arrivée des blocs
// mathématiques : le bloc garde un trou à leur place.
const ITALIC_EXCEPTIONS: &[(char, char)] = &[('h', '\u{210E}')];
const SCRIPT_EXCEPTIONS: &[(char, char)] = &[
    ('B', '\u{212C}'),
    ('E', '\u{2130}'),
    ('F', '\u{2131}'),
    ('H', '\u{210B}'),
    ('I', '\u{2110}'),
    ('L', '\u{2112}'),
    ('M', '\u{2133}'),
    ('R', '\u{211B}'),
    ('e', '\u{212F}'),
    ('g', '\u{210A}'),
    ('o', '\u{2134}'),
];
const FRAKTUR_EXCEPTIONS: &[(char, char)] = &[
    ('C', '\u{212D}'),
    ('H', '\u{210C}'),
    ('I', '\u{2111}'),
    ('R', '\u{211C}'),
    ('Z', '\u{2128}'),
];
const DOUBLE_STRUCK_EXCEPTIONS: &[(char, char)] = &[
    ('C', '\u{2102}'),
    ('H', '\u{210D}'),
    ('N', '\u{2115}'),
    ('P', '\u{2119}'),
    ('Q', '\u{211A}'),
    ('R', '\u{211D}'),
    ('Z', '\u{2124}'),
];
const CIRCLED_EXCEPTIONS: &[(char, char)] = &[('0', '\u{24EA}')];
const FULLWIDTH_EXCEPTIONS: &[(char, char)] = &[(' ', '\u{3000}')];

static TABLES: LazyLock<GlyphTables> = LazyLock::new(GlyphTables::build);

/// Tables gelées partagées par tous les appelants.
///
/// Construites au premier accès, en lecture seule ensuite : aucun verrou
/// n'est nécessaire pour les appels concurrents.
#[must_use]
pub fn tables() -> &'static GlyphTables {
    &TABLES
}

static INVERSES: LazyLock<HashMap<Style, CodepointMap>> = LazyLock::new(build_inverses);

/// Table inverse (glyphe → source) d'un style à substitution, après
/// résolution des alias.
///
/// Construite une seule fois, comme les tables directes. `None` pour les
/// styles sans table et pour `upsideDown` et `morse`, dont la sortie n'est
/// pas une simple substitution.
///
/// # Example
/// ```
/// use gf_core::style::Style;
/// use gf_glyph::tables::inverse_for;
/// assert_eq!(inverse_for(Style::Bold).unwrap().get('\u{1D400}'), Some("A"));
/// assert!(inverse_for(Style::Morse).is_none());
/// ```
#[must_use]
pub fn inverse_for(style: Style) -> Option<&'static CodepointMap> {
    INVERSES.get(&style.canonical())
}

fn build_inverses() -> HashMap<Style, CodepointMap> {
    let t = tables();
    let inverses: HashMap<Style, CodepointMap> = Style::ALL
        .into_iter()
        .filter(|&s| s.canonical() == s && !matches!(s, Style::UpsideDown | Style::Morse))
        .filter_map(|s| t.map_for(s).map(|map| (s, map.inverse())))
        .collect();
    log::debug!("{} tables inverses construites", inverses.len());
    inverses
}

/// Une table par style à substitution.
///
/// # Example
/// ```
/// use gf_glyph::tables::tables;
/// assert_eq!(tables().bold.get('A'), Some("\u{1D400}"));
/// assert_eq!(tables().fraktur.get('7'), None);
/// ```
#[derive(Debug)]
pub struct GlyphTables {
    pub bold: CodepointMap,
    pub italic: CodepointMap,
    pub bold_italic: CodepointMap,
    pub script: CodepointMap,
    pub bold_script: CodepointMap,
    pub fraktur: CodepointMap,
    pub bold_fraktur: CodepointMap,
    pub double_struck: CodepointMap,
    pub monospace: CodepointMap,
    pub circled: CodepointMap,
    pub negative_circled: CodepointMap,
    pub squared: CodepointMap,
    pub negative_squared: CodepointMap,
    pub parenthesized: CodepointMap,
    pub small_caps: CodepointMap,
    pub superscript: CodepointMap,
    pub subscript: CodepointMap,
    pub upside_down: CodepointMap,
    pub fullwidth: CodepointMap,
    pub regional: CodepointMap,
    pub leet: CodepointMap,
    pub morse: CodepointMap,
}

fn letters((upper, lower): (u32, u32)) -> crate::codepoint::CodepointMapBuilder {
    CodepointMap::builder().letters(upper, lower)
}

impl GlyphTables {
    fn build() -> Self {
        let tables = Self {
            bold: letters(BOLD).digits(BOLD_DIGITS).build(),
            italic: letters(ITALIC).exceptions(ITALIC_EXCEPTIONS).build(),
            bold_italic: letters(BOLD_ITALIC).build(),
            script: letters(SCRIPT).exceptions(SCRIPT_EXCEPTIONS).build(),
            bold_script: letters(BOLD_SCRIPT).build(),
            fraktur: letters(FRAKTUR).exceptions(FRAKTUR_EXCEPTIONS).build(),
            bold_fraktur: letters(BOLD_FRAKTUR).build(),
            double_struck: letters(DOUBLE_STRUCK)
                .digits(DOUBLE_STRUCK_DIGITS)
                .exceptions(DOUBLE_STRUCK_EXCEPTIONS)
                .build(),
            monospace: letters(MONOSPACE).digits(MONOSPACE_DIGITS).build(),
            circled: letters(CIRCLED)
                .range('1'..='9', CIRCLED_ONE)
                .exceptions(CIRCLED_EXCEPTIONS)
                .build(),
            negative_circled: letters((NEGATIVE_CIRCLED, NEGATIVE_CIRCLED)).build(),
            squared: letters((SQUARED, SQUARED)).build(),
            negative_squared: letters((NEGATIVE_SQUARED, NEGATIVE_SQUARED)).build(),
            parenthesized: letters((PARENTHESIZED, PARENTHESIZED)).build(),
            small_caps: CodepointMap::builder().pairs(symbols::SMALL_CAPS).build(),
            superscript: CodepointMap::builder().pairs(symbols::SUPERSCRIPT).build(),
            subscript: CodepointMap::builder().pairs(symbols::SUBSCRIPT).build(),
            upside_down: CodepointMap::builder().pairs(symbols::UPSIDE_DOWN).build(),
            fullwidth: CodepointMap::builder()
                .range('!'..='~', FULLWIDTH_BANG)
                .exceptions(FULLWIDTH_EXCEPTIONS)
                .build(),
            regional: letters((REGIONAL, REGIONAL)).build(),
            leet: CodepointMap::builder().pairs(symbols::LEET).build(),
            morse: CodepointMap::builder().pairs(symbols::MORSE).build(),
        };
        log::debug!("Tables de glyphes construites");
        tables
    }

    /// Table backing a substitution style, after alias resolution.
    ///
    /// `None` for styles computed algorithmically (binary, hex, zalgo,
    /// combining marks, decorations). `upsideDown` and `morse` return the
    /// table they look up, the engine then reverses or joins the result.
    #[must_use]
    pub fn map_for(&self, style: Style) -> Option<&CodepointMap> {
        let map = match style.canonical() {
            Style::Bold => &self.bold,
            Style::Italic => &self.italic,
            Style::BoldItalic => &self.bold_italic,
            Style::Script => &self.script,
            Style::BoldScript => &self.bold_script,
            Style::Fraktur => &self.fraktur,
            Style::BoldFraktur => &self.bold_fraktur,
            Style::DoubleStruck => &self.double_struck,
            Style::Monospace => &self.monospace,
            Style::Circled => &self.circled,
            Style::NegativeCircled => &self.negative_circled,
            Style::Squared => &self.squared,
            Style::NegativeSquared => &self.negative_squared,
            Style::Parenthesized => &self.parenthesized,
            Style::SmallCaps => &self.small_caps,
            Style::Superscript => &self.superscript,
            Style::Subscript => &self.subscript,
            Style::UpsideDown => &self.upside_down,
            Style::Vaporwave => &self.fullwidth,
            Style::Regional => &self.regional,
            Style::Leet => &self.leet,
            Style::Morse => &self.morse,
            Style::Binary
            | Style::Hex
            | Style::Zalgo
            | Style::Strikethrough
            | Style::Underline
            | Style::Sparkles
            | Style::Wave
            | Style::Bubble
            | Style::Medieval => return None,
        };
        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(s: Option<&str>) -> u32 {
        let s = s.unwrap();
        assert_eq!(s.chars().count(), 1);
        u32::from(s.chars().next().unwrap())
    }

    #[test]
    fn bold_letters_and_digits() {
        let t = tables();
        assert_eq!(cp(t.bold.get('A')), 0x1D400);
        assert_eq!(cp(t.bold.get('Z')), 0x1D419);
        assert_eq!(cp(t.bold.get('a')), 0x1D41A);
        assert_eq!(cp(t.bold.get('0')), 0x1D7CE);
        assert_eq!(cp(t.bold.get('9')), 0x1D7D7);
        assert_eq!(t.bold.len(), 62);
    }

    #[test]
    fn italic_has_single_gap_at_h() {
        let t = tables();
        assert_eq!(cp(t.italic.get('h')), 0x210E);
        assert_eq!(cp(t.italic.get('g')), 0x1D454);
        assert_eq!(cp(t.italic.get('i')), 0x1D456);
        assert_eq!(cp(t.italic.get('H')), 0x1D43B);
        let legacy = t
            .italic
            .iter()
            .filter(|(_, s)| s.chars().all(|c| u32::from(c) < 0x1D400))
            .count();
        assert_eq!(legacy, 1);
    }

    #[test]
    fn script_fraktur_double_struck_exceptions() {
        let t = tables();
        assert_eq!(cp(t.script.get('B')), 0x212C);
        assert_eq!(cp(t.script.get('o')), 0x2134);
        assert_eq!(cp(t.script.get('A')), 0x1D49C);
        assert_eq!(cp(t.fraktur.get('Z')), 0x2128);
        assert_eq!(cp(t.fraktur.get('A')), 0x1D504);
        assert_eq!(cp(t.double_struck.get('R')), 0x211D);
        assert_eq!(cp(t.double_struck.get('A')), 0x1D538);
        assert_eq!(cp(t.double_struck.get('1')), 0x1D7D9);
    }

    #[test]
    fn circled_zero_is_special() {
        let t = tables();
        assert_eq!(cp(t.circled.get('0')), 0x24EA);
        assert_eq!(cp(t.circled.get('1')), 0x2460);
        assert_eq!(cp(t.circled.get('9')), 0x2468);
        assert_eq!(cp(t.circled.get('z')), 0x24E9);
    }

    #[test]
    fn fullwidth_covers_printable_ascii() {
        let t = tables();
        assert_eq!(cp(t.fullwidth.get('!')), 0xFF01);
        assert_eq!(cp(t.fullwidth.get('A')), 0xFF21);
        assert_eq!(cp(t.fullwidth.get('~')), 0xFF5E);
        assert_eq!(cp(t.fullwidth.get(' ')), 0x3000);
        assert_eq!(t.fullwidth.len(), 95);
    }

    #[test]
    fn case_folded_blocks_share_glyphs() {
        let t = tables();
        let folded = [
            &t.squared,
            &t.negative_squared,
            &t.negative_circled,
            &t.regional,
            &t.parenthesized,
        ];
        for map in folded {
            assert_eq!(map.get('q'), map.get('Q'));
        }
        assert_eq!(cp(t.regional.get('a')), 0x1F1E6);
    }

    #[test]
    fn aliases_share_tables() {
        let t = tables();
        assert!(std::ptr::eq(
            t.map_for(Style::Bubble).unwrap(),
            t.map_for(Style::Circled).unwrap()
        ));
        assert!(std::ptr::eq(
            t.map_for(Style::Medieval).unwrap(),
            t.map_for(Style::Fraktur).unwrap()
        ));
        assert!(t.map_for(Style::Zalgo).is_none());
    }

    #[test]
    fn inverses_resolve_aliases_and_skip_non_substitutions() {
        assert!(std::ptr::eq(
            inverse_for(Style::Bubble).unwrap(),
            inverse_for(Style::Circled).unwrap()
        ));
        for style in [Style::UpsideDown, Style::Morse, Style::Zalgo, Style::Hex, Style::Wave] {
            assert!(inverse_for(style).is_none(), "{style}");
        }
    }

    #[test]
    fn fraktur_defines_no_digits() {
        assert!(('0'..='9').all(|d| !tables().fraktur.contains(d)));
    }
}
