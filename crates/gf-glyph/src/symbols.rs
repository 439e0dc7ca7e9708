//! Tables explicites (non contiguës) et pools de marques combinantes.

/// Small caps. Both cases map to the same glyph; `x` and `z` share U+1D22.
#[rustfmt::skip]
pub const SMALL_CAPS: &[(char, &str)] = &[
    ('a', "\u{1D00}"), ('b', "\u{0299}"), ('c', "\u{1D04}"), ('d', "\u{1D05}"),
    ('e', "\u{1D07}"), ('f', "\u{A730}"), ('g', "\u{0262}"), ('h', "\u{029C}"),
    ('i', "\u{026A}"), ('j', "\u{1D0A}"), ('k', "\u{1D0B}"), ('l', "\u{029F}"),
    ('m', "\u{1D0D}"), ('n', "\u{0274}"), ('o', "\u{1D0F}"), ('p', "\u{1D18}"),
    ('q', "\u{01EB}"), ('r', "\u{0280}"), ('s', "\u{A731}"), ('t', "\u{1D1B}"),
    ('u', "\u{1D1C}"), ('v', "\u{1D20}"), ('w', "\u{1D21}"), ('x', "\u{1D22}"),
    ('y', "\u{028F}"), ('z', "\u{1D22}"),
    ('A', "\u{1D00}"), ('B', "\u{0299}"), ('C', "\u{1D04}"), ('D', "\u{1D05}"),
    ('E', "\u{1D07}"), ('F', "\u{A730}"), ('G', "\u{0262}"), ('H', "\u{029C}"),
    ('I', "\u{026A}"), ('J', "\u{1D0A}"), ('K', "\u{1D0B}"), ('L', "\u{029F}"),
    ('M', "\u{1D0D}"), ('N', "\u{0274}"), ('O', "\u{1D0F}"), ('P', "\u{1D18}"),
    ('Q', "\u{01EB}"), ('R', "\u{0280}"), ('S', "\u{A731}"), ('T', "\u{1D1B}"),
    ('U', "\u{1D1C}"), ('V', "\u{1D20}"), ('W', "\u{1D21}"), ('X', "\u{1D22}"),
    ('Y', "\u{028F}"), ('Z', "\u{1D22}"),
];

#[rustfmt::skip]
pub const SUPERSCRIPT: &[(char, &str)] = &[
    ('a', "\u{1D43}"), ('b', "\u{1D47}"), ('c', "\u{1D9C}"), ('d', "\u{1D48}"),
    ('e', "\u{1D49}"), ('f', "\u{1DA0}"), ('g', "\u{1D4D}"), ('h', "\u{02B0}"),
    ('i', "\u{2071}"), ('j', "\u{02B2}"), ('k', "\u{1D4F}"), ('l', "\u{02E1}"),
    ('m', "\u{1D50}"), ('n', "\u{207F}"), ('o', "\u{1D52}"), ('p', "\u{1D56}"),
    ('q', "\u{02A0}"), ('r', "\u{02B3}"), ('s', "\u{02E2}"), ('t', "\u{1D57}"),
    ('u', "\u{1D58}"), ('v', "\u{1D5B}"), ('w', "\u{02B7}"), ('x', "\u{02E3}"),
    ('y', "\u{02B8}"), ('z', "\u{1DBB}"),
    ('A', "\u{1D2C}"), ('B', "\u{1D2E}"), ('C', "\u{1D9C}"), ('D', "\u{1D30}"),
    ('E', "\u{1D31}"), ('F', "\u{1DA0}"), ('G', "\u{1D33}"), ('H', "\u{1D34}"),
    ('I', "\u{1D35}"), ('J', "\u{1D36}"), ('K', "\u{1D37}"), ('L', "\u{1D38}"),
    ('M', "\u{1D39}"), ('N', "\u{1D3A}"), ('O', "\u{1D3C}"), ('P', "\u{1D3E}"),
    ('Q', "\u{02A0}"), ('R', "\u{1D3F}"), ('S', "\u{02E2}"), ('T', "\u{1D40}"),
    ('U', "\u{1D41}"), ('V', "\u{2C7D}"), ('W', "\u{1D42}"), ('X', "\u{02E3}"),
    ('Y', "\u{02B8}"), ('Z', "\u{1DBB}"),
    ('0', "\u{2070}"), ('1', "\u{00B9}"), ('2', "\u{00B2}"), ('3', "\u{00B3}"),
    ('4', "\u{2074}"), ('5', "\u{2075}"), ('6', "\u{2076}"), ('7', "\u{2077}"),
    ('8', "\u{2078}"), ('9', "\u{2079}"),
    ('+', "\u{207A}"), ('-', "\u{207B}"), ('=', "\u{207C}"), ('(', "\u{207D}"),
    (')', "\u{207E}"),
];

/// Unicode n'a pas d'indice pour toutes les lettres : seules 17 sont couvertes.
#[rustfmt::skip]
pub const SUBSCRIPT: &[(char, &str)] = &[
    ('a', "\u{2090}"), ('e', "\u{2091}"), ('h', "\u{2095}"), ('i', "\u{1D62}"),
    ('j', "\u{2C7C}"), ('k', "\u{2096}"), ('l', "\u{2097}"), ('m', "\u{2098}"),
    ('n', "\u{2099}"), ('o', "\u{2092}"), ('p', "\u{209A}"), ('r', "\u{1D63}"),
    ('s', "\u{209B}"), ('t', "\u{209C}"), ('u', "\u{1D64}"), ('v', "\u{1D65}"),
    ('x', "\u{2093}"),
    ('0', "\u{2080}"), ('1', "\u{2081}"), ('2', "\u{2082}"), ('3', "\u{2083}"),
    ('4', "\u{2084}"), ('5', "\u{2085}"), ('6', "\u{2086}"), ('7', "\u{2087}"),
    ('8', "\u{2088}"), ('9', "\u{2089}"),
    ('+', "\u{208A}"), ('-', "\u{208B}"), ('=', "\u{208C}"), ('(', "\u{208D}"),
    (')', "\u{208E}"),
];

/// Glyphes retournés. Le résultat est ensuite inversé par le moteur.
/// `"` devient deux scalaires (`,,`).
#[rustfmt::skip]
pub const UPSIDE_DOWN: &[(char, &str)] = &[
    ('a', "\u{0250}"), ('b', "q"), ('c', "\u{0254}"), ('d', "p"), ('e', "\u{01DD}"),
    ('f', "\u{025F}"), ('g', "\u{0183}"), ('h', "\u{0265}"), ('i', "\u{0131}"),
    ('j', "\u{027E}"), ('k', "\u{029E}"), ('l', "l"), ('m', "\u{026F}"), ('n', "u"),
    ('o', "o"), ('p', "d"), ('q', "b"), ('r', "\u{0279}"), ('s', "s"), ('t', "\u{0287}"),
    ('u', "n"), ('v', "\u{028C}"), ('w', "\u{028D}"), ('x', "x"), ('y', "\u{028E}"),
    ('z', "z"),
    ('A', "\u{2200}"), ('B', "\u{1012}"), ('C', "\u{0186}"), ('D', "\u{15E1}"),
    ('E', "\u{018E}"), ('F', "\u{2132}"), ('G', "\u{2141}"), ('H', "H"), ('I', "I"),
    ('J', "\u{017F}"), ('K', "\u{22CA}"), ('L', "\u{02E5}"), ('M', "W"), ('N', "N"),
    ('O', "O"), ('P', "\u{0500}"), ('Q', "\u{038C}"), ('R', "\u{1D1A}"), ('S', "S"),
    ('T', "\u{22A5}"), ('U', "\u{2229}"), ('V', "\u{039B}"), ('W', "M"), ('X', "X"),
    ('Y', "\u{2144}"), ('Z', "Z"),
    ('0', "0"), ('1', "\u{0196}"), ('2', "\u{1105}"), ('3', "\u{0190}"), ('4', "\u{3123}"),
    ('5', "\u{03DB}"), ('6', "9"), ('7', "\u{3125}"), ('8', "8"), ('9', "6"),
    ('.', "\u{02D9}"), (',', "'"), ('\'', ","), ('"', ",,"), ('!', "\u{00A1}"),
    ('?', "\u{00BF}"), ('[', "]"), (']', "["), ('(', ")"), (')', "("),
    ('{', "}"), ('}', "{"), ('<', ">"), ('>', "<"), ('&', "\u{214B}"),
    ('_', "\u{203E}"), (';', "\u{061B}"), ('\u{203F}', "\u{2040}"),
];

#[rustfmt::skip]
pub const LEET: &[(char, &str)] = &[
    ('a', "4"), ('A', "4"), ('b', "8"), ('B', "8"), ('e', "3"), ('E', "3"),
    ('g', "9"), ('G', "9"), ('i', "1"), ('I', "1"), ('l', "1"), ('L', "1"),
    ('o', "0"), ('O', "0"), ('s', "5"), ('S', "5"), ('t', "7"), ('T', "7"),
    ('z', "2"), ('Z', "2"),
];

/// International Morse. Clés en majuscules uniquement.
#[rustfmt::skip]
pub const MORSE: &[(char, &str)] = &[
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."),
    ('F', "..-."), ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"),
    ('K', "-.-"), ('L', ".-.."), ('M', "--"), ('N', "-."), ('O', "---"),
    ('P', ".--."), ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
    ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"), ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"), ('4', "....-"),
    ('5', "....."), ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."),
    ('.', ".-.-.-"), (',', "--..--"), ('?', "..--.."), ('\'', ".----."), ('!', "-.-.--"),
    ('/', "-..-."), ('(', "-.--."), (')', "-.--.-"), ('&', ".-..."), (':', "---..."),
    (';', "-.-.-."), ('=', "-...-"), ('+', ".-.-."), ('-', "-....-"), ('_', "..--.-"),
    ('"', ".-..-."), ('$', "...-..-"), ('@', ".--.-."),
];

/// Marques combinantes au-dessus de la ligne de base.
#[rustfmt::skip]
pub const ZALGO_UP: [char; 48] = [
    '\u{030d}', '\u{030e}', '\u{0304}', '\u{0305}', '\u{033f}', '\u{0311}', '\u{0306}',
    '\u{0310}', '\u{0352}', '\u{0357}', '\u{0351}', '\u{0307}', '\u{0308}', '\u{030a}',
    '\u{0342}', '\u{0343}', '\u{0344}', '\u{034a}', '\u{034b}', '\u{034c}', '\u{0303}',
    '\u{0302}', '\u{030c}', '\u{0350}', '\u{0300}', '\u{0301}', '\u{030b}', '\u{030f}',
    '\u{0312}', '\u{0313}', '\u{0314}', '\u{033d}', '\u{0309}', '\u{0363}', '\u{0364}',
    '\u{0365}', '\u{0366}', '\u{0367}', '\u{0368}', '\u{0369}', '\u{036a}', '\u{036b}',
    '\u{036c}', '\u{036d}', '\u{036e}', '\u{036f}', '\u{033e}', '\u{035b}',
];

/// Marques traversant le glyphe.
#[rustfmt::skip]
pub const ZALGO_MID: [char; 21] = [
    '\u{0315}', '\u{031b}', '\u{0340}', '\u{0341}', '\u{0358}', '\u{0321}', '\u{0322}',
    '\u{0327}', '\u{0328}', '\u{0334}', '\u{0335}', '\u{0336}', '\u{034f}', '\u{035c}',
    '\u{035d}', '\u{035e}', '\u{035f}', '\u{0360}', '\u{0362}', '\u{0338}', '\u{0337}',
];

/// Marques sous la ligne de base.
#[rustfmt::skip]
pub const ZALGO_DOWN: [char; 40] = [
    '\u{0316}', '\u{0317}', '\u{0318}', '\u{0319}', '\u{031c}', '\u{031d}', '\u{031e}',
    '\u{031f}', '\u{0320}', '\u{0324}', '\u{0325}', '\u{0326}', '\u{0329}', '\u{032a}',
    '\u{032b}', '\u{032c}', '\u{032d}', '\u{032e}', '\u{032f}', '\u{0330}', '\u{0331}',
    '\u{0332}', '\u{0333}', '\u{0339}', '\u{033a}', '\u{033b}', '\u{033c}', '\u{0345}',
    '\u{0347}', '\u{0348}', '\u{0349}', '\u{034d}', '\u{034e}', '\u{0353}', '\u{0354}',
    '\u{0355}', '\u{0356}', '\u{0359}', '\u{035a}', '\u{0323}',
];

/// Combining long stroke overlay.
pub const STRIKE_MARK: char = '\u{0336}';
/// Combining low line.
pub const UNDERLINE_MARK: char = '\u{0332}';
pub const SPARKLE: char = '\u{2728}';
pub const WAVE: char = '~';

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn zalgo_pools_are_disjoint() {
        let up: HashSet<char> = ZALGO_UP.into_iter().collect();
        let mid: HashSet<char> = ZALGO_MID.into_iter().collect();
        let down: HashSet<char> = ZALGO_DOWN.into_iter().collect();
        assert_eq!(up.len(), ZALGO_UP.len());
        assert_eq!(mid.len(), ZALGO_MID.len());
        assert_eq!(down.len(), ZALGO_DOWN.len());
        assert!(up.is_disjoint(&mid));
        assert!(up.is_disjoint(&down));
        assert!(mid.is_disjoint(&down));
    }

    #[test]
    fn zalgo_marks_are_combining_diacritics() {
        for c in ZALGO_UP.iter().chain(&ZALGO_MID).chain(&ZALGO_DOWN) {
            assert!(('\u{0300}'..='\u{036F}').contains(c), "U+{:04X}", u32::from(*c));
        }
    }

    #[test]
    fn morse_keys_are_uppercase() {
        assert!(MORSE.iter().all(|(c, _)| !c.is_lowercase()));
        assert!(MORSE.iter().all(|(_, code)| code.chars().all(|d| d == '.' || d == '-')));
    }

    #[test]
    fn small_caps_covers_both_cases() {
        assert_eq!(SMALL_CAPS.len(), 52);
    }
}
