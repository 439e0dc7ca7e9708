use crate::tables::tables;

/// Encode en Morse, un code par scalaire, séparés par une espace.
///
/// Le texte est d'abord passé en majuscules (les clés de la table le sont).
/// Un caractère sans code, espace comprise, est recopié tel quel.
///
/// # Example
/// ```
/// use gf_glyph::encode::morse;
/// assert_eq!(morse("SOS"), "... --- ...");
/// assert_eq!(morse("sos"), "... --- ...");
/// ```
#[must_use]
pub fn morse(text: &str) -> String {
    let table = &tables().morse;
    let upper = text.to_uppercase();
    let mut out = String::with_capacity(upper.len() * 5);
    for (i, c) in upper.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match table.get(c) {
            Some(code) => out.push_str(code),
            None => out.push(c),
        }
    }
    out
}

/// Octet de poids faible du scalaire, en binaire sur 8 chiffres.
///
/// Limitation connue : seuls les 8 bits de poids faible sont représentés,
/// un scalaire au-delà de U+00FF est donc tronqué (sortie ambiguë).
///
/// # Example
/// ```
/// use gf_glyph::encode::binary;
/// assert_eq!(binary("A"), "01000001");
/// assert_eq!(binary("Hi"), "01001000 01101001");
/// ```
#[must_use]
pub fn binary(text: &str) -> String {
    join_bytes(text, |byte| format!("{byte:08b}"))
}

/// Octet de poids faible du scalaire, en hexadécimal minuscule sur 2 chiffres.
///
/// Même troncature que [`binary`] au-delà de U+00FF.
///
/// # Example
/// ```
/// use gf_glyph::encode::hex;
/// assert_eq!(hex("A"), "41");
/// assert_eq!(hex("Hi!"), "48 69 21");
/// ```
#[must_use]
pub fn hex(text: &str) -> String {
    join_bytes(text, |byte| format!("{byte:02x}"))
}

/// Low byte of a scalar value.
#[inline(always)]
fn low_byte(c: char) -> u8 {
    (u32::from(c) & 0xFF) as u8
}

fn join_bytes(text: &str, render: fn(u8) -> String) -> String {
    text.chars()
        .map(|c| render(low_byte(c)))
        .collect::<Vec<_>>()
        .join(" ")
}
