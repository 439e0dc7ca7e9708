//! Moteur de transformation de texte GlyphForge.
//!
//! Maps plain text to stylized Unicode: mathematical alphanumerics,
//! enclosed and fullwidth forms, combining-mark decorations, zalgo noise
//! and textual encodings (morse, binary, hex).

pub mod batch;
pub mod codepoint;
pub mod decorate;
pub mod encode;
pub mod engine;
pub mod symbols;
pub mod tables;
pub mod zalgo;

pub use codepoint::CodepointMap;
pub use engine::{Transformer, render, restore};

use gf_core::error::CoreError;
use gf_core::options::ZalgoOptions;
use gf_core::request::{BatchReport, StyleInfo, StyleMap, TransformRequest};

/// Registre complet, avec un rendu d'exemple de `"Hello"` par style.
#[must_use]
pub fn list_styles() -> Vec<StyleInfo> {
    Transformer::default().list_styles()
}

/// Transforme `text` avec le style nommé, aléa non déterministe.
///
/// # Example
/// ```
/// assert_eq!(gf_glyph::transform("Hi", "wave", None).unwrap(), "~H~i~");
/// ```
///
/// # Errors
/// [`CoreError::UnknownStyle`] si le nom n'est pas enregistré.
pub fn transform(
    text: &str,
    style: &str,
    options: Option<&ZalgoOptions>,
) -> Result<String, CoreError> {
    Transformer::default().transform(text, style, options)
}

/// Tous les styles sur le même texte, un échec par style isolé.
///
/// # Example
/// ```
/// let all = gf_glyph::transform_all("Hi");
/// assert_eq!(all.len(), gf_core::style::Style::ALL.len());
/// ```
#[must_use]
pub fn transform_all(text: &str) -> StyleMap {
    Transformer::default().transform_all(text)
}

/// Requêtes indépendantes, résultats dans l'ordre d'entrée.
///
/// Un style inconnu ne fait échouer que son élément.
#[must_use]
pub fn batch_transform(items: &[TransformRequest]) -> BatchReport {
    Transformer::default().batch_transform(items)
}
