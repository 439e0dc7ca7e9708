use rayon::prelude::*;

use gf_core::request::{BatchEntry, BatchReport, StyleMap, TransformRequest};
use gf_core::style::Style;

use crate::engine::Transformer;

impl Transformer {
    /// Applique chacun des styles du registre au même texte.
    ///
    /// Un style en échec est isolé : sa valeur est le texte d'origine et
    /// l'échec est journalisé, les autres styles ne sont pas affectés.
    ///
    /// # Example
    /// ```
    /// use gf_core::style::Style;
    /// use gf_glyph::engine::Transformer;
    ///
    /// let all = Transformer::new().transform_all("Hi");
    /// assert_eq!(all.len(), 31);
    /// assert_eq!(all[&Style::Wave], "~H~i~");
    /// ```
    #[must_use]
    pub fn transform_all(&self, text: &str) -> StyleMap {
        Style::ALL
            .par_iter()
            .enumerate()
            .map(|(i, &style)| {
                let rendered = self
                    .attempt(text, style.name(), None, i as u64)
                    .unwrap_or_else(|e| {
                        log::warn!("transform_all: style '{style}' failed: {e}");
                        text.to_owned()
                    });
                (style, rendered)
            })
            .collect()
    }

    /// Traite une liste de requêtes indépendantes, en parallèle.
    ///
    /// L'ordre des résultats suit celui des requêtes ; un style inconnu ne
    /// fait échouer que son propre élément.
    ///
    /// # Example
    /// ```
    /// use gf_core::request::TransformRequest;
    /// use gf_glyph::engine::Transformer;
    ///
    /// let report = Transformer::new().batch_transform(&[
    ///     TransformRequest::new("A", "bold"),
    ///     TransformRequest::new("A", "nope"),
    /// ]);
    /// assert_eq!(report.total_items, 2);
    /// assert_eq!(report.successful, 1);
    /// assert!(!report.results[1].success());
    /// ```
    #[must_use]
    pub fn batch_transform(&self, items: &[TransformRequest]) -> BatchReport {
        let entries: Vec<BatchEntry> = items
            .par_iter()
            .enumerate()
            .map(|(index, item)| {
                let (text, style) = (item.text.clone(), item.style.clone());
                match self.attempt(&item.text, &item.style, item.options.as_ref(), index as u64) {
                    Ok(out) => BatchEntry::succeeded(index, text, style, out),
                    Err(e) => {
                        log::debug!("batch item {index} failed: {e}");
                        BatchEntry::failed(index, text, style, e.to_string())
                    }
                }
            })
            .collect();
        BatchReport::from_entries(entries)
    }
}
