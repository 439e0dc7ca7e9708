use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::options::ZalgoOptions;
use crate::style::Style;

/// Une demande de transformation : construite par l'appelant, consommée
/// de façon synchrone, jamais persistée.
///
/// `style` reste une chaîne brute : un nom inconnu devient un échec
/// d'élément dans un batch, pas une erreur de désérialisation.
///
/// # Example
/// ```
/// use gf_core::request::TransformRequest;
/// let items: Vec<TransformRequest> =
///     serde_json::from_str(r#"[
///         {"text": "a", "style": "bold"},
///         {"text": "b", "style": "zalgo", "options": {"intensity": "mini"}}
///     ]"#).unwrap();
/// assert_eq!(items.len(), 2);
/// assert!(items[1].options.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransformRequest {
    pub text: String,
    pub style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ZalgoOptions>,
}

impl TransformRequest {
    #[must_use]
    pub fn new(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
            options: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ZalgoOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Entrée de `list_styles()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StyleInfo {
    pub name: Style,
    pub description: &'static str,
    /// Rendering of the fixed sample `"Hello"`.
    pub example: String,
}

/// Résultat complet de `transform_all()` : une entrée par style enregistré.
pub type StyleMap = BTreeMap<Style, String>;

/// Issue d'un élément de batch : sortie transformée ou message d'erreur.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemOutcome {
    Transformed(String),
    Error(String),
}

/// One line of a batch report, correlated to its input by `index`.
///
/// # Example
/// ```
/// use gf_core::request::BatchEntry;
/// let entry = BatchEntry::failed(1, "b".into(), "nope".into(), "Unknown style: nope".into());
/// let json = serde_json::to_value(&entry).unwrap();
/// assert_eq!(json["success"], false);
/// assert_eq!(json["error"], "Unknown style: nope");
/// assert!(json.get("transformed").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    pub index: usize,
    pub original: String,
    /// Style name echoed back verbatim, even when unknown.
    pub style: String,
    #[serde(flatten)]
    outcome: ItemOutcome,
    /// Dérivé de `outcome` par les constructeurs.
    success: bool,
}

impl BatchEntry {
    #[must_use]
    pub fn succeeded(index: usize, original: String, style: String, transformed: String) -> Self {
        Self {
            index,
            original,
            style,
            outcome: ItemOutcome::Transformed(transformed),
            success: true,
        }
    }

    #[must_use]
    pub fn failed(index: usize, original: String, style: String, error: String) -> Self {
        Self {
            index,
            original,
            style,
            outcome: ItemOutcome::Error(error),
            success: false,
        }
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub fn outcome(&self) -> &ItemOutcome {
        &self.outcome
    }

    /// Transformed output, `None` for a failed item.
    #[must_use]
    pub fn transformed(&self) -> Option<&str> {
        match &self.outcome {
            ItemOutcome::Transformed(s) => Some(s),
            ItemOutcome::Error(_) => None,
        }
    }

    /// Error message, `None` for a successful item.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ItemOutcome::Transformed(_) => None,
            ItemOutcome::Error(e) => Some(e),
        }
    }
}

/// Rapport agrégé de `batch_transform()`, dans l'ordre des entrées.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub total_items: usize,
    pub successful: usize,
    pub results: Vec<BatchEntry>,
}

impl BatchReport {
    /// Build the report, deriving both counters from `results`.
    #[must_use]
    pub fn from_entries(results: Vec<BatchEntry>) -> Self {
        let successful = results.iter().filter(|r| r.success()).count();
        Self {
            total_items: results.len(),
            successful,
            results,
        }
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.total_items - self.successful
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_successes() {
        let report = BatchReport::from_entries(vec![
            BatchEntry::succeeded(0, "a".into(), "bold".into(), "𝐚".into()),
            BatchEntry::failed(1, "b".into(), "nope".into(), "Unknown style: nope".into()),
        ]);
        assert_eq!(report.total_items, 2);
        assert_eq!(report.successful, 1);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn report_serializes_in_camel_case() {
        let report = BatchReport::from_entries(vec![BatchEntry::succeeded(
            0,
            "a".into(),
            "bold".into(),
            "𝐚".into(),
        )]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["successful"], 1);
        assert_eq!(json["results"][0]["transformed"], "𝐚");
        assert_eq!(json["results"][0]["success"], true);
        assert!(json["results"][0].get("error").is_none());
    }

    #[test]
    fn request_without_options() {
        let req: TransformRequest =
            serde_json::from_str(r#"{"text":"hi","style":"wave"}"#).unwrap();
        assert_eq!(req, TransformRequest::new("hi", "wave"));
        let back = serde_json::to_string(&req).unwrap();
        assert!(!back.contains("options"));
    }

    #[test]
    fn success_flag_follows_outcome() {
        let ok = BatchEntry::succeeded(0, "a".into(), "bold".into(), "x".into());
        assert!(ok.success());
        assert_eq!(ok.outcome(), &ItemOutcome::Transformed("x".into()));
        let ko = BatchEntry::failed(0, "a".into(), "x".into(), "boom".into());
        assert!(!ko.success());
        assert_eq!(ko.outcome(), &ItemOutcome::Error("boom".into()));

        let json = serde_json::to_value(&ko).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
    }

    #[test]
    fn entry_accessors() {
        let ok = BatchEntry::succeeded(0, "a".into(), "bold".into(), "x".into());
        assert_eq!(ok.transformed(), Some("x"));
        assert_eq!(ok.error(), None);
        let ko = BatchEntry::failed(0, "a".into(), "x".into(), "boom".into());
        assert_eq!(ko.transformed(), None);
        assert_eq!(ko.error(), Some("boom"));
    }
}
