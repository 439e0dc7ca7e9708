use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::options::ZalgoIntensity;

/// Plafond absolu accepté pour les limites configurables.
const HARD_TEXT_CEILING: usize = 1_000_000;
const HARD_BATCH_CEILING: usize = 10_000;

/// Configuration du moteur et de ses appelants.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use gf_core::config::EngineConfig;
/// let config = EngineConfig::default();
/// assert_eq!(config.limits.max_text_chars, 10_000);
/// assert_eq!(config.limits.max_batch_items, 100);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Limites appliquées par l'appelant (jamais par le moteur).
    pub limits: Limits,
    /// Réglages par défaut du style zalgo.
    pub zalgo: ZalgoDefaults,
}

/// Size ceilings for incoming requests, counted in Unicode scalar values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Limits {
    /// Single `transform` call.
    pub max_text_chars: usize,
    /// `transform_all` call (every style renders the text).
    pub max_all_styles_chars: usize,
    /// Items per `batch_transform` call.
    pub max_batch_items: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_text_chars: 10_000,
            max_all_styles_chars: 1_000,
            max_batch_items: 100,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ZalgoDefaults {
    /// Intensité utilisée quand la requête n'en précise pas.
    pub intensity: ZalgoIntensity,
    /// Graine fixe : sortie zalgo reproductible. `None` = aléa du processus.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        let l = &mut self.limits;
        l.max_text_chars = l.max_text_chars.clamp(1, HARD_TEXT_CEILING);
        l.max_all_styles_chars = l.max_all_styles_chars.clamp(1, l.max_text_chars);
        l.max_batch_items = l.max_batch_items.clamp(1, HARD_BATCH_CEILING);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    limits: Option<LimitsSection>,
    zalgo: Option<ZalgoSection>,
}

/// Limits section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct LimitsSection {
    max_text_chars: Option<usize>,
    max_all_styles_chars: Option<usize>,
    max_batch_items: Option<usize>,
}

#[derive(Deserialize)]
struct ZalgoSection {
    intensity: Option<ZalgoIntensity>,
    seed: Option<u64>,
}

/// Parse un document TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the document is not valid TOML or a field has the wrong type.
///
/// # Example
/// ```
/// use gf_core::config::parse_config;
/// use gf_core::options::ZalgoIntensity;
/// let config = parse_config("[zalgo]\nintensity = \"maxi\"\n").unwrap();
/// assert_eq!(config.zalgo.intensity, ZalgoIntensity::Maxi);
/// assert_eq!(config.limits.max_text_chars, 10_000);
/// ```
pub fn parse_config(content: &str) -> Result<EngineConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = EngineConfig::default();

    if let Some(l) = file.limits {
        if let Some(v) = l.max_text_chars {
            config.limits.max_text_chars = v;
        }
        if let Some(v) = l.max_all_styles_chars {
            config.limits.max_all_styles_chars = v;
        }
        if let Some(v) = l.max_batch_items {
            config.limits.max_batch_items = v;
        }
    }

    if let Some(z) = file.zalgo {
        if let Some(v) = z.intensity {
            config.zalgo.intensity = v;
        }
        if z.seed.is_some() {
            config.zalgo.seed = z.seed;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use gf_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Configuration invalide dans {}", path.display()))?;
    log::debug!("Config chargée depuis {} : {config:?}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = parse_config("[limits]\nmax_batch_items = 10\n").unwrap();
        assert_eq!(config.limits.max_batch_items, 10);
        assert_eq!(config.limits.max_text_chars, 10_000);
        assert_eq!(config.limits.max_all_styles_chars, 1_000);
        assert_eq!(config.zalgo.seed, None);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = parse_config(
            "[limits]\nmax_text_chars = 0\nmax_all_styles_chars = 50\nmax_batch_items = 999999\n",
        )
        .unwrap();
        assert_eq!(config.limits.max_text_chars, 1);
        // Jamais plus permissif que la limite d'un transform simple.
        assert_eq!(config.limits.max_all_styles_chars, 1);
        assert_eq!(config.limits.max_batch_items, HARD_BATCH_CEILING);
    }

    #[test]
    fn bad_intensity_is_an_error() {
        assert!(parse_config("[zalgo]\nintensity = \"ultra\"\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[zalgo]\nintensity = \"mini\"\nseed = 1234").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.zalgo.intensity, ZalgoIntensity::Mini);
        assert_eq!(config.zalgo.seed, Some(1234));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/glyphforge.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/glyphforge.toml"));
    }
}
