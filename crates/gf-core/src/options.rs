use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Nombre de marques par pool (dessus, milieu, dessous) pour chaque intensité.
///
/// # Example
/// ```
/// use gf_core::options::ZalgoIntensity;
/// assert_eq!(ZalgoIntensity::Mini.counts(), (1, 0, 1));
/// assert_eq!(ZalgoIntensity::Maxi.counts(), (8, 3, 8));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZalgoIntensity {
    /// 1 above, 0 middle, 1 below.
    Mini,
    /// 3 above, 1 middle, 3 below.
    #[default]
    Normal,
    /// 8 above, 3 middle, 8 below.
    Maxi,
}

impl ZalgoIntensity {
    /// `(up, mid, down)` mark counts appended to every base character.
    #[must_use]
    pub const fn counts(self) -> (usize, usize, usize) {
        match self {
            ZalgoIntensity::Mini => (1, 0, 1),
            ZalgoIntensity::Normal => (3, 1, 3),
            ZalgoIntensity::Maxi => (8, 3, 8),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ZalgoIntensity::Mini => "mini",
            ZalgoIntensity::Normal => "normal",
            ZalgoIntensity::Maxi => "maxi",
        }
    }
}

impl fmt::Display for ZalgoIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZalgoIntensity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mini" => Ok(ZalgoIntensity::Mini),
            "normal" => Ok(ZalgoIntensity::Normal),
            "maxi" => Ok(ZalgoIntensity::Maxi),
            other => Err(CoreError::UnknownIntensity(other.to_string())),
        }
    }
}

/// Options propres au style zalgo. Ignorées par tous les autres styles.
///
/// Chaque pool peut être désactivé indépendamment ; par défaut les trois
/// sont actifs et l'intensité est `normal`.
///
/// # Example
/// ```
/// use gf_core::options::{ZalgoIntensity, ZalgoOptions};
/// let opts: ZalgoOptions = serde_json::from_str(r#"{"intensity":"maxi","mid":false}"#).unwrap();
/// assert_eq!(opts.intensity, ZalgoIntensity::Maxi);
/// assert!(opts.up && !opts.mid && opts.down);
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ZalgoOptions {
    pub intensity: ZalgoIntensity,
    /// Marks drawn from the above-baseline pool.
    pub up: bool,
    /// Marks drawn from the through-the-glyph pool.
    pub mid: bool,
    /// Marks drawn from the below-baseline pool.
    pub down: bool,
}

impl Default for ZalgoOptions {
    fn default() -> Self {
        Self {
            intensity: ZalgoIntensity::Normal,
            up: true,
            mid: true,
            down: true,
        }
    }
}

impl ZalgoOptions {
    /// All pools enabled at the given intensity.
    #[must_use]
    pub fn with_intensity(intensity: ZalgoIntensity) -> Self {
        Self {
            intensity,
            ..Self::default()
        }
    }

    /// Counts after disabled pools are zeroed.
    ///
    /// # Example
    /// ```
    /// use gf_core::options::{ZalgoIntensity, ZalgoOptions};
    /// let opts = ZalgoOptions {
    ///     up: false,
    ///     ..ZalgoOptions::with_intensity(ZalgoIntensity::Normal)
    /// };
    /// assert_eq!(opts.effective_counts(), (0, 1, 3));
    /// ```
    #[must_use]
    pub fn effective_counts(&self) -> (usize, usize, usize) {
        let (up, mid, down) = self.intensity.counts();
        (
            if self.up { up } else { 0 },
            if self.mid { mid } else { 0 },
            if self.down { down } else { 0 },
        )
    }
}
