use gf_core::config::EngineConfig;
use gf_core::error::CoreError;
use gf_core::options::{ZalgoIntensity, ZalgoOptions};
use gf_core::request::StyleInfo;
use gf_core::style::Style;
use gf_core::traits::MarkSource;

use crate::decorate;
use crate::encode;
use crate::symbols::{STRIKE_MARK, UNDERLINE_MARK};
use crate::tables::{inverse_for, tables};
use crate::zalgo::zalgo;

/// Texte d'exemple rendu par `list_styles()`.
pub const SAMPLE_TEXT: &str = "Hello";

/// Point d'entrée du moteur : résout un style et l'applique.
///
/// Sans état hormis la graine optionnelle : un `Transformer` peut être
/// partagé entre threads sans synchronisation.
///
/// # Example
/// ```
/// use gf_glyph::engine::Transformer;
/// let t = Transformer::new();
/// assert_eq!(t.transform("AB", "bold", None).unwrap(), "\u{1D400}\u{1D401}");
/// assert!(t.transform("AB", "comicSans", None).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Transformer {
    seed: Option<u64>,
    zalgo_defaults: ZalgoOptions,
}

impl Transformer {
    /// Aléa non déterministe pour zalgo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sortie zalgo reproductible : même graine, même texte, même résultat.
    ///
    /// # Example
    /// ```
    /// use gf_glyph::engine::Transformer;
    /// let a = Transformer::seeded(7).transform("hey", "zalgo", None).unwrap();
    /// let b = Transformer::seeded(7).transform("hey", "zalgo", None).unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Graine et intensité zalgo par défaut issues de la configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            seed: config.zalgo.seed,
            zalgo_defaults: ZalgoOptions::with_intensity(config.zalgo.intensity),
        }
    }

    /// Générateur pour un flux donné (appel, index de batch, style).
    ///
    /// Avec une graine, chaque flux est dérivé de façon déterministe, ce qui
    /// garde les batchs reproductibles même exécutés en parallèle.
    pub(crate) fn rng(&self, stream: u64) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(stream_seed(seed, stream)),
            None => fastrand::Rng::new(),
        }
    }

    /// Transforme `text` avec le style nommé `style`.
    ///
    /// `options` ne concerne que zalgo ; `None` = options par défaut.
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownStyle`] if `style` is not a registered name.
    /// Never fails for a registered style, whatever the text.
    pub fn transform(
        &self,
        text: &str,
        style: &str,
        options: Option<&ZalgoOptions>,
    ) -> Result<String, CoreError> {
        self.attempt(text, style, options, 0)
    }

    /// Variante typée de [`Transformer::transform`] : infaillible.
    #[must_use]
    pub fn apply(&self, text: &str, style: Style, options: Option<&ZalgoOptions>) -> String {
        let options = options.unwrap_or(&self.zalgo_defaults);
        render(text, style, options, &mut self.rng(0))
    }

    pub(crate) fn attempt(
        &self,
        text: &str,
        style: &str,
        options: Option<&ZalgoOptions>,
        stream: u64,
    ) -> Result<String, CoreError> {
        let style: Style = style.parse()?;
        let options = options.unwrap_or(&self.zalgo_defaults);
        Ok(render(text, style, options, &mut self.rng(stream)))
    }

    /// Énumération complète du registre, dans l'ordre stable de [`Style::ALL`].
    ///
    /// Chaque entrée porte le rendu de `"Hello"` ; zalgo y est rendu en `mini`.
    ///
    /// # Example
    /// ```
    /// use gf_glyph::engine::Transformer;
    /// let styles = Transformer::new().list_styles();
    /// assert_eq!(styles.len(), 31);
    /// assert_eq!(styles[0].name.name(), "bold");
    /// assert_eq!(styles[0].example, "\u{1D407}\u{1D41E}\u{1D425}\u{1D425}\u{1D428}");
    /// ```
    #[must_use]
    pub fn list_styles(&self) -> Vec<StyleInfo> {
        let preview = ZalgoOptions::with_intensity(ZalgoIntensity::Mini);
        Style::ALL
            .iter()
            .enumerate()
            .map(|(i, &style)| StyleInfo {
                name: style,
                description: style.description(),
                example: render(SAMPLE_TEXT, style, &preview, &mut self.rng(i as u64)),
            })
            .collect()
    }
}

/// Graine d'un flux : (graine, flux) passe par deux rondes de mélange
/// splitmix64, deux graines voisines ne partagent donc aucun flux.
fn stream_seed(seed: u64, stream: u64) -> u64 {
    splitmix64(splitmix64(seed) ^ stream)
}

#[inline]
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Dispatch fermé : un bras par style, aucun nom résolu dynamiquement.
///
/// Les alias délèguent au style qu'ils reproduisent, leur sortie est donc
/// identique par construction.
pub fn render(
    text: &str,
    style: Style,
    options: &ZalgoOptions,
    rng: &mut impl MarkSource,
) -> String {
    let t = tables();
    match style {
        Style::Bold => t.bold.apply(text),
        Style::Italic => t.italic.apply(text),
        Style::BoldItalic => t.bold_italic.apply(text),
        Style::Script => t.script.apply(text),
        Style::BoldScript => t.bold_script.apply(text),
        Style::Fraktur => t.fraktur.apply(text),
        Style::BoldFraktur => t.bold_fraktur.apply(text),
        Style::DoubleStruck => t.double_struck.apply(text),
        Style::Monospace => t.monospace.apply(text),
        Style::Circled => t.circled.apply(text),
        Style::NegativeCircled => t.negative_circled.apply(text),
        Style::Squared => t.squared.apply(text),
        Style::NegativeSquared => t.negative_squared.apply(text),
        Style::Parenthesized => t.parenthesized.apply(text),
        Style::SmallCaps => t.small_caps.apply(text),
        Style::Superscript => t.superscript.apply(text),
        Style::Subscript => t.subscript.apply(text),
        Style::UpsideDown => decorate::upside_down(text),
        Style::Vaporwave => t.fullwidth.apply(text),
        Style::Regional => t.regional.apply(text),
        Style::Leet => t.leet.apply(text),
        Style::Morse => encode::morse(text),
        Style::Binary => encode::binary(text),
        Style::Hex => encode::hex(text),
        Style::Zalgo => zalgo(text, options, rng),
        Style::Strikethrough => decorate::strikethrough(text),
        Style::Underline => decorate::underline(text),
        Style::Sparkles => decorate::sparkles(text),
        Style::Wave => decorate::wave(text),
        Style::Bubble => render(text, Style::Circled, options, rng),
        Style::Medieval => render(text, Style::Fraktur, options, rng),
    }
}

/// Inverse d'une transformation, quand il existe.
///
/// Styles à table : table inverse. Les tables injectives (alphabets
/// mathématiques, encerclé, pleine chasse, indice) restituent exactement le
/// texte. Les tables repliées font correspondre plusieurs sources à un même
/// glyphe et restituent la plus petite, donc la majuscule :
/// negativeCircled, squared, negativeSquared, parenthesized, regional,
/// smallCaps (où `x` et `z` partagent aussi un glyphe), superscript
/// (C, F, Q, S, X, Y, Z n'ont qu'une forme) et leet (`1` vient de I ou L).
///
/// strikethrough / underline : retrait de la marque. `None` pour
/// upsideDown, zalgo, sparkles, wave et les encodages (morse, binary, hex).
///
/// # Example
/// ```
/// use gf_core::style::Style;
/// use gf_glyph::engine::{restore, Transformer};
/// let bold = Transformer::new().apply("Hello World", Style::Bold, None);
/// assert_eq!(restore(&bold, Style::Bold).as_deref(), Some("Hello World"));
/// assert_eq!(restore("~a~", Style::Wave), None);
/// ```
#[must_use]
pub fn restore(text: &str, style: Style) -> Option<String> {
    match style.canonical() {
        Style::Strikethrough => Some(decorate::strip_mark(text, STRIKE_MARK)),
        Style::Underline => Some(decorate::strip_mark(text, UNDERLINE_MARK)),
        Style::UpsideDown
        | Style::Morse
        | Style::Binary
        | Style::Hex
        | Style::Zalgo
        | Style::Sparkles
        | Style::Wave => None,
        other => inverse_for(other).map(|map| map.apply(text)),
    }
}
