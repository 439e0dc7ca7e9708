use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Registre fermé des styles de transformation.
///
/// L'ordre de déclaration est l'ordre de listing : `Style::ALL`, `list_styles()`
/// et les clés de `transform_all()` le respectent tous.
///
/// # Example
/// ```
/// use gf_core::style::Style;
/// let style: Style = "doubleStruck".parse().unwrap();
/// assert_eq!(style, Style::DoubleStruck);
/// assert_eq!(style.name(), "doubleStruck");
/// assert!("comicSans".parse::<Style>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Style {
    Bold,
    Italic,
    BoldItalic,
    Script,
    BoldScript,
    Fraktur,
    BoldFraktur,
    DoubleStruck,
    Monospace,
    Circled,
    NegativeCircled,
    Squared,
    NegativeSquared,
    Parenthesized,
    SmallCaps,
    Superscript,
    Subscript,
    UpsideDown,
    Vaporwave,
    Regional,
    Leet,
    Morse,
    Binary,
    Hex,
    Zalgo,
    Strikethrough,
    Underline,
    Sparkles,
    Wave,
    /// Alias of [`Style::Circled`].
    Bubble,
    /// Alias of [`Style::Fraktur`].
    Medieval,
}

impl Style {
    /// Every registered style, in listing order.
    pub const ALL: [Style; 31] = [
        Style::Bold,
        Style::Italic,
        Style::BoldItalic,
        Style::Script,
        Style::BoldScript,
        Style::Fraktur,
        Style::BoldFraktur,
        Style::DoubleStruck,
        Style::Monospace,
        Style::Circled,
        Style::NegativeCircled,
        Style::Squared,
        Style::NegativeSquared,
        Style::Parenthesized,
        Style::SmallCaps,
        Style::Superscript,
        Style::Subscript,
        Style::UpsideDown,
        Style::Vaporwave,
        Style::Regional,
        Style::Leet,
        Style::Morse,
        Style::Binary,
        Style::Hex,
        Style::Zalgo,
        Style::Strikethrough,
        Style::Underline,
        Style::Sparkles,
        Style::Wave,
        Style::Bubble,
        Style::Medieval,
    ];

    /// Wire name (camelCase), stable across releases.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Style::Bold => "bold",
            Style::Italic => "italic",
            Style::BoldItalic => "boldItalic",
            Style::Script => "script",
            Style::BoldScript => "boldScript",
            Style::Fraktur => "fraktur",
            Style::BoldFraktur => "boldFraktur",
            Style::DoubleStruck => "doubleStruck",
            Style::Monospace => "monospace",
            Style::Circled => "circled",
            Style::NegativeCircled => "negativeCircled",
            Style::Squared => "squared",
            Style::NegativeSquared => "negativeSquared",
            Style::Parenthesized => "parenthesized",
            Style::SmallCaps => "smallCaps",
            Style::Superscript => "superscript",
            Style::Subscript => "subscript",
            Style::UpsideDown => "upsideDown",
            Style::Vaporwave => "vaporwave",
            Style::Regional => "regional",
            Style::Leet => "leet",
            Style::Morse => "morse",
            Style::Binary => "binary",
            Style::Hex => "hex",
            Style::Zalgo => "zalgo",
            Style::Strikethrough => "strikethrough",
            Style::Underline => "underline",
            Style::Sparkles => "sparkles",
            Style::Wave => "wave",
            Style::Bubble => "bubble",
            Style::Medieval => "medieval",
        }
    }

    /// Description lisible, affichée par `list_styles()`.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Style::Bold => "Mathematical bold text",
            Style::Italic => "Mathematical italic text",
            Style::BoldItalic => "Mathematical bold italic text",
            Style::Script => "Mathematical script/cursive text",
            Style::BoldScript => "Mathematical bold script text",
            Style::Fraktur => "Mathematical Fraktur/Gothic text",
            Style::BoldFraktur => "Mathematical bold Fraktur text",
            Style::DoubleStruck => "Mathematical double-struck text",
            Style::Monospace => "Mathematical monospace text",
            Style::Circled => "Circled letters",
            Style::NegativeCircled => "Negative circled letters",
            Style::Squared => "Squared letters",
            Style::NegativeSquared => "Negative squared letters",
            Style::Parenthesized => "Parenthesized letters",
            Style::SmallCaps => "Small capital letters",
            Style::Superscript => "Superscript text",
            Style::Subscript => "Subscript text",
            Style::UpsideDown => "Upside down/flipped text",
            Style::Vaporwave => "Fullwidth vaporwave aesthetic",
            Style::Regional => "Regional indicator symbols",
            Style::Leet => "Leet speak (1337)",
            Style::Morse => "Morse code",
            Style::Binary => "Binary encoding",
            Style::Hex => "Hexadecimal encoding",
            Style::Zalgo => "Zalgo/cursed text",
            Style::Strikethrough => "Strikethrough text",
            Style::Underline => "Underlined text",
            Style::Sparkles => "Sparkle decorated text",
            Style::Wave => "Wave decorated text",
            Style::Bubble => "Bubble letters (same as circled)",
            Style::Medieval => "Medieval/Gothic style (same as fraktur)",
        }
    }

    /// Résout un alias vers le style qu'il reproduit.
    ///
    /// # Example
    /// ```
    /// use gf_core::style::Style;
    /// assert_eq!(Style::Bubble.canonical(), Style::Circled);
    /// assert_eq!(Style::Medieval.canonical(), Style::Fraktur);
    /// assert_eq!(Style::Bold.canonical(), Style::Bold);
    /// ```
    #[must_use]
    pub const fn canonical(self) -> Style {
        match self {
            Style::Bubble => Style::Circled,
            Style::Medieval => Style::Fraktur,
            other => other,
        }
    }

    /// `true` si la sortie dépend d'un tirage aléatoire.
    #[must_use]
    pub const fn is_random(self) -> bool {
        matches!(self, Style::Zalgo)
    }

    /// Comma-separated list of every wire name, for error hints and help text.
    #[must_use]
    pub fn catalog() -> String {
        Style::ALL
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| CoreError::UnknownStyle(s.to_string()))
    }
}
