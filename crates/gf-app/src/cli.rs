use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gf_core::options::{ZalgoIntensity, ZalgoOptions};

/// GlyphForge : styles Unicode pour texte brut.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Graine zalgo (prioritaire sur `[zalgo] seed` de la config).
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Liste les styles disponibles avec un exemple rendu.
    Styles {
        /// Sortie JSON au lieu du tableau texte.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Applique un style. Sans TEXT, lit l'entrée standard.
    Transform {
        /// Nom du style (ex: bold, fraktur, zalgo).
        #[arg(short, long)]
        style: String,

        /// Intensité zalgo : mini, normal, maxi.
        #[arg(long)]
        intensity: Option<ZalgoIntensity>,

        /// Zalgo : pas de marques au-dessus.
        #[arg(long, default_value_t = false)]
        no_up: bool,

        /// Zalgo : pas de marques au milieu.
        #[arg(long, default_value_t = false)]
        no_mid: bool,

        /// Zalgo : pas de marques en dessous.
        #[arg(long, default_value_t = false)]
        no_down: bool,

        /// Texte à transformer (les mots sont joints par une espace).
        text: Vec<String>,
    },

    /// Applique tous les styles, sortie JSON.
    All {
        text: Vec<String>,
    },

    /// Traite un tableau JSON de requêtes (`-` = entrée standard).
    Batch {
        input: PathBuf,
    },
}

impl Command {
    /// Zalgo options built from the `transform` flags.
    ///
    /// `None` when no flag was given, so the configured default applies.
    #[must_use]
    pub fn zalgo_options(&self, default: ZalgoIntensity) -> Option<ZalgoOptions> {
        let Self::Transform {
            intensity,
            no_up,
            no_mid,
            no_down,
            ..
        } = self
        else {
            return None;
        };
        if intensity.is_none() && !no_up && !no_mid && !no_down {
            return None;
        }
        Some(ZalgoOptions {
            intensity: intensity.unwrap_or(default),
            up: !no_up,
            mid: !no_mid,
            down: !no_down,
        })
    }
}

/// Words joined back into one text, `None` when nothing was given.
#[must_use]
pub fn joined(words: &[String]) -> Option<String> {
    (!words.is_empty()).then(|| words.join(" "))
}
