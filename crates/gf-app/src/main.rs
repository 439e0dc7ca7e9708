use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use gf_core::config::EngineConfig;
use gf_core::request::TransformRequest;
use gf_core::style::Style;
use gf_glyph::engine::Transformer;

pub mod cli;
pub mod guard;

use cli::Command;
use guard::RequestGuard;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config, --seed prioritaire
    let mut config = resolve_config(&cli.config)?;
    if cli.seed.is_some() {
        config.zalgo.seed = cli.seed;
    }

    let engine = Transformer::from_config(&config);
    let guard = RequestGuard::new(config.limits);

    // 4. Exécuter la commande
    match &cli.command {
        Command::Styles { json } => {
            let styles = engine.list_styles();
            if *json {
                println!("{}", serde_json::to_string_pretty(&styles)?);
            } else {
                for info in &styles {
                    println!("{:<16} {}  ({})", info.name.name(), info.example, info.description);
                }
            }
        }
        Command::Transform { style, text, .. } => {
            let text = text_or_stdin(text)?;
            guard.check_text(&text)?;
            let options = cli.command.zalgo_options(config.zalgo.intensity);
            let out = engine
                .transform(&text, style, options.as_ref())
                .with_context(|| format!("Styles disponibles : {}", Style::catalog()))?;
            println!("{out}");
        }
        Command::All { text } => {
            let text = text_or_stdin(text)?;
            guard.check_all_styles(&text)?;
            let all = engine.transform_all(&text);
            println!("{}", serde_json::to_string_pretty(&all)?);
        }
        Command::Batch { input } => {
            let items = read_batch(input)?;
            guard.check_batch(&items)?;
            log::debug!("Batch de {} éléments", items.len());
            let report = engine.batch_transform(&items);
            if report.failed() > 0 {
                log::warn!("{} élément(s) en échec sur {}", report.failed(), report.total_items);
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Resolve config: missing file falls back to defaults.
fn resolve_config(path: &Path) -> Result<EngineConfig> {
    if path.exists() {
        gf_core::config::load_config(path)
    } else {
        log::warn!("Config introuvable : {}. Utilisation des défauts.", path.display());
        Ok(EngineConfig::default())
    }
}

/// Texte des arguments, sinon entrée standard (sans le saut de ligne final).
fn text_or_stdin(words: &[String]) -> Result<String> {
    if let Some(text) = cli::joined(words) {
        return Ok(text);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Lecture de l'entrée standard impossible")?;
    Ok(trim_newline(buf))
}

fn trim_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Tableau JSON de requêtes, depuis un fichier ou `-` pour stdin.
fn read_batch(input: &Path) -> Result<Vec<TransformRequest>> {
    let content = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Lecture de l'entrée standard impossible")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Impossible de lire le batch : {}", input.display()))?
    };
    serde_json::from_str(&content)
        .context("Batch JSON invalide : tableau de {text, style, options?} attendu")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_config_uses_defaults() {
        let config = resolve_config(Path::new("/nonexistent/glyphforge.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn config_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[limits]\nmax_batch_items = 5").unwrap();
        let config = resolve_config(file.path()).unwrap();
        assert_eq!(config.limits.max_batch_items, 5);
    }

    #[test]
    fn batch_file_is_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = concat!(
            r#"[{"text":"a","style":"bold"},"#,
            r#"{"text":"b","style":"zalgo","options":{"intensity":"maxi"}}]"#,
        );
        file.write_all(json.as_bytes()).unwrap();
        let items = read_batch(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].style, "bold");
        assert!(items[1].options.is_some());
    }

    #[test]
    fn malformed_batch_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"items": 3}"#).unwrap();
        assert!(read_batch(file.path()).is_err());
    }

    #[test]
    fn only_one_trailing_newline_is_trimmed() {
        assert_eq!(trim_newline("Hi\r\n".into()), "Hi");
        assert_eq!(trim_newline("Hi\n\n".into()), "Hi\n");
        assert_eq!(trim_newline(" Hi ".into()), " Hi ");
    }
}
