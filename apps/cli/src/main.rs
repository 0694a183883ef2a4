use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use translation_checker_core::{CheckSession, CheckerConfig};

mod report;

#[derive(Debug, Parser)]
#[command(
    name = "translation-checker",
    version,
    about = "Find missing, empty, or untranslated entries in a translated key file"
)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// More log output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List entries that still need translating
    Check {
        original: PathBuf,
        translated: PathBuf,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
        /// Also list entries that are already translated
        #[arg(long)]
        all: bool,
    },
    /// Apply edited values and rewrite the translated file
    Apply {
        original: PathBuf,
        translated: PathBuf,
        /// Inline edit, KEY=VALUE (value may contain '=')
        #[arg(long = "set", value_parser = parse_edit)]
        set: Vec<(String, String)>,
        /// JSON object of key → value edits
        #[arg(long)]
        edits: Option<PathBuf>,
        /// Print the save outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_edit(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}

fn load_edits(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read edits from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON object of strings", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<CheckerConfig> {
    match path {
        Some(path) => CheckerConfig::from_json_file(path).map_err(anyhow::Error::msg),
        None => Ok(CheckerConfig::default()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Check {
            original,
            translated,
            json,
            all,
        } => {
            let session = CheckSession::open_with(&original, &translated, &config)?;
            let show_translated = all || config.report.show_translated;
            let report = report::CheckReport::build(&session, show_translated);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report::render_text(&session, &report));
            }
        }
        Command::Apply {
            original,
            translated,
            set,
            edits,
            json,
        } => {
            let mut pending = match edits {
                Some(path) => load_edits(&path)?,
                None => BTreeMap::new(),
            };
            // Inline values override the file
            pending.extend(set);
            if pending.is_empty() {
                bail!("nothing to apply: pass --set KEY=VALUE or --edits FILE");
            }

            let mut session = CheckSession::open_with(&original, &translated, &config)?;
            let unknown = session.submit_edits(pending);
            if unknown > 0 {
                log::warn!("{unknown} edited key(s) are not in {}", original.display());
            }
            let outcome = session.save()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print!("{}", report::render_outcome(&outcome));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_edit_splits_on_first_equals() {
        assert_eq!(
            parse_edit("formula=a = b").unwrap(),
            ("formula".to_string(), "a = b".to_string())
        );
        assert_eq!(parse_edit("hello=").unwrap(), ("hello".to_string(), String::new()));
        assert!(parse_edit("=value").is_err());
        assert!(parse_edit("novalue").is_err());
    }

    #[test]
    fn parses_apply_arguments() {
        let cli = Cli::try_parse_from([
            "translation-checker",
            "apply",
            "en.txt",
            "fr.txt",
            "--set",
            "hello=Bonjour",
            "--set",
            "bye=Au revoir",
        ])
        .unwrap();
        match cli.command {
            Command::Apply { set, edits, .. } => {
                assert_eq!(set.len(), 2);
                assert_eq!(set[1], ("bye".to_string(), "Au revoir".to_string()));
                assert!(edits.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn apply_rewrites_translated_file() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("en.txt");
        let translated = dir.path().join("fr.txt");
        let edits = dir.path().join("edits.json");
        fs::write(&original, "// Greetings\nhello = Hello\nbye = Goodbye\n").unwrap();
        fs::write(&translated, "bye = Au revoir\n").unwrap();
        fs::write(&edits, r#"{"hello": "Salut"}"#).unwrap();

        let cli = Cli::try_parse_from([
            OsStr::new("translation-checker"),
            OsStr::new("apply"),
            original.as_os_str(),
            translated.as_os_str(),
            OsStr::new("--edits"),
            edits.as_os_str(),
            OsStr::new("--set"),
            OsStr::new("hello=Bonjour"),
        ])
        .unwrap();
        run(cli).unwrap();

        assert_eq!(
            fs::read_to_string(&translated).unwrap(),
            "// Greetings\nhello = Bonjour\nbye = Au revoir\n\n"
        );
    }

    #[test]
    fn apply_without_edits_is_rejected() {
        let cli = Cli::try_parse_from(["translation-checker", "apply", "en.txt", "fr.txt"]).unwrap();
        let err = run(cli).unwrap_err();
        assert!(err.to_string().starts_with("nothing to apply"));
    }

    #[test]
    fn check_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let cli = Cli::try_parse_from([
            OsStr::new("translation-checker"),
            OsStr::new("check"),
            missing.as_os_str(),
            missing.as_os_str(),
        ])
        .unwrap();
        assert!(run(cli).is_err());
    }
}
