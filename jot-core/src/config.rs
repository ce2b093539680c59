use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};

use crate::promo::{PromoCard, Promos};

/// Minimum time the feed stays in its loading state, so fast loads don't
/// flash the skeletons away.
const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where the journal file lives.
    pub journal_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// strftime format for entry dates in the feed. Default is "%A, %d %b %Y".
    pub date_format: String,
    /// How long the feed shows loading skeletons at minimum.
    pub load_delay: Duration,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    journal_dir: Option<PathBuf>,
    editor: Option<String>,
    date_format: Option<String>,
    load_delay_ms: Option<u64>,
    /// Optional array of tables:
    /// [[promos]]
    /// headline = "Write every day"
    /// blurb = "A streak needs one sentence."
    promos: Option<Vec<PromoEntry>>,
}

#[derive(Debug, Deserialize)]
struct PromoEntry {
    headline: String,
    blurb: String,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native),
    /// apply defaults, and extend the global promo inventory with user-defined
    /// cards if present.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_default();

        let date_format = file_config
            .date_format
            .unwrap_or_else(|| "%A, %d %b %Y".to_string());

        let load_delay = file_config
            .load_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LOAD_DELAY);

        let journal_dir = file_config
            .journal_dir
            .unwrap_or_else(Self::default_journal_dir);

        // Extend the global promo inventory once at startup.
        Self::load_promos(&file_config.promos);

        Ok(Self {
            journal_dir,
            editor: file_config.editor,
            date_format,
            load_delay,
        })
    }

    /// Default journal root: `{data_dir}/jot`
    /// - macOS:   `~/Library/Application Support/jot`
    /// - Linux:   `$XDG_DATA_HOME/jot` or `~/.local/share/jot`
    /// - Windows: `%APPDATA%\jot`
    fn default_journal_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("jot");
            p
        } else {
            PathBuf::from("./jot")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("jot").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("jot").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[[promos]]` tables into the global promo inventory.
    fn load_promos(promos: &Option<Vec<PromoEntry>>) {
        match promos {
            Some(entries) if !entries.is_empty() => {
                let cards: Vec<PromoCard> = entries
                    .iter()
                    .map(|p| PromoCard::new(p.headline.clone(), p.blurb.clone()))
                    .collect();
                Promos::extend(&cards);
            }
            _ => {}
        }
    }
}
