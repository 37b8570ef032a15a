use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf};

use crate::dates::DEFAULT_FORMATS;
use crate::keywords::Keywords;

#[derive(Debug, Clone)]
pub struct Config {
    /// `chrono` formats tried, in order, when reading a typed date (e.g. `%d/%m/%Y`).
    pub input_date_formats: Vec<String>,
    /// Pretty-print the JSON filter handed to the query service.
    pub pretty: bool,
    /// Log filter used when `RUST_LOG` is not set (e.g. `warn`, `plq_core=debug`).
    pub log_level: String,
    /// File the configuration was read from, if any.
    pub source: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    input_date_formats: Option<Vec<String>>,
    pretty: Option<bool>,
    log_level: Option<String>,
    /// Optional table:
    /// [synonyms]
    /// hoy = "today"
    /// ayer = "yesterday"
    synonyms: Option<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file_config(FileConfig::default(), None)
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native), apply defaults,
    /// and extend the global Keywords registry with user-defined synonyms if present.
    ///
    /// A missing file means defaults; a file that cannot be read or parsed is an error,
    /// and callers decide whether to fall back to [`Config::default`].
    pub fn load() -> Result<Self> {
        match Self::read_file_config()? {
            Some((path, file_config)) => Ok(Self::from_file_config(file_config, Some(path))),
            None => Ok(Self::default()),
        }
    }

    /// Loads a specific file instead of searching the standard locations.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let s = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let file_config =
            Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))?;
        Ok(Self::from_file_config(file_config, Some(path)))
    }

    fn from_file_config(file_config: FileConfig, source: Option<PathBuf>) -> Self {
        let input_date_formats = file_config
            .input_date_formats
            .filter(|formats| !formats.is_empty())
            .unwrap_or_else(|| DEFAULT_FORMATS.iter().map(|f| f.to_string()).collect());

        // Extend global keyword registry once at startup.
        Self::load_synonyms(&file_config.synonyms);

        Self {
            input_date_formats,
            pretty: file_config.pretty.unwrap_or(false),
            log_level: file_config.log_level.unwrap_or_else(|| "warn".to_string()),
            source,
        }
    }

    /// Borrowed view of the input formats, as date parsing wants them.
    pub fn date_formats(&self) -> Vec<&str> {
        self.input_date_formats.iter().map(AsRef::as_ref).collect()
    }

    pub fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("plq").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("plq").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<Option<(PathBuf, FileConfig)>> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            let file_config =
                Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))?;
            tracing::debug!("loaded configuration from {}", path.display());
            return Ok(Some((path, file_config)));
        }
        Ok(None)
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[synonyms]` into the global Keywords registry.
    /// Omits synonyms that collide with a canonical keyword (eg. "today").
    fn load_synonyms(synonyms: &Option<HashMap<String, String>>) {
        match synonyms {
            Some(map) if !map.is_empty() => {
                let pairs: Vec<(String, String)> = map
                    .iter()
                    .filter(|(alias, _)| !Keywords::is_canonical(alias))
                    .map(|(a, t)| (a.clone(), t.clone()))
                    .collect();

                if !pairs.is_empty() {
                    Keywords::extend(&pairs);
                }
            }
            _ => {}
        }
    }
}
