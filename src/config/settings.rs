//! TOML-based configuration for sqlfmt.
//!
//! Supports a config file (sqlfmt.toml) with environment variable expansion
//! in placeholder values.
//!
//! Example configuration:
//! ```toml
//! language = "db2"
//! indent = "    "
//! reserved_word_case = "upper"
//! lines_between_queries = 2
//!
//! [params]
//! tenant = "${TENANT_ID}"
//!
//! [dialects.warehouse]
//! reserved_toplevel_words = ["SELECT", "FROM", "WHERE"]
//! string_types = ["''"]
//! open_parens = ["("]
//! close_parens = [")"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dialect::{Dialect, DialectProfile};
use crate::error::FormatError;
use crate::options::{FormatOptions, QueryParams, ReservedWordCase};
use crate::tokenizer::Tokenizer;

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid dialect `{name}`: {source}")]
    InvalidDialect {
        name: String,
        #[source]
        source: FormatError,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Dialect used when none is given on the command line.
    pub language: String,

    /// One level of indentation.
    pub indent: String,

    pub reserved_word_case: ReservedWordCase,

    pub lines_between_queries: usize,

    /// Placeholder values (support ${ENV_VAR} expansion).
    pub params: BTreeMap<String, String>,

    /// Custom dialect profiles, keyed by name.
    pub dialects: HashMap<String, DialectProfile>,
}

impl Default for Settings {
    fn default() -> Self {
        let options = FormatOptions::default();
        Self {
            language: Dialect::default().name().to_string(),
            indent: options.indent,
            reserved_word_case: options.reserved_word_case,
            lines_between_queries: options.lines_between_queries,
            params: BTreeMap::new(),
            dialects: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parse settings from TOML text.
    ///
    /// Custom dialects take their table key as name when none is given,
    /// and are compiled once so that bad profiles fail here rather than
    /// on first use.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = toml::from_str(content)?;
        for (name, profile) in &mut settings.dialects {
            if profile.name.is_empty() {
                profile.name = name.clone();
            }
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `SQLFMT_CONFIG`
    /// 2. `./sqlfmt.toml`
    /// 3. `~/.config/sqlfmt/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        // Check environment variable first
        if let Ok(path) = env::var("SQLFMT_CONFIG") {
            return Self::from_file(&path);
        }

        // Check local directory
        let local_config = PathBuf::from("sqlfmt.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        // Check user config directory
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("sqlfmt").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Return defaults if no config file found
        Ok(Settings::default())
    }

    /// Check that every custom dialect compiles into a tokenizer.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (name, profile) in &self.dialects {
            Tokenizer::new(profile).map_err(|source| SettingsError::InvalidDialect {
                name: name.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Resolve a dialect name to a profile.
    ///
    /// Built-in dialects win over custom ones with the same name.
    pub fn resolve_profile(&self, name: &str) -> Result<&DialectProfile, SettingsError> {
        if let Ok(dialect) = name.parse::<Dialect>() {
            return Ok(dialect.profile());
        }
        self.dialects
            .get(name)
            .ok_or_else(|| FormatError::unsupported(name).into())
    }

    /// Profile for the configured default language.
    pub fn default_profile(&self) -> Result<&DialectProfile, SettingsError> {
        self.resolve_profile(&self.language)
    }

    /// Every dialect name available: built-ins first, then custom ones sorted.
    pub fn dialect_names(&self) -> Vec<&str> {
        let mut custom: Vec<&str> = self
            .dialects
            .keys()
            .map(String::as_str)
            .filter(|name| name.parse::<Dialect>().is_err())
            .collect();
        custom.sort_unstable();

        Dialect::ALL
            .iter()
            .map(|d| d.name())
            .chain(custom)
            .collect()
    }

    /// Build format options, expanding environment variables in params.
    pub fn format_options(&self) -> Result<FormatOptions, SettingsError> {
        let mut params = QueryParams::new();
        for (key, value) in &self.params {
            params.insert(key.clone(), expand_env_vars(value)?);
        }

        Ok(FormatOptions::new()
            .with_indent(self.indent.clone())
            .with_reserved_word_case(self.reserved_word_case)
            .with_lines_between_queries(self.lines_between_queries)
            .with_params(params))
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        // Check for ${VAR} or $VAR
        let var_name: String = if chars.next_if_eq(&'{').is_some() {
            chars.by_ref().take_while(|&ch| ch != '}').collect()
        } else {
            // $VAR (ends at non-alphanumeric/underscore)
            let mut name = String::new();
            while let Some(ch) = chars.next_if(|ch| ch.is_alphanumeric() || *ch == '_') {
                name.push(ch);
            }
            if name.is_empty() {
                // Just a lone $, keep it
                result.push('$');
                continue;
            }
            name
        };

        let value =
            env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
