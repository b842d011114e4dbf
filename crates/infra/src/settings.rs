// crates/infra/src/settings.rs
use std::path::Path;

use livecount_domain::ConfigOptions;
use livecount_shared_kernel::{ErrorContext, InfrastructureError, Result};
use serde::Deserialize;

use crate::persistence::FileReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl SettingsFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(InfrastructureError::UnsupportedFormat { path: path.to_path_buf() }.into()),
        }
    }
}

/// Editor-style settings scope the options under `wc`; standalone files hold them at the top.
#[derive(Deserialize)]
#[serde(untagged)]
enum SettingsDocument {
    Scoped { wc: ConfigOptions },
    Flat(ConfigOptions),
}

impl SettingsDocument {
    fn into_options(self) -> ConfigOptions {
        match self {
            Self::Scoped { wc } => wc,
            Self::Flat(options) => options,
        }
    }
}

/// Parse settings text. Options may sit at the top level or under a `wc` key.
pub fn parse_settings(text: &str, format: SettingsFormat) -> Result<ConfigOptions> {
    let document: SettingsDocument = match format {
        SettingsFormat::Json => serde_json::from_str(text)?,
        #[cfg(feature = "yaml")]
        SettingsFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(document.into_options())
}

/// Read and parse the settings file at `path`.
pub fn load_settings(path: &Path) -> Result<ConfigOptions> {
    let format = SettingsFormat::from_path(path)?;
    let text = FileReader::read_text(path)?;
    parse_settings(&text, format).with_context(|| format!("Failed to load settings from {}", path.display()))
}
