// src/cli/mod.rs
mod args;
mod parsers;
mod value_enum;

pub use args::{Args, CountingOptions, InputOptions, OutputOptions};
use livecount_domain::{ConfigOptions, CountMode, Encoding};
use livecount_infra::load_settings;
use livecount_shared_kernel::Result;
pub use parsers::SelectionArg;
pub use value_enum::{CliCountMode, CliEncoding, CliOutputFormat};

impl CountingOptions {
    /// The options set explicitly on the command line.
    pub fn overrides(&self) -> ConfigOptions {
        ConfigOptions {
            white_space: self.white_space.clone(),
            new_line: self.new_line.clone(),
            character_count: self.count.map(|mode| CountMode::from(mode).as_str().to_string()),
            encoding: self.encoding.map(|encoding| Encoding::from(encoding).as_str().to_string()),
            debug: self.verify.then_some(true),
            ..ConfigOptions::default()
        }
    }
}

/// Built-in defaults, then the settings file, then command-line flags.
pub fn load_options(counting: &CountingOptions) -> Result<ConfigOptions> {
    let mut options = ConfigOptions::with_defaults();
    if let Some(path) = &counting.config {
        options = options.merge(load_settings(path)?);
    }
    Ok(options.merge(counting.overrides()))
}
