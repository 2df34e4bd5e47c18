//! TOML-backed generator configuration.

use std::fs;
use std::io;
use std::path::Path;

use cavern_core::GeneratorConfig;

/// Reads a `GeneratorConfig` from a TOML file. Missing keys keep their
/// defaults; unknown keys and invalid bounds are rejected.
pub fn load(path: &Path) -> io::Result<GeneratorConfig> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> io::Result<GeneratorConfig> {
    let config: GeneratorConfig =
        toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    config.validate().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(config)
}
