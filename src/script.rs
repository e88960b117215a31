use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{book::Book, command::Command};

/// Errors raised while loading a script file
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The file could not be read
    #[error("Failed to read script {}: {source}", .path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The file is not a valid script
    #[error("Failed to parse script {}: {source}", .path.display())]
    Parse {
        /// Path that was being parsed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// A book bundled with the commands to run against it
///
/// ```toml
/// commands = [["display", "reverse"], ["serialize", "xml"]]
///
/// [book]
/// title = "Sample Book"
/// content = "This is some sample content."
/// ```
///
/// Command names are kept as text and only checked when the commands run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Script {
    /// Commands to run, in order
    #[serde(default)]
    pub commands: Vec<Command>,
    /// The book the commands act on
    pub book: Book,
}

impl Script {
    /// Parse a script from TOML text
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the text is not a valid script
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a script from a TOML file
    ///
    /// # Errors
    ///
    /// Returns a `ScriptError::Read` if the file cannot be read, or a `ScriptError::Parse`
    /// if its contents are not a valid script
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading script");

        let text = fs::read_to_string(path)
            .map_err(|source| ScriptError::Read { path: path.to_path_buf(), source })?;

        let script = Self::from_toml_str(&text)
            .map_err(|source| ScriptError::Parse { path: path.to_path_buf(), source })?;

        debug!(commands = script.commands.len(), "script loaded");
        Ok(script)
    }
}
