use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    display::DisplayVariant, error::CommandError, print::PrintVariant, serialize::SerializeVariant,
};

/// Categories of behavior a command can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Write the book content to the output
    Display,
    /// Write a banner followed by the book content
    Print,
    /// Encode the book and end the run with the encoded text
    Serialize,
}

impl Capability {
    /// Every capability, in the order they are listed to users
    pub const ALL: [Self; 3] = [Self::Display, Self::Print, Self::Serialize];

    /// The name commands use to select this capability
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Print => "print",
            Self::Serialize => "serialize",
        }
    }

    /// Look up a capability by its exact name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|capability| capability.name() == name)
    }

    /// Names of the variants registered for this capability
    #[must_use]
    pub fn variant_names(self) -> Vec<&'static str> {
        match self {
            Self::Display => DisplayVariant::ALL.into_iter().map(DisplayVariant::name).collect(),
            Self::Print => PrintVariant::ALL.into_iter().map(PrintVariant::name).collect(),
            Self::Serialize => {
                SerializeVariant::ALL.into_iter().map(SerializeVariant::name).collect()
            }
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Capability {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| CommandError::UnknownCapability { capability: s.to_string() })
    }
}

/// A single unresolved request: a capability name paired with a variant name
///
/// Both halves are kept as text; they are resolved only when the runner reaches the command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Command {
    /// Requested capability, e.g. `display`
    pub capability: String,
    /// Requested variant of that capability, e.g. `reverse`
    pub variant: String,
}

impl Command {
    /// Create a command from a capability name and a variant name
    #[must_use]
    pub fn new(capability: impl Into<String>, variant: impl Into<String>) -> Self {
        Self { capability: capability.into(), variant: variant.into() }
    }
}

impl From<(String, String)> for Command {
    fn from((capability, variant): (String, String)) -> Self {
        Self { capability, variant }
    }
}

impl From<Command> for (String, String) {
    fn from(command: Command) -> Self {
        (command.capability, command.variant)
    }
}

impl From<(&str, &str)> for Command {
    fn from((capability, variant): (&str, &str)) -> Self {
        Self::new(capability, variant)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.capability, self.variant)
    }
}

/// Parses the `capability:variant` form used on the command line
impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((capability, variant)) if !capability.is_empty() && !variant.is_empty() => {
                Ok(Self::new(capability, variant))
            }
            _ => Err(CommandError::MalformedCommand { token: s.to_string() }),
        }
    }
}
