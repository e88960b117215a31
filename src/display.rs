use std::{fmt, io::Write, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{book::Book, command::Capability, error::CommandError};

/// Ways of writing a book's content to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayVariant {
    /// Content exactly as stored
    Console,
    /// Content with its characters in reverse order
    Reverse,
}

impl DisplayVariant {
    /// Registry of display variants
    pub const ALL: [Self; 2] = [Self::Console, Self::Reverse];

    /// Name used to select this variant
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Reverse => "reverse",
        }
    }

    /// Look up a variant by its exact name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.name() == name)
    }

    /// Write the book content, followed by a newline
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer
    pub fn display<W: Write>(self, book: &Book, out: &mut W) -> std::io::Result<()> {
        match self {
            Self::Console => writeln!(out, "{}", book.content),
            Self::Reverse => writeln!(out, "{}", book.reversed_content()),
        }
    }
}

impl fmt::Display for DisplayVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayVariant {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CommandError::UnknownVariant {
            capability: Capability::Display,
            variant: s.to_string(),
        })
    }
}
