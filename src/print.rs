use std::{fmt, io::Write, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{book::Book, command::Capability, error::CommandError};

/// Ways of printing a book: a banner naming the title, then the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintVariant {
    /// Plain banner and content as stored
    Console,
    /// Reverse banner and content with its characters reversed
    Reverse,
}

impl PrintVariant {
    /// Registry of print variants
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

    /// The banner line announcing the book, without a trailing newline
    #[must_use]
    pub fn banner(self, book: &Book) -> String {
        let title = &book.title;
        match self {
            Self::Console => format!("Printing the book: {title}..."),
            Self::Reverse => format!("Printing the book in reverse: {title}..."),
        }
    }

    /// Write the banner line, then the content on its own line
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer
    pub fn print<W: Write>(self, book: &Book, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.banner(book))?;
        match self {
            Self::Console => writeln!(out, "{}", book.content),
            Self::Reverse => writeln!(out, "{}", book.reversed_content()),
        }
    }
}

impl fmt::Display for PrintVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrintVariant {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CommandError::UnknownVariant {
            capability: Capability::Print,
            variant: s.to_string(),
        })
    }
}
