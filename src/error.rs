use std::io;

use thiserror::Error;

use crate::{command::Capability, serialize::SerializeVariant};

/// Errors that end a command run
#[derive(Debug, Error)]
pub enum CommandError {
    /// The requested capability is not one of display, print or serialize
    #[error("Unknown capability: {capability}")]
    UnknownCapability {
        /// Capability name as it was requested
        capability: String,
    },
    /// The capability exists but has no variant with the requested name
    #[error("Unknown {capability} type: {variant}")]
    UnknownVariant {
        /// Capability the variant was looked up in
        capability: Capability,
        /// Variant name as it was requested
        variant: String,
    },
    /// A `capability:variant` token could not be split into its two halves
    #[error("Malformed command {token:?}, expected <capability>:<variant>")]
    MalformedCommand {
        /// The offending token
        token: String,
    },
    /// The encoder rejected the book
    #[error("Failed to serialize the book as {format}: {source}")]
    Serialization {
        /// Format that was being produced
        format: SerializeVariant,
        /// Underlying encoder error
        source: serde_json::Error,
    },
    /// The book holds a character the target format cannot represent
    #[error("Cannot encode the {field} as {format}: {character:?} is not representable")]
    UnrepresentableCharacter {
        /// Format that was being produced
        format: SerializeVariant,
        /// Book field holding the character
        field: &'static str,
        /// The offending character
        character: char,
    },
    /// Writing display or print output failed
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}
