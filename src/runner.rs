use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::{
    book::Book,
    command::{Capability, Command},
    display::DisplayVariant,
    error::CommandError,
    print::PrintVariant,
    serialize::SerializeVariant,
};

/// A command resolved against the variant registries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Write the content to the output
    Display(DisplayVariant),
    /// Write a banner and the content to the output
    Print(PrintVariant),
    /// Encode the book; terminal for the run
    Serialize(SerializeVariant),
}

impl Action {
    /// Resolve the capability, then the variant within that capability
    ///
    /// # Errors
    ///
    /// Returns `CommandError::UnknownCapability` if the capability name is not recognised,
    /// or `CommandError::UnknownVariant` if the capability has no variant with that name
    pub fn resolve(command: &Command) -> Result<Self, CommandError> {
        let capability: Capability = command.capability.parse()?;
        let variant = command.variant.as_str();
        Ok(match capability {
            Capability::Display => Self::Display(variant.parse()?),
            Capability::Print => Self::Print(variant.parse()?),
            Capability::Serialize => Self::Serialize(variant.parse()?),
        })
    }

    /// Capability this action belongs to
    #[must_use]
    pub fn capability(self) -> Capability {
        match self {
            Self::Display(_) => Capability::Display,
            Self::Print(_) => Capability::Print,
            Self::Serialize(_) => Capability::Serialize,
        }
    }

    /// Name of the selected variant
    #[must_use]
    pub fn variant_name(self) -> &'static str {
        match self {
            Self::Display(variant) => variant.name(),
            Self::Print(variant) => variant.name(),
            Self::Serialize(variant) => variant.name(),
        }
    }
}

/// Run the commands against the book, writing display and print output to stdout
///
/// # Errors
///
/// See [`run_with_writer`]
pub fn run(book: &Book, commands: &[Command]) -> Result<Option<String>, CommandError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_writer(book, commands, &mut out)
}

/// Run the commands in order against the book, writing side effects to `out`
///
/// Display and print commands write to `out` and the run continues. The first serialize
/// command ends the run and its encoding becomes the result; commands queued after it are
/// never executed. Without a serialize command the result is `None`.
///
/// # Errors
///
/// Stops at the first command that cannot be resolved (`UnknownCapability`,
/// `UnknownVariant`) or executed (`Io`, `Serialization`). Output already written by earlier
/// commands is left in place.
pub fn run_with_writer<W: Write>(
    book: &Book,
    commands: &[Command],
    out: &mut W,
) -> Result<Option<String>, CommandError> {
    for (position, command) in commands.iter().enumerate() {
        let action = Action::resolve(command).inspect_err(|err| {
            warn!(%command, position, error = %err, "rejecting command");
        })?;
        debug!(
            capability = %action.capability(),
            variant = action.variant_name(),
            "executing command"
        );

        match action {
            Action::Display(variant) => {
                variant.display(book, out)?;
                out.flush()?;
            }
            Action::Print(variant) => {
                variant.print(book, out)?;
                out.flush()?;
            }
            Action::Serialize(variant) => {
                let encoded = variant.serialize(book)?;
                let skipped = commands.len().saturating_sub(position).saturating_sub(1);
                info!(format = %variant, skipped, "serialize ends the run");
                return Ok(Some(encoded));
            }
        }
    }

    Ok(None)
}
