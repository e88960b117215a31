//! Interchangeable strategies for displaying, printing and serializing a book.
//!
//! A run takes one [`Book`] and an ordered list of [`Command`]s. Each command names a
//! [`Capability`] and one of its variants; the runner resolves them against fixed registries
//! and executes them in order. Display and print write to the output, while serialize ends the
//! run and returns the encoded book.

pub mod book;
pub mod command;
pub mod display;
pub mod error;
pub mod print;
pub mod runner;
pub mod script;
pub mod serialize;

pub use book::Book;
pub use command::{Capability, Command};
pub use display::DisplayVariant;
pub use error::CommandError;
pub use print::PrintVariant;
pub use runner::{Action, run, run_with_writer};
pub use script::{Script, ScriptError};
pub use serialize::SerializeVariant;
