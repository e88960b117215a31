use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use book_strategy::{Book, Capability, Command, Script, run_with_writer};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Title of the book used when none is given
const SAMPLE_TITLE: &str = "Sample Book";
/// Content of the book used when none is given
const SAMPLE_CONTENT: &str = "This is some sample content.";
/// Commands run when none are given
const SAMPLE_COMMANDS: [&str; 2] = ["display:reverse", "serialize:xml"];

/// Command-line arguments for the book strategy runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Title of the book
    #[arg(long, default_value = SAMPLE_TITLE, conflicts_with = "script")]
    title: String,

    /// Content of the book
    #[arg(long, default_value = SAMPLE_CONTENT, conflicts_with = "script")]
    content: String,

    /// Load the book and its commands from a TOML script
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// List every capability and its variants, then exit
    #[arg(long)]
    list: bool,

    /// Commands to run in order, as `capability:variant` (e.g. `display:reverse serialize:xml`)
    #[arg(value_name = "COMMAND", conflicts_with = "script")]
    commands: Vec<Command>,
}

/// Log to stderr so stdout carries only book output
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Print the variant registry of each capability
fn list_registry(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Available commands".green().bold())?;
    for capability in Capability::ALL {
        let variants = capability.variant_names().join(", ");
        writeln!(out, "  {}: {variants}", capability.name().yellow())?;
    }
    Ok(())
}

/// Build the book and command list from the arguments
fn resolve_input(args: Args) -> anyhow::Result<(Book, Vec<Command>)> {
    if let Some(path) = args.script {
        let script = Script::load(&path)
            .with_context(|| format!("could not load script {}", path.display()))?;
        return Ok((script.book, script.commands));
    }

    let commands = if args.commands.is_empty() {
        SAMPLE_COMMANDS.iter().map(|token| token.parse()).collect::<Result<Vec<Command>, _>>()?
    } else {
        args.commands
    };
    Ok((Book::new(args.title, args.content), commands))
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        list_registry(&mut out)?;
        return Ok(());
    }

    let (book, commands) = resolve_input(args)?;
    let result = run_with_writer(&book, &commands, &mut out)
        .with_context(|| format!("failed to run commands against \"{}\"", book.title))?;

    if let Some(encoded) = result {
        writeln!(out, "{encoded}")?;
    } else {
        eprintln!("{}", "No serialize command ran; nothing to return".dimmed());
    }

    Ok(())
}
