use anyhow::Result;
use clap::{Parser, Subcommand};
use diffr::areas::session::Session;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DIFFR_LOG";

#[derive(Parser)]
#[command(
    name = "diffr",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A line-level diff and patch tool",
    long_about = "This is a line-level diff and patch tool, written in Rust. \
    It indexes the original file with a suffix tree and describes the new file \
    as copies of original line ranges and inserted lines.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Compute the patch between two files",
        long_about = "This command compares the original file with the new file and writes a patch, \
        one instruction per line: `<from>,<to>` copies original lines, `> <text>` inserts a line."
    )]
    Diff {
        #[arg(index = 1, help = "The original file")]
        original: PathBuf,
        #[arg(index = 2, help = "The new file")]
        new: PathBuf,
        #[arg(short, long, help = "Write the patch to this file instead of stdout")]
        output: Option<PathBuf>,
    },
    #[command(
        name = "patch",
        about = "Rebuild a file from the original and a patch",
        long_about = "This command applies a patch produced by `diff` to the original file \
        and writes the rebuilt new file."
    )]
    Patch {
        #[arg(index = 1, help = "The original file")]
        original: PathBuf,
        #[arg(index = 2, help = "The patch file")]
        patch: PathBuf,
        #[arg(short, long, help = "Write the patched file to this file instead of stdout")]
        output: Option<PathBuf>,
    },
}

/// Maps the legacy single-dash `-help` (in any case) onto clap's `--help`.
fn normalize_help(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            if arg.eq_ignore_ascii_case("-help") || arg.eq_ignore_ascii_case("--help") {
                OsString::from("--help")
            } else {
                arg
            }
        })
        .collect()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse_from(normalize_help(std::env::args_os()));

    let pwd = std::env::current_dir()?;
    let session = Session::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::Diff {
            original,
            new,
            output,
        } => session.diff(original, new, output.as_deref())?,
        Commands::Patch {
            original,
            patch,
            output,
        } => session.patch(original, patch, output.as_deref())?,
    }

    Ok(())
}
