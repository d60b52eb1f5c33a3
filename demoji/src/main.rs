//! Emoji stripper for Markdown documentation.
//!
//! With no arguments, cleans `*.md` in the current directory and `docs/*.md`,
//! leaving a `.backup` copy of every file it rewrites.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use demoji::clean::{CleanOptions, run_clean};
use demoji::core::strategy::{Cleaner, Strategy};
use demoji::exit_codes;
use demoji::io::config::{DemojiConfig, resolve_config};
use demoji::io::discover::{discover_documents, display_path};
use demoji::report::{print_clean_summary, print_json, print_restore_summary};
use demoji::restore::run_restore;

#[derive(Parser)]
#[command(
    name = "demoji",
    version,
    about = "Strip emoji from Markdown documentation, keeping backups"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default)]
struct CommonArgs {
    /// Directory to scan (defaults to the current directory).
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Config file (defaults to `<root>/demoji.toml` when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Back up and strip emoji from every document (default).
    Clean(CleanArgs),
    /// Rename backups back over their originals.
    Restore {
        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the documents a clean run would process.
    List,
}

#[derive(Args, Debug, Default)]
struct CleanArgs {
    /// Removal strategy (overrides the config file).
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Report what would change without writing anything.
    #[arg(long)]
    dry_run: bool,

    /// Print the summary as JSON instead of progress lines.
    #[arg(long)]
    json: bool,
}

fn main() {
    demoji::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = match cli.common.root {
        Some(root) => root,
        None => std::env::current_dir().context("resolve current directory")?,
    };
    let cfg = resolve_config(&root, cli.common.config.as_deref())?;
    debug!(root = %root.display(), ?cfg, "config resolved");

    match cli.command.unwrap_or(Command::Clean(CleanArgs::default())) {
        Command::Clean(args) => cmd_clean(&root, cfg, &args),
        Command::Restore { json } => cmd_restore(&root, &cfg, json),
        Command::List => cmd_list(&root, &cfg),
    }
}

fn cmd_clean(root: &Path, mut cfg: DemojiConfig, args: &CleanArgs) -> Result<()> {
    if let Some(strategy) = args.strategy {
        cfg.strategy = strategy;
    }
    let cleaner = Cleaner::new(cfg.strategy, &cfg.extra_glyphs)?;
    if !args.json {
        println!("Removing emojis from documentation files...");
    }
    let summary = run_clean(
        root,
        &cfg,
        &cleaner,
        CleanOptions {
            dry_run: args.dry_run,
            quiet: args.json,
        },
    )?;
    if args.json {
        print_json(&summary)
    } else {
        print_clean_summary(&summary, &cfg);
        Ok(())
    }
}

fn cmd_restore(root: &Path, cfg: &DemojiConfig, json: bool) -> Result<()> {
    let summary = run_restore(root, cfg, json)?;
    if json {
        print_json(&summary)
    } else {
        print_restore_summary(&summary);
        Ok(())
    }
}

fn cmd_list(root: &Path, cfg: &DemojiConfig) -> Result<()> {
    for path in discover_documents(root, cfg)? {
        println!("{}", display_path(root, &path).display());
    }
    Ok(())
}
