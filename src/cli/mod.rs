//! Command-line interface for `lanes`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::logging;

/// `lanes` - Kanban lane board.
#[derive(Parser, Debug)]
#[command(name = "lanes")]
#[command(
    author,
    version,
    about = "Kanban lane board: ordered lanes of note references (JSONL)",
    long_about = None
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Workspace directory
    #[arg(long, global = true, env = "LANES_DIR", default_value = ".lanes")]
    pub dir: PathBuf,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a lanes workspace
    Init(InitArgs),

    /// Manage lanes
    Lane(LaneCommand),

    /// Manage notes
    Note(NoteCommand),

    /// Attach a note to a lane (latest note when omitted)
    Attach(AttachArgs),

    /// Detach a note from a lane
    Detach(DetachArgs),

    /// Move a note to sit before another note
    Move(MoveArgs),

    /// Show the whole board
    Show,

    /// Apply JSONL actions from a file ("-" for stdin)
    Apply(ApplyArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Reinitialize an existing workspace
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct LaneCommand {
    /// Lane subcommand
    #[command(subcommand)]
    pub command: LaneSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LaneSubcommand {
    /// Create a lane at the end of the board
    Create {
        /// Lane name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Rename a lane
    Rename {
        /// Lane id
        id: String,
        /// New name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Delete a lane
    Delete {
        /// Lane id
        id: String,
    },

    /// Move a lane to the position of another lane
    Move {
        /// Lane to move
        source: String,
        /// Lane whose position it takes
        target: String,
    },

    /// List lanes
    List,
}

#[derive(Args, Debug)]
pub struct NoteCommand {
    /// Note subcommand
    #[command(subcommand)]
    pub command: NoteSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NoteSubcommand {
    /// Create a note
    Add {
        /// Task text
        #[arg(required = true, num_args = 1..)]
        task: Vec<String>,
        /// Attach the new note to this lane
        #[arg(long)]
        lane: Option<String>,
    },

    /// Change a note's task text
    Edit {
        /// Note id
        id: String,
        /// New task text
        #[arg(required = true, num_args = 1..)]
        task: Vec<String>,
    },

    /// Delete a note and remove it from the board
    Delete {
        /// Note id
        id: String,
    },

    /// List notes
    List,
}

#[derive(Args, Debug)]
pub struct AttachArgs {
    /// Lane id
    pub lane: String,
    /// Note id (defaults to the most recently created note)
    pub note: Option<String>,
}

#[derive(Args, Debug)]
pub struct DetachArgs {
    /// Lane id
    pub lane: String,
    /// Note id
    pub note: String,
}

#[derive(Args, Debug)]
pub struct MoveArgs {
    /// Note to move
    pub source: String,
    /// Note it should sit before
    pub target: String,
}

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// JSONL file of actions, or "-" for stdin
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let Some(command) = cli.command else {
        println!("lanes - Kanban lane board. Use --help for usage.");
        return Ok(());
    };
    tracing::debug!(command = command.name(), dir = %cli.dir.display(), "running");

    let dir = cli.dir.as_path();
    let json = cli.json;
    match command {
        Commands::Init(args) => commands::init::execute(dir, args.force, json)?,
        Commands::Lane(lane) => commands::lane::execute(lane.command, dir, json)?,
        Commands::Note(note) => commands::note::execute(note.command, dir, json)?,
        Commands::Attach(args) => commands::board::attach(&args, dir, json)?,
        Commands::Detach(args) => commands::board::detach(&args, dir, json)?,
        Commands::Move(args) => commands::board::move_note(&args, dir, json)?,
        Commands::Show => commands::board::show(dir, json)?,
        Commands::Apply(args) => commands::apply::execute(&args, dir, json)?,
        Commands::Completions(args) => commands::completions::execute(args.shell),
        Commands::Version => commands::version::execute(json)?,
    }

    Ok(())
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Lane(lane) => match lane.command {
                LaneSubcommand::Create { .. } => "lane create",
                LaneSubcommand::Rename { .. } => "lane rename",
                LaneSubcommand::Delete { .. } => "lane delete",
                LaneSubcommand::Move { .. } => "lane move",
                LaneSubcommand::List => "lane list",
            },
            Self::Note(note) => match note.command {
                NoteSubcommand::Add { .. } => "note add",
                NoteSubcommand::Edit { .. } => "note edit",
                NoteSubcommand::Delete { .. } => "note delete",
                NoteSubcommand::List => "note list",
            },
            Self::Attach(_) => "attach",
            Self::Detach(_) => "detach",
            Self::Move(_) => "move",
            Self::Show => "show",
            Self::Apply(_) => "apply",
            Self::Completions(_) => "completions",
            Self::Version => "version",
        }
    }
}
