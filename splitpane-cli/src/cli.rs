//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use splitpane_core::split::{Direction, PaneId, SplitAxis};

/// Inspect and edit a split-pane layout
#[derive(Parser)]
#[command(name = "splitpane")]
#[command(author, version, about = "splitpane command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Layout snapshot file (overrides the configured location)
    #[arg(short, long, global = true, env = "SPLITPANE_STATE")]
    pub state: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the layout tree
    Show {
        /// Output format
        #[arg(short, long, default_value = "tree", value_enum)]
        format: ShowFormat,
    },

    /// Insert a pane next to an existing pane
    #[command(
        long_about = "Insert a pane next to an existing pane.\n\nOn an empty layout the target itself becomes the first pane."
    )]
    Insert {
        /// Pane to split
        target: PaneId,

        /// Pane to insert
        new: PaneId,

        /// Axis of the new split (horizontal, vertical)
        #[arg(short, long, default_value = "horizontal")]
        axis: SplitAxis,

        /// Place the new pane before (left of or above) the target
        #[arg(short, long)]
        before: bool,
    },

    /// Split a pane, adding a fresh empty pane after it
    Split {
        /// Pane to split
        target: PaneId,

        /// Axis of the new split (horizontal, vertical)
        #[arg(short, long, default_value = "horizontal")]
        axis: SplitAxis,
    },

    /// Remove a pane
    Remove {
        /// Pane to remove
        id: PaneId,
    },

    /// Rename a pane in place
    Replace {
        /// Pane to rename
        target: PaneId,

        /// New pane ID
        replacement: PaneId,
    },

    /// Set the size of the split holding a pane
    Resize {
        /// Pane whose parent split is resized
        id: PaneId,

        /// Percentage given to the first child (0-100)
        size: f64,
    },

    /// Print the pane next to another pane
    Navigate {
        /// Starting pane
        start: PaneId,

        /// Direction to move (up, down, left, right)
        direction: Direction,
    },

    /// Apply a drag gesture
    #[command(
        long_about = "Apply a drag gesture.\n\nThe target is a pane ID optionally followed by ':up', ':down', ':left', ':right' or ':center', or the empty-area ID 'split-root-empty'."
    )]
    Drag {
        /// Dragged pane
        source: String,

        /// Drop target
        target: String,
    },

    /// Print the normalized pane rectangles
    Rects {
        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: RectsFormat,
    },

    /// Print or set the focused pane
    Focus {
        /// Pane to focus
        id: Option<PaneId>,
    },

    /// Remove every pane
    Clear,

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Output formats for `show`
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ShowFormat {
    /// Indented tree
    Tree,
    /// Snapshot JSON of the root
    Json,
}

/// Output formats for `rects`
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RectsFormat {
    /// Aligned columns
    Table,
    /// JSON array
    Json,
}
