use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "simpath")]
#[command(about = "A terminal tracker for your three daily priorities", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a priority without opening the TUI
    Add {
        title: String,

        /// Category id: belief, core or permissible
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Subtask text; repeat the flag for more than one
        #[arg(short = 's', long = "subtask")]
        subtasks: Vec<String>,
    },
    /// Print the board
    Show {
        /// Limit output to one category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Remove a priority by its position in `show` output
    Delete {
        position: usize,

        #[arg(short, long)]
        category: Option<String>,
    },
}
