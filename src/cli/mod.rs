pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::SourceType;

#[derive(Parser)]
#[command(name = "curio")]
#[command(about = "A content curation pipeline and library", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the content feed
    Feed {
        /// Case-insensitive title/preview filter
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only show items from one source
        #[arg(short, long)]
        source: Option<SourceArg>,

        /// Only show saved items
        #[arg(long)]
        saved: bool,
    },
    /// Trigger the scrape workflow and merge the results
    Scrape,
    /// Show an item's full content
    Show {
        /// Item id or unique id prefix
        id: String,
    },
    /// Save an item to the library
    Save {
        /// Item id or unique id prefix
        id: String,
    },
    /// Remove an item from the library
    Unsave {
        /// Item id or unique id prefix
        id: String,
    },
    /// Generate social-media hooks for an item
    Hooks {
        /// Item id or unique id prefix
        id: String,
    },
    /// Open an item's URL in the default browser
    Open {
        /// Item id or unique id prefix
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Reddit,
    Newsletter,
}

impl From<SourceArg> for SourceType {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Reddit => SourceType::Reddit,
            SourceArg::Newsletter => SourceType::Newsletter,
        }
    }
}
