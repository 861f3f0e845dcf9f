//! CLI argument definitions and parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::registry::Colour;

#[derive(Debug, Parser)]
#[clap(name = "chess-tracker", about = "Chess championship score tracker")]
pub struct ChessTracker {
    /// Path to the config file (defaults to the user config directory).
    #[clap(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new championship.
    Create {
        /// Championship name (must be unique and non-empty).
        name: String,
    },

    /// Log a match result for an existing championship.
    Log {
        /// Championship the match belongs to.
        championship: String,

        /// Winner's name: one of the configured players or "User 3".
        #[clap(long, short)]
        winner: String,

        /// Colour the winner played: white or black.
        #[clap(long)]
        colour: Colour,

        /// Match date (YYYY-MM-DD); defaults to today.
        #[clap(long, short)]
        date: Option<NaiveDate>,
    },

    /// Show the match results recorded for a championship.
    Matches {
        championship: String,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Show win tallies for one championship, or across all of them.
    Standings {
        /// Tally a single championship; omit for the cross-championship tally.
        championship: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List championships in display order.
    Championships {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Interactive form-style session: create championships, log results,
    /// and browse tallies from one prompt loop.
    Session,
}
