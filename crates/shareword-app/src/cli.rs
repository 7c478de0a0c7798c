use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Parser, Subcommand};
use shareword_finder::DEFAULT_MATCH_CAPACITY;

pub const DEFAULT_PUZZLE_PATH: &str = "crossword.shareword";
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary.txt";

/// Author crossword puzzles in the `.shareword` format.
#[derive(Debug, Parser)]
#[command(name = "shareword", version, about, long_about = None)]
pub struct Cli {
    /// Puzzle file to work on.
    #[arg(short, long, global = true, default_value = DEFAULT_PUZZLE_PATH)]
    pub puzzle: PathBuf,

    /// Word list used by `find`, one word per line.
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY_PATH)]
    pub dictionary: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write an empty puzzle.
    New {
        /// Grid width in squares.
        width: NonZeroUsize,
        /// Grid height in squares.
        height: NonZeroUsize,
        /// Puzzle title.
        #[arg(short, long, default_value = "")]
        title: String,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },

    /// Print the grid and clue lists.
    Show {
        /// Draw filled squares without their letters.
        #[arg(long)]
        hide_answers: bool,
    },

    /// Replay an input script against the puzzle and print the result.
    Edit {
        /// Script file, one input tick per line.
        #[arg(short, long)]
        script: PathBuf,
        /// Write the puzzle back after the script finishes.
        #[arg(long)]
        save: bool,
    },

    /// Search the dictionary for words fitting a pattern.
    ///
    /// `_`, `?` or a space match any letter; a trailing `*` matches any
    /// longer word with that prefix.
    Find {
        pattern: String,
        /// Maximum number of words to print.
        #[arg(short = 'n', long, default_value_t = DEFAULT_MATCH_CAPACITY)]
        limit: usize,
    },
}
