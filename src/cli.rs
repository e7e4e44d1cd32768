use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read credentials from this env file instead of the process environment
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Print diagnostic events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the JSON response instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the food database for an ingredient
    Search {
        query: String,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Suggest a recipe for a list of ingredients
    Suggest {
        /// Comma-separated ingredient names
        #[arg(short, long, value_delimiter = ',', required = true)]
        ingredients: Vec<String>,
        #[arg(short, long, default_value = "")]
        preferences: String,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
