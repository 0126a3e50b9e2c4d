//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ogp")]
#[command(about = "Render Open Graph meta tags from page documents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an ogp.toml with site defaults
    Init {
        /// Site root (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Default og:site_name
        #[arg(long)]
        site_name: Option<String>,

        /// Default og:locale, repeat for alternates
        #[arg(long = "locale")]
        locales: Vec<String>,
    },

    /// Render one page document to stdout
    Render {
        /// Page document (TOML)
        file: PathBuf,

        /// Config file to use instead of the site's ogp.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print `property = content` lines instead of HTML
        #[arg(short, long)]
        list: bool,
    },

    /// Render every page document under a site root
    Build {
        /// Site root or a directory inside it (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output directory, relative to the site root
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List the supported object types
    Types,
}
