use std::path::PathBuf;

use bucketsync::domain::value_objects::DEFAULT_TEXT_ENCODING;
use clap::{Parser, Subcommand};

/// bucketsync - deterministic asset manifests for object store uploads
#[derive(Parser, Debug)]
#[command(name = "bucketsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print errors and results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the upload manifest for a directory
    Manifest {
        /// Directory to scan (defaults to config `source`, then `.`)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Config file (defaults to `<source>/bucketsync.toml`, then `./bucketsync.toml`)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Mark remote objects missing from the manifest for deletion
        #[arg(long, conflicts_with = "no_purge")]
        purge: bool,

        /// Keep remote objects missing from the manifest
        #[arg(long)]
        no_purge: bool,

        /// Charset for text files ("none" to omit)
        #[arg(long)]
        text_encoding: Option<String>,

        /// Concurrent file reads per rule
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        concurrency: Option<u16>,

        /// Write the manifest to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the content type each path would be uploaded with
    Classify {
        /// Paths or object keys to classify
        #[arg(required = true)]
        paths: Vec<String>,

        /// Charset for text files ("none" to omit)
        #[arg(long, default_value = DEFAULT_TEXT_ENCODING)]
        text_encoding: String,
    },
}
