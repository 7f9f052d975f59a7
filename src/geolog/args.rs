use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "geolog")]
#[command(about = "Record keeper for geological rock and sand samples", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the sample collection (defaults to the user data dir)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,
}

/// The eight record fields, shared by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Sample number or label
    #[arg(long)]
    pub sample_number: Option<String>,

    /// Who collected the sample
    #[arg(long)]
    pub collector: Option<String>,

    /// Where it was collected
    #[arg(long)]
    pub locality: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Mineralogical description (may be multi-line)
    #[arg(long)]
    pub mineralogy: Option<String>,

    /// Paleontological description (may be multi-line)
    #[arg(long)]
    pub paleontology: Option<String>,

    /// Latitude as written in the field notes; requires --longitude
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<String>,

    /// Longitude as written in the field notes; requires --latitude
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new sample
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// List recorded samples
    #[command(alias = "ls")]
    List,

    /// Edit fields of an existing sample (unset flags keep current values)
    #[command(alias = "e")]
    Edit {
        /// Sample id (full or unique prefix)
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a sample
    #[command(alias = "rm")]
    Delete {
        /// Sample id (full or unique prefix)
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Delete every sample
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Export the collection to a CSV file
    Export {
        /// Write here instead of the dated default filename
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import samples from a previously exported CSV file
    Import {
        /// CSV file to read
        file: PathBuf,
    },

    /// Print a map lookup URL for a sample's location
    Map {
        /// Sample id (full or unique prefix)
        id: String,
    },
}
