//! CLI argument definitions for the Folio binary.

use clap::{Args, Parser, Subcommand};
use folio::Version;

use crate::output::OutputFormat;

/// Folio IIIF Presentation toolkit
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Folio: validate, inspect and canonicalize IIIF Presentation documents")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the top-level resource of a document
    Validate(ValidateArgs),

    /// Print the canonical wire form of a document
    Canonicalize(CanonicalizeArgs),

    /// List every node in a document with its resolved kind
    Inspect(InspectArgs),
}

/// Where a document comes from and how to read it
#[derive(Args, Debug)]
pub struct DocumentArgs {
    /// Path to a JSON document, or `-` to read standard input
    pub input: String,

    /// Presentation API version of the document (2 or 3)
    #[arg(long = "iiif-version", default_value = "3", env = "FOLIO_VERSION")]
    pub version: Version,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Validate every nested node, not just the top level
    #[arg(long)]
    pub recursive: bool,
}

#[derive(Args, Debug)]
pub struct CanonicalizeArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Indent the JSON output
    #[arg(long, env = "FOLIO_PRETTY")]
    pub pretty: bool,

    /// Skip validation
    #[arg(long)]
    pub force: bool,

    /// Do not inject the version's @context
    #[arg(long)]
    pub no_context: bool,

    /// Keep @-prefixed keys in document order
    #[arg(long)]
    pub no_sort: bool,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}
