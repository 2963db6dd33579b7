//! Subcommand implementations.

use std::{io::Read, path::Path};

use folio::{Resource, Value, wire};

use crate::cli::DocumentArgs;

pub mod canonicalize;
pub mod inspect;
pub mod validate;

/// Error type shared by all subcommands
pub type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Reads and parses the document named by `args`.
pub fn load(args: &DocumentArgs) -> folio::Result<Value> {
    if args.input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        wire::parse(wire::Input::Json(&text), args.version)
    } else {
        wire::parse(Path::new(&args.input), args.version)
    }
}

/// Like [`load`], but the document must resolve to a typed node.
pub fn load_resource(args: &DocumentArgs) -> folio::Result<Resource> {
    Ok(Resource::try_from(load(args)?)?)
}
