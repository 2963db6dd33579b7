//! Canonicalize command: prints a document in its canonical wire form.

use std::process::ExitCode;

use folio::wire::{JsonStyle, WireOptions};

use super::{CommandResult, load_resource};
use crate::cli::CanonicalizeArgs;

pub fn run(args: &CanonicalizeArgs) -> CommandResult<ExitCode> {
    let resource = load_resource(&args.document)?;

    let options = WireOptions::new()
        .force(args.force)
        .include_context(!args.no_context)
        .sort_ld_keys(!args.no_sort);
    let style = if args.pretty {
        JsonStyle::Pretty
    } else {
        JsonStyle::Compact
    };

    println!("{}", resource.to_json(options, style)?);
    Ok(ExitCode::SUCCESS)
}
