//! Validate command: checks a document against its kind's schema.

use std::process::ExitCode;

use folio::wire::WireOptions;
use tracing::info;

use super::{CommandResult, load_resource};
use crate::cli::ValidateArgs;

pub fn run(args: &ValidateArgs) -> CommandResult<ExitCode> {
    let resource = load_resource(&args.document)?;

    // Canonicalizing without `force` validates every nested node on the way down
    let outcome = if args.recursive {
        resource.to_wire(WireOptions::default()).map(drop)
    } else {
        resource.validate()
    };

    match outcome {
        Ok(()) => {
            info!(kind = %resource.kind(), "Document is valid");
            println!(
                "{}: valid {} (version {})",
                args.document.input,
                resource.kind(),
                resource.version()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}: invalid: {e}", args.document.input);
            Ok(ExitCode::FAILURE)
        }
    }
}
