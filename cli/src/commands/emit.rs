//! The `emit` command - render the helper header for a set of element types.

use std::fs;
use std::io::{self, Write};

use tracing::debug;

use tol_emit::{EmitError, HeaderEmitter};

use crate::cli::EmitArgs;

/// Run the emit command.
pub fn run(args: EmitArgs) -> Result<(), EmitError> {
    let mut emitter = HeaderEmitter::new();
    for spelling in &args.types {
        emitter.register(spelling.parse()?)?;
    }

    let header = emitter.emit();
    match &args.output {
        Some(path) => {
            debug!(path = %path.display(), "writing helper header");
            fs::write(path, header)?;
        }
        None => io::stdout().write_all(header.as_bytes())?,
    }

    Ok(())
}
