use std::io;

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced while building the helper header.
///
/// These are build-time diagnostics raised while compiling a tol program;
/// the emitted views themselves have no runtime failure modes.
#[derive(Error, Debug, Diagnostic)]
pub enum EmitError {
    #[error("empty type name")]
    #[diagnostic(help("write a tol type such as `i32`, `lutang`, or `[]u8`"))]
    EmptyTypeName,

    #[error("`{name}` is not usable as a C identifier")]
    #[diagnostic(help(
        "bagay names must start with a letter or `_` and contain only letters, digits, and `_`"
    ))]
    InvalidIdent { name: String },

    #[error("`{name}` is reserved")]
    #[diagnostic(help(
        "C keywords, `TOL_`-prefixed, and `__`-prefixed names collide with generated code"
    ))]
    ReservedIdent { name: String },

    #[error("`{name}` has no array representation")]
    #[diagnostic(help("only sized element types can back a tol array"))]
    UnsizedElement { name: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}
