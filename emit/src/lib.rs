//! Helper-header emission for tol arrays.
//!
//! The tol compiler lowers arrays to C as one `TOL_Array_<type>` struct per
//! element type, instantiated through the runtime helper header's
//! `DEFINE_TOL_ARRAY_STRUCT(type)` macro. This crate renders that header
//! for the element types a compiled program actually uses:
//!
//! - [`ElemType`] — the element-type vocabulary: tol scalars, user-declared
//!   `bagay` aggregates, and nested arrays, each with its C rendering.
//! - [`HeaderEmitter`] — collects element types (deduplicated, in first-use
//!   order, inner arrays before outer) and renders the header.
//! - [`EmitError`] — the build-time diagnostics. The views themselves have
//!   no runtime failure modes; everything that can go wrong goes wrong
//!   here, while compiling.
//!
//! # Example
//!
//! ```
//! use tol_emit::{ElemType, HeaderEmitter};
//!
//! let mut emitter = HeaderEmitter::new();
//! emitter.register(ElemType::I32).unwrap();
//! emitter.register("[]lutang".parse().unwrap()).unwrap();
//!
//! let header = emitter.emit();
//! assert!(header.contains("DEFINE_TOL_ARRAY_STRUCT(int32_t)"));
//! assert!(header.contains("DEFINE_TOL_ARRAY_STRUCT(TOL_Array_float)"));
//! ```

mod elem;
mod error;
mod header;

pub use elem::ElemType;
pub use error::EmitError;
pub use header::HeaderEmitter;
