//! Tol array runtime support.
//!
//! # Overview
//!
//! The tol compiler lowers tol programs to C. Arrays cross that boundary as
//! a pointer + length pair: for every element type a program uses, the
//! generated C declares one `TOL_Array_<type>` struct via the runtime helper
//! header, and runtime code written in Rust mirrors that layout exactly.
//!
//! This workspace provides both halves of the contract:
//!
//! - [`arrays`] — the view types themselves: the generic
//!   [`RawArray`](arrays::RawArray) aggregate, the safe borrowed
//!   [`Array`](arrays::Array) wrapper, and the
//!   [`define_tol_array!`](arrays::define_tol_array) generator that
//!   produces one distinctly named `#[repr(C)]` struct per element type.
//! - [`emit`] — the helper-header emission used at compile time: the
//!   [`ElemType`](emit::ElemType) vocabulary and the
//!   [`HeaderEmitter`](emit::HeaderEmitter) that renders
//!   `DEFINE_TOL_ARRAY_STRUCT` instantiations for the element types a
//!   program stores in arrays.
//!
//! # Quick Start
//!
//! ```
//! use tol::arrays::Array;
//! use tol::emit::{ElemType, HeaderEmitter};
//!
//! // A view over an externally-owned buffer. The view never allocates,
//! // frees, or grows the buffer.
//! let buf = [10u8, 20, 30];
//! let view = Array::from_slice(&buf);
//! assert_eq!(view.len(), 3);
//! assert_eq!(view.as_slice(), &[10, 20, 30]);
//!
//! // The C half of the contract for a program using `[]u8` and `[]i32`.
//! let mut emitter = HeaderEmitter::new();
//! emitter.register(ElemType::U8).unwrap();
//! emitter.register("[]i32".parse().unwrap()).unwrap();
//! let header = emitter.emit();
//! assert!(header.contains("DEFINE_TOL_ARRAY_STRUCT(uint8_t)"));
//! assert!(header.contains("DEFINE_TOL_ARRAY_STRUCT(int32_t)"));
//! ```

pub use tol_arrays as arrays;
pub use tol_emit as emit;
