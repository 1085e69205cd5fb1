#![no_std]
#![deny(unsafe_code)]

//! Array views for the tol runtime.
//!
//! Tol arrays are passed between generated code and runtime code as a plain
//! aggregate: a pointer to the first element and the element count, in that
//! order. The C side declares one `TOL_Array_<type>` struct per element type
//! through the runtime helper header; this crate is the Rust side of that
//! contract:
//!
//! - [`RawArray<T>`] — the `#[repr(C)]` aggregate itself, layout-compatible
//!   with the C structs.
//! - [`Array<'a, T>`] — a safe wrapper that ties the buffer's validity to a
//!   lifetime, so element access needs no unsafe at the call site.
//! - [`define_tol_array!`] — the struct generator: one invocation per
//!   element type, one distinctly named `#[repr(C)]` view struct, matching
//!   the C macro's one-struct-per-type discipline.
//! - [`predefined`] — generated views for every sized tol scalar.
//!
//! The views are pure borrowers. They never allocate, free, grow, or
//! otherwise manage the buffers they point at; whoever constructs the
//! pointer/length pair keeps the buffer alive for as long as the view is
//! read.

mod array;
mod array_view;
mod define;
pub mod predefined;
mod raw;

pub use array::Array;
pub use array_view::ArrayView;
pub use raw::RawArray;

// Re-exported for `define_tol_array!` expansions; not public API.
#[doc(hidden)]
pub use static_assertions;
