//! The struct generator behind the per-element-type tol array views.
//!
//! Generated C code does not traffic in generics: every element type gets
//! its own named struct, produced by the helper header's
//! `DEFINE_TOL_ARRAY_STRUCT(type)` macro. [`define_tol_array!`] is the Rust
//! side of that discipline — one invocation, one distinctly named
//! `#[repr(C)]` view struct, layout-compatible with [`RawArray`] of the
//! same element type.
//!
//! C pastes the struct name with `##`; Rust macros do not concatenate
//! identifiers, so the caller supplies the name.
//!
//! [`RawArray`]: crate::RawArray

/// Defines a named `#[repr(C)]` array-view struct over one element type.
///
/// | Form | Meaning |
/// |------|---------|
/// | `define_tol_array!(Name, Elem)` | private view struct `Name` over `Elem` |
/// | `define_tol_array!(pub Name, Elem)` | public view struct |
/// | attributes/docs before the name | passed through to the struct |
///
/// The generated struct has exactly two public fields, pointer first,
/// length second, and the same operations as [`RawArray`](crate::RawArray).
/// Two invocations with distinct element types produce distinct,
/// non-interchangeable types; naming an undeclared element type fails to
/// compile.
///
/// # Example
///
/// ```
/// use tol_arrays::define_tol_array;
///
/// define_tol_array!(TolArrayI32, i32);
///
/// let buf = [10i32, 20, 30];
/// let arr = TolArrayI32::from_slice(&buf);
/// assert_eq!(arr.len(), 3);
/// assert_eq!(unsafe { arr.as_slice() }, &[10, 20, 30]);
/// ```
#[macro_export]
macro_rules! define_tol_array {
    ($(#[$meta:meta])* $vis:vis $name:ident, $elem:ty) => {
        $(#[$meta])*
        #[repr(C)]
        $vis struct $name {
            /// First element of the buffer, or null for an empty view.
            pub data: *const $elem,
            /// Number of valid elements reachable from `data`.
            pub len: usize,
        }

        impl $name {
            /// The empty view: null data, zero length.
            pub const EMPTY: Self = Self {
                data: ::core::ptr::null(),
                len: 0,
            };

            /// Builds a view from its two fields, without inspecting either.
            pub const fn from_raw_parts(data: *const $elem, len: usize) -> Self {
                Self { data, len }
            }

            /// Borrows `values`; the caller keeps the buffer alive for as
            /// long as the view is read.
            pub const fn from_slice(values: &[$elem]) -> Self {
                Self {
                    data: values.as_ptr(),
                    len: values.len(),
                }
            }

            /// Converts from the generic aggregate. Same layout, same
            /// fields.
            pub const fn from_raw(raw: $crate::RawArray<$elem>) -> Self {
                Self {
                    data: raw.data,
                    len: raw.len,
                }
            }

            /// Converts into the generic aggregate. Same layout, same
            /// fields.
            pub const fn into_raw(self) -> $crate::RawArray<$elem> {
                $crate::RawArray::from_raw_parts(self.data, self.len)
            }

            /// Number of valid elements.
            pub const fn len(&self) -> usize {
                self.len
            }

            /// Whether the view has no elements.
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            /// Reborrows the view as a slice. Null `data` must be paired
            /// with `len == 0` and yields the empty slice.
            ///
            /// # Safety
            ///
            /// `data` must point at `len` contiguous initialized elements
            /// that stay valid and unmutated for `'a`.
            pub unsafe fn as_slice<'a>(&self) -> &'a [$elem] {
                // SAFETY: forwarded verbatim to the caller's contract.
                unsafe { self.into_raw().as_slice() }
            }
        }

        // Copying a view duplicates pointer + length, never the buffer.
        impl ::core::clone::Clone for $name {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl ::core::marker::Copy for $name {}

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::EMPTY
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(::core::stringify!($name))
                    .field("data", &self.data)
                    .field("len", &self.len)
                    .finish()
            }
        }

        impl ::core::convert::From<$crate::RawArray<$elem>> for $name {
            fn from(raw: $crate::RawArray<$elem>) -> Self {
                Self::from_raw(raw)
            }
        }

        impl ::core::convert::From<$name> for $crate::RawArray<$elem> {
            fn from(arr: $name) -> Self {
                arr.into_raw()
            }
        }

        $crate::static_assertions::assert_eq_size!($name, $crate::RawArray<$elem>);
    };
}
