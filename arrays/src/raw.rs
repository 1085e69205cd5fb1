#![allow(unsafe_code)]

use core::fmt;
use core::ptr;

/// The aggregate behind every tol array: a pointer to the first element and
/// the element count, in that order.
///
/// This is the Rust spelling of the `TOL_Array_<type>` structs that
/// generated C code passes around. `#[repr(C)]` with a fixed field order —
/// `data` at offset 0, `len` (`size_t` on the C side) second — so a
/// `RawArray<T>` and the corresponding C struct are interchangeable across
/// the FFI boundary.
///
/// The struct is a pure view. It never allocates, frees, or manages the
/// buffer's lifetime; whoever produced the pointer/length pair keeps the
/// buffer alive for as long as the view is read. Dropping a `RawArray` has
/// no effect on the buffer.
///
/// # Invariants
///
/// - `len == 0`: `data` may be null or dangling; no element is ever read.
/// - `len > 0`: `data` points at `len` contiguous initialized `T`s.
#[repr(C)]
pub struct RawArray<T> {
    /// First element of the buffer, or null for an empty view.
    pub data: *const T,
    /// Number of valid elements reachable from `data`.
    pub len: usize,
}

// Two machine words, matching `{ type *data; size_t len; }` exactly.
static_assertions::assert_eq_size!(RawArray<u8>, [usize; 2]);
static_assertions::assert_eq_size!(RawArray<u64>, [usize; 2]);

impl<T> RawArray<T> {
    /// The empty view: null data, zero length.
    pub const EMPTY: Self = Self::empty();

    /// Builds the empty view.
    pub const fn empty() -> Self {
        Self {
            data: ptr::null(),
            len: 0,
        }
    }

    /// Builds a view from its two fields, without inspecting either.
    ///
    /// The caller is responsible for the pointer/length invariants
    /// documented on the type.
    pub const fn from_raw_parts(data: *const T, len: usize) -> Self {
        Self { data, len }
    }

    /// Borrows `values` as a view.
    ///
    /// The buffer stays owned by the caller and must outlive every read
    /// through the returned view; `RawArray` itself carries no lifetime.
    /// Use [`Array`](crate::Array) when the borrow should be checked.
    pub const fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.as_ptr(),
            len: values.len(),
        }
    }

    /// Number of valid elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the view has no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reborrows the view as a slice.
    ///
    /// Null `data` must be paired with `len == 0` and yields the empty
    /// slice.
    ///
    /// # Safety
    ///
    /// `data` must satisfy the type-level invariants for `len`, and the
    /// buffer must stay valid, initialized, and unmutated for `'a`.
    pub unsafe fn as_slice<'a>(&self) -> &'a [T] {
        if self.data.is_null() {
            assert!(self.len == 0, "null views must have zero length");
            &[]
        } else {
            // SAFETY: non-null data over `len` initialized elements, per the
            // caller's contract.
            unsafe { core::slice::from_raw_parts(self.data, self.len) }
        }
    }
}

// Manual Clone/Copy/Debug/Default to avoid T bounds. Copying a view
// duplicates pointer + length, never the buffer.

impl<T> Clone for RawArray<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawArray<T> {}

impl<T> Default for RawArray<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for RawArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawArray")
            .field("data", &self.data)
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use super::RawArray;

    #[test]
    fn field_order_matches_c_struct() {
        assert_eq!(offset_of!(RawArray<i32>, data), 0);
        assert_eq!(offset_of!(RawArray<i32>, len), size_of::<*const i32>());
        assert_eq!(size_of::<RawArray<i32>>(), 2 * size_of::<usize>());
    }

    #[test]
    fn empty_view_is_null_and_zero() {
        let arr: RawArray<u64> = RawArray::empty();
        assert!(arr.data.is_null());
        assert_eq!(arr.len(), 0);
        assert!(arr.is_empty());
        // Null + zero length is a valid view; no element is dereferenced.
        assert_eq!(unsafe { arr.as_slice() }, &[] as &[u64]);
    }

    #[test]
    fn from_slice_reads_back() {
        let buf = [10u8, 20, 30];
        let arr = RawArray::from_slice(&buf);
        assert_eq!(arr.len(), 3);
        let slice = unsafe { arr.as_slice() };
        assert_eq!(slice[0], 10);
        assert_eq!(slice[1], 20);
        assert_eq!(slice[2], 30);
        assert_eq!(slice.get(3), None);
    }

    #[test]
    fn copy_aliases_the_buffer() {
        let buf = [1i64, 2, 3];
        let a = RawArray::from_slice(&buf);
        let b = a;
        assert_eq!(a.data, b.data);
        assert_eq!(a.len, b.len);
        // Same pointer: the copy views the same buffer, no duplication.
        assert_eq!(b.data, buf.as_ptr());
    }

    #[test]
    fn from_raw_parts_is_verbatim() {
        let buf = [7u16; 4];
        let arr = RawArray::from_raw_parts(buf.as_ptr(), 4);
        assert_eq!(arr.data, buf.as_ptr());
        assert_eq!(arr.len, 4);
    }

    #[test]
    fn default_is_empty() {
        let arr: RawArray<f64> = RawArray::default();
        assert!(arr.is_empty());
        assert!(arr.data.is_null());
    }
}
