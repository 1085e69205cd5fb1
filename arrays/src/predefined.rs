#![allow(unsafe_code)]

//! Array views for the tol scalar types.
//!
//! The helper header instantiates one `TOL_Array_<type>` struct per element
//! type a compiled program uses. These are the Rust counterparts for every
//! sized tol scalar; programs with user-declared `bagay` element types add
//! their own instantiations via [`define_tol_array!`](crate::define_tol_array).
//!
//! `wala` (void) and the compiler-internal unsized numeric types have no
//! array representation and no view here.

use core::ffi::c_char;

use crate::define_tol_array;

define_tol_array!(
    /// View over `i8` buffers (`TOL_Array_int8_t` in generated C).
    pub TolArrayI8, i8
);
define_tol_array!(
    /// View over `i16` buffers (`TOL_Array_int16_t`).
    pub TolArrayI16, i16
);
define_tol_array!(
    /// View over `i32` buffers (`TOL_Array_int32_t`).
    pub TolArrayI32, i32
);
define_tol_array!(
    /// View over `i64` buffers (`TOL_Array_int64_t`).
    pub TolArrayI64, i64
);
define_tol_array!(
    /// View over `isukat` buffers (`TOL_Array_ptrdiff_t`).
    pub TolArrayISukat, isize
);
define_tol_array!(
    /// View over `u8` buffers (`TOL_Array_uint8_t`).
    pub TolArrayU8, u8
);
define_tol_array!(
    /// View over `u16` buffers (`TOL_Array_uint16_t`).
    pub TolArrayU16, u16
);
define_tol_array!(
    /// View over `u32` buffers (`TOL_Array_uint32_t`).
    pub TolArrayU32, u32
);
define_tol_array!(
    /// View over `u64` buffers (`TOL_Array_uint64_t`).
    pub TolArrayU64, u64
);
define_tol_array!(
    /// View over `usukat` buffers (`TOL_Array_size_t`).
    pub TolArrayUSukat, usize
);
define_tol_array!(
    /// View over `lutang` buffers (`TOL_Array_float`).
    pub TolArrayLutang, f32
);
define_tol_array!(
    /// View over `dobletang` buffers (`TOL_Array_double`).
    pub TolArrayDobleTang, f64
);
define_tol_array!(
    /// View over `bool` buffers (`TOL_Array_bool`).
    pub TolArrayBool, bool
);
define_tol_array!(
    /// View over `kar` buffers (`TOL_Array_char`). C `char` signedness is
    /// platform-defined, hence `c_char` rather than `i8` or `u8`.
    pub TolArrayKar, c_char
);
