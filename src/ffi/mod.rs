//! C FFI layer.
//!
//! Each library exports `<name>_demo`, which keeps the sentinel contract, and
//! `<name>_try_demo`, which reports a status code and writes the value
//! through an out-pointer. The logic lives in `boundary`; these functions
//! only handle pointer checks and C integer conversions.

use std::os::raw::c_int;

use crate::boundary::Boundary;

/// Status returned by `*_try_demo` on success.
pub const STATUS_OK: c_int = 0;
/// Status returned by `*_try_demo` when `out` is null.
pub const STATUS_NULL_OUT: c_int = 1;

/// Shared body of the `*_try_demo` exports.
///
/// # Safety
/// - `out` must be null or valid for a single `c_int` write
unsafe fn try_demo(boundary: &Boundary, x: c_int, out: *mut c_int) -> c_int {
    if out.is_null() {
        return STATUS_NULL_OUT;
    }

    match boundary.try_compute(x) {
        Ok(value) => {
            *out = value;
            STATUS_OK
        }
        Err(err) => {
            log::warn!("{}: try_demo({}) failed: {}", boundary.name(), x, err);
            err.status()
        }
    }
}

macro_rules! export_library {
    ($module:ident, $boundary:expr, $demo:ident, $try_demo:ident) => {
        pub mod $module {
            use std::os::raw::c_int;

            #[doc = concat!("`int ", stringify!($demo), "(int x)`: returns `42 + x`, or `-1` with `Error!` on stderr.")]
            #[no_mangle]
            pub extern "C" fn $demo(x: c_int) -> c_int {
                $boundary.compute(x)
            }

            #[doc = concat!("`int ", stringify!($try_demo), "(int x, int *out)`: returns 0 and writes `*out`, or a non-zero status.")]
            ///
            /// # Safety
            /// - `out` must be null or valid for a single `c_int` write
            ///
            /// # Returns
            /// 0 on success, 1 if `out` is null, 2 for negative input,
            /// 3 on overflow. `*out` is only written on success.
            #[no_mangle]
            pub unsafe extern "C" fn $try_demo(x: c_int, out: *mut c_int) -> c_int {
                super::try_demo(&$boundary, x, out)
            }
        }
    };
}

#[cfg(feature = "embuga")]
export_library!(embuga, crate::boundary::EMBUGA, embuga_demo, embuga_try_demo);
#[cfg(feature = "embugb")]
export_library!(embugb, crate::boundary::EMBUGB, embugb_demo, embugb_try_demo);

#[cfg(feature = "embuga")]
pub use embuga::{embuga_demo, embuga_try_demo};
#[cfg(feature = "embugb")]
pub use embugb::{embugb_demo, embugb_try_demo};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::EMBUGA;
    use std::ptr;

    #[test]
    fn test_try_demo_writes_value() {
        let mut out: c_int = 0;
        unsafe {
            assert_eq!(try_demo(&EMBUGA, 5, &mut out), STATUS_OK);
        }
        assert_eq!(out, 47);
    }

    #[test]
    fn test_try_demo_leaves_out_on_failure() {
        let mut out: c_int = 123;
        unsafe {
            assert_eq!(try_demo(&EMBUGA, -1, &mut out), 2);
            assert_eq!(try_demo(&EMBUGA, c_int::MAX, &mut out), 3);
        }
        assert_eq!(out, 123);
    }

    #[test]
    fn test_try_demo_null_out() {
        unsafe {
            assert_eq!(try_demo(&EMBUGA, 5, ptr::null_mut()), STATUS_NULL_OUT);
        }
    }

    #[cfg(feature = "embuga")]
    #[test]
    fn test_embuga_exports() {
        assert_eq!(embuga_demo(5), 47);
        assert_eq!(embuga_demo(-1), -1);

        let mut out: c_int = 0;
        unsafe {
            assert_eq!(embuga_try_demo(0, &mut out), STATUS_OK);
        }
        assert_eq!(out, 42);
    }

    #[cfg(feature = "embugb")]
    #[test]
    fn test_embugb_exports() {
        assert_eq!(embugb_demo(5), 47);
        assert_eq!(embugb_demo(-1), -1);

        let mut out: c_int = 0;
        unsafe {
            assert_eq!(embugb_try_demo(-1, &mut out), 2);
        }
        assert_eq!(out, 0);
    }
}
