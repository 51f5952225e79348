//! Embug - offset adder demo libraries
//!
//! This library provides a C ABI for loading through a host language's FFI.
//! It exports `embuga_demo` and `embugb_demo`, each gated by the feature of
//! the same name, so the two libraries can be built and loaded separately.

pub mod adder;
pub mod boundary;
pub mod error;
pub mod ffi;

pub use adder::OffsetAdder;
pub use boundary::{Boundary, DIAGNOSTIC, EMBUGA, EMBUGB, SENTINEL};
pub use error::DemoError;
