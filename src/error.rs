//! Failures raised by the offset adder.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DemoError {
    #[error("negative input {x}: This will not get caught.")]
    NegativeInput { x: i32 },
    #[error("{base} + {x} overflows i32")]
    Overflow { base: i32, x: i32 },
}

impl DemoError {
    /// Status code reported by the `*_try_demo` exports.
    pub fn status(&self) -> i32 {
        match self {
            DemoError::NegativeInput { .. } => 2,
            DemoError::Overflow { .. } => 3,
        }
    }
}
