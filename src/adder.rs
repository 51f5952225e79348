//! The offset adder behind every exported demo function.

use crate::error::DemoError;

/// Adds a fixed base to non-negative inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetAdder {
    base: i32,
}

impl OffsetAdder {
    pub const fn new(base: i32) -> Self {
        Self { base }
    }

    /// Returns `base + x`.
    ///
    /// Negative inputs are rejected. Sums that do not fit in an `i32`
    /// fail with [`DemoError::Overflow`] instead of wrapping.
    pub fn demo(&self, x: i32) -> Result<i32, DemoError> {
        if x < 0 {
            return Err(DemoError::NegativeInput { x });
        }

        self.base
            .checked_add(x)
            .ok_or(DemoError::Overflow { base: self.base, x })
    }
}
