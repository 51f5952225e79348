//! Failure boundary shared by the exported libraries.
//!
//! A [`Boundary`] builds a fresh [`OffsetAdder`] per call, runs it, and turns
//! any failure into the sentinel plus a one-line diagnostic. Nothing raised
//! inside escapes past this point.

use std::io::{self, Write};

use crate::adder::OffsetAdder;
use crate::error::DemoError;

/// Value returned by [`Boundary::compute`] when the computation fails.
pub const SENTINEL: i32 = -1;

/// Line written to the diagnostic sink on failure.
pub const DIAGNOSTIC: &str = "Error!";

pub const EMBUGA: Boundary = Boundary::new("embuga", 42);
pub const EMBUGB: Boundary = Boundary::new("embugb", 42);

/// A named failure boundary around an adder with a fixed base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    name: &'static str,
    base: i32,
}

impl Boundary {
    pub const fn new(name: &'static str, base: i32) -> Self {
        Self { name, base }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn base(&self) -> i32 {
        self.base
    }

    /// Runs the adder and reports failures as a typed error.
    pub fn try_compute(&self, x: i32) -> Result<i32, DemoError> {
        OffsetAdder::new(self.base).demo(x)
    }

    /// Runs the adder, returning [`SENTINEL`] and writing the diagnostic to
    /// stderr on failure.
    ///
    /// Stderr is only touched on the failure path.
    pub fn compute(&self, x: i32) -> i32 {
        self.recover(x, io::stderr)
    }

    /// Same as [`Boundary::compute`] with an explicit diagnostic sink.
    pub fn compute_with<W: Write>(&self, x: i32, sink: &mut W) -> i32 {
        self.recover(x, || sink)
    }

    fn recover<W, F>(&self, x: i32, open_sink: F) -> i32
    where
        W: Write,
        F: FnOnce() -> W,
    {
        match self.try_compute(x) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("{}: demo({}) failed: {}", self.name, x, err);
                // A broken sink is ignored; the sentinel is still returned.
                let _ = writeln!(open_sink(), "{}", DIAGNOSTIC);
                SENTINEL
            }
        }
    }
}
