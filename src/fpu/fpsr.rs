//! Floating-point status register
//!
//! Cumulative (sticky) exception flags, laid out as the AArch64 FPSR.

use serde::{Serialize, Deserialize};

/// Cumulative exception flags
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Fpsr {
    /// Invalid Operation
    pub ioc: bool,
    /// Divide by Zero
    pub dzc: bool,
    /// Overflow
    pub ofc: bool,
    /// Underflow
    pub ufc: bool,
    /// Inexact
    pub ixc: bool,
    /// Input Denormal
    pub idc: bool,
    /// Saturation (integer SIMD)
    pub qc: bool,
}

impl Fpsr {
    pub fn to_bits(&self) -> u32 {
        (self.ioc as u32) |
        ((self.dzc as u32) << 1) |
        ((self.ofc as u32) << 2) |
        ((self.ufc as u32) << 3) |
        ((self.ixc as u32) << 4) |
        ((self.idc as u32) << 7) |
        ((self.qc as u32) << 27)
    }

    pub fn from_bits(bits: u32) -> Self {
        Fpsr {
            ioc: (bits & (1 << 0)) != 0,
            dzc: (bits & (1 << 1)) != 0,
            ofc: (bits & (1 << 2)) != 0,
            ufc: (bits & (1 << 3)) != 0,
            ixc: (bits & (1 << 4)) != 0,
            idc: (bits & (1 << 7)) != 0,
            qc: (bits & (1 << 27)) != 0,
        }
    }

    pub fn merge(&mut self, other: Fpsr) {
        self.ioc |= other.ioc;
        self.dzc |= other.dzc;
        self.ofc |= other.ofc;
        self.ufc |= other.ufc;
        self.ixc |= other.ixc;
        self.idc |= other.idc;
        self.qc |= other.qc;
    }

    pub fn is_clear(&self) -> bool {
        self.to_bits() == 0
    }
}
