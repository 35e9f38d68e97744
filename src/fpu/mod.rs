//! Floating-point unit
//!
//! Control/status registers plus float-to-fixed conversion with
//! bit-exact rounding and sticky exception reporting.

pub mod bit_util;
pub mod exception;
pub mod fpcr;
pub mod fpsr;
pub mod info;
pub mod mantissa;
pub mod rounding_mode;
pub mod safe_ops;
pub mod to_fixed;
pub mod unpacked;

pub use exception::{process_exception, FpExc};
pub use fpcr::Fpcr;
pub use fpsr::Fpsr;
pub use info::{FpFormat, FpInfo};
pub use mantissa::{residual_error_on_right_shift, ResidualError};
pub use rounding_mode::RoundingMode;
pub use to_fixed::fp_to_fixed;
pub use unpacked::{fp_unpack, FpType, FpUnpacked, NORMALIZED_POINT_POSITION};

use serde::{Serialize, Deserialize};

/// Floating-point state of one emulated core
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Fpu {
    /// Control register (rounding mode, flush-to-zero, ...)
    pub fpcr: Fpcr,
    /// Cumulative exception flags
    pub fpsr: Fpsr,
}

impl Fpu {
    pub fn new(fpcr: u32) -> Self {
        Fpu {
            fpcr: Fpcr::from_bits(fpcr),
            fpsr: Fpsr::default(),
        }
    }

    pub fn read_fpcr(&self) -> u32 {
        self.fpcr.to_bits()
    }

    pub fn write_fpcr(&mut self, value: u32) {
        self.fpcr = Fpcr::from_bits(value);
    }

    pub fn read_fpsr(&self) -> u32 {
        self.fpsr.to_bits()
    }

    pub fn write_fpsr(&mut self, value: u32) {
        self.fpsr = Fpsr::from_bits(value);
    }

    pub fn clear_fpsr(&mut self) {
        self.fpsr = Fpsr::default();
    }

    pub fn reset(&mut self) {
        self.fpcr = Fpcr::default();
        self.fpsr = Fpsr::default();
    }

    /// Convert with an explicit rounding mode (FCVTN*, FCVTP*, FCVTM*, FCVTZ*, FCVTA*)
    pub fn to_fixed<F: FpInfo>(&mut self, op: F, ibits: usize, fbits: usize, unsigned: bool, rounding: RoundingMode) -> u64 {
        fp_to_fixed(ibits, op, fbits, unsigned, self.fpcr, rounding, &mut self.fpsr)
    }

    /// Convert with the rounding mode held in FPCR.RMode
    pub fn to_fixed_fpcr_rounding<F: FpInfo>(&mut self, op: F, ibits: usize, fbits: usize, unsigned: bool) -> u64 {
        let rounding = self.fpcr.rmode();
        self.to_fixed(op, ibits, fbits, unsigned, rounding)
    }

    /// Convert a request whose parameters come from outside the emulator
    ///
    /// Parameters that `fp_to_fixed` would reject are reported as an error
    /// and leave the status register untouched.
    pub fn checked_to_fixed<F: FpInfo>(&mut self, op: F, ibits: usize, fbits: usize, unsigned: bool, rounding: RoundingMode) -> Result<u64, String> {
        if rounding == RoundingMode::ToOdd {
            return Err("Round to odd is not supported for fixed-point conversion".to_string());
        }
        if !(1..=64).contains(&ibits) {
            return Err(format!("Invalid fixed-point width: {} (expected 1..=64)", ibits));
        }
        if fbits > ibits {
            return Err(format!("Invalid fractional bits: {} (width is {})", fbits, ibits));
        }
        Ok(self.to_fixed(op, ibits, fbits, unsigned, rounding))
    }

    /// `checked_to_fixed` for an operand held in the low bits of a `u64`
    pub fn convert_bits(&mut self, op: u64, format: FpFormat, ibits: usize, fbits: usize, unsigned: bool, rounding: RoundingMode) -> Result<u64, String> {
        if format.width() < 64 && op >> format.width() != 0 {
            return Err(format!("Operand {:#x} does not fit a {}-bit float", op, format.width()));
        }
        match format {
            FpFormat::Half => self.checked_to_fixed(op as u16, ibits, fbits, unsigned, rounding),
            FpFormat::Single => self.checked_to_fixed(op as u32, ibits, fbits, unsigned, rounding),
            FpFormat::Double => self.checked_to_fixed(op, ibits, fbits, unsigned, rounding),
        }
    }
}
