//! Exception reporting into the status register

use super::fpcr::Fpcr;
use super::fpsr::Fpsr;
use serde::{Serialize, Deserialize};

/// Floating-point exception kinds
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum FpExc {
    InvalidOp,
    DivideByZero,
    Overflow,
    Underflow,
    Inexact,
    InputDenorm,
}

/// Record `exception` as a cumulative flag in `fpsr`
///
/// Trapping is not modelled: the trap-enable bits of FPCR do not exist
/// here and every exception is recorded as a cumulative flag.
pub fn process_exception(exception: FpExc, _fpcr: Fpcr, fpsr: &mut Fpsr) {
    match exception {
        FpExc::InvalidOp => fpsr.ioc = true,
        FpExc::DivideByZero => fpsr.dzc = true,
        FpExc::Overflow => fpsr.ofc = true,
        FpExc::Underflow => fpsr.ufc = true,
        FpExc::Inexact => fpsr.ixc = true,
        FpExc::InputDenorm => fpsr.idc = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_is_idempotent() {
        let mut fpsr = Fpsr::default();
        process_exception(FpExc::InvalidOp, Fpcr::default(), &mut fpsr);
        process_exception(FpExc::InvalidOp, Fpcr::default(), &mut fpsr);
        assert_eq!(fpsr.to_bits(), 1);
    }

    #[test]
    fn test_each_kind_sets_its_flag() {
        let mut fpsr = Fpsr::default();
        for exc in [
            FpExc::InvalidOp,
            FpExc::DivideByZero,
            FpExc::Overflow,
            FpExc::Underflow,
            FpExc::Inexact,
            FpExc::InputDenorm,
        ] {
            process_exception(exc, Fpcr::default(), &mut fpsr);
        }
        assert_eq!(fpsr.to_bits(), 0b1001_1111);
        assert!(!fpsr.qc);
    }
}
