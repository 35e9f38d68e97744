use fpfixed::fpu::{fp_to_fixed, Fpcr, Fpsr, Fpu, RoundingMode};
use fpfixed::FpSnapshot;

const MODES: [RoundingMode; 5] = [
    RoundingMode::ToNearestTieEven,
    RoundingMode::TowardsPlusInfinity,
    RoundingMode::TowardsMinusInfinity,
    RoundingMode::TowardsZero,
    RoundingMode::ToNearestTieAwayFromZero,
];

fn convert_f64(value: f64, ibits: usize, fbits: usize, unsigned: bool, rounding: RoundingMode) -> (u64, Fpsr) {
    let mut fpsr = Fpsr::default();
    let result = fp_to_fixed(ibits, value.to_bits(), fbits, unsigned, Fpcr::default(), rounding, &mut fpsr);
    (result, fpsr)
}

fn sign_extend(value: u64, ibits: usize) -> i64 {
    let shift = 64 - ibits as u32;
    ((value << shift) as i64) >> shift
}

#[test]
fn test_results_never_exceed_width() {
    let values = [0.0, 0.75, -0.75, 1.5, -1.5, 100.25, -100.25, 1e300, -1e300, f64::INFINITY, f64::NEG_INFINITY];
    for ibits in [1, 7, 8, 16, 31, 32, 33, 63, 64] {
        for &value in &values {
            for rounding in MODES {
                for unsigned in [false, true] {
                    let (result, _) = convert_f64(value, ibits, 0, unsigned, rounding);
                    if ibits < 64 {
                        assert_eq!(result >> ibits, 0, "value {} ibits {} {:?}", value, ibits, rounding);
                    }
                }
            }
        }
    }
}

#[test]
fn test_matches_native_casts_in_range() {
    // Rust's `as` casts truncate and saturate like FCVTZS/FCVTZU
    let values = [0.0, 0.9, -0.9, 3.99, -3.99, 12345.678, -12345.678, 2147483647.0, -2147483648.0, 1e12, -1e12];
    for &value in &values {
        let (result, _) = convert_f64(value, 32, 0, false, RoundingMode::TowardsZero);
        assert_eq!(result as u32 as i32, value as i32, "FCVTZS {}", value);

        let (result, _) = convert_f64(value, 64, 0, false, RoundingMode::TowardsZero);
        assert_eq!(result as i64, value as i64, "FCVTZS {}", value);

        let (result, _) = convert_f64(value, 32, 0, true, RoundingMode::TowardsZero);
        assert_eq!(result as u32, value as u32, "FCVTZU {}", value);
    }
}

#[test]
fn test_rounding_modes_match_float_rounding() {
    let values = [0.5, 1.5, 2.5, -0.5, -1.5, -2.5, 1.25, -1.25, 7.75, -7.75];
    for &value in &values {
        let expect = |rounded: f64| rounded as i64;
        let (rn, _) = convert_f64(value, 64, 0, false, RoundingMode::ToNearestTieEven);
        let (rp, _) = convert_f64(value, 64, 0, false, RoundingMode::TowardsPlusInfinity);
        let (rm, _) = convert_f64(value, 64, 0, false, RoundingMode::TowardsMinusInfinity);
        let (rz, _) = convert_f64(value, 64, 0, false, RoundingMode::TowardsZero);
        let (ra, _) = convert_f64(value, 64, 0, false, RoundingMode::ToNearestTieAwayFromZero);
        assert_eq!(rn as i64, expect(value.round_ties_even()), "RN {}", value);
        assert_eq!(rp as i64, expect(value.ceil()), "RP {}", value);
        assert_eq!(rm as i64, expect(value.floor()), "RM {}", value);
        assert_eq!(rz as i64, expect(value.trunc()), "RZ {}", value);
        assert_eq!(ra as i64, expect(value.round()), "RA {}", value);
    }
}

#[test]
fn test_inexact_only_when_bits_discarded() {
    for rounding in MODES {
        let (_, fpsr) = convert_f64(6.0, 16, 3, false, rounding);
        assert!(fpsr.is_clear());
        let (_, fpsr) = convert_f64(6.0625, 16, 3, false, rounding);
        assert_eq!(fpsr, Fpsr { ixc: true, ..Fpsr::default() });
    }
}

#[test]
fn test_signed_range_boundaries() {
    for ibits in [8usize, 16, 32, 64] {
        let max = (1u64 << (ibits - 1)) as f64 - 1.0;
        let min = -((1u64 << (ibits - 1)) as f64);

        let (result, fpsr) = convert_f64(min, ibits, 0, false, RoundingMode::ToNearestTieEven);
        assert_eq!(sign_extend(result, ibits), min as i64);
        assert!(fpsr.is_clear(), "exact minimum for {} bits", ibits);

        // Above i64::MAX an f64 cannot hold max exactly
        if ibits < 64 {
            let (result, fpsr) = convert_f64(max, ibits, 0, false, RoundingMode::ToNearestTieEven);
            assert_eq!(sign_extend(result, ibits), max as i64);
            assert!(fpsr.is_clear());
        }

        let (result, fpsr) = convert_f64(-min, ibits, 0, false, RoundingMode::TowardsZero);
        assert_eq!(result, (1u64 << (ibits - 1)) - 1);
        assert!(fpsr.ioc);

        let (result, fpsr) = convert_f64(min * 2.0, ibits, 0, false, RoundingMode::TowardsZero);
        assert_eq!(result, 1u64 << (ibits - 1));
        assert!(fpsr.ioc);
    }
}

#[test]
fn test_fixed_point_scaling() {
    // Q16.16
    let (result, fpsr) = convert_f64(-1.5, 32, 16, false, RoundingMode::ToNearestTieEven);
    assert_eq!(result, 0xFFFE_8000);
    assert!(fpsr.is_clear());

    // 100.0 needs 7 integer bits; 8.8 signed only has 7 plus sign
    let (result, fpsr) = convert_f64(100.0, 16, 8, false, RoundingMode::ToNearestTieEven);
    assert_eq!(result, 0x6400);
    assert!(fpsr.is_clear());
    let (result, fpsr) = convert_f64(128.0, 16, 8, false, RoundingMode::ToNearestTieEven);
    assert_eq!(result, 0x7FFF);
    assert!(fpsr.ioc);

    // All fraction: 0.5 in UQ0.8
    let (result, _) = convert_f64(0.5, 8, 8, true, RoundingMode::ToNearestTieEven);
    assert_eq!(result, 0x80);
}

#[test]
fn test_nan_conversion_pins_unpack_contract() {
    // NaNs unpack with a zero mantissa, so every NaN converts to 0
    for bits in [0x7FF8_0000_0000_0000u64, 0xFFF8_0000_0000_0001, 0x7FF0_0000_0000_0001, 0xFFF4_0000_0000_0000] {
        for unsigned in [false, true] {
            let mut fpsr = Fpsr::default();
            let result = fp_to_fixed(32, bits, 0, unsigned, Fpcr::default(), RoundingMode::ToNearestTieEven, &mut fpsr);
            assert_eq!(result, 0);
            assert_eq!(fpsr, Fpsr { ioc: true, ..Fpsr::default() });
        }
    }
}

#[test]
fn test_fpu_snapshot_resume() {
    let mut fpu = Fpu::new(1 << 24);
    fpu.to_fixed(1u32, 32, 0, false, RoundingMode::ToNearestTieEven);
    assert!(fpu.fpsr.idc);

    let bytes = FpSnapshot::capture(&fpu).to_bytes().unwrap();
    let mut resumed = Fpu::default();
    FpSnapshot::from_bytes(&bytes).unwrap().apply(&mut resumed);

    // Flush-to-zero carried over with the sticky flags
    assert_eq!(resumed.to_fixed(2u32, 32, 0, false, RoundingMode::TowardsPlusInfinity), 0);
    assert_eq!(resumed.fpsr, Fpsr { idc: true, ..Fpsr::default() });
}
