//! Floating-point to fixed-point conversion core
//!
//! Bit-exact emulation of the AArch64/AArch32 float-to-integer and
//! float-to-fixed conversions, with sticky FPSR reporting, targeting
//! native hosts and WebAssembly.

use wasm_bindgen::prelude::*;
use serde::Serialize;

pub mod fpu;
pub mod snapshot;
pub use fpu::{fp_to_fixed, Fpcr, Fpsr, Fpu, RoundingMode};
pub use snapshot::FpSnapshot;


/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Log to browser console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(s: &str) {
    println!("LOG: {}", s);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(s: &str) {
    eprintln!("ERROR: {}", s);
}

/// Helper macro for console logging
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => (crate::log(&format!($($t)*)))
}

#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => (crate::error(&format!($($t)*)))
}

/// Outcome of one conversion, as handed to JavaScript
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ConversionReport {
    /// Result bits as a hex string (u64 does not fit a JS number)
    pub value: String,
    /// FPSR after the conversion
    pub fpsr: u32,
    pub invalid_op: bool,
    pub inexact: bool,
    pub input_denorm: bool,
}

/// Conversion unit exposed to JavaScript
#[wasm_bindgen]
pub struct Converter {
    fpu: Fpu,
}

impl Converter {
    fn convert(&mut self, op: u64, format_width: u32, ibits: u32, fbits: u32, unsigned: bool, rmode: u8) -> Result<u64, String> {
        let format = fpu::FpFormat::from_width(format_width)
            .ok_or_else(|| format!("Unsupported float width: {}", format_width))?;
        let rounding = RoundingMode::from_bits(rmode as u32)
            .ok_or_else(|| format!("Unknown rounding mode: {}", rmode))?;

        self.fpu.convert_bits(op, format, ibits as usize, fbits as usize, unsigned, rounding)
            .map_err(|e| {
                console_error!("Rejected conversion: {}", e);
                e
            })
    }

    fn report(&mut self, op: u64, format_width: u32, ibits: u32, fbits: u32, unsigned: bool, rmode: u8) -> Result<ConversionReport, String> {
        let value = self.convert(op, format_width, ibits, fbits, unsigned, rmode)?;
        Ok(ConversionReport {
            value: format!("{:#x}", value),
            fpsr: self.fpu.read_fpsr(),
            invalid_op: self.fpu.fpsr.ioc,
            inexact: self.fpu.fpsr.ixc,
            input_denorm: self.fpu.fpsr.idc,
        })
    }
}

#[wasm_bindgen]
impl Converter {
    /// Create a conversion unit with the given FPCR value
    #[wasm_bindgen(constructor)]
    pub fn new(fpcr: u32) -> Converter {
        console_log!("Creating FP conversion unit with FPCR={:#010x}", fpcr);
        Converter { fpu: Fpu::new(fpcr) }
    }

    pub fn fpcr(&self) -> u32 {
        self.fpu.read_fpcr()
    }

    pub fn set_fpcr(&mut self, value: u32) {
        self.fpu.write_fpcr(value);
    }

    /// Cumulative exception flags (FPSR layout)
    pub fn fpsr(&self) -> u32 {
        self.fpu.read_fpsr()
    }

    pub fn clear_fpsr(&mut self) {
        self.fpu.clear_fpsr();
    }

    pub fn reset(&mut self) {
        self.fpu.reset();
    }

    /// Convert a binary16 pattern; `rmode` uses the `RoundingMode` numbering
    pub fn f16_to_fixed(&mut self, op: u16, ibits: u32, fbits: u32, unsigned: bool, rmode: u8) -> Result<u64, JsValue> {
        self.convert(op as u64, 16, ibits, fbits, unsigned, rmode)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn f32_to_fixed(&mut self, op: u32, ibits: u32, fbits: u32, unsigned: bool, rmode: u8) -> Result<u64, JsValue> {
        self.convert(op as u64, 32, ibits, fbits, unsigned, rmode)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn f64_to_fixed(&mut self, op: u64, ibits: u32, fbits: u32, unsigned: bool, rmode: u8) -> Result<u64, JsValue> {
        self.convert(op, 64, ibits, fbits, unsigned, rmode)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Convert using FPCR.RMode
    pub fn to_fixed_fpcr_rounding(&mut self, op: u64, format_width: u32, ibits: u32, fbits: u32, unsigned: bool) -> Result<u64, JsValue> {
        let rmode = self.fpu.fpcr.rmode() as u8;
        self.convert(op, format_width, ibits, fbits, unsigned, rmode)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Convert and return `{ value, fpsr, invalid_op, inexact, input_denorm }`
    pub fn convert_report(&mut self, op: u64, format_width: u32, ibits: u32, fbits: u32, unsigned: bool, rmode: u8) -> Result<JsValue, JsValue> {
        let report = self.report(op, format_width, ibits, fbits, unsigned, rmode)
            .map_err(|e| JsValue::from_str(&e))?;
        serde_wasm_bindgen::to_value(&report)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Serialize FPCR/FPSR to a binary blob
    pub fn get_state(&self) -> Result<Vec<u8>, JsValue> {
        FpSnapshot::capture(&self.fpu).to_bytes()
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Restore FPCR/FPSR from a blob produced by `get_state`
    pub fn set_state(&mut self, state: &[u8]) -> Result<(), JsValue> {
        let snapshot = FpSnapshot::from_bytes(state)
            .map_err(|e| JsValue::from_str(&e))?;
        snapshot.apply(&mut self.fpu);
        console_log!("Restored FP state: FPCR={:#010x} FPSR={:#010x}", self.fpu.read_fpcr(), self.fpu.read_fpsr());
        Ok(())
    }
}
