//! FP state snapshots
//!
//! Saves the control and status registers of an `Fpu` so a conversion
//! context can be suspended and resumed bit-for-bit.

use serde::{Serialize, Deserialize};
use crate::fpu::{Fpcr, Fpsr, Fpu};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FpSnapshot {
    /// Version for compatibility checking
    pub version: u32,
    pub fpcr: Fpcr,
    pub fpsr: Fpsr,
}

impl FpSnapshot {
    /// Current snapshot version
    pub const VERSION: u32 = 1;

    pub fn capture(fpu: &Fpu) -> Self {
        FpSnapshot {
            version: Self::VERSION,
            fpcr: fpu.fpcr,
            fpsr: fpu.fpsr,
        }
    }

    pub fn apply(&self, fpu: &mut Fpu) {
        fpu.fpcr = self.fpcr;
        fpu.fpsr = self.fpsr;
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, String> {
        bincode::serialize(self)
            .map_err(|e| format!("Serialization error: {}", e))
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, String> {
        let snapshot: FpSnapshot = bincode::deserialize(data)
            .map_err(|e| format!("Deserialization error: {}", e))?;

        if snapshot.version != Self::VERSION {
            return Err(format!(
                "Unsupported snapshot version {} (expected {})",
                snapshot.version,
                Self::VERSION
            ));
        }
        Ok(snapshot)
    }
}
