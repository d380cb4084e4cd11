//! Scrypt cost parameters carried in keystore files.

use serde::{Deserialize, Serialize};

/// Scrypt cost parameters for the encrypted-key derivation.
///
/// The parameters feed the derived bytes directly, so decryption must use
/// the exact values recorded at encryption time. Keystore files persist
/// them alongside the key for that reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryptParameters {
    pub n: u64,
    pub r: u32,
    pub p: u32,
    #[serde(rename = "dkLen")]
    pub dk_len: u32,
}

impl ScryptParameters {
    /// The profile used for newly encrypted keys.
    pub const fn new() -> Self {
        Self {
            n: 4096,
            r: 8,
            p: 8,
            dk_len: 64,
        }
    }

    /// The profile older keystore files were written with. Only the CPU
    /// cost differs.
    pub const fn legacy_keystore() -> Self {
        Self {
            n: 16384,
            ..Self::new()
        }
    }

    /// A deliberately cheap profile for tests and benchmarks. Never use
    /// it for real keys.
    pub const fn fast_insecure() -> Self {
        Self {
            n: 256,
            ..Self::new()
        }
    }

    /// True when N is a power of two and the lengths are in range.
    pub fn is_valid(&self) -> bool {
        self.n.count_ones() == 1 && self.n > 1 && self.r > 0 && self.p > 0 && self.dk_len == 64
    }
}

impl Default for ScryptParameters {
    fn default() -> Self {
        Self::new()
    }
}
