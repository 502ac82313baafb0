//! Configuration for huffpack

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Upper bound on compressible input size. Symbol counts travel as u32
    /// in the stream header, so this must stay below 4 GiB.
    pub max_input_size: usize,
    /// Check the decoded length against the header's count sum. Catches
    /// truncation that happens to end on a codeword boundary.
    pub verify_length: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_input_size: 100 * 1024 * 1024, // 100 MB
            verify_length: true,
        }
    }
}
