//! Face analysis models.

use serde::{Deserialize, Serialize};

/// Per-emotion scores in `0..100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub happy: u8,
    pub sad: u8,
    pub angry: u8,
    pub neutral: u8,
    pub surprised: u8,
}

/// Outcome of a (simulated) face scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceAnalysisResult {
    pub stress_level: u8,
    pub emotions: EmotionScores,
    pub recommendations: Vec<String>,
}
