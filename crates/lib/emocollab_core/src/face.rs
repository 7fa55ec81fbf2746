//! Simulated face analysis.
//!
//! No inference happens here. Every score is an independent uniform draw and
//! the recommendations never change.

use rand::Rng;

use crate::models::{EmotionScores, FaceAnalysisResult};

/// Recommendations attached to every result.
pub const RECOMMENDATIONS: [&str; 2] = ["Istirahat sejenak", "Minum air putih"];

/// Exclusive upper bound of every generated score.
pub const SCORE_CEILING: u8 = 100;

/// Produces face analysis results.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceService;

impl FaceService {
    pub fn new() -> Self {
        Self
    }

    /// Analyses a face using the thread-local generator.
    pub fn analyze(&self) -> FaceAnalysisResult {
        self.analyze_with(&mut rand::rng())
    }

    /// Analyses a face drawing scores from `rng`.
    pub fn analyze_with<R: Rng>(&self, rng: &mut R) -> FaceAnalysisResult {
        let mut score = || rng.random_range(0..SCORE_CEILING);

        let stress_level = score();
        let emotions = EmotionScores {
            happy: score(),
            sad: score(),
            angry: score(),
            neutral: score(),
            surprised: score(),
        };

        FaceAnalysisResult {
            stress_level,
            emotions,
            recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn scores_stay_below_ceiling() {
        let svc = FaceService::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let res = svc.analyze_with(&mut rng);
            assert!(res.stress_level < SCORE_CEILING);
            let e = &res.emotions;
            for value in [e.happy, e.sad, e.angry, e.neutral, e.surprised] {
                assert!(value < SCORE_CEILING, "{e:?}");
            }
        }
    }

    #[test]
    fn recommendations_are_fixed() {
        let res = FaceService::new().analyze();
        assert_eq!(res.recommendations, vec!["Istirahat sejenak", "Minum air putih"]);
    }

    #[test]
    fn seeded_generator_is_deterministic() {
        let svc = FaceService::new();
        let a = svc.analyze_with(&mut StdRng::seed_from_u64(42));
        let b = svc.analyze_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn stress_level_varies_across_calls() {
        let svc = FaceService::new();
        let seen: HashSet<u8> = (0..50).map(|_| svc.analyze().stress_level).collect();
        assert!(seen.len() > 1, "stress level never changed: {seen:?}");
    }

    #[test]
    fn result_serializes_with_snake_case_keys() {
        let res = FaceService::new().analyze_with(&mut StdRng::seed_from_u64(1));
        let json = serde_json::to_value(&res).unwrap();
        assert!(json["stress_level"].is_u64());
        let emotions = json["emotions"].as_object().unwrap();
        let keys: Vec<&str> = emotions.keys().map(String::as_str).collect();
        for key in ["happy", "sad", "angry", "neutral", "surprised"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(emotions.len(), 5);
    }
}
