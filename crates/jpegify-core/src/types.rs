//! Core data types for the conversion pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Result of converting one input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutcome {
    /// Input file name inside the input folder
    pub file_name: String,

    /// Where the JPEG is (or would have been) written
    pub output_path: PathBuf,

    /// Whether the JPEG was written
    pub success: bool,
}

/// Aggregate counts for a finished batch.
///
/// `succeeded + failed == total` always holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionSummary {
    /// Number of files handed to the workers
    pub total: usize,

    /// Files converted successfully
    pub succeeded: usize,

    /// Files that failed to convert
    pub failed: usize,

    /// Number of workers used
    pub workers: usize,

    /// Wall-clock duration of the batch
    #[serde(with = "duration_secs")]
    pub elapsed: Duration,
}

impl ConversionSummary {
    /// Build a summary from per-file outcomes.
    pub fn from_outcomes(
        outcomes: &[ConversionOutcome],
        workers: usize,
        elapsed: Duration,
    ) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.success).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
            workers,
            elapsed,
        }
    }

    /// Files converted per second, or 0.0 for an instant batch.
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total as f64 / secs
        } else {
            0.0
        }
    }
}

/// Serialize a `Duration` as fractional seconds.
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, success: bool) -> ConversionOutcome {
        ConversionOutcome {
            file_name: name.to_string(),
            output_path: PathBuf::from(name).with_extension("jpg"),
            success,
        }
    }

    #[test]
    fn test_summary_counts_sum_to_total() {
        let outcomes = vec![
            outcome("a.webp", true),
            outcome("b.webp", false),
            outcome("c.avif", true),
        ];
        let summary = ConversionSummary::from_outcomes(&outcomes, 2, Duration::from_secs(1));

        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.succeeded + summary.failed, summary.total);
        assert!((summary.rate() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_rate_zero_elapsed() {
        let summary = ConversionSummary::from_outcomes(&[], 1, Duration::ZERO);
        assert_eq!(summary.rate(), 0.0);
    }

    #[test]
    fn test_summary_json_uses_seconds() {
        let summary = ConversionSummary {
            total: 2,
            succeeded: 2,
            failed: 0,
            workers: 4,
            elapsed: Duration::from_millis(1500),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["elapsed"], 1.5);
        assert_eq!(json["succeeded"], 2);

        let back: ConversionSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
    }
}
