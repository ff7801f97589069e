use serde::Deserialize;

use crate::models::classification::{
    ClassificationFailure, ClassificationResult, FailureKind, Outcome,
};
use crate::taxonomy::Taxonomy;

/// Exact wire shape requested from the backend.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClassification {
    category: String,
    confidence: f64,
    explanation: String,
}

/// Turns a raw completion into a validated result. Surrounding whitespace is
/// the only slack allowed: code fences, prose, extra or missing fields and
/// wrong field types are all malformed. Categories are never coerced to a
/// close match and confidence is never clamped.
pub fn parse_classification(response: &str, taxonomy: &Taxonomy) -> Outcome {
    let raw: RawClassification = serde_json::from_str(response.trim()).map_err(|e| {
        ClassificationFailure::new(
            FailureKind::MalformedResponse,
            format!("Backend response is not the expected JSON object: {}", e),
        )
    })?;

    if !taxonomy.is_valid_category(&raw.category) {
        return Err(ClassificationFailure::new(
            FailureKind::UnknownCategory,
            format!("Backend chose a category outside the taxonomy: {:?}", raw.category),
        ));
    }

    if !(0.0..=1.0).contains(&raw.confidence) {
        return Err(ClassificationFailure::new(
            FailureKind::OutOfRangeConfidence,
            format!("Confidence {} is outside [0, 1]", raw.confidence),
        ));
    }

    Ok(ClassificationResult::new(
        raw.category,
        raw.confidence,
        raw.explanation,
    ))
}
