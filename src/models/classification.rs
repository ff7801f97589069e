use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::request::ClassificationRequest;

/// Category reported by every failure, so the result shape stays uniform.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// A validated classification. Only the response parser constructs these, so
/// `category` is always a member of the taxonomy it was validated against and
/// `confidence` always lies in `[0, 1]`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClassificationResult {
    category: String,
    confidence: f64,
    explanation: String,
}

impl ClassificationResult {
    pub(crate) fn new(category: String, confidence: f64, explanation: String) -> Self {
        Self {
            category,
            confidence,
            explanation,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FailureKind {
    BackendUnavailable,
    MalformedResponse,
    UnknownCategory,
    OutOfRangeConfidence,
    EmptyRequest,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::BackendUnavailable => write!(f, "BackendUnavailable"),
            FailureKind::MalformedResponse => write!(f, "MalformedResponse"),
            FailureKind::UnknownCategory => write!(f, "UnknownCategory"),
            FailureKind::OutOfRangeConfidence => write!(f, "OutOfRangeConfidence"),
            FailureKind::EmptyRequest => write!(f, "EmptyRequest"),
        }
    }
}

#[derive(Error, Debug, Clone, Serialize, PartialEq)]
#[error("{kind}: {explanation}")]
pub struct ClassificationFailure {
    kind: FailureKind,
    category: String,
    confidence: f64,
    explanation: String,
    #[serde(skip)]
    retryable: bool,
}

impl ClassificationFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            category: UNKNOWN_CATEGORY.to_string(),
            confidence: 0.0,
            explanation: message.into(),
            retryable: false,
        }
    }

    pub fn backend_unavailable(error: &crate::error::Error) -> Self {
        Self {
            retryable: error.is_retryable(),
            ..Self::new(FailureKind::BackendUnavailable, error.to_string())
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn message(&self) -> &str {
        &self.explanation
    }

    /// Only transient backend failures are worth another attempt with the same input.
    pub fn is_retryable(&self) -> bool {
        self.kind == FailureKind::BackendUnavailable && self.retryable
    }
}

pub type Outcome = std::result::Result<ClassificationResult, ClassificationFailure>;

/// Flattened view of one classified request for display and export.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub request: ClassificationRequest,
    pub category: String,
    pub confidence: f64,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
    pub classified_at: DateTime<Utc>,
}

impl ClassificationReport {
    pub fn new(request: ClassificationRequest, outcome: &Outcome) -> Self {
        let (category, confidence, explanation, failure) = match outcome {
            Ok(result) => (
                result.category().to_string(),
                result.confidence(),
                result.explanation().to_string(),
                None,
            ),
            Err(failure) => (
                failure.category().to_string(),
                failure.confidence(),
                failure.explanation().to_string(),
                Some(failure.kind()),
            ),
        };

        Self {
            request,
            category,
            confidence,
            explanation,
            failure,
            classified_at: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}
