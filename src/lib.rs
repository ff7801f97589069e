pub mod config;
pub mod error;
pub mod models;
pub mod taxonomy;
pub mod llm;
pub mod engine;

pub use config::{BackendConfig, Config};
pub use error::{Error, Result};
pub use engine::{classify, Classifier, RetryPolicy};
pub use llm::{CompletionProvider, OpenAiProvider};
pub use models::{
    Category, ClassificationFailure, ClassificationReport, ClassificationRequest,
    ClassificationResult, FailureKind, Outcome,
};
pub use taxonomy::Taxonomy;
