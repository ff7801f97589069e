use std::sync::Arc;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::time::sleep;

use crate::config::BackendConfig;
use crate::engine::retry::RetryPolicy;
use crate::error::Error;
use crate::llm::{build_prompt, parse_classification, CompletionProvider, OpenAiProvider};
use crate::models::{
    ClassificationFailure, ClassificationReport, ClassificationRequest, FailureKind, Outcome,
};
use crate::taxonomy::Taxonomy;

/// Classifies one request against the taxonomy using an OpenAI-compatible
/// backend built from `config`. Every failure comes back as a value.
pub async fn classify(
    request: &ClassificationRequest,
    taxonomy: &Taxonomy,
    config: &BackendConfig,
) -> Outcome {
    if request.is_blank() {
        return Err(empty_request());
    }

    let provider = OpenAiProvider::new(config).map_err(|e| {
        tracing::warn!("Could not set up backend: {}", e);
        ClassificationFailure::backend_unavailable(&e)
    })?;

    classify_with(&provider, taxonomy, request).await
}

async fn classify_with(
    provider: &dyn CompletionProvider,
    taxonomy: &Taxonomy,
    request: &ClassificationRequest,
) -> Outcome {
    let prompt = match build_prompt(taxonomy, request) {
        Ok(prompt) => prompt,
        Err(Error::EmptyRequest) => return Err(empty_request()),
        Err(e) => return Err(ClassificationFailure::backend_unavailable(&e)),
    };

    tracing::info!(
        "Classifying request ({} chars) with {}",
        request.text.chars().count(),
        provider.name()
    );

    let completion = provider.complete(&prompt).await.map_err(|e| {
        tracing::warn!("{} call failed: {}", provider.name(), e);
        ClassificationFailure::backend_unavailable(&e)
    })?;

    match parse_classification(&completion, taxonomy) {
        Ok(result) => {
            tracing::info!(
                "Classified as {} (confidence {:.2})",
                result.category(),
                result.confidence()
            );
            Ok(result)
        }
        Err(failure) => {
            tracing::warn!("Rejected backend response: {}", failure);
            Err(failure)
        }
    }
}

fn empty_request() -> ClassificationFailure {
    tracing::warn!("Rejected blank request before calling the backend");
    ClassificationFailure::new(
        FailureKind::EmptyRequest,
        "Request text is empty; describe the problem with the vehicle",
    )
}

/// Holds the immutable taxonomy and a backend; cheap to clone and safe to use
/// from many tasks at once.
#[derive(Clone)]
pub struct Classifier {
    taxonomy: Arc<Taxonomy>,
    provider: Arc<dyn CompletionProvider>,
}

impl Classifier {
    pub fn new(taxonomy: Taxonomy, provider: impl CompletionProvider + 'static) -> Self {
        Self {
            taxonomy: Arc::new(taxonomy),
            provider: Arc::new(provider),
        }
    }

    pub fn from_config(taxonomy: Taxonomy, config: &BackendConfig) -> crate::error::Result<Self> {
        Ok(Self::new(taxonomy, OpenAiProvider::new(config)?))
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// One backend call at most; blank requests never reach the backend.
    pub async fn classify(&self, request: &ClassificationRequest) -> Outcome {
        if request.is_blank() {
            return Err(empty_request());
        }
        classify_with(self.provider.as_ref(), &self.taxonomy, request).await
    }

    /// Retries only transient backend failures. An answer that failed
    /// validation is returned as is, since the same input would likely
    /// produce the same answer.
    pub async fn classify_with_retry(
        &self,
        request: &ClassificationRequest,
        policy: &RetryPolicy,
    ) -> Outcome {
        let mut attempt = 0;
        loop {
            match self.classify(request).await {
                Err(failure) if failure.is_retryable() && attempt < policy.max_retries => {
                    attempt += 1;
                    let delay = policy.backoff(attempt);
                    tracing::warn!(
                        "Retrying in {:?} (attempt {}/{}): {}",
                        delay,
                        attempt,
                        policy.max_retries,
                        failure
                    );
                    sleep(delay).await;
                }
                outcome => return outcome,
            }
        }
    }

    /// Classifies requests concurrently, returning reports in input order.
    pub async fn classify_batch(
        &self,
        requests: Vec<ClassificationRequest>,
        concurrency_limit: usize,
        policy: &RetryPolicy,
    ) -> Vec<ClassificationReport> {
        let semaphore = Semaphore::new(concurrency_limit.max(1));

        let pb = ProgressBar::new(requests.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} requests")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let futures = requests.into_iter().map(|request| {
            let semaphore = &semaphore;
            let pb = pb.clone();
            async move {
                let _permit = semaphore.acquire().await.ok();
                let outcome = self.classify_with_retry(&request, policy).await;
                pb.inc(1);
                ClassificationReport::new(request, &outcome)
            }
        });

        let reports = join_all(futures).await;
        pb.finish_with_message("Classification complete");

        let failed = reports.iter().filter(|r| !r.is_success()).count();
        tracing::info!(
            "Classified {} requests ({} failed)",
            reports.len(),
            failed
        );

        reports
    }
}
