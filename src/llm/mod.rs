pub mod client;
pub mod prompts;
pub mod validation;

pub use client::*;
pub use prompts::*;
pub use validation::*;

use std::future::Future;

use thiserror::Error;

use crate::models::SemanticScores;

/// Failure modes of the semantic scorer
///
/// Both kinds are fatal for the scoring request that triggered them and
/// propagate unchanged to the caller; there is no retry and no fallback to
/// default scores.
#[derive(Debug, Error)]
pub enum SemanticError {
    /// The service could not be reached or the request failed in transit
    #[error("semantic scorer request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status
    #[error("semantic scorer returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not the expected structured data
    #[error("invalid semantic response: {reason}")]
    Parse { reason: String },
}

/// Capability to obtain semantic judgments for a transcript
///
/// The production implementation calls an external language-understanding
/// service; tests substitute a deterministic fake so the combiner's behavior
/// stays reproducible.
pub trait SemanticScorer {
    fn score_semantics(
        &self,
        transcript: &str,
        context: &str,
    ) -> impl Future<Output = Result<SemanticScores, SemanticError>> + Send;
}
