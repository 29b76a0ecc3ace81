//! Document completeness gate.
//!
//! The only stage allowed to short-circuit the pipeline: when mandatory
//! document types are missing or a submission is flagged invalid, the run
//! terminates with `documents_required` before any scoring happens.

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::domain::ApplicationId;

/// One submitted document-type tag with the store's validity verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedDocument {
    pub doc_type: String,
    pub valid: bool,
}

impl SubmittedDocument {
    pub fn valid(doc_type: impl Into<String>) -> Self {
        Self {
            doc_type: doc_type.into(),
            valid: true,
        }
    }

    pub fn invalid(doc_type: impl Into<String>) -> Self {
        Self {
            doc_type: doc_type.into(),
            valid: false,
        }
    }
}

/// Completeness check against the process-wide mandatory document set.
#[derive(Debug, Clone)]
pub struct DocumentCheck {
    required: BTreeSet<String>,
}

impl DocumentCheck {
    pub fn new(required: impl IntoIterator<Item = String>) -> Self {
        Self {
            required: required.into_iter().collect(),
        }
    }

    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.required.iter().map(String::as_str)
    }

    /// Compute `missing = required − submitted` exactly, plus the invalid
    /// submissions. Ordering is deterministic (sorted by tag).
    pub fn review(&self, submitted: &[SubmittedDocument]) -> DocumentReview {
        let submitted_types: BTreeSet<&str> = submitted
            .iter()
            .map(|document| document.doc_type.as_str())
            .collect();

        let missing_documents: Vec<String> = self
            .required
            .iter()
            .filter(|required| !submitted_types.contains(required.as_str()))
            .cloned()
            .collect();

        let invalid_documents: BTreeSet<String> = submitted
            .iter()
            .filter(|document| !document.valid)
            .map(|document| document.doc_type.clone())
            .collect();

        DocumentReview {
            missing_documents,
            invalid_documents: invalid_documents.into_iter().collect(),
        }
    }
}

/// Outcome of the completeness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReview {
    pub missing_documents: Vec<String>,
    pub invalid_documents: Vec<String>,
}

impl DocumentReview {
    /// True when every required type is present and every submission is
    /// valid; the scoring stages only run behind this gate.
    pub fn passed(&self) -> bool {
        self.missing_documents.is_empty() && self.invalid_documents.is_empty()
    }
}

/// Read-only collaborator resolving an application id to its submitted
/// document tags and validity flags.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn submitted_documents(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<SubmittedDocument>, DocumentStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("application {0:?} not found in document store")]
    NotFound(ApplicationId),
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}
