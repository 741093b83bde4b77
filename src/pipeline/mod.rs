//! # Case Pipeline
//!
//! State-free per-request orchestration: validate the learner's text,
//! execute it, and when a case id is supplied, execute that case's
//! reference query and judge set-equivalence.
//!
//! The session is acquired once per request and released on every exit
//! path. The progress notification on a correct answer is best-effort: a
//! tracker failure is logged and never alters the outcome.

pub mod errors;

pub use errors::{CaseError, CaseResult, ErrorResponse};

use std::sync::Arc;

use crate::cases::CaseRegistry;
use crate::compare;
use crate::executor::{DatasetStore, ResultSet};
use crate::observability::Logger;
use crate::validator::StatementValidator;

/// Message attached to a correct solution
pub const SUCCESS_MESSAGE: &str = "Congratulations! You found the correct solution!";

/// Outcome of one evaluation request.
///
/// `verdict` is present iff a case id was supplied and both executions
/// succeeded; `message` is present only on a true verdict.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The learner's own result, for display
    pub result: ResultSet,
    /// Tri-state correctness: None when no case id was supplied
    pub verdict: Option<bool>,
    /// Congratulation on a true verdict
    pub message: Option<&'static str>,
}

/// Outbound collaborator recording solved cases
pub trait ProgressTracker: Send + Sync {
    /// Record that a learner solved a case. Called only on a true verdict.
    fn record_success(&self, learner_id: &str, case_id: &str) -> Result<(), String>;
}

/// Default tracker: emits a structured log line
pub struct LoggingProgressTracker;

impl ProgressTracker for LoggingProgressTracker {
    fn record_success(&self, learner_id: &str, case_id: &str) -> Result<(), String> {
        Logger::info(
            "CASE_SOLVED",
            &[("case_id", case_id), ("learner_id", learner_id)],
        );
        Ok(())
    }
}

/// The evaluation pipeline
pub struct CasePipeline {
    store: DatasetStore,
    registry: CaseRegistry,
    validator: StatementValidator,
    progress: Arc<dyn ProgressTracker>,
}

impl CasePipeline {
    /// Build a pipeline with the standard validator chain
    pub fn new(store: DatasetStore, registry: CaseRegistry, progress: Arc<dyn ProgressTracker>) -> Self {
        Self {
            store,
            registry,
            validator: StatementValidator::new(),
            progress,
        }
    }

    /// Returns the case registry
    pub fn registry(&self) -> &CaseRegistry {
        &self.registry
    }

    /// Returns the dataset store
    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Evaluate one submission
    pub fn evaluate(
        &self,
        query: &str,
        case_id: Option<&str>,
        learner_id: Option<&str>,
    ) -> CaseResult<Outcome> {
        Logger::info(
            "QUERY_RECEIVED",
            &[
                ("case_id", case_id.unwrap_or("-")),
                ("learner_id", learner_id.unwrap_or("-")),
            ],
        );

        if let Err(rejection) = self.validator.validate(query) {
            Logger::info("QUERY_REJECTED", &[("reason", rejection.reason)]);
            return Err(rejection.into());
        }

        let session = self
            .store
            .session()
            .map_err(|e| CaseError::Internal(e.to_string()))?;

        let result = session.execute_read(query).map_err(|e| {
            Logger::info("QUERY_FAILED", &[("message", e.backend_message())]);
            CaseError::Backend(e)
        })?;

        let Some(case_id) = case_id else {
            return Ok(Outcome {
                result,
                verdict: None,
                message: None,
            });
        };

        let case = self
            .registry
            .lookup(case_id)
            .ok_or_else(|| CaseError::UnknownCase(case_id.to_string()))?;

        // The reference query is trusted; its failure is a deployment
        // defect, reported as a server fault with the raw engine message.
        let reference = session.execute_read(case.reference_query).map_err(|e| {
            Logger::error(
                "REFERENCE_QUERY_FAILED",
                &[("case_id", case_id), ("message", e.backend_message())],
            );
            CaseError::ReferenceFailure(e.backend_message().to_string())
        })?;

        let correct = compare::equivalent(&result, &reference);
        Logger::info(
            "QUERY_JUDGED",
            &[
                ("case_id", case_id),
                ("verdict", if correct { "true" } else { "false" }),
            ],
        );

        if correct {
            if let Some(learner_id) = learner_id {
                if let Err(reason) = self.progress.record_success(learner_id, case_id) {
                    Logger::warn(
                        "PROGRESS_RECORD_FAILED",
                        &[
                            ("case_id", case_id),
                            ("learner_id", learner_id),
                            ("reason", reason.as_str()),
                        ],
                    );
                }
            }
        }

        Ok(Outcome {
            result,
            verdict: Some(correct),
            message: correct.then_some(SUCCESS_MESSAGE),
        })
    }
}
