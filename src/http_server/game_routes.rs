//! Game HTTP Routes
//!
//! Endpoints for query evaluation, case dataset dumps, and schema
//! descriptions.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::cases::CaseSpec;
use crate::datasets::{self, ColumnDescription};
use crate::executor::Row;
use crate::pipeline::{CaseError, CasePipeline};

// ==================
// Shared State
// ==================

/// Game state shared across handlers
pub struct GameState {
    pub pipeline: CasePipeline,
}

impl GameState {
    pub fn new(pipeline: CasePipeline) -> Self {
        Self { pipeline }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct ExecuteSqlRequest {
    pub query: String,
    #[serde(default, rename = "caseId")]
    pub case_id: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExecuteSqlResponse {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    #[serde(rename = "isCorrect")]
    pub is_correct: Option<bool>,
    pub message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CaseSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub datasets: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CasesListResponse {
    pub cases: Vec<CaseSummary>,
}

#[derive(Debug, Serialize)]
pub struct TableDump {
    #[serde(rename = "tableName")]
    pub table_name: &'static str,
    pub title: &'static str,
    pub data: Vec<Row>,
}

#[derive(Debug, Serialize)]
pub struct TableSchema {
    #[serde(rename = "tableName")]
    pub table_name: &'static str,
    pub title: String,
    pub columns: Vec<ColumnDescription>,
}

/// Single-table cases answer with a flat object; multi-table cases wrap
/// their blocks in `{tables: [...]}`. A case flagged `tabbed_data` keeps
/// the wrapped shape for its data view even with a single table, so the
/// client renders it in the tabbed layout.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CaseTablesResponse<T: Serialize> {
    Single(T),
    Multiple { tables: Vec<T> },
}

impl<T: Serialize> CaseTablesResponse<T> {
    fn from_blocks(mut blocks: Vec<T>) -> Self {
        if blocks.len() == 1 {
            CaseTablesResponse::Single(blocks.remove(0))
        } else {
            CaseTablesResponse::Multiple { tables: blocks }
        }
    }

    fn for_data_view(case: &CaseSpec, blocks: Vec<T>) -> Self {
        if case.tabbed_data {
            CaseTablesResponse::Multiple { tables: blocks }
        } else {
            CaseTablesResponse::from_blocks(blocks)
        }
    }
}

// ==================
// Routes
// ==================

/// Create game routes
pub fn game_routes(state: Arc<GameState>) -> Router {
    Router::new()
        .route("/execute-sql", post(execute_sql_handler))
        .route("/cases", get(list_cases_handler))
        .route("/case/:case_id/data", get(case_data_handler))
        .route("/case/:case_id/schema", get(case_schema_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn execute_sql_handler(
    State(state): State<Arc<GameState>>,
    Json(request): Json<ExecuteSqlRequest>,
) -> Result<Json<ExecuteSqlResponse>, CaseError> {
    // Query execution is synchronous SQLite work; keep it off the runtime.
    let outcome = tokio::task::spawn_blocking(move || {
        state.pipeline.evaluate(
            &request.query,
            request.case_id.as_deref(),
            request.user_id.as_deref(),
        )
    })
    .await
    .map_err(|e| CaseError::Internal(e.to_string()))??;

    Ok(Json(ExecuteSqlResponse {
        columns: outcome.result.columns,
        rows: outcome.result.rows,
        is_correct: outcome.verdict,
        message: outcome.message,
    }))
}

async fn list_cases_handler(
    State(state): State<Arc<GameState>>,
) -> Json<CasesListResponse> {
    let cases = state
        .pipeline
        .registry()
        .ids()
        .filter_map(|id| state.pipeline.registry().lookup(id))
        .map(|case| CaseSummary {
            id: case.id,
            title: case.title,
            datasets: case.datasets.to_vec(),
        })
        .collect();
    Json(CasesListResponse { cases })
}

async fn case_data_handler(
    State(state): State<Arc<GameState>>,
    Path(case_id): Path<String>,
) -> Result<Json<CaseTablesResponse<TableDump>>, CaseError> {
    let response = tokio::task::spawn_blocking(move || {
        let case = lookup_case(&state, &case_id)?;
        let session = state
            .pipeline
            .store()
            .session()
            .map_err(|e| CaseError::Internal(e.to_string()))?;

        let blocks = case
            .datasets
            .iter()
            .map(|name| {
                let dataset = datasets::by_name(name)
                    .ok_or_else(|| CaseError::Internal(format!("unknown dataset: {}", name)))?;
                // Table names come from the static definitions, never from
                // the request, so direct interpolation is safe here.
                let result = session
                    .execute_read(&format!("SELECT * FROM {}", dataset.name))
                    .map_err(|e| CaseError::Internal(e.backend_message().to_string()))?;
                Ok(TableDump {
                    table_name: dataset.name,
                    title: dataset.title,
                    data: result.rows,
                })
            })
            .collect::<Result<Vec<_>, CaseError>>()?;

        Ok::<_, CaseError>(CaseTablesResponse::for_data_view(case, blocks))
    })
    .await
    .map_err(|e| CaseError::Internal(e.to_string()))??;

    Ok(Json(response))
}

async fn case_schema_handler(
    State(state): State<Arc<GameState>>,
    Path(case_id): Path<String>,
) -> Result<Json<CaseTablesResponse<TableSchema>>, CaseError> {
    let case = lookup_case(&state, &case_id)?;

    let blocks = case
        .datasets
        .iter()
        .map(|name| {
            let dataset = datasets::by_name(name)
                .ok_or_else(|| CaseError::Internal(format!("unknown dataset: {}", name)))?;
            Ok(TableSchema {
                table_name: dataset.name,
                title: format!("Schema of table {}", dataset.name),
                columns: dataset.describe(),
            })
        })
        .collect::<Result<Vec<_>, CaseError>>()?;

    Ok(Json(CaseTablesResponse::from_blocks(blocks)))
}

fn lookup_case<'a>(state: &'a GameState, case_id: &str) -> Result<&'a CaseSpec, CaseError> {
    state
        .pipeline
        .registry()
        .lookup(case_id)
        .ok_or_else(|| CaseError::UnknownCase(case_id.to_string()))
}
