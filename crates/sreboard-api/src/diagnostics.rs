// Diagnostics endpoints
//
// Log statistics, summaries, error-source breakdowns, log search, and the
// natural-language query backed by the LLM service.

use serde_json::Value;
use tracing::debug;

use crate::client::SreClient;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::models::QueryAnswer;

impl SreClient {
    /// `GET /api/diagnostics/logs/stats`
    pub async fn log_stats(&self) -> Result<Value, Error> {
        self.fetch(&Endpoint::LogStats).await
    }

    /// `GET /api/diagnostics/logs/summary`
    pub async fn log_summary(&self) -> Result<Value, Error> {
        self.fetch(&Endpoint::LogSummary).await
    }

    /// Source IPs most often producing `error_code`.
    ///
    /// `GET /api/diagnostics/logs/errors/{code}?top_n=N`
    pub async fn error_sources(&self, error_code: u16, top_n: u32) -> Result<Value, Error> {
        self.fetch(&Endpoint::ErrorSources { error_code, top_n }).await
    }

    /// `GET /api/diagnostics/logs/search?query=Q&limit=N`
    pub async fn search_logs(&self, query: &str, limit: u32) -> Result<Value, Error> {
        self.fetch(&Endpoint::LogSearch {
            query: query.to_owned(),
            limit,
        })
        .await
    }

    /// Ask the diagnostics assistant a question.
    ///
    /// `POST /api/diagnostics/query` with `{"question": ...}`
    pub async fn query(&self, question: &str) -> Result<QueryAnswer, Error> {
        debug!("submitting diagnostics query");
        self.fetch(&Endpoint::Query {
            question: question.to_owned(),
        })
        .await
    }
}
