// Image search endpoints.

use serde_json::Value;

use crate::client::SreClient;
use crate::endpoint::Endpoint;
use crate::error::Error;

impl SreClient {
    /// Semantic search over site imagery.
    ///
    /// `POST /api/images/search` with `{"query": ..., "top_k": N}`
    ///
    /// The query is sent as given; blank-query validation belongs to the
    /// caller.
    pub async fn search_images(&self, query: &str, top_k: u32) -> Result<Value, Error> {
        self.fetch(&Endpoint::ImageSearch {
            query: query.to_owned(),
            top_k,
        })
        .await
    }

    /// `GET /api/images/list`
    pub async fn list_images(&self) -> Result<Value, Error> {
        self.fetch(&Endpoint::ImageList).await
    }
}
