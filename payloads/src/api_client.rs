use crate::{
    requests::PostsQuery,
    responses::{self, ReleaseDateError},
};
use reqwest::StatusCode;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str, query: &str) -> String {
        format!("{}/v1/{path}?{query}", &self.address)
    }

    async fn get(&self, path: &str, query: &str) -> ReqwestResult {
        let url = self.format_url(path, query);
        tracing::debug!(%url, "GET");
        self.inner_client.get(url).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// List posts matching the query, with release dates normalized. Server
    /// order is preserved.
    pub async fn get_posts(
        &self,
        query: &PostsQuery,
    ) -> Result<Vec<responses::Post>, ClientError> {
        let response = self.get("posts", &query.to_query_string()).await?;
        let page: responses::PostsPage = ok_body(response).await?;
        let posts = page.into_posts()?;
        tracing::debug!(
            medium = %query.medium,
            min_year = query.min_year,
            max_year = query.max_year,
            num_posts = posts.len(),
            "fetched posts"
        );
        for post in &posts {
            tracing::trace!("{post}");
        }
        Ok(posts)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from server: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidReleaseDate(#[from] ReleaseDateError),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
