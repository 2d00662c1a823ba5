//! HTTP client adapter for the remote analysis service

use crate::capture::SelectedFile;
use crate::error::{CvRaterError, Result};
use crate::model::AnalysisResult;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

/// Thin client over the analysis endpoints. No retries, no timeouts, no
/// caching; every call is one request.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a document as multipart form data and return its analysis.
    pub async fn upload_cv(&self, file: &SelectedFile) -> Result<AnalysisResult> {
        let url = format!("{}/upload-cv/", self.base_url);
        debug!("POST {} ({} bytes)", url, file.bytes.len());

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(file.document_type.mime())?;
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        Self::parse_analysis(response).await
    }

    /// Fetch a previously computed analysis by its id.
    pub async fn get_analysis(&self, id: &str) -> Result<AnalysisResult> {
        let url = format!("{}/analysis/{}/", self.base_url, id);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::parse_analysis(response).await
    }

    /// Liveness probe. Ok when the service reports `{"status":"ok"}`.
    pub async fn health(&self) -> Result<()> {
        let url = format!("{}/health/", self.base_url);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::api_error(status, &body));
        }

        let body: HealthBody = response.json().await?;
        if body.status == "ok" {
            Ok(())
        } else {
            Err(CvRaterError::Api {
                status: status.as_u16(),
                message: format!("unexpected health status: {}", body.status),
            })
        }
    }

    async fn parse_analysis(response: Response) -> Result<AnalysisResult> {
        let status = response.status();
        if status.is_success() {
            let result = response.json::<AnalysisResult>().await?;
            debug!("analysis {} scored {}", result.id, result.overall_score);
            Ok(result)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Self::api_error(status, &body))
        }
    }

    /// Prefer the server's own `error` field; otherwise hand back an empty
    /// message so the presentation layer falls back to its generic text.
    fn api_error(status: StatusCode, body: &str) -> CvRaterError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_default();
        debug!("API error {}: {:?}", status, message);
        CvRaterError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
