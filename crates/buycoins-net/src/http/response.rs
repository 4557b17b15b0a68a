//! A fully read HTTP reply.

use crate::error::Result;

/// Status, content type and body of a reply, read in one go.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: u16,
    content_type: Option<String>,
    body: String,
}

impl HttpResponse {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;

        Ok(Self {
            status,
            content_type,
            body,
        })
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `Content-Type` header, if present and readable.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Take the body text.
    pub fn into_body(self) -> String {
        self.body
    }
}
