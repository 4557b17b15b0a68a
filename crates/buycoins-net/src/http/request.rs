//! Form-encoded POST requests.

use http::HeaderMap;

use super::client::HttpClient;
use super::response::HttpResponse;
use crate::auth::Credentials;
use crate::error::Result;

/// A form-encoded POST under construction.
///
/// Fields are sent in the order they were added.
#[derive(Debug)]
pub struct FormPost {
    client: HttpClient,
    url: String,
    headers: HeaderMap,
    fields: Vec<(String, String)>,
    credentials: Option<Credentials>,
}

impl FormPost {
    pub(crate) fn new(client: HttpClient, url: String) -> Self {
        Self {
            client,
            url,
            headers: HeaderMap::new(),
            fields: Vec::new(),
            credentials: None,
        }
    }

    /// Add already validated headers, replacing any with the same name.
    pub fn headers(mut self, headers: &HeaderMap) -> Self {
        for (name, value) in headers {
            self.headers.insert(name.clone(), value.clone());
        }
        self
    }

    /// Append a form field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Authenticate with the key pair as basic-auth user and password.
    pub fn basic_auth(mut self, credentials: &Credentials) -> Self {
        self.credentials = Some(credentials.clone());
        self
    }

    /// Send the request and read the whole reply.
    pub async fn send(self) -> Result<HttpResponse> {
        let url = url::Url::parse(&self.url)?;
        let mut request = self
            .client
            .reqwest_client()
            .post(url)
            .headers(self.headers)
            .form(&self.fields);

        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(credentials.public_key(), Some(credentials.secret_key()));
        }

        HttpResponse::read(request.send().await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::ACCEPT;
    use http::HeaderValue;

    fn post() -> FormPost {
        HttpClient::new()
            .unwrap()
            .post_form("https://example.com/graphql")
    }

    #[test]
    fn test_fields_keep_order() {
        let request = post()
            .field("query", "query { getPrices { id } }")
            .field("extra", "1");

        let names: Vec<_> = request.fields.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["query", "extra"]);
    }

    #[test]
    fn test_headers_replace() {
        let mut first = HeaderMap::new();
        first.insert(ACCEPT, HeaderValue::from_static("text/html"));
        let mut second = HeaderMap::new();
        second.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let request = post().headers(&first).headers(&second);
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.headers[ACCEPT], "application/json");
    }

    #[test]
    fn test_debug_hides_secret() {
        let credentials = Credentials::new("chuks", "emeka").unwrap();
        let request = post().basic_auth(&credentials);

        let debug = format!("{request:?}");
        assert!(debug.contains("chuks"));
        assert!(!debug.contains("emeka"));
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let err = HttpClient::new()
            .unwrap()
            .post_form("not a url")
            .send()
            .await
            .unwrap_err();
        assert!(matches!(err, crate::NetworkError::InvalidUrl(_)));
    }
}
