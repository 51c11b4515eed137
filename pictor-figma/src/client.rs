use std::time::Duration;

use pictor_ir::RawComponent;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    DesignSource, Error, ImageUrls, Result,
    wire::{ComponentsResponse, ErrorBody, ImagesResponse},
};

pub const DEFAULT_BASE_URL: &str = "https://api.figma.com/v1";

const TOKEN_HEADER: &str = "X-FIGMA-TOKEN";

/// Node ids per images request; long id lists exceed URL length limits.
const IMAGE_BATCH_SIZE: usize = 400;

/// Figma REST client for one file.
#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: Client,
    base_url: String,
    file_key: String,
    token: String,
}

impl FigmaClient {
    pub fn new(file_key: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent(concat!("pictor/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            file_key: file_key.into(),
            token: token.into(),
        })
    }

    /// Talk to a different API root, e.g. a proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn file_key(&self) -> &str {
        &self.file_key
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "figma request");

        let response = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, &self.token)
            .query(query)
            .send()?;
        let body = check_status(response)?.text()?;

        serde_json::from_str(&body).map_err(|source| Error::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let fallback = status.canonical_reason().unwrap_or("request failed");
    let body: ErrorBody = response
        .text()
        .ok()
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default();

    Err(Error::Api {
        status: status.as_u16(),
        message: body.into_message(fallback),
    })
}

impl DesignSource for FigmaClient {
    fn components(&self) -> Result<Vec<RawComponent>> {
        let endpoint = format!("/files/{}/components", self.file_key);
        let response: ComponentsResponse = self.get_json(&endpoint, &[])?;

        Ok(response
            .meta
            .components
            .into_iter()
            .map(RawComponent::from)
            .collect())
    }

    fn image_urls(&self, ids: &[String]) -> Result<ImageUrls> {
        let endpoint = format!("/images/{}", self.file_key);
        let mut urls = ImageUrls::new();

        for batch in ids.chunks(IMAGE_BATCH_SIZE) {
            let ids = batch.join(",");
            let response: ImagesResponse =
                self.get_json(&endpoint, &[("ids", &ids), ("format", "svg")])?;

            for (id, url) in response.images {
                match url {
                    Some(url) => {
                        urls.insert(id, url);
                    }
                    None => tracing::warn!(%id, "figma could not render node"),
                }
            }
        }

        Ok(urls)
    }

    fn download(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send()?;
        Ok(check_status(response)?.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = FigmaClient::new("abc", "token")
            .unwrap()
            .with_base_url("http://localhost:8080/v1/");
        assert_eq!(client.base_url, "http://localhost:8080/v1");
        assert_eq!(client.file_key(), "abc");
    }

    #[test]
    fn test_auth_errors() {
        let err = Error::Api {
            status: 403,
            message: "Invalid token".to_string(),
        };
        assert!(err.is_auth());
        assert_eq!(err.to_string(), "figma API error (403): Invalid token");
        assert!(
            !Error::Api {
                status: 500,
                message: String::new()
            }
            .is_auth()
        );
    }
}
