use async_trait::async_trait;

use crate::domain::LookupResult;
use crate::error::Result;

#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn get(&self, url: &str) -> std::result::Result<HttpResponse, String>;

    /// POST a body encoded as `application/x-www-form-urlencoded`.
    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> std::result::Result<HttpResponse, String>;
}

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// Lookup-side ports, consumed by the aggregator

#[async_trait]
pub trait CatalogLookupPort: Send + Sync {
    /// `Ok(None)` when the catalog has no usable measurement for `hip`.
    async fn lookup(&self, hip: u32) -> Result<Option<LookupResult>>;
}

#[async_trait]
pub trait IdentifierResolverPort: Send + Sync {
    /// `Ok(None)` when the identifier has no Hipparcos cross-identification.
    async fn resolve(&self, identifier: &str) -> Result<Option<u32>>;
}
