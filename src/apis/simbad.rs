use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::app::ports::{HttpClientPort, IdentifierResolverPort};
use crate::common::constants::{TAP_FORMAT, TAP_LANG, TAP_REQUEST};
use crate::config::SimbadConfig;
use crate::error::{IndicatorError, Result};
use crate::identifiers::{escape_adql_literal, extract_hip_from_simbad};
use crate::observability::metrics;

/// Resolves arbitrary star names to Hipparcos numbers through SIMBAD's
/// synchronous TAP endpoint.
pub struct SimbadResolver {
    http: Arc<dyn HttpClientPort>,
    tap_url: String,
}

/// Rows of a TAP `FORMAT=json` response. Only `data` is used.
#[derive(Debug, Deserialize)]
struct TapResponse {
    #[serde(default)]
    data: Vec<Vec<Value>>,
}

impl SimbadResolver {
    pub fn new(http: Arc<dyn HttpClientPort>, config: &SimbadConfig) -> Self {
        Self {
            http,
            tap_url: config.tap_url.clone(),
        }
    }

    /// ADQL selecting every `HIP ...` alias of the object named `identifier`.
    pub fn build_query(identifier: &str) -> String {
        format!(
            "SELECT id FROM ident WHERE oidref = (SELECT oidref FROM ident WHERE id = '{}') AND id LIKE 'HIP %'",
            escape_adql_literal(identifier)
        )
    }

    /// Form fields of the TAP sync request for `query`.
    pub fn form_fields(query: &str) -> [(&'static str, &str); 4] {
        [
            ("REQUEST", TAP_REQUEST),
            ("LANG", TAP_LANG),
            ("FORMAT", TAP_FORMAT),
            ("QUERY", query),
        ]
    }

    /// HIP number from the first column of the first row, if it has one.
    pub fn parse_response(bytes: &[u8]) -> Result<Option<u32>> {
        let response: TapResponse = serde_json::from_slice(bytes)?;
        let first = response
            .data
            .first()
            .and_then(|row| row.first())
            .and_then(|cell| cell.as_str());
        Ok(first.and_then(extract_hip_from_simbad))
    }

    async fn resolve_inner(&self, identifier: &str) -> Result<Option<u32>> {
        let query = Self::build_query(identifier);
        debug!("TAP query: {}", query);

        let resp = self
            .http
            .post_form(&self.tap_url, &Self::form_fields(&query))
            .await
            .map_err(IndicatorError::Http)?;

        if !resp.is_success() {
            return Err(IndicatorError::Status {
                url: self.tap_url.clone(),
                status: resp.status,
            });
        }

        Self::parse_response(&resp.bytes)
    }
}

#[async_trait]
impl IdentifierResolverPort for SimbadResolver {
    #[instrument(skip(self))]
    async fn resolve(&self, identifier: &str) -> Result<Option<u32>> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Ok(None);
        }

        match self.resolve_inner(identifier).await {
            Ok(Some(hip)) => {
                info!("SIMBAD resolved '{}' to HIP {}", identifier, hip);
                metrics::simbad::resolved();
                Ok(Some(hip))
            }
            Ok(None) => {
                debug!("SIMBAD has no HIP alias for '{}'", identifier);
                metrics::simbad::unresolved();
                Ok(None)
            }
            Err(e) => {
                warn!("Error getting HIP from SIMBAD for '{}': {}", identifier, e);
                metrics::simbad::error(e.kind().as_str());
                Err(e)
            }
        }
    }
}
