use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::app::ports::{CatalogLookupPort, HttpClientPort};
use crate::config::CatalogConfig;
use crate::domain::{CatalogDocument, LookupResult};
use crate::error::{IndicatorError, Result};
use crate::observability::metrics;

/// Client for the Maldonado et al. (2010) EW Li table.
///
/// The table is small and served as one JSON document, so every lookup
/// downloads it again and scans it in order.
pub struct Maldonado2010Catalog {
    http: Arc<dyn HttpClientPort>,
    url: String,
    source_label: String,
}

impl Maldonado2010Catalog {
    pub fn new(http: Arc<dyn HttpClientPort>, config: &CatalogConfig) -> Self {
        Self {
            http,
            url: config.url.clone(),
            source_label: config.source_label.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch_document(&self) -> Result<CatalogDocument> {
        let started = Instant::now();
        let resp = self.http.get(&self.url).await.map_err(IndicatorError::Http)?;
        metrics::catalog::fetch_duration(started.elapsed().as_secs_f64());

        if !resp.is_success() {
            return Err(IndicatorError::Status {
                url: self.url.clone(),
                status: resp.status,
            });
        }

        let document: CatalogDocument = serde_json::from_slice(&resp.bytes)?;
        debug!(
            "Fetched {} records ({})",
            document.data.len(),
            document.bibcode
        );
        Ok(document)
    }

    async fn lookup_inner(&self, hip: u32) -> Result<Option<LookupResult>> {
        if hip == 0 {
            return Ok(None);
        }
        let document = self.fetch_document().await?;
        metrics::catalog::records_scanned(document.data.len());
        Ok(find_measurement(&document, hip, &self.source_label))
    }
}

/// First record for `hip` in document order, if it carries a measurement.
///
/// The scan stops at the first identifier match: a later duplicate is never
/// consulted, even when the first one has no EW Li value.
pub fn find_measurement(document: &CatalogDocument, hip: u32, source: &str) -> Option<LookupResult> {
    let record = document.data.iter().find(|r| r.hip == hip)?;
    let value = record.ewli?;
    Some(LookupResult {
        value,
        error: record.e_ewli,
        source: source.to_string(),
        group: record.group.clone(),
        membership: record.membership.clone(),
        bibcode: document.bibcode.clone(),
    })
}

#[async_trait]
impl CatalogLookupPort for Maldonado2010Catalog {
    #[instrument(skip(self))]
    async fn lookup(&self, hip: u32) -> Result<Option<LookupResult>> {
        match self.lookup_inner(hip).await {
            Ok(Some(result)) => {
                info!("Found EW Li for HIP {}: {}", hip, result);
                metrics::catalog::lookup_found();
                Ok(Some(result))
            }
            Ok(None) => {
                debug!("No EW Li measurement for HIP {}", hip);
                metrics::catalog::lookup_not_found();
                Ok(None)
            }
            Err(e) => {
                warn!("Could not search {} catalog: {}", self.source_label, e);
                metrics::catalog::lookup_error(e.kind().as_str());
                Err(e)
            }
        }
    }
}
