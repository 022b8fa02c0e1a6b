use tracing::{debug, info, instrument, warn};

use crate::app::ports::{CatalogLookupPort, IdentifierResolverPort};
use crate::domain::{AggregateResults, IndicatorCategory, TargetQuery};
use crate::identifiers::{is_hip_designation, parse_hip_designation};
use crate::observability::metrics;

/// Use case for collecting the youth indicators this crate can answer for a
/// target: at most one EW Li entry from the Maldonado+2010 catalog.
///
/// Lookup failures are logged and dropped, so a failed fetch and a missing
/// measurement both leave `ewli` empty.
pub struct YouthIndicatorsUseCase {
    resolver: Box<dyn IdentifierResolverPort>,
    catalog: Box<dyn CatalogLookupPort>,
}

impl YouthIndicatorsUseCase {
    pub fn new(
        resolver: Box<dyn IdentifierResolverPort>,
        catalog: Box<dyn CatalogLookupPort>,
    ) -> Self {
        Self { resolver, catalog }
    }

    /// HIP number for the identifier: read directly when it already is a HIP
    /// designation, otherwise asked of the resolver.
    pub async fn hip_number(&self, identifier: Option<&str>) -> Option<u32> {
        let identifier = identifier.map(str::trim).filter(|s| !s.is_empty())?;

        // A HIP designation never goes to the resolver, even when its number is unusable
        if is_hip_designation(identifier) {
            debug!("'{}' is already a HIP designation", identifier);
            metrics::aggregate::hip_short_circuit();
            let hip = parse_hip_designation(identifier);
            if hip.is_none() {
                warn!("'{}' does not carry a valid HIP number", identifier);
            }
            return hip;
        }

        // The resolver logs its own failures
        self.resolver.resolve(identifier).await.unwrap_or_default()
    }

    #[instrument(skip(self), fields(identifier = ?target.identifier))]
    pub async fn run(&self, target: &TargetQuery) -> AggregateResults {
        metrics::aggregate::run();
        let mut results = AggregateResults::new();

        let Some(hip) = self.hip_number(target.identifier.as_deref()).await else {
            return results;
        };

        info!("Checking Maldonado+2010 for HIP {}...", hip);
        match self.catalog.lookup(hip).await {
            Ok(Some(entry)) => {
                info!("✓ Found EW Li: {}", entry);
                results.push(IndicatorCategory::EquivalentWidthLithium, entry);
            }
            Ok(None) => {}
            Err(e) => debug!("Dropping failed EW Li lookup for HIP {}: {}", hip, e),
        }

        results
    }
}
