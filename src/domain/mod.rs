//! Data shapes shared by the catalog client, the SIMBAD resolver and the
//! aggregator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the Maldonado+2010 table, as published.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogRecord {
    pub hip: u32,
    pub ewli: Option<f64>,
    pub e_ewli: Option<f64>,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub membership: String,
}

/// The whole published table. Fetched fresh for every lookup.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogDocument {
    pub bibcode: String,
    pub data: Vec<CatalogRecord>,
}

/// An EW Li measurement matched to a target, tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LookupResult {
    pub value: f64,
    pub error: Option<f64>,
    pub source: String,
    pub group: String,
    pub membership: String,
    pub bibcode: String,
}

impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error {
            Some(err) => write!(f, "{} ± {} mÅ", self.value, err)?,
            None => write!(f, "{} mÅ", self.value)?,
        }
        if !self.group.is_empty() {
            write!(f, " ({})", self.group)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorCategory {
    EquivalentWidthLithium,
    RotationPeriod,
    ActivityIndex,
    XRayLuminosity,
}

impl IndicatorCategory {
    pub fn all() -> [IndicatorCategory; 4] {
        [
            IndicatorCategory::EquivalentWidthLithium,
            IndicatorCategory::RotationPeriod,
            IndicatorCategory::ActivityIndex,
            IndicatorCategory::XRayLuminosity,
        ]
    }

    /// Key used for this category in serialized results
    pub fn key(&self) -> &'static str {
        match self {
            IndicatorCategory::EquivalentWidthLithium => "ewli",
            IndicatorCategory::RotationPeriod => "prot",
            IndicatorCategory::ActivityIndex => "rhk",
            IndicatorCategory::XRayLuminosity => "lx",
        }
    }
}

/// Youth indicators collected for one target, grouped by category.
///
/// Only `ewli` is filled here; the other categories belong to the VizieR
/// workflow that embeds this crate.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AggregateResults {
    pub ewli: Vec<LookupResult>,
    pub prot: Vec<LookupResult>,
    pub rhk: Vec<LookupResult>,
    pub lx: Vec<LookupResult>,
}

impl AggregateResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self, category: IndicatorCategory) -> &[LookupResult] {
        match category {
            IndicatorCategory::EquivalentWidthLithium => &self.ewli,
            IndicatorCategory::RotationPeriod => &self.prot,
            IndicatorCategory::ActivityIndex => &self.rhk,
            IndicatorCategory::XRayLuminosity => &self.lx,
        }
    }

    pub fn push(&mut self, category: IndicatorCategory, entry: LookupResult) {
        match category {
            IndicatorCategory::EquivalentWidthLithium => self.ewli.push(entry),
            IndicatorCategory::RotationPeriod => self.prot.push(entry),
            IndicatorCategory::ActivityIndex => self.rhk.push(entry),
            IndicatorCategory::XRayLuminosity => self.lx.push(entry),
        }
    }

    pub fn is_empty(&self) -> bool {
        IndicatorCategory::all()
            .iter()
            .all(|c| self.entries(*c).is_empty())
    }
}

/// What the surrounding workflow knows about a target.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TargetQuery {
    /// Right ascension in degrees
    pub ra: f64,
    /// Declination in degrees
    pub dec: f64,
    pub identifier: Option<String>,
}

impl TargetQuery {
    pub fn new(ra: f64, dec: f64, identifier: Option<String>) -> Self {
        Self { ra, dec, identifier }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_document_deserializes_nulls() {
        let doc: CatalogDocument = serde_json::from_value(json!({
            "bibcode": "2010A&A...521A..12M",
            "data": [
                {"hip": 1, "ewli": null, "e_ewli": null, "group": "AB Dor", "membership": "possible"},
                {"hip": 2, "ewli": 80.0, "e_ewli": 5.0}
            ]
        }))
        .unwrap();

        assert_eq!(doc.data.len(), 2);
        assert_eq!(doc.data[0].ewli, None);
        assert_eq!(doc.data[1].group, "");
    }

    #[test]
    fn test_aggregate_results_serializes_all_categories() {
        let value = serde_json::to_value(AggregateResults::new()).unwrap();
        for category in IndicatorCategory::all() {
            assert_eq!(value[category.key()], json!([]));
        }
    }

    #[test]
    fn test_lookup_result_display() {
        let result = LookupResult {
            value: 150.2,
            error: Some(10.5),
            source: "Maldonado+2010".into(),
            group: "Tuc-Hor".into(),
            membership: "bona-fide".into(),
            bibcode: "2010A&A...521A..12M".into(),
        };
        assert_eq!(result.to_string(), "150.2 ± 10.5 mÅ (Tuc-Hor)");
    }
}
