use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use youth_indicators::app::ports::{
    CatalogLookupPort, HttpClientPort, HttpResponse, IdentifierResolverPort,
};
use youth_indicators::config::{CatalogConfig, SimbadConfig};
use youth_indicators::{
    LookupResult, Maldonado2010Catalog, SimbadResolver, TargetQuery, YouthIndicatorsUseCase,
};

const CATALOG_URL: &str = "http://fixtures.local/maldonado2010_ewli.json";
const TAP_URL: &str = "http://fixtures.local/sim-tap/sync";

/// Serves a canned catalog on GET and a canned TAP answer on POST, and
/// records every request as "GET <url>" or "POST <url>".
struct FixtureServer {
    catalog: (u16, String),
    tap: (u16, String),
    requests: Arc<Mutex<Vec<String>>>,
}

impl FixtureServer {
    fn new(catalog: (u16, String), tap: (u16, String)) -> Self {
        Self {
            catalog,
            tap,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn respond(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            bytes: body.as_bytes().to_vec(),
            content_type: "application/json".to_string(),
        }
    }
}

#[async_trait]
impl HttpClientPort for FixtureServer {
    async fn get(&self, url: &str) -> Result<HttpResponse, String> {
        self.requests.lock().await.push(format!("GET {}", url));
        if url != CATALOG_URL {
            return Err(format!("unexpected GET {}", url));
        }
        Ok(Self::respond(self.catalog.0, &self.catalog.1))
    }

    async fn post_form(&self, url: &str, _fields: &[(&str, &str)]) -> Result<HttpResponse, String> {
        self.requests.lock().await.push(format!("POST {}", url));
        if url != TAP_URL {
            return Err(format!("unexpected POST {}", url));
        }
        Ok(Self::respond(self.tap.0, &self.tap.1))
    }
}

fn catalog_body() -> String {
    json!({
        "bibcode": "2010A&A...521A..12M",
        "data": [
            {"hip": 12345, "ewli": 150.2, "e_ewli": 10.5, "group": "Tuc-Hor", "membership": "bona-fide"},
            {"hip": 22222, "ewli": null, "e_ewli": null, "group": "AB Dor", "membership": "possible"}
        ]
    })
    .to_string()
}

fn tap_body(first_id: &str) -> String {
    json!({"metadata": [{"name": "id"}], "data": [[first_id]]}).to_string()
}

fn wire(server: FixtureServer) -> (YouthIndicatorsUseCase, Arc<Mutex<Vec<String>>>) {
    let requests = server.requests.clone();
    let http: Arc<dyn HttpClientPort> = Arc::new(server);
    let catalog = Maldonado2010Catalog::new(
        http.clone(),
        &CatalogConfig {
            url: CATALOG_URL.to_string(),
            ..CatalogConfig::default()
        },
    );
    let resolver = SimbadResolver::new(
        http,
        &SimbadConfig {
            tap_url: TAP_URL.to_string(),
        },
    );
    (
        YouthIndicatorsUseCase::new(Box::new(resolver), Box::new(catalog)),
        requests,
    )
}

fn target(identifier: &str) -> TargetQuery {
    TargetQuery::new(45.0, -60.0, Some(identifier.to_string()))
}

#[tokio::test]
async fn test_hip_identifier_goes_straight_to_catalog() {
    let (use_case, requests) = wire(FixtureServer::new(
        (200, catalog_body()),
        (200, tap_body("HIP 1")),
    ));

    let results = use_case.run(&target("HIP 12345")).await;

    assert_eq!(
        results.ewli,
        vec![LookupResult {
            value: 150.2,
            error: Some(10.5),
            source: "Maldonado+2010".to_string(),
            group: "Tuc-Hor".to_string(),
            membership: "bona-fide".to_string(),
            bibcode: "2010A&A...521A..12M".to_string(),
        }]
    );
    assert_eq!(*requests.lock().await, vec![format!("GET {}", CATALOG_URL)]);
}

#[tokio::test]
async fn test_named_target_resolves_through_simbad() {
    let (use_case, requests) = wire(FixtureServer::new(
        (200, catalog_body()),
        (200, tap_body("HIP 12345")),
    ));

    let results = use_case.run(&target("HD 987")).await;

    assert_eq!(results.ewli.len(), 1);
    assert_eq!(results.ewli[0].group, "Tuc-Hor");
    assert_eq!(
        *requests.lock().await,
        vec![format!("POST {}", TAP_URL), format!("GET {}", CATALOG_URL)]
    );
}

#[tokio::test]
async fn test_results_serialize_with_empty_vizier_categories() {
    let (use_case, _) = wire(FixtureServer::new(
        (200, catalog_body()),
        (200, tap_body("HIP 1")),
    ));

    let results = use_case.run(&target("hip12345")).await;
    let value: Value = serde_json::to_value(&results).unwrap();

    assert_eq!(value["ewli"][0]["source"], "Maldonado+2010");
    assert_eq!(value["ewli"][0]["bibcode"], "2010A&A...521A..12M");
    assert_eq!(value["prot"], json!([]));
    assert_eq!(value["rhk"], json!([]));
    assert_eq!(value["lx"], json!([]));
}

#[tokio::test]
async fn test_null_measurement_and_unknown_hip_are_absent() {
    for identifier in ["HIP 22222", "HIP 99999"] {
        let (use_case, _) = wire(FixtureServer::new(
            (200, catalog_body()),
            (200, tap_body("HIP 1")),
        ));
        assert!(use_case.run(&target(identifier)).await.is_empty());
    }
}

#[tokio::test]
async fn test_failed_catalog_fetch_degrades_to_empty() {
    let (use_case, _) = wire(FixtureServer::new(
        (503, "Service Unavailable".to_string()),
        (200, tap_body("HIP 12345")),
    ));
    assert!(use_case.run(&target("HD 987")).await.is_empty());
}

#[tokio::test]
async fn test_failed_tap_query_skips_catalog() {
    let (use_case, requests) = wire(FixtureServer::new(
        (200, catalog_body()),
        (500, "ERROR".to_string()),
    ));

    assert!(use_case.run(&target("HD 987")).await.is_empty());
    assert_eq!(*requests.lock().await, vec![format!("POST {}", TAP_URL)]);
}

#[tokio::test]
async fn test_components_report_failures_to_direct_callers() {
    let server = Arc::new(FixtureServer::new(
        (404, "Not Found".to_string()),
        (502, "Bad Gateway".to_string()),
    ));
    let http: Arc<dyn HttpClientPort> = server;

    let catalog = Maldonado2010Catalog::new(
        http.clone(),
        &CatalogConfig {
            url: CATALOG_URL.to_string(),
            ..CatalogConfig::default()
        },
    );
    let resolver = SimbadResolver::new(
        http,
        &SimbadConfig {
            tap_url: TAP_URL.to_string(),
        },
    );

    assert!(catalog.lookup(12345).await.is_err());
    assert!(resolver.resolve("HD 987").await.is_err());
}
