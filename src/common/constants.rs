//! Remote locations and fixed labels shared across the crate.

// Maldonado et al. 2010 EW Li table, published as a static JSON document
pub const MALDONADO2010_URL: &str =
    "https://raw.githubusercontent.com/msoaresfurtado/chronostar/main/data/maldonado2010_ewli.json";
pub const MALDONADO2010_SOURCE: &str = "Maldonado+2010";

// SIMBAD table access protocol, synchronous endpoint
pub const SIMBAD_TAP_URL: &str = "https://simbad.cds.unistra.fr/simbad/sim-tap/sync";

// Form fields of a TAP sync request
pub const TAP_REQUEST: &str = "doQuery";
pub const TAP_LANG: &str = "ADQL";
pub const TAP_FORMAT: &str = "json";

// Environment overrides applied on top of the config file
pub const ENV_CATALOG_URL: &str = "YOUTH_CATALOG_URL";
pub const ENV_SIMBAD_TAP_URL: &str = "YOUTH_SIMBAD_TAP_URL";
pub const ENV_HTTP_TIMEOUT_SECONDS: &str = "YOUTH_HTTP_TIMEOUT_SECONDS";

pub const DEFAULT_CONFIG_PATH: &str = "youth_indicators.toml";

/// User agent sent with every request unless configured otherwise
pub fn default_user_agent() -> String {
    format!("youth_indicators/{}", env!("CARGO_PKG_VERSION"))
}
