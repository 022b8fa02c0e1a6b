pub mod apis;
pub mod common;
pub mod config;
pub mod domain;
pub mod error;
pub mod identifiers;
pub mod observability;

// Layered boundaries for application and infrastructure
pub mod app;
pub mod infra;

pub use apis::{Maldonado2010Catalog, SimbadResolver};
pub use app::youth_indicators_use_case::YouthIndicatorsUseCase;
pub use domain::{AggregateResults, IndicatorCategory, LookupResult, TargetQuery};
pub use error::{IndicatorError, Result};
