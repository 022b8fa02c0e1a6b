use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use youth_indicators::app::ports::{CatalogLookupPort, HttpClientPort, IdentifierResolverPort};
use youth_indicators::common::constants::DEFAULT_CONFIG_PATH;
use youth_indicators::config::Config;
use youth_indicators::infra::ReqwestHttp;
use youth_indicators::observability::{init_logging, metrics};
use youth_indicators::{Maldonado2010Catalog, SimbadResolver, TargetQuery, YouthIndicatorsUseCase};

#[derive(Parser)]
#[command(name = "youth_indicators")]
#[command(about = "Stellar youth indicators from Maldonado+2010 and SIMBAD")]
#[command(version)]
struct Cli {
    /// TOML configuration file (missing file means defaults)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Also write JSON logs to a daily-rolling file in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Print Prometheus metrics after the command finishes
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the EW Li measurement for a HIP number
    Lookup {
        #[arg(long)]
        hip: u32,
    },
    /// Resolve any SIMBAD identifier to its HIP number
    Resolve {
        identifier: String,
    },
    /// Collect youth indicators for a target
    Aggregate {
        /// Right ascension in degrees
        #[arg(long, allow_hyphen_values = true)]
        ra: f64,
        /// Declination in degrees
        #[arg(long, allow_hyphen_values = true)]
        dec: f64,
        #[arg(long)]
        identifier: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_dir.as_deref());

    let metrics_handle = if cli.metrics {
        Some(metrics::init().context("installing metrics recorder")?)
    } else {
        None
    };

    let config = Config::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    let http: Arc<dyn HttpClientPort> = Arc::new(ReqwestHttp::new(&config.http)?);
    let catalog = Maldonado2010Catalog::new(http.clone(), &config.catalog);
    let resolver = SimbadResolver::new(http, &config.simbad);

    match cli.command {
        Commands::Lookup { hip } => match catalog.lookup(hip).await {
            Ok(Some(result)) => println!("{}", serde_json::to_string_pretty(&result)?),
            Ok(None) => println!("No EW Li measurement for HIP {}", hip),
            Err(e) => return Err(e).context(format!("looking up HIP {}", hip)),
        },
        Commands::Resolve { identifier } => match resolver.resolve(&identifier).await {
            Ok(Some(hip)) => println!("HIP {}", hip),
            Ok(None) => println!("No HIP identifier for '{}'", identifier),
            Err(e) => return Err(e).context(format!("resolving '{}'", identifier)),
        },
        Commands::Aggregate { ra, dec, identifier } => {
            let use_case = YouthIndicatorsUseCase::new(Box::new(resolver), Box::new(catalog));
            let results = use_case.run(&TargetQuery::new(ra, dec, identifier)).await;
            println!("{}", serde_json::to_string_pretty(&results)?);
            for entry in &results.ewli {
                eprintln!("EW Li: {}", entry);
            }
        }
    }

    if let Some(handle) = metrics_handle {
        println!("{}", handle.render());
    }

    Ok(())
}
