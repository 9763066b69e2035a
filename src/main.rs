use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_content::Catalog;
use catalog_core::{
    CatalogConfig, ValidationPolicy,
    constants::{DEFAULT_LOG_DIRECTIVE, REQUIRE_TRANSLATIONS_ENV, STRICT_REFERENCES_ENV},
    validate_corpus,
};

/// Build-step entry point for the catalog
///
/// Composes every collection, runs the corpus validation pass and fails if it finds an error.
/// Warnings are logged and do not fail the run.
///
/// # Environment Variables
/// - `CATALOG_STRICT_REFERENCES`: dangling cross-references become errors (default: false)
/// - `CATALOG_REQUIRE_TRANSLATIONS`: report entries without a Spanish name (default: false)
/// - `RUST_LOG`: log filter, added to the default `catalog=info`
///
/// # Returns
/// * `Ok(())` - If the catalog loads and validation finds no errors
/// * `Err(anyhow::Error)` - On a malformed entry, a bad configuration value or a validation error
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CatalogConfig::from_env_values(
        std::env::var(STRICT_REFERENCES_ENV).ok(),
        std::env::var(REQUIRE_TRANSLATIONS_ENV).ok(),
    )?;
    tracing::info!(
        strict_references = config.strict_references(),
        require_translations = config.require_translations(),
        "++ Loading catalog"
    );

    let catalog = Catalog::load()?;
    let corpus = catalog.corpus();
    for collection in corpus.collections() {
        tracing::info!("{}: {} entries", collection.name(), collection.entry_count());
    }

    let report = validate_corpus(corpus, &ValidationPolicy::from(&config));
    for issue in report.warnings() {
        tracing::warn!("{issue}");
    }
    for issue in report.errors() {
        tracing::error!("{issue}");
    }

    let report = report.into_result()?;
    tracing::info!(
        "++ Catalog valid: {} entries, {} cross-references, {} warnings",
        corpus.total_count(),
        corpus.cross_references().edge_count(),
        report.warning_count()
    );

    Ok(())
}
