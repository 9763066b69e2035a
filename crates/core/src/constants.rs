//! Constants used throughout the catalog core crate.

/// Environment variable: treat dangling cross-references as errors.
pub const STRICT_REFERENCES_ENV: &str = "CATALOG_STRICT_REFERENCES";

/// Environment variable: report entries without a Spanish display name.
pub const REQUIRE_TRANSLATIONS_ENV: &str = "CATALOG_REQUIRE_TRANSLATIONS";

/// Default `tracing` directive used by the runner when `RUST_LOG` does not override it.
pub const DEFAULT_LOG_DIRECTIVE: &str = "catalog=info";

/// Number of depth tiers every published entry must carry.
pub const LEVEL_COUNT: usize = 5;

/// Field path used in schema violations that concern the level ladder.
pub const LEVELS_FIELD: &str = "levels";
