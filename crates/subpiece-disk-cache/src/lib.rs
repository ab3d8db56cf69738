//! # subpiece-disk-cache
#![warn(missing_docs)]

pub mod disk_cache;
pub mod path_resolver;
pub mod path_utils;

pub use disk_cache::{SubpieceDiskCache, SubpieceDiskCacheOptions};
pub use path_resolver::PathResolver;

/// Environment variable key to override the default cache directory.
pub const SUBPIECE_CACHE_DIR: &str = "SUBPIECE_CACHE_DIR";

/// Default [`PathResolver`] for subpiece.
pub const SUBPIECE_CACHE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.subpiece",
    organization: "",
    application: "subpiece",
    cache_env_vars: &[SUBPIECE_CACHE_DIR],
};
