//! # Subpiece Disk Cache

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::{Download, Downloader};

use crate::{SUBPIECE_CACHE_CONFIG, path_utils};

/// Options for [`SubpieceDiskCache`].
#[derive(Clone, Default, Debug)]
pub struct SubpieceDiskCacheOptions {
    /// Optional path to the cache directory.
    pub cache_dir: Option<PathBuf>,

    /// Optional [`Downloader`] builder.
    pub downloader: Option<fn() -> Downloader>,
}

impl SubpieceDiskCacheOptions {
    /// Set the cache directory.
    pub fn with_cache_dir<P: AsRef<Path>>(
        mut self,
        cache_dir: Option<P>,
    ) -> Self {
        self.cache_dir = cache_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the downloader builder.
    pub fn with_downloader(
        mut self,
        downloader: Option<fn() -> Downloader>,
    ) -> Self {
        self.downloader = downloader;
        self
    }
}

/// Disk cache for downloaded vocabulary files.
///
/// Leverages [`Downloader`] for downloading files,
/// and [`PathResolver`](`crate::PathResolver`) for resolving a cache path
/// appropriate for a user/system combo, and any environment overrides.
pub struct SubpieceDiskCache {
    /// Cache directory.
    cache_dir: PathBuf,

    /// Connection pool for downloading files.
    downloader: Downloader,
}

impl Default for SubpieceDiskCache {
    fn default() -> Self {
        Self::new(SubpieceDiskCacheOptions::default()).unwrap()
    }
}

impl SubpieceDiskCache {
    /// Construct a new [`SubpieceDiskCache`].
    pub fn new(options: SubpieceDiskCacheOptions) -> anyhow::Result<Self> {
        let cache_dir = SUBPIECE_CACHE_CONFIG
            .resolve_cache_dir(options.cache_dir)
            .context("failed to resolve cache directory")?;

        let downloader = match options.downloader {
            Some(builder) => builder(),
            None => Downloader::builder().build()?,
        };

        Ok(Self {
            cache_dir,
            downloader,
        })
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the downloader.
    pub fn downloader(&self) -> &Downloader {
        &self.downloader
    }

    /// Get the cache path for the given key.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    ///
    /// # Arguments
    /// * `context` - prefix dirs, inserted between `self.cache_dir` and `file`.
    /// * `file` - the final file name.
    pub fn cache_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        path_utils::extend_path(&self.cache_dir, context, file)
    }

    /// Loads a cached file from a specified path or downloads it if it does not exist.
    ///
    /// # Arguments
    /// * `context`: A slice of `C` containing path-related context used in determining the
    ///   cache location. These paths are combined to build the cached file's location.
    /// * `urls`: A slice of string references specifying the URLs to download the file from
    ///   if it is not already cached.
    /// * `download`: A boolean flag indicating whether to attempt downloading the file
    ///   from the provided URLs if it does not already exist in the cache.
    ///
    /// # Returns
    /// * Returns a [`PathBuf`] pointing to the cached file if it exists or is successfully downloaded.
    /// * Returns an error if the file is not found in the cache and downloading is not allowed
    ///   or fails.
    ///
    /// # Errors
    /// * Returns an error if the cached file does not exist and `download` is `false`.
    /// * Returns an error if the downloading process fails.
    pub fn load_cached_path<C, S>(
        &mut self,
        context: &[C],
        urls: &[S],
        download: bool,
    ) -> anyhow::Result<PathBuf>
    where
        C: AsRef<Path>,
        S: AsRef<str>,
    {
        let urls: Vec<_> = urls.iter().map(|s| s.as_ref()).collect();
        let mut dl = Download::new_mirrored(&urls);
        let file_name = dl.file_name.clone();
        let path = self.cache_path(context, &file_name);
        dl.file_name = path.clone();

        if path.exists() {
            return Ok(path);
        }

        if !download {
            anyhow::bail!("cached file not found: {}", path.display());
        }

        let parent = path
            .parent()
            .with_context(|| format!("cache path has no parent: {}", path.display()))?;
        fs::create_dir_all(parent)?;

        self.downloader.download(&[dl])?;

        Ok(path)
    }
}
