//! Caching resolver for translation strings.

use std::path::{Path, PathBuf};

use super::config::ResolverConfig;
use super::lookup::{EnvLookup, ProcessEnv};
use super::store::{TranslationMap, TranslationsError, TranslationsResult};

/// Resolves translation keys and remembers every answer.
///
/// Lookup order on the first request for a key:
/// 1. the environment variable `<prefix><key>` (set-but-empty counts as set)
/// 2. operator overrides loaded with [`Resolver::load_overrides`]
/// 3. the caller's default
///
/// Whatever wins is cached; later calls for the same key return the cached
/// value without consulting the environment again.
///
/// The resolver is not synchronized. Hosts sharing one between threads must
/// wrap it in their own lock.
#[derive(Debug)]
pub struct Resolver<L = ProcessEnv> {
    config: ResolverConfig,
    lookup: L,
    overrides: TranslationMap,
    cache: TranslationMap,
}

impl Resolver<ProcessEnv> {
    /// Resolver over the process environment with default settings.
    pub fn new() -> Self {
        Self::with_lookup(ProcessEnv)
    }
}

impl Default for Resolver<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: EnvLookup> Resolver<L> {
    /// Resolver over `lookup` with default settings.
    pub fn with_lookup(lookup: L) -> Self {
        Self::with_config(ResolverConfig::default(), lookup)
    }

    /// Resolver with a custom prefix or dump path.
    pub fn with_config(config: ResolverConfig, lookup: L) -> Self {
        Self {
            config,
            lookup,
            overrides: TranslationMap::new(),
            cache: TranslationMap::new(),
        }
    }

    /// Use `overrides` for keys the environment does not set.
    pub fn with_overrides(mut self, overrides: TranslationMap) -> Self {
        self.overrides = overrides;
        self
    }

    /// Load overrides from a file written by a previous [`Resolver::persist`].
    ///
    /// A missing file leaves the overrides empty. Returns the number of
    /// override entries loaded.
    pub fn load_overrides(&mut self, path: &Path) -> TranslationsResult<usize> {
        match TranslationMap::load_from(path) {
            Ok(map) => {
                tracing::debug!(
                    "Loaded {} translation overrides from {}",
                    map.len(),
                    path.display()
                );
                self.overrides = map;
                Ok(self.overrides.len())
            }
            Err(TranslationsError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!("No translation overrides at {}", path.display());
                Ok(0)
            }
            Err(e) => Err(e),
        }
    }

    /// Return the effective value for `key`, falling back to `default`.
    pub fn resolve(&mut self, key: &str, default: &str) -> String {
        if let Some(cached) = self.cache.get(key) {
            return cached.to_string();
        }

        let env_name = self.config.env_name(key);
        let value = if let Some(value) = self.lookup.lookup(&env_name) {
            tracing::trace!("Translation {} taken from {}", key, env_name);
            value
        } else if let Some(value) = self.overrides.get(key) {
            tracing::trace!("Translation {} taken from overrides", key);
            value.to_string()
        } else {
            tracing::trace!("Translation {} using default", key);
            default.to_string()
        };

        self.cache.insert(key, value.clone());
        value
    }

    /// Cached value for `key`, without resolving it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cache.get(key)
    }

    /// Everything resolved so far.
    pub fn translations(&self) -> &TranslationMap {
        &self.cache
    }

    /// Number of keys resolved so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether nothing has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get the resolver settings.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Dump every resolved key to the configured path (by default
    /// `github-mcp-server-config.json` in the working directory).
    ///
    /// The file is rewritten from scratch. Errors are returned, not retried.
    pub fn persist(&self) -> TranslationsResult<PathBuf> {
        let path = self.config.dump_path.clone();
        self.persist_to(&path)?;
        Ok(path)
    }

    /// Same as [`Resolver::persist`] but to an explicit path.
    pub fn persist_to(&self, path: &Path) -> TranslationsResult<()> {
        self.cache.write_to(path)?;
        tracing::debug!(
            "Saved {} translations to {}",
            self.cache.len(),
            path.display()
        );
        Ok(())
    }
}
