//! The `Translate` seam handed to code that registers tools and prompts.

use std::path::PathBuf;

use super::lookup::EnvLookup;
use super::resolver::Resolver;
use super::store::TranslationsResult;

/// Anything that can turn a key and a default into the string to display.
pub trait Translate {
    fn translate(&mut self, key: &str, default: &str) -> String;

    /// Save whatever was resolved, returning the file written if any.
    ///
    /// Hosts call this at shutdown regardless of which translator is active.
    fn persist(&self) -> TranslationsResult<Option<PathBuf>> {
        Ok(None)
    }
}

impl<L: EnvLookup> Translate for Resolver<L> {
    fn translate(&mut self, key: &str, default: &str) -> String {
        self.resolve(key, default)
    }

    fn persist(&self) -> TranslationsResult<Option<PathBuf>> {
        Resolver::persist(self).map(Some)
    }
}

/// Translator that ignores keys and always returns the default.
///
/// Used when the host runs without translation overrides. Nothing is cached
/// and `persist` is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTranslator;

impl Translate for NullTranslator {
    fn translate(&mut self, _key: &str, default: &str) -> String {
        default.to_string()
    }
}

impl<F> Translate for F
where
    F: FnMut(&str, &str) -> String,
{
    fn translate(&mut self, key: &str, default: &str) -> String {
        self(key, default)
    }
}
