//! Translation resolution module.
//!
//! Resolves keyed strings from the environment with a fallback default,
//! caches each result and dumps the cache to
//! `{cwd}/github-mcp-server-config.json` on request.

mod config;
mod lookup;
mod resolver;
mod store;
mod translator;

pub use config::{ResolverConfig, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use lookup::{EnvLookup, LookupFn, ProcessEnv};
pub use resolver::Resolver;
pub use store::{TranslationMap, TranslationsError, TranslationsResult};
pub use translator::{NullTranslator, Translate};
