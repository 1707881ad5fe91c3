//! # GitHub MCP Translations
//!
//! Runtime lookup of user-facing strings (tool descriptions, titles, prompts)
//! for the GitHub MCP server.
//!
//! Every string is identified by a short key and comes with a default. An
//! operator can override any of them through an environment variable named
//! `GITHUB_MCP_<KEY>`. The first resolution of a key is cached for the rest of
//! the resolver's life, and on shutdown the resolved map can be dumped to
//! `github-mcp-server-config.json` so operators can see which keys exist.
//!
//! ```text
//!   resolve(key, default)
//!          │
//!          ▼
//!   ┌─────────────┐  hit   ┌──────────────┐
//!   │    cache    │───────▶│ cached value │
//!   └──────┬──────┘        └──────────────┘
//!          │ miss
//!          ▼
//!   GITHUB_MCP_<KEY>  ─▶  overrides file  ─▶  default
//!          │
//!          ▼
//!   persist() ─▶ github-mcp-server-config.json
//! ```
//!
//! ## Modules
//! - `translations`: resolver, lookup sources, persisted map

pub mod translations;

pub use translations::{
    EnvLookup, LookupFn, NullTranslator, ProcessEnv, Resolver, ResolverConfig, Translate,
    TranslationMap, TranslationsError, TranslationsResult, DEFAULT_CONFIG_FILE, ENV_PREFIX,
};
