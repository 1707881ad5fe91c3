//! Resolver configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix prepended to a key to form the environment variable name.
pub const ENV_PREFIX: &str = "GITHUB_MCP_";

/// File the resolved map is dumped to, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "github-mcp-server-config.json";

/// Settings shared by every resolution of one resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Prefix for environment variable names (`GITHUB_MCP_` by default).
    #[serde(default = "default_env_prefix")]
    pub env_prefix: String,
    /// Where `persist()` writes. Relative paths are resolved against the
    /// working directory at the time of the write.
    #[serde(default = "default_dump_path")]
    pub dump_path: PathBuf,
}

fn default_env_prefix() -> String {
    ENV_PREFIX.to_string()
}

fn default_dump_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            env_prefix: default_env_prefix(),
            dump_path: default_dump_path(),
        }
    }
}

impl ResolverConfig {
    /// Replace the environment variable prefix.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Replace the path `persist()` writes to.
    pub fn with_dump_path(mut self, path: impl AsRef<Path>) -> Self {
        self.dump_path = path.as_ref().to_path_buf();
        self
    }

    /// Environment variable consulted for `key`. The key is used verbatim.
    pub fn env_name(&self, key: &str) -> String {
        format!("{}{}", self.env_prefix, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.env_prefix, "GITHUB_MCP_");
        assert_eq!(config.dump_path, PathBuf::from("github-mcp-server-config.json"));
    }

    #[test]
    fn test_env_name_keeps_key_case() {
        let config = ResolverConfig::default();
        assert_eq!(config.env_name("TEST_KEY"), "GITHUB_MCP_TEST_KEY");
        assert_eq!(config.env_name("tool_title"), "GITHUB_MCP_tool_title");

        let custom = config.with_env_prefix("ACME_");
        assert_eq!(custom.env_name("X"), "ACME_X");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ResolverConfig = serde_json::from_str(r#"{"env_prefix": "MY_"}"#).unwrap();
        assert_eq!(config.env_prefix, "MY_");
        assert_eq!(config.dump_path, PathBuf::from(DEFAULT_CONFIG_FILE));
    }
}
