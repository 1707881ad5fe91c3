//! Sources of override values.
//!
//! The resolver never reads `std::env` directly; it asks an [`EnvLookup`].
//! Production code uses [`ProcessEnv`], tests hand in a fixed map.

use std::collections::{BTreeMap, HashMap};

/// Looks up an environment-style variable by its full name.
///
/// `Some` means the variable is set, including when its value is empty.
pub trait EnvLookup {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        let value = std::env::var_os(name)?;
        match value.into_string() {
            Ok(s) => Some(s),
            Err(raw) => {
                tracing::warn!("{} is not valid unicode, using lossy conversion", name);
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }
}

impl EnvLookup for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvLookup for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

/// Adapts a closure into an [`EnvLookup`].
#[derive(Debug, Clone, Copy)]
pub struct LookupFn<F>(pub F);

impl<F> EnvLookup for LookupFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, name: &str) -> Option<String> {
        (self.0)(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_lookup() {
        let mut env = HashMap::new();
        env.insert("GITHUB_MCP_A".to_string(), "a".to_string());
        env.insert("GITHUB_MCP_EMPTY".to_string(), String::new());

        assert_eq!(env.lookup("GITHUB_MCP_A").as_deref(), Some("a"));
        // Set-but-empty is still present
        assert_eq!(env.lookup("GITHUB_MCP_EMPTY").as_deref(), Some(""));
        assert_eq!(env.lookup("GITHUB_MCP_MISSING"), None);
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = LookupFn(|name: &str| {
            if name == "GITHUB_MCP_X" {
                Some("x".to_string())
            } else {
                None
            }
        });
        assert_eq!(lookup.lookup("GITHUB_MCP_X").as_deref(), Some("x"));
        assert_eq!(lookup.lookup("GITHUB_MCP_Y"), None);
    }

    #[test]
    fn test_process_env_missing() {
        assert_eq!(
            ProcessEnv.lookup("GITHUB_MCP_LOOKUP_TEST_SURELY_NOT_SET"),
            None
        );
    }
}
