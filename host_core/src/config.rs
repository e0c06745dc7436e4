use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HostError, HostResult};

pub const DEFAULT_API_SERVER: &str = "http://localhost:8080/api";

/// Same as the plain endpoint. Kept as a separate constant so it can diverge.
pub const DEFAULT_SECURE_API_SERVER: &str = DEFAULT_API_SERVER;

/// Host slot names. File keys use the same spelling.
pub const API_SERVER_SLOT: &str = "apiServer";
pub const SECURE_API_SERVER_SLOT: &str = "secureApiServer";

/// Endpoint configuration injected into the host bridge at startup.
///
/// Both fields are optional; unset (or empty) values resolve to the defaults above.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_server: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_api_server: Option<String>,
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

impl HostConfig {
    pub fn api_server(&self) -> &str {
        non_empty(&self.api_server).unwrap_or(DEFAULT_API_SERVER)
    }

    pub fn secure_api_server(&self) -> &str {
        non_empty(&self.secure_api_server).unwrap_or(DEFAULT_SECURE_API_SERVER)
    }

    /// Read both slots from a host source. Missing slots stay unset.
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        Self {
            api_server: source.lookup(API_SERVER_SLOT),
            secure_api_server: source.lookup(SECURE_API_SERVER_SLOT),
        }
    }

    pub fn from_toml_str(s: &str) -> HostResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Missing file -> defaults. Unreadable or malformed file -> error.
    pub fn load_or_default(path: impl AsRef<Path>) -> HostResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => toml::from_str::<Self>(&s)
                .map_err(|e| HostError::Config(format!("parse {}: {}", path.display(), e))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!(target: "Config", "{} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(HostError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Layer `other` on top of `self`: set, non-empty fields of `other` win.
    pub fn overlay(self, other: HostConfig) -> Self {
        Self {
            api_server: pick(other.api_server, self.api_server),
            secure_api_server: pick(other.secure_api_server, self.secure_api_server),
        }
    }
}

fn pick(top: Option<String>, base: Option<String>) -> Option<String> {
    match top {
        Some(s) if !s.is_empty() => Some(s),
        _ => base,
    }
}

/// Where a host keeps its configuration slots.
pub trait ConfigSource {
    fn lookup(&self, slot: &str) -> Option<String>;
}

/// In-memory slots. Handy for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    slots: BTreeMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(slot, value);
        self
    }

    pub fn set(&mut self, slot: impl Into<String>, value: impl Into<String>) {
        self.slots.insert(slot.into(), value.into());
    }
}

impl ConfigSource for MapSource {
    fn lookup(&self, slot: &str) -> Option<String> {
        self.slots.get(slot).cloned()
    }
}

/// Process environment. `apiServer` with prefix `HOSTGLUE_` reads `HOSTGLUE_API_SERVER`.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn var_name(&self, slot: &str) -> String {
        let mut out = self.prefix.clone();
        for (i, c) in slot.chars().enumerate() {
            if c.is_ascii_uppercase() && i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_uppercase());
        }
        out
    }
}

impl ConfigSource for EnvSource {
    fn lookup(&self, slot: &str) -> Option<String> {
        std::env::var(self.var_name(slot)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn unset_falls_back_to_default() {
        let cfg = HostConfig::default();
        assert_eq!(cfg.api_server(), "http://localhost:8080/api");
        assert_eq!(cfg.secure_api_server(), "http://localhost:8080/api");
    }

    #[test]
    fn set_value_is_returned() {
        let cfg = HostConfig {
            api_server: Some("https://x".into()),
            secure_api_server: None,
        };
        assert_eq!(cfg.api_server(), "https://x");
        assert_eq!(cfg.secure_api_server(), DEFAULT_SECURE_API_SERVER);
    }

    #[test]
    fn slots_are_independent() {
        let cfg = HostConfig::from_source(&MapSource::new().with(SECURE_API_SERVER_SLOT, "https://s"));
        assert_eq!(cfg.api_server(), DEFAULT_API_SERVER);
        assert_eq!(cfg.secure_api_server(), "https://s");
    }

    #[test]
    fn empty_string_counts_as_unset() {
        let cfg = HostConfig::from_source(
            &MapSource::new()
                .with(API_SERVER_SLOT, "")
                .with(SECURE_API_SERVER_SLOT, ""),
        );
        assert_eq!(cfg.api_server(), DEFAULT_API_SERVER);
        assert_eq!(cfg.secure_api_server(), DEFAULT_SECURE_API_SERVER);
    }

    #[test]
    fn toml_uses_slot_spelling() {
        let cfg = HostConfig::from_toml_str(
            r#"
            apiServer = "https://api.example"
            secureApiServer = "https://secure.example"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.api_server(), "https://api.example");
        assert_eq!(cfg.secure_api_server(), "https://secure.example");
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(HostConfig::from_toml_str("").unwrap(), HostConfig::default());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = HostConfig::from_toml_str("apiServer = [").unwrap_err();
        assert!(matches!(err, HostError::Config(_)));
    }

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = HostConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, HostConfig::default());
    }

    #[test]
    fn file_is_loaded() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "apiServer = \"https://from-file\"").unwrap();
        let cfg = HostConfig::load_or_default(f.path()).unwrap();
        assert_eq!(cfg.api_server(), "https://from-file");
        assert_eq!(cfg.secure_api_server(), DEFAULT_SECURE_API_SERVER);
    }

    #[test]
    fn malformed_file_reports_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "apiServer = ").unwrap();
        match HostConfig::load_or_default(f.path()) {
            Err(HostError::Config(msg)) => assert!(msg.contains(&f.path().display().to_string())),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn malformed_file_error_has_single_prefix() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "apiServer = [").unwrap();
        let msg = HostConfig::load_or_default(f.path()).unwrap_err().to_string();
        assert!(msg.starts_with("config error: parse "), "{msg}");
        assert_eq!(msg.matches("config error:").count(), 1, "{msg}");
    }

    /// A host whose slots hold nothing usable, like a browser global set to a number.
    struct NoStrings;

    impl ConfigSource for NoStrings {
        fn lookup(&self, _slot: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn unusable_host_values_fall_back_like_empty_ones() {
        let cfg = HostConfig::from_source(&NoStrings);
        assert_eq!(cfg, HostConfig::default());
        assert_eq!(cfg.api_server(), DEFAULT_API_SERVER);
        assert_eq!(cfg.secure_api_server(), DEFAULT_SECURE_API_SERVER);

        let empty = HostConfig::from_source(
            &MapSource::new()
                .with(API_SERVER_SLOT, "")
                .with(SECURE_API_SERVER_SLOT, ""),
        );
        assert_eq!(empty.api_server(), cfg.api_server());
        assert_eq!(empty.secure_api_server(), cfg.secure_api_server());
    }

    #[test]
    fn overlay_prefers_set_values() {
        let base = HostConfig {
            api_server: Some("https://base".into()),
            secure_api_server: Some("https://base-secure".into()),
        };
        let top = HostConfig {
            api_server: Some("https://top".into()),
            secure_api_server: Some(String::new()),
        };
        let cfg = base.overlay(top);
        assert_eq!(cfg.api_server(), "https://top");
        assert_eq!(cfg.secure_api_server(), "https://base-secure");
    }

    #[test]
    fn env_var_names() {
        let env = EnvSource::new("HOSTGLUE_");
        assert_eq!(env.var_name(API_SERVER_SLOT), "HOSTGLUE_API_SERVER");
        assert_eq!(env.var_name(SECURE_API_SERVER_SLOT), "HOSTGLUE_SECURE_API_SERVER");
    }

    #[test]
    fn env_source_reads_process_environment() {
        // Unique prefix so parallel tests don't collide.
        let env = EnvSource::new("HOSTGLUE_CFGTEST_");
        std::env::set_var("HOSTGLUE_CFGTEST_API_SERVER", "https://env");
        let cfg = HostConfig::from_source(&env);
        std::env::remove_var("HOSTGLUE_CFGTEST_API_SERVER");

        assert_eq!(cfg.api_server(), "https://env");
        assert_eq!(cfg.secure_api_server(), DEFAULT_SECURE_API_SERVER);
    }
}
