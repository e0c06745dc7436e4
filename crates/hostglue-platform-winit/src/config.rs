use std::path::Path;

use hostglue_core::{ConfigSource, EnvSource, HostConfig, HostResult};

pub const ENV_PREFIX: &str = "HOSTGLUE_";
pub const DEFAULT_CONFIG_FILE: &str = "hostglue.toml";

/// Desktop config: `path` (may be absent), then `HOSTGLUE_*` environment variables on top.
pub fn load_native_config(path: impl AsRef<Path>) -> HostResult<HostConfig> {
    load_layered(path.as_ref(), &EnvSource::new(ENV_PREFIX))
}

fn load_layered(path: &Path, overrides: &dyn ConfigSource) -> HostResult<HostConfig> {
    let file = HostConfig::load_or_default(path)?;
    let cfg = file.overlay(HostConfig::from_source(overrides));
    log::info!(
        target: "Config",
        "{}: api={} secure={}",
        path.display(),
        cfg.api_server(),
        cfg.secure_api_server()
    );
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostglue_core::config::{API_SERVER_SLOT, DEFAULT_API_SERVER, SECURE_API_SERVER_SLOT};
    use hostglue_core::MapSource;
    use std::io::Write;

    #[test]
    fn no_file_no_overrides_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_layered(&dir.path().join(DEFAULT_CONFIG_FILE), &MapSource::new()).unwrap();
        assert_eq!(cfg.api_server(), DEFAULT_API_SERVER);
        assert_eq!(cfg.secure_api_server(), DEFAULT_API_SERVER);
    }

    #[test]
    fn overrides_beat_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "apiServer = \"https://file\"").unwrap();
        writeln!(f, "secureApiServer = \"https://file-secure\"").unwrap();

        let env = MapSource::new().with(API_SERVER_SLOT, "https://env");
        let cfg = load_layered(f.path(), &env).unwrap();
        assert_eq!(cfg.api_server(), "https://env");
        assert_eq!(cfg.secure_api_server(), "https://file-secure");
    }

    #[test]
    fn empty_override_keeps_file_value() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "secureApiServer = \"https://file-secure\"").unwrap();

        let env = MapSource::new().with(SECURE_API_SERVER_SLOT, "");
        let cfg = load_layered(f.path(), &env).unwrap();
        assert_eq!(cfg.secure_api_server(), "https://file-secure");
    }

    #[test]
    fn broken_file_is_an_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "apiServer = [").unwrap();
        assert!(load_layered(f.path(), &MapSource::new()).is_err());
    }
}
