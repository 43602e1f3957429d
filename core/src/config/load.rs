use std::path::{Path, PathBuf};

use anyhow::Context;

use super::types::AppConfig;

/// Get the default llmmatch data directory: ~/.llmmatch
pub fn get_llmmatch_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".llmmatch"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    load(None)
}

/// Load configuration, preferring an explicit file over the default search.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut cfg = load_with_data_dir(explicit, get_llmmatch_data_dir().ok())?;
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    Ok(cfg)
}

/// Without a home directory the user config is skipped and unset paths fall
/// back to the temp dir, so an explicit file never needs HOME.
fn load_with_data_dir(
    explicit: Option<&Path>,
    data_dir: Option<PathBuf>,
) -> anyhow::Result<AppConfig> {
    let mut cfg = if let Some(path) = explicit {
        load_from_path(path)?
    } else {
        // Priority 1: ~/.llmmatch/config.toml (highest)
        let user_config = data_dir.as_ref().map(|d| d.join("config.toml"));
        // Priority 2: ./config.toml (current directory)
        let local_config = Path::new("config.toml");

        match user_config.filter(|p| p.exists()) {
            Some(user_config) => load_from_path(&user_config)?,
            None if local_config.exists() => load_from_path(local_config)?,
            None => AppConfig::default(),
        }
    };

    let data_dir = data_dir.unwrap_or_else(|| std::env::temp_dir().join("llmmatch"));
    resolve_paths(&mut cfg, &data_dir);
    Ok(cfg)
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let file = || path.display().to_string();
    let s = std::fs::read_to_string(path).with_context(file)?;
    toml::from_str::<AppConfig>(&s).with_context(file)
}

/// Fill data-directory defaults for paths the config left unset.
pub fn resolve_paths(cfg: &mut AppConfig, data_dir: &Path) {
    if is_blank(cfg.ml.artifact_path.as_deref()) {
        cfg.ml.artifact_path = Some(
            data_dir
                .join("models")
                .join("confirmation.json")
                .to_string_lossy()
                .to_string(),
        );
    }

    if is_blank(cfg.logging.directory.as_deref()) {
        cfg.logging.directory = Some(data_dir.join("logs").to_string_lossy().to_string());
    }
}

/// Environment variable overrides (Priority 0: highest).
pub fn apply_env_overrides(cfg: &mut AppConfig, var: impl Fn(&str) -> Option<String>) {
    let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("LLMMATCH_CATALOG_PATH") {
        cfg.catalog.path = Some(v);
    }
    if let Some(v) = non_empty("LLMMATCH_ML_ARTIFACT") {
        cfg.ml.artifact_path = Some(v);
    }
    if let Some(v) = non_empty("LLMMATCH_HTTP_HOST") {
        cfg.http_server.host = v;
    }
    if let Some(v) = non_empty("LLMMATCH_HTTP_PORT") {
        match v.trim().parse::<u16>() {
            Ok(port) => cfg.http_server.port = port,
            Err(_) => tracing::warn!("ignoring LLMMATCH_HTTP_PORT={v}: not a port number"),
        }
    }
}

fn is_blank(s: Option<&str>) -> bool {
    s.map(|s| s.trim().is_empty()).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[catalog]\npath = \"/srv/models.json\"").unwrap();
        let cfg = load_from_path(file.path()).unwrap();
        assert_eq!(cfg.catalog.path.as_deref(), Some("/srv/models.json"));
    }

    #[test]
    fn test_load_from_path_reports_file_on_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ml\nenabled = ").unwrap();
        let err = load_from_path(file.path()).unwrap_err().to_string();
        assert!(err.contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_load_explicit_missing_file_names_the_file() {
        let err = load(Some(Path::new("/nonexistent/llmmatch.toml"))).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("/nonexistent/llmmatch.toml"), "{msg}");
    }

    #[test]
    fn test_explicit_config_loads_without_home_dir() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http_server]\nport = 9001").unwrap();

        let cfg = load_with_data_dir(Some(file.path()), None).unwrap();
        assert_eq!(cfg.http_server.port, 9001);
        let fallback = std::env::temp_dir().join("llmmatch").join("logs");
        let fallback = fallback.to_string_lossy().to_string();
        assert_eq!(cfg.logging.directory.as_deref(), Some(fallback.as_str()));
    }

    #[test]
    fn test_data_dir_fills_paths_for_explicit_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ml]\nenabled = false").unwrap();

        let data_dir = PathBuf::from("/home/u/.llmmatch");
        let cfg = load_with_data_dir(Some(file.path()), Some(data_dir)).unwrap();
        assert!(!cfg.ml.enabled);
        assert_eq!(
            cfg.ml.artifact_path.as_deref(),
            Some("/home/u/.llmmatch/models/confirmation.json")
        );
    }

    #[test]
    fn test_resolve_paths_only_fills_blanks() {
        let mut cfg = AppConfig::default();
        cfg.logging.directory = Some("  ".into());
        resolve_paths(&mut cfg, Path::new("/home/u/.llmmatch"));
        assert_eq!(
            cfg.ml.artifact_path.as_deref(),
            Some("/home/u/.llmmatch/models/confirmation.json")
        );
        assert_eq!(
            cfg.logging.directory.as_deref(),
            Some("/home/u/.llmmatch/logs")
        );

        let mut cfg = AppConfig::default();
        cfg.ml.artifact_path = Some("/tmp/tree.json".into());
        resolve_paths(&mut cfg, Path::new("/x"));
        assert_eq!(cfg.ml.artifact_path.as_deref(), Some("/tmp/tree.json"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("LLMMATCH_CATALOG_PATH", "/data/kb.json"),
            ("LLMMATCH_ML_ARTIFACT", ""),
            ("LLMMATCH_HTTP_PORT", "9191"),
        ]);
        let mut cfg = AppConfig::default();
        cfg.ml.artifact_path = Some("/keep.json".into());
        apply_env_overrides(&mut cfg, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.catalog.path.as_deref(), Some("/data/kb.json"));
        assert_eq!(cfg.ml.artifact_path.as_deref(), Some("/keep.json"));
        assert_eq!(cfg.http_server.port, 9191);
        assert_eq!(cfg.http_server.host, "127.0.0.1");
    }

    #[test]
    fn test_env_override_ignores_bad_port() {
        let mut cfg = AppConfig::default();
        apply_env_overrides(&mut cfg, |k| {
            (k == "LLMMATCH_HTTP_PORT").then(|| "not-a-port".to_string())
        });
        assert_eq!(cfg.http_server.port, 8080);
    }
}
