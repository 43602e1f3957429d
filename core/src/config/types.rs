use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub ml: MlConfig,

    #[serde(default)]
    pub recommend: RecommendConfig,

    #[serde(default)]
    pub http_server: HttpServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "llmmatch_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    false
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}

/// Where the model catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file in the knowledge-base format. Unset means the builtin catalog.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlConfig {
    #[serde(default = "default_ml_enabled")]
    pub enabled: bool,

    /// Persisted classifier. Resolved under the data directory when unset.
    #[serde(default)]
    pub artifact_path: Option<String>,

    /// Train at startup when the artifact is missing or stale.
    #[serde(default = "default_train_if_missing")]
    pub train_if_missing: bool,

    #[serde(default = "default_samples")]
    pub samples: usize,

    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
}

fn default_ml_enabled() -> bool {
    true
}

fn default_train_if_missing() -> bool {
    true
}

fn default_samples() -> usize {
    2000
}

fn default_seed() -> u64 {
    42
}

fn default_max_depth() -> usize {
    16
}

fn default_min_samples_split() -> usize {
    2
}

impl Default for MlConfig {
    fn default() -> Self {
        Self {
            enabled: default_ml_enabled(),
            artifact_path: None,
            train_if_missing: default_train_if_missing(),
            samples: default_samples(),
            seed: default_seed(),
            max_depth: default_max_depth(),
            min_samples_split: default_min_samples_split(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Cap on alternatives returned after the top pick.
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,
}

fn default_max_alternatives() -> usize {
    3
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_alternatives: default_max_alternatives(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_http_host")]
    pub host: String,

    #[serde(default = "default_http_port")]
    pub port: u16,
}

fn default_http_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    8080
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_http_host(),
            port: default_http_port(),
        }
    }
}
