mod load;
mod types;

pub use load::{
    apply_env_overrides, get_llmmatch_data_dir, load, load_default, load_from_path, resolve_paths,
};
pub use types::{
    AppConfig, CatalogConfig, HttpServerConfig, LoggingConfig, MlConfig, RecommendConfig,
};
