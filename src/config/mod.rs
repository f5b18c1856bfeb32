use crate::errors::{AppError, AppResult};
use crate::routing::static_table::StaticRoutes;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingProvider {
    /// Live routing backend over HTTP.
    Http,
    /// Drive times from `static_routes`.
    Static,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    #[serde(default = "default_provider")]
    pub provider: RoutingProvider,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub static_routes: StaticRoutes,
}

fn default_provider() -> RoutingProvider {
    RoutingProvider::Http
}
fn default_endpoint() -> String {
    "http://localhost:8000/route".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            static_routes: StaticRoutes::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Catalog file; the built-in tables are used when absent.
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default)]
    pub routing: RoutingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            catalog: None,
            routing: RoutingConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tripoint")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tripoint")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tripoint.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("tripoint.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.as_deref().map(expand_tilde)
    }

    /// Sanity checks that do not require network access.
    pub fn check(&self) -> AppResult<()> {
        if self.database.trim().is_empty() {
            return Err(AppError::Config("database path is empty".into()));
        }

        if self.routing.timeout_secs == 0 {
            return Err(AppError::Config(
                "routing.timeout_secs must be at least 1".into(),
            ));
        }

        match self.routing.provider {
            RoutingProvider::Http => {
                reqwest::Url::parse(&self.routing.endpoint).map_err(|e| {
                    AppError::Config(format!(
                        "routing.endpoint '{}' is not a valid URL: {}",
                        self.routing.endpoint, e
                    ))
                })?;
            }
            RoutingProvider::Static => {
                if self.routing.static_routes.is_empty() {
                    return Err(AppError::Config(
                        "routing.provider is 'static' but routing.static_routes is empty".into(),
                    ));
                }
            }
        }

        if let Some(path) = self.catalog_path()
            && !path.exists()
        {
            return Err(AppError::Config(format!(
                "catalog file {} does not exist",
                path.display()
            )));
        }

        Ok(())
    }

    /// Write the configuration file (unless `is_test`) and create the
    /// database file. Returns the database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
