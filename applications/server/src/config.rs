/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use storyboard_core::NewUser;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_seed")]
    pub seed: SeedSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedSettings {
    #[serde(default = "default_seed_users")]
    pub users: Vec<SeedUser>,
}

/// One fixture entry for the dummy-data seeder
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedUser {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub story_count: i64,
}

impl From<&SeedUser> for NewUser {
    fn from(fixture: &SeedUser) -> Self {
        Self {
            id: fixture.id.clone(),
            name: fixture.name.clone(),
            story_count: fixture.story_count,
            last_story: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with STORYBOARD_)
        settings = settings.add_source(
            config::Environment::with_prefix("STORYBOARD")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.is_empty() {
            return Err(ServerError::Config(
                "Database URL is required (set STORYBOARD_STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for fixture in &self.seed.users {
            if !seen.insert(fixture.id.as_str()) {
                return Err(ServerError::Config(format!(
                    "Duplicate fixture id: {}",
                    fixture.id
                )));
            }
        }

        Ok(())
    }

    /// The fixture list as validated creation records
    pub fn fixtures(&self) -> Vec<NewUser> {
        self.seed.users.iter().map(NewUser::from).collect()
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9443
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/storyboard.db".to_string()
}

fn default_seed() -> SeedSettings {
    SeedSettings {
        users: default_seed_users(),
    }
}

fn default_seed_users() -> Vec<SeedUser> {
    vec![
        SeedUser {
            id: "LOLJK".to_string(),
            name: "dal".to_string(),
            story_count: 5,
        },
        SeedUser {
            id: "BIGMAN".to_string(),
            name: "steve".to_string(),
            story_count: 4,
        },
        SeedUser {
            id: "ICE422".to_string(),
            name: "jaina".to_string(),
            story_count: 0,
        },
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            seed: default_seed(),
        }
    }
}
