use std::env;
use std::fmt;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: i64,
}

/// Salt mixed into every stored credential. Changing it invalidates all
/// existing passwords.
#[derive(Deserialize, Clone)]
pub struct PasswordConfig {
    pub salt: String,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

impl fmt::Debug for PasswordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordConfig")
            .field("salt", &"<redacted>")
            .finish()
    }
}

fn default_expiration_hours() -> i64 {
    auth::DEFAULT_TOKEN_TTL_HOURS
}

impl JwtConfig {
    /// Session token lifetime.
    ///
    /// # Errors
    /// * `ConfigError::Message` - `expiration_hours` is not positive or does
    ///   not fit a duration
    pub fn token_ttl(&self) -> Result<chrono::Duration, ConfigError> {
        chrono::Duration::try_hours(self.expiration_hours)
            .filter(|ttl| *ttl > chrono::Duration::zero())
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "jwt.expiration_hours must be a positive number of hours, got {}",
                    self.expiration_hours
                ))
            })
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, PASSWORD__SALT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(Self::environment())
    }

    /// Unprefixed variables, `__` between nesting levels:
    /// DATABASE__URL=postgres://... overrides database.url
    fn environment() -> Environment {
        Environment::default().separator("__")
    }

    fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config: Config = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.jwt.token_ttl()?;

        Ok(config)
    }
}
