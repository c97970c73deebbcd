use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` and `JWT_SECRET` are required. `BIND_ADDRESS` defaults to
    /// `0.0.0.0:8080` and `BCRYPT_COST` to bcrypt's default cost.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - `BCRYPT_COST` is not a valid cost
    pub fn from_env() -> Result<Self, AppError> {
        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(value) => parse_bcrypt_cost(&value)?,
            Err(_) => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            bcrypt_cost,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// bcrypt accepts costs from 4 to 31 inclusive.
fn parse_bcrypt_cost(value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "BCRYPT_COST".to_string(),
        reason,
    };

    let cost = value
        .trim()
        .parse::<u32>()
        .map_err(|e| invalid(e.to_string()))?;

    if !(4..=31).contains(&cost) {
        return Err(invalid(format!("cost {} outside 4..=31", cost)));
    }

    Ok(cost)
}
