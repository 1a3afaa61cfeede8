use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: IpAddr,
    pub server_port: u16,
    pub environment: Environment,
    pub log_level: String,
    /// Allowed CORS origin in production
    pub frontend_url: String,
    /// File read by `GET /games/load`
    pub csv_path: PathBuf,
    /// Page size when the request has no `limit`
    pub default_page_limit: u64,
    /// Largest `limit` a request may ask for
    pub max_page_limit: u64,
}

/// Deployment environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `DATABASE_URL`
    /// Optional with defaults: `SERVER_HOST`, `SERVER_PORT`, `ENVIRONMENT`, `LOG_LEVEL`,
    /// `FRONTEND_URL`, `CSV_PATH`, `DEFAULT_PAGE_LIMIT`, `MAX_PAGE_LIMIT`
    ///
    /// `PORT` overrides `SERVER_PORT`, and host defaults to `0.0.0.0` in production.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is not set, if a numeric or address variable
    /// does not parse, or if the page limits are inconsistent.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let environment = match std::env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string())
            .as_str()
        {
            "production" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        };

        let server_port = std::env::var("PORT")
            .or_else(|_| std::env::var("SERVER_PORT"))
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("SERVER_PORT / PORT must be a valid u16"))?;

        let default_host = if environment == Environment::Production {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        let server_host = std::env::var("SERVER_HOST")
            .unwrap_or_else(|_| default_host.to_string())
            .parse::<IpAddr>()
            .map_err(|_| anyhow::anyhow!("SERVER_HOST must be a valid IP address"))?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());

        let csv_path = std::env::var("CSV_PATH")
            .map_or_else(|_| PathBuf::from("data/games.csv"), PathBuf::from);

        let default_page_limit = env_u64("DEFAULT_PAGE_LIMIT", 20)?;
        let max_page_limit = env_u64("MAX_PAGE_LIMIT", 100)?;
        validate_page_limits(default_page_limit, max_page_limit)?;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            environment,
            log_level,
            frontend_url,
            csv_path,
            default_page_limit,
            max_page_limit,
        })
    }

    /// Build the socket address for the server to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

fn env_u64(name: &str, default: u64) -> anyhow::Result<u64> {
    std::env::var(name).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<u64>()
            .map_err(|_| anyhow::anyhow!("{name} must be a non-negative integer"))
    })
}

fn validate_page_limits(default_limit: u64, max_limit: u64) -> anyhow::Result<()> {
    if default_limit == 0 || max_limit == 0 {
        anyhow::bail!("DEFAULT_PAGE_LIMIT and MAX_PAGE_LIMIT must be at least 1");
    }
    if default_limit > max_limit {
        anyhow::bail!("DEFAULT_PAGE_LIMIT ({default_limit}) exceeds MAX_PAGE_LIMIT ({max_limit})");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = Config {
            database_url: String::new(),
            server_host: IpAddr::from([127, 0, 0, 1]),
            server_port: 3000,
            environment: Environment::Development,
            log_level: "info".to_string(),
            frontend_url: String::new(),
            csv_path: PathBuf::from("data/games.csv"),
            default_page_limit: 20,
            max_page_limit: 100,
        };
        let addr = config.socket_addr();
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_page_limit_validation() {
        assert!(validate_page_limits(20, 100).is_ok());
        assert!(validate_page_limits(100, 100).is_ok());
        assert!(validate_page_limits(0, 100).is_err());
        assert!(validate_page_limits(20, 0).is_err());
        assert!(validate_page_limits(50, 10).is_err());
    }
}
