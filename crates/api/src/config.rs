use sqlx::postgres::PgConnectOptions;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Store
/// credentials are not validated here: a missing value surfaces as a
/// connection failure, which is logged rather than fatal.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A single `*` entry allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Store connection options.
    pub database: PgConnectOptions,
    /// Maximum pooled store connections (default: `20`).
    pub db_max_connections: u32,
}

/// Database name used when the connection is built from parts.
const DEFAULT_DB_NAME: &str = "image_filter";

/// Individual store connection settings, used when `DATABASE_URL` is absent.
#[derive(Debug, Default, Clone)]
pub struct DatabaseParts {
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub name: Option<String>,
}

impl DatabaseParts {
    /// Build connection options from the parts.
    ///
    /// Values are handed to the driver as-is, so credentials containing
    /// URL-reserved characters (`@`, `/`, `:`) need no escaping. Unset parts
    /// keep the driver's defaults (including `PG*` environment variables).
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .database(self.name.as_deref().unwrap_or(DEFAULT_DB_NAME));

        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(host) = &self.host {
            options = options.host(host);
        }
        if let Some(port) = self.port {
            options = options.port(port);
        }

        options
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default          |
    /// |------------------------|------------------|
    /// | `HOST`                 | `0.0.0.0`        |
    /// | `PORT`                 | `4000`           |
    /// | `CORS_ORIGINS`         | `*`              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`             |
    /// | `DATABASE_URL`         | built from parts |
    /// | `DB_MAX_CONNECTIONS`   | `20`             |
    ///
    /// Without `DATABASE_URL`, the connection is built from `DB_USER`,
    /// `DB_PASSWORD`, `DB_HOST`, `DB_PORT` and `DB_NAME` (default
    /// `image_filter`).
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database = match std::env::var("DATABASE_URL") {
            Ok(url) => url
                .parse::<PgConnectOptions>()
                .expect("DATABASE_URL must be a valid connection string"),
            Err(_) => DatabaseParts {
                user: env_non_empty("DB_USER"),
                password: env_non_empty("DB_PASSWORD"),
                host: env_non_empty("DB_HOST"),
                port: env_non_empty("DB_PORT")
                    .map(|p| p.parse().expect("DB_PORT must be a valid u16")),
                name: env_non_empty("DB_NAME"),
            }
            .connect_options(),
        };

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database,
            db_max_connections,
        }
    }

    /// Whether any origin may make cross-origin requests.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Read an env var, treating an empty value as unset.
fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
