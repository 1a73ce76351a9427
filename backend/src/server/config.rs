//! Server settings loaded via OrthoConfig.
//!
//! Values are layered from CLI flags, `ROSTER_*` environment variables and
//! an optional configuration file.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use roster::outbound::persistence::DEFAULT_MAX_CONNECTIONS;

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED),
    8080,
);

/// Configuration values controlling the HTTP server and its storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL URL. Without one the server keeps employees in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Leave the schema alone at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the database URL, treating a blank value as absent.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "ROSTER_BIND_ADDR",
        "ROSTER_DATABASE_URL",
        "ROSTER_DB_MAX_CONNECTIONS",
        "ROSTER_SKIP_MIGRATIONS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("roster")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(settings.bind_addr().to_string(), "0.0.0.0:8080");
        assert!(settings.database_url().is_none());
        assert_eq!(settings.db_max_connections(), DEFAULT_MAX_CONNECTIONS);
        assert!(!settings.skip_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ROSTER_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "ROSTER_DATABASE_URL",
                Some("postgres://roster@localhost/roster".to_owned()),
            ),
            ("ROSTER_DB_MAX_CONNECTIONS", Some("4".to_owned())),
            ("ROSTER_SKIP_MIGRATIONS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(
            settings.database_url(),
            Some("postgres://roster@localhost/roster")
        );
        assert_eq!(settings.db_max_connections(), 4);
        assert!(settings.skip_migrations);
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env([
            ("ROSTER_BIND_ADDR", None),
            ("ROSTER_DATABASE_URL", Some("  ".to_owned())),
            ("ROSTER_DB_MAX_CONNECTIONS", None),
            ("ROSTER_SKIP_MIGRATIONS", None),
        ]);

        assert!(load_from_empty_args().database_url().is_none());
    }
}
