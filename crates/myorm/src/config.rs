//! Connection settings.

use crate::error::{OrmError, OrmResult};
use serde::Deserialize;
use std::path::Path;

/// Where and how to connect to the MySQL server.
///
/// A non-empty `socket` wins over `host`/`port`.
///
/// ```
/// use myorm::Config;
///
/// let config = Config::from_toml_str(r#"
///     name = "shop"
///     user = "app"
///     pass = "secret"
/// "#).unwrap();
/// assert_eq!(config.target(), "tcp(127.0.0.1:3306)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub socket: Option<String>,
    /// Database (schema) name.
    pub name: String,
    pub user: String,
    pub pass: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3306,
            socket: None,
            name: String::new(),
            user: String::new(),
            pass: String::new(),
        }
    }
}

impl Config {
    pub fn from_toml_str(raw: &str) -> OrmResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Read a TOML file.
    pub fn load(path: impl AsRef<Path>) -> OrmResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            OrmError::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Read `MYSQL_HOST`, `MYSQL_PORT`, `MYSQL_SOCKET`, `MYSQL_DATABASE`, `MYSQL_USER` and
    /// `MYSQL_PASSWORD`. Unset variables keep their defaults.
    pub fn from_env() -> OrmResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> OrmResult<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup("MYSQL_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("MYSQL_PORT") {
            config.port = port
                .parse()
                .map_err(|e| OrmError::Config(format!("invalid MYSQL_PORT '{port}': {e}")))?;
        }
        config.socket = lookup("MYSQL_SOCKET").filter(|s| !s.is_empty());
        if let Some(name) = lookup("MYSQL_DATABASE") {
            config.name = name;
        }
        if let Some(user) = lookup("MYSQL_USER") {
            config.user = user;
        }
        if let Some(pass) = lookup("MYSQL_PASSWORD") {
            config.pass = pass;
        }
        Ok(config)
    }

    fn socket(&self) -> Option<&str> {
        self.socket.as_deref().filter(|s| !s.is_empty())
    }

    /// `unix(<socket>)` or `tcp(<host>:<port>)`.
    pub fn target(&self) -> String {
        match self.socket() {
            Some(socket) => format!("unix({socket})"),
            None => format!("tcp({}:{})", self.host, self.port),
        }
    }

    /// Driver connection options.
    #[cfg(feature = "mysql")]
    pub fn to_opts(&self) -> mysql::Opts {
        let builder = mysql::OptsBuilder::new()
            .user(Some(self.user.as_str()))
            .pass(Some(self.pass.as_str()))
            .db_name(Some(self.name.as_str()).filter(|n| !n.is_empty()));
        let builder = match self.socket() {
            Some(socket) => builder.socket(Some(socket)),
            None => builder.ip_or_hostname(Some(self.host.as_str())).tcp_port(self.port),
        };
        builder.into()
    }
}
