use anyhow::{anyhow, Context};
use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
    str::FromStr,
    time::Duration,
};

const DEFAULT_PORT: u16 = 3002;
const DEFAULT_SESSION_TTL: u64 = 12 * 60 * 60;
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub listen_addr: SocketAddr,
    pub session_ttl: Duration,
    /// Upper bound for a whole request, including its database round trips.
    pub request_timeout: Duration,
    /// Upper bound for connecting to the database and for acquiring a pooled connection.
    pub connect_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = required(&lookup, "DATABASE_URL")?;
        let jwt_secret = required(&lookup, "JWT_SECRET")?;

        let listen_addr = parse(
            &lookup,
            "LISTEN_ADDR",
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        )?;

        let session_ttl = seconds(&lookup, "SESSION_TTL_SECS", DEFAULT_SESSION_TTL)?;
        let request_timeout = seconds(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT)?;
        let connect_timeout = seconds(
            &lookup,
            "DATABASE_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT,
        )?;

        Ok(Self {
            database_url,
            jwt_secret,
            listen_addr,
            session_ttl,
            request_timeout,
            connect_timeout,
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(anyhow!("{name} is not set")),
    }
}

fn parse<F, T>(lookup: &F, name: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} is invalid")),
        None => Ok(default),
    }
}

fn seconds<F>(lookup: &F, name: &str, default: u64) -> anyhow::Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let secs: u64 = parse(lookup, name, default)?;

    if secs == 0 {
        return Err(anyhow!("{name} must be greater than zero"));
    }

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();

        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[("DATABASE_URL", "sqlite::memory:"), ("JWT_SECRET", "secret")])
            .unwrap();

        assert_eq!(config.listen_addr.port(), DEFAULT_PORT);
        assert_eq!(config.session_ttl, Duration::from_secs(DEFAULT_SESSION_TTL));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn missing_secret() {
        let err = config(&[("DATABASE_URL", "sqlite::memory:")]).unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn blank_database_url_is_missing() {
        let err = config(&[("DATABASE_URL", "  "), ("JWT_SECRET", "secret")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/rating"),
            ("JWT_SECRET", "secret"),
            ("LISTEN_ADDR", "127.0.0.1:8080"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = config(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
            ("REQUEST_TIMEOUT_SECS", "0"),
        ])
        .unwrap_err();

        assert!(err.to_string().contains("REQUEST_TIMEOUT_SECS"));
    }

    #[test]
    fn garbage_is_reported_with_the_variable_name() {
        let err = config(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
            ("SESSION_TTL_SECS", "soon"),
        ])
        .unwrap_err();

        assert!(err.to_string().contains("SESSION_TTL_SECS"));
    }
}
