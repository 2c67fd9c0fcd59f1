//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

/// How long feedback stays on screen before the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTiming {
    /// Whether the server advances to the next question by itself.
    pub auto_advance: bool,
    /// Delay after a capital was submitted.
    pub answer_delay: Duration,
    /// Delay after the wrong country was clicked.
    pub wrong_country_delay: Duration,
}

impl Default for FeedbackTiming {
    fn default() -> Self {
        Self {
            auto_advance: true,
            answer_delay: Duration::from_millis(2000),
            wrong_country_delay: Duration::from_millis(2500),
        }
    }
}

/// How long the server keeps games nobody is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Any game untouched for this long is dropped.
    pub idle_ttl: Duration,
    /// A finished game untouched for this long is dropped.
    pub finished_ttl: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(30 * 60),
            finished_ttl: Duration::from_secs(5 * 60),
        }
    }
}

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory for the JSON score log; in-memory when unset.
    pub data_dir: Option<PathBuf>,
    /// Feedback auto-advance settings.
    pub timing: FeedbackTiming,
    /// Expiry of hosted games.
    pub sessions: SessionLimits,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `GEOQUIZ_DATA_DIR`, `GEOQUIZ_AUTO_ADVANCE`,
    /// `GEOQUIZ_FEEDBACK_DELAY_MS`, `GEOQUIZ_WRONG_COUNTRY_DELAY_MS`,
    /// `GEOQUIZ_SESSION_IDLE_SECS` and `GEOQUIZ_FINISHED_SESSION_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = FeedbackTiming::default();
        let limits = SessionLimits::default();

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&lookup, "PORT")?.unwrap_or(3000);
        let data_dir = lookup("GEOQUIZ_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let auto_advance = parse_var(&lookup, "GEOQUIZ_AUTO_ADVANCE")?.unwrap_or(true);
        let answer_delay = parse_var(&lookup, "GEOQUIZ_FEEDBACK_DELAY_MS")?
            .map_or(defaults.answer_delay, Duration::from_millis);
        let wrong_country_delay = parse_var(&lookup, "GEOQUIZ_WRONG_COUNTRY_DELAY_MS")?
            .map_or(defaults.wrong_country_delay, Duration::from_millis);
        let idle_ttl = parse_var(&lookup, "GEOQUIZ_SESSION_IDLE_SECS")?
            .map_or(limits.idle_ttl, Duration::from_secs);
        let finished_ttl = parse_var(&lookup, "GEOQUIZ_FINISHED_SESSION_SECS")?
            .map_or(limits.finished_ttl, Duration::from_secs);

        Ok(Self {
            host,
            port,
            data_dir,
            timing: FeedbackTiming {
                auto_advance,
                answer_delay,
                wrong_country_delay,
            },
            sessions: SessionLimits {
                idle_ttl,
                finished_ttl,
            },
        })
    }

    /// Address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| AppError::Config(format!("{key} is invalid: {e}")))
        })
        .transpose()
}
