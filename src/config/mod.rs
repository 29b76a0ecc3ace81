use std::env;
use std::fmt;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the assessment library.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentConfig,
    pub enrichment: EnrichmentConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let required_documents = env::var("REQUIRED_DOCUMENT_TYPES")
            .map(|raw| {
                raw.split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(|_| AssessmentConfig::default_required_documents());

        let citizen_nationality =
            env::var("CITIZEN_NATIONALITY").unwrap_or_else(|_| "UAE".to_string());

        let enrichment_enabled = match env::var("ENRICHMENT_ENABLED") {
            Ok(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool {
                var: "ENRICHMENT_ENABLED",
            })?,
            Err(_) => true,
        };
        let call_timeout = parse_millis("ENRICHMENT_TIMEOUT_MS", 20_000)?;
        let retry_backoff = parse_millis("ENRICHMENT_BACKOFF_MS", 1_000)?;
        let max_attempts = match env::var("ENRICHMENT_MAX_ATTEMPTS") {
            Ok(raw) => raw.trim().parse::<u8>().map_err(|_| ConfigError::InvalidNumber {
                var: "ENRICHMENT_MAX_ATTEMPTS",
            })?,
            Err(_) => 3,
        };
        if max_attempts == 0 {
            return Err(ConfigError::InvalidNumber {
                var: "ENRICHMENT_MAX_ATTEMPTS",
            });
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            assessment: AssessmentConfig {
                required_documents,
                citizen_nationality,
            },
            enrichment: EnrichmentConfig {
                enabled: enrichment_enabled,
                call_timeout,
                max_attempts,
                retry_backoff,
            },
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_millis(var: &'static str, default_ms: u64) -> Result<Duration, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidNumber { var }),
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Process-wide assessment settings shared by every pipeline run.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    /// Document types every application must submit before scoring starts.
    pub required_documents: Vec<String>,
    /// Nationality string granted the citizen priority bonus.
    pub citizen_nationality: String,
}

impl AssessmentConfig {
    pub fn default_required_documents() -> Vec<String> {
        vec![
            "emirates_id".to_string(),
            "bank_statement".to_string(),
            "utility_bill".to_string(),
        ]
    }
}

/// Knobs for the external enrichment collaborator calls.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    pub enabled: bool,
    pub call_timeout: Duration,
    pub max_attempts: u8,
    pub retry_backoff: Duration,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            call_timeout: Duration::from_secs(20),
            max_attempts: 3,
            retry_backoff: Duration::from_secs(1),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBool { var: &'static str },
    InvalidNumber { var: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBool { var } => {
                write!(f, "{} must be a boolean (true/false/1/0)", var)
            }
            ConfigError::InvalidNumber { var } => {
                write!(f, "{} must be a positive integer", var)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("REQUIRED_DOCUMENT_TYPES");
        env::remove_var("CITIZEN_NATIONALITY");
        env::remove_var("ENRICHMENT_ENABLED");
        env::remove_var("ENRICHMENT_TIMEOUT_MS");
        env::remove_var("ENRICHMENT_BACKOFF_MS");
        env::remove_var("ENRICHMENT_MAX_ATTEMPTS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(
            config.assessment.required_documents,
            vec!["emirates_id", "bank_statement", "utility_bill"]
        );
        assert_eq!(config.assessment.citizen_nationality, "UAE");
        assert!(config.enrichment.enabled);
        assert_eq!(config.enrichment.max_attempts, 3);
        assert_eq!(config.enrichment.retry_backoff, Duration::from_secs(1));
    }

    #[test]
    fn parses_required_document_override() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("REQUIRED_DOCUMENT_TYPES", "emirates_id, salary_certificate");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.assessment.required_documents,
            vec!["emirates_id", "salary_certificate"]
        );
        reset_env();
    }

    #[test]
    fn parses_citizen_nationality_override() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CITIZEN_NATIONALITY", "QA");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.assessment.citizen_nationality, "QA");
        reset_env();
    }

    #[test]
    fn rejects_zero_enrichment_attempts() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ENRICHMENT_MAX_ATTEMPTS", "0");
        let err = AppConfig::load().expect_err("zero attempts rejected");
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
        reset_env();
    }

    #[test]
    fn rejects_malformed_enrichment_flag() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ENRICHMENT_ENABLED", "maybe");
        let err = AppConfig::load().expect_err("malformed bool rejected");
        assert!(matches!(err, ConfigError::InvalidBool { .. }));
        reset_env();
    }
}
