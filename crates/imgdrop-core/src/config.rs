//! Configuration module
//!
//! Everything is read from the environment (with `.env` support through `dotenvy`).
//! Target dimensions and JPEG quality are fixed constants and deliberately absent here.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::storage_types::StorageBackend;

const SERVER_PORT: u16 = 3000;
const UPLOAD_TIMEOUT_SECS: u64 = 30;
const MAX_UPLOAD_SIZE_MB: usize = 10;

/// Log output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: String,
    pub server_port: u16,
    pub log_format: LogFormat,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, etc.)
    pub aws_region: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    // Request handling
    pub upload_timeout_secs: u64,
    pub max_upload_size_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server_port: SERVER_PORT,
            log_format: LogFormat::Pretty,
            storage_backend: StorageBackend::S3,
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
            aws_region: None,
            local_storage_path: None,
            local_storage_base_url: None,
            upload_timeout_secs: UPLOAD_TIMEOUT_SECS,
            max_upload_size_bytes: MAX_UPLOAD_SIZE_MB * 1024 * 1024,
        }
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a numeric variable, falling back to `default` only when it is unset.
fn parse_or_default<T>(name: &str, value: Option<String>, default: T) -> Result<T, anyhow::Error>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{} has invalid value {:?}: {}", name, raw, e)),
        None => Ok(default),
    }
}

fn megabytes_to_bytes(mb: usize) -> Result<usize, anyhow::Error> {
    mb.checked_mul(1024 * 1024)
        .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB is too large: {}", mb))
}

impl Config {
    /// Load configuration from the environment and validate it.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let server_port = parse_or_default("SERVER_PORT", optional_var("SERVER_PORT"), SERVER_PORT)?;

        let log_format = env::var("LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();

        let storage_backend = match optional_var("STORAGE_BACKEND") {
            Some(value) => value.parse::<StorageBackend>()?,
            None => StorageBackend::S3,
        };

        let upload_timeout_secs = parse_or_default(
            "UPLOAD_TIMEOUT_SECS",
            optional_var("UPLOAD_TIMEOUT_SECS"),
            UPLOAD_TIMEOUT_SECS,
        )?;

        let max_upload_size_mb = parse_or_default(
            "MAX_UPLOAD_SIZE_MB",
            optional_var("MAX_UPLOAD_SIZE_MB"),
            MAX_UPLOAD_SIZE_MB,
        )?;
        let max_upload_size_bytes = megabytes_to_bytes(max_upload_size_mb)?;

        let config = Config {
            environment,
            server_port,
            log_format,
            storage_backend,
            s3_bucket: optional_var("S3_BUCKET"),
            s3_region: optional_var("S3_REGION"),
            s3_endpoint: optional_var("S3_ENDPOINT"),
            aws_region: optional_var("AWS_REGION"),
            local_storage_path: optional_var("LOCAL_STORAGE_PATH"),
            local_storage_base_url: optional_var("LOCAL_STORAGE_BASE_URL"),
            upload_timeout_secs,
            max_upload_size_bytes,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check that the selected storage backend has everything it needs.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_BUCKET is required when STORAGE_BACKEND=s3"
                    ));
                }
                if self.s3_region().is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION is required when STORAGE_BACKEND=s3"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() || self.local_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "STORAGE_BACKEND=local requires LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL"
                    ));
                }
            }
        }

        if self.upload_timeout_secs == 0 {
            return Err(anyhow::anyhow!("UPLOAD_TIMEOUT_SECS must be greater than 0"));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// S3 region, falling back to `AWS_REGION`.
    pub fn s3_region(&self) -> Option<&str> {
        self.s3_region
            .as_deref()
            .or(self.aws_region.as_deref())
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s3_config() -> Config {
        Config {
            s3_bucket: Some("normalized-images".to_string()),
            s3_region: Some("eu-west-1".to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_valid_s3_config() {
        assert!(s3_config().validate().is_ok());
    }

    #[test]
    fn test_s3_requires_bucket() {
        let config = Config {
            s3_bucket: None,
            ..s3_config()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("S3_BUCKET"));
    }

    #[test]
    fn test_s3_region_falls_back_to_aws_region() {
        let config = Config {
            s3_region: None,
            aws_region: Some("us-east-1".to_string()),
            ..s3_config()
        };
        assert_eq!(config.s3_region(), Some("us-east-1"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_local_requires_path_and_base_url() {
        let config = Config {
            storage_backend: StorageBackend::Local,
            local_storage_path: Some("/tmp/imgdrop".to_string()),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            local_storage_base_url: Some("http://localhost:3000/media".to_string()),
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config {
            upload_timeout_secs: 0,
            ..s3_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_production() {
        let mut config = s3_config();
        assert!(!config.is_production());
        config.environment = "PROD".to_string();
        assert!(config.is_production());
    }

    #[test]
    fn test_numeric_vars_default_only_when_unset() {
        assert_eq!(parse_or_default("UPLOAD_TIMEOUT_SECS", None, 30u64).unwrap(), 30);
        assert_eq!(
            parse_or_default("UPLOAD_TIMEOUT_SECS", Some("45".to_string()), 30u64).unwrap(),
            45
        );

        let err = parse_or_default("UPLOAD_TIMEOUT_SECS", Some("soon".to_string()), 30u64)
            .unwrap_err();
        assert!(err.to_string().contains("UPLOAD_TIMEOUT_SECS"));

        let err = parse_or_default("SERVER_PORT", Some("70000".to_string()), SERVER_PORT)
            .unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));

        assert!(parse_or_default("MAX_UPLOAD_SIZE_MB", Some("-1".to_string()), 10usize).is_err());
    }

    #[test]
    fn test_upload_size_overflow_is_an_error() {
        assert_eq!(megabytes_to_bytes(10).unwrap(), 10 * 1024 * 1024);
        let err = megabytes_to_bytes(usize::MAX / 2).unwrap_err();
        assert!(err.to_string().contains("MAX_UPLOAD_SIZE_MB"));
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }
}
