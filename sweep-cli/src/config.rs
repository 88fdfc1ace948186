//! Configuration module
//!
//! Handles CLI configuration: where jobs come from and which role is acting.

use std::path::PathBuf;

use sweep_client::{JobSource, SweepClient};
use sweep_core::role::Role;

use crate::file_source::FileSource;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the job store API
    pub api_url: String,

    /// Local JSON job file; takes precedence over the API when set
    pub jobs_file: Option<PathBuf>,

    /// Role of the person running the command
    pub role: Role,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.jobs_file.is_some() {
            return Ok(());
        }

        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        Ok(())
    }

    /// Build the job source this configuration points at
    pub fn source(&self) -> Box<dyn JobSource> {
        match &self.jobs_file {
            Some(path) => {
                tracing::debug!("Using job file {}", path.display());
                Box::new(FileSource::new(path.clone()))
            }
            None => {
                tracing::debug!("Using job store at {}", self.api_url);
                Box::new(SweepClient::new(self.api_url.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_url: &str, jobs_file: Option<&str>) -> Config {
        Config {
            api_url: api_url.to_string(),
            jobs_file: jobs_file.map(PathBuf::from),
            role: Role::Manager,
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(config("http://localhost:8080", None).validate().is_ok());
        assert!(config("https://jobs.example.com", None).validate().is_ok());
        assert!(config("", None).validate().is_err());
        assert!(config("localhost:8080", None).validate().is_err());
    }

    #[test]
    fn test_file_skips_url_check() {
        assert!(config("not-a-url", Some("jobs.json")).validate().is_ok());
    }
}
