use std::env;
use anyhow::{bail, Context, Result};

/// Spanner connection coordinates
///
/// Present only when the database-backed routes should be served; when the
/// Spanner variables are absent the service runs in its static-only variant.
#[derive(Debug, Clone)]
pub struct SpannerConfig {
    pub emulator_host: Option<String>,
    pub project: String,
    pub instance: String,
    pub database: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub spanner: Option<SpannerConfig>,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let project = env::var("SPANNER_PROJECT").ok();
        let instance = env::var("SPANNER_INSTANCE").ok();
        let database = env::var("SPANNER_DATABASE").ok();

        let spanner = match (project, instance, database) {
            (Some(project), Some(instance), Some(database)) => Some(SpannerConfig {
                emulator_host: env::var("SPANNER_EMULATOR_HOST").ok(),
                project,
                instance,
                database,
            }),
            (None, None, None) => None,
            _ => bail!(
                "SPANNER_PROJECT, SPANNER_INSTANCE and SPANNER_DATABASE must be set together \
                 (set all three to enable the database-backed routes, or none to disable them)"
            ),
        };

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            spanner,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        match &self.spanner {
            Some(spanner) => {
                tracing::info!("  Spanner emulator: {}",
                    spanner.emulator_host.as_deref().unwrap_or("disabled (using production)"));
                tracing::info!("  Spanner project: {}", spanner.project);
                tracing::info!("  Spanner instance: {}", spanner.instance);
                tracing::info!("  Spanner database: {}", spanner.database);
            }
            None => {
                tracing::info!("  Spanner: not configured (serving static routes only)");
            }
        }
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    // The tests below mutate process-wide environment variables, so they
    // must not interleave with each other under the parallel test runner.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            env::remove_var("SPANNER_EMULATOR_HOST");
            env::remove_var("SPANNER_PROJECT");
            env::remove_var("SPANNER_INSTANCE");
            env::remove_var("SPANNER_DATABASE");
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
        }
        guard
    }

    fn set_spanner_vars() {
        unsafe {
            env::set_var("SPANNER_PROJECT", "test-project");
            env::set_var("SPANNER_INSTANCE", "test-instance");
            env::set_var("SPANNER_DATABASE", "test-database");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = clear_env_vars();
        set_spanner_vars();
        unsafe {
            env::set_var("SPANNER_EMULATOR_HOST", "localhost:9010");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();

        let spanner = config.spanner.expect("spanner should be configured");
        assert_eq!(spanner.emulator_host, Some("localhost:9010".to_string()));
        assert_eq!(spanner.project, "test-project");
        assert_eq!(spanner.instance, "test-instance");
        assert_eq!(spanner.database, "test-database");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = clear_env_vars();
        set_spanner_vars();

        let config = Config::from_env().unwrap();

        let spanner = config.spanner.expect("spanner should be configured");
        assert_eq!(spanner.emulator_host, None);
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
    }

    #[test]
    fn test_config_without_spanner() {
        let _guard = clear_env_vars();

        let config = Config::from_env().unwrap();

        assert!(config.spanner.is_none());
        assert_eq!(config.service_port, 3000);
    }

    #[test]
    fn test_partial_spanner_vars_rejected() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("SPANNER_PROJECT", "test-project");
            env::set_var("SPANNER_INSTANCE", "test-instance");
        }
        // Missing SPANNER_DATABASE

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("must be set together"));
    }

    #[test]
    fn test_invalid_port() {
        let _guard = clear_env_vars();
        set_spanner_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = clear_env_vars();
        set_spanner_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());
    }
}
