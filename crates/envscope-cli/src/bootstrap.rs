//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where concrete providers are chosen:
//! - Environment: the native host (via envscope-runtime) or a captured snapshot
//! - Geolocation: the ipinfo.io client (via envscope-ipinfo)
//!
//! Handlers receive the composed ports and never construct adapters.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use envscope_core::ports::{EnvironmentPort, GeoLookupPort};
use envscope_ipinfo::{DefaultIpInfoClient, IpInfoConfig};
use envscope_runtime::{HostEnvironment, SnapshotEnvironment};

use crate::commands::ReportArgs;
use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Snapshot to read instead of probing the host.
    pub snapshot: Option<PathBuf>,
    /// Geolocation client settings.
    pub ipinfo: IpInfoConfig,
}

impl CliConfig {
    /// Derive the configuration from `report` arguments.
    pub fn from_report_args(args: &ReportArgs) -> Result<Self, CliError> {
        let mut ipinfo = IpInfoConfig::new()
            .with_optional_token(args.token.clone())
            .with_user_agent(concat!("envscope/", env!("CARGO_PKG_VERSION")));

        if let Some(endpoint) = args.endpoint.as_deref().filter(|e| !e.trim().is_empty()) {
            ipinfo = ipinfo.with_endpoint(endpoint);
        }
        match args.timeout {
            Some(0) => {
                return Err(CliError::Arguments(
                    "--timeout must be at least 1 second".to_string(),
                ));
            }
            Some(secs) => ipinfo = ipinfo.with_timeout(Duration::from_secs(secs)),
            None => {}
        }

        Ok(Self {
            snapshot: args.snapshot.clone(),
            ipinfo,
        })
    }
}

/// Composed ports for command handlers.
pub struct CliContext {
    /// Capability source the probes read.
    pub env: Arc<dyn EnvironmentPort>,
    /// Geolocation lookup.
    pub lookup: Arc<dyn GeoLookupPort>,
}

/// Bootstrap the CLI application.
///
/// Loads the snapshot when one is configured, otherwise probes the host,
/// and builds the geolocation client.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let env: Arc<dyn EnvironmentPort> = match &config.snapshot {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading environment snapshot");
            Arc::new(SnapshotEnvironment::from_path(path)?)
        }
        None => Arc::new(HostEnvironment::new()),
    };

    let lookup: Arc<dyn GeoLookupPort> = Arc::new(DefaultIpInfoClient::new(&config.ipinfo)?);

    Ok(CliContext { env, lookup })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::OutputFormat;

    fn report_args() -> ReportArgs {
        ReportArgs {
            snapshot: None,
            format: OutputFormat::Table,
            slots: Vec::new(),
            placeholder: "取得中...".to_string(),
            token: None,
            endpoint: None,
            timeout: None,
        }
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let args = ReportArgs {
            timeout: Some(0),
            ..report_args()
        };
        let err = CliConfig::from_report_args(&args).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_bootstrap_with_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.json");
        std::fs::write(&path, r#"{"userAgent": "Mozilla/5.0 (X11; Linux x86_64)"}"#).unwrap();

        let args = ReportArgs {
            snapshot: Some(path),
            ..report_args()
        };
        let ctx = bootstrap(CliConfig::from_report_args(&args).unwrap()).unwrap();
        assert_eq!(ctx.env.user_agent(), "Mozilla/5.0 (X11; Linux x86_64)");
    }

    #[test]
    fn test_bootstrap_rejects_invalid_endpoint() {
        let args = ReportArgs {
            endpoint: Some("not a url".to_string()),
            ..report_args()
        };
        let err = bootstrap(CliConfig::from_report_args(&args).unwrap())
            .err()
            .unwrap();
        assert_eq!(err.exit_code(), 78);
    }
}
