//! Runtime configuration and fixed constants.

use crate::error::{AzError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Azure Resource Manager endpoint, prefixed to every listing URL.
pub const ARM_ENDPOINT: &str = "https://management.azure.com";

pub const API_VERSION_RESOURCES: &str = "2021-04-01";
pub const API_VERSION_NETWORK: &str = "2018-10-01";
pub const API_VERSION_POSTGRES: &str = "2017-12-01";

pub const PUBLIC_IP_SENTINEL: &str = "Public IP not created";
pub const VM_SENTINEL: &str = "VM not assigned";

/// Upper bound on a single `az` response, guards against runaway output.
pub const MAX_OUTPUT_BYTES: usize = 5_000_000;

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// List NICs, public IPs and attached VMs across every resource group of a subscription.
#[derive(Parser, Debug, Clone)]
#[command(name = "azure-nic-inventory")]
#[command(version)]
pub struct Args {
    /// Subscription to enumerate
    #[arg(long, env = "AZURE_SUBSCRIPTION_ID")]
    pub subscription_id: Option<String>,

    /// Skip the PostgreSQL server listing
    #[arg(long)]
    pub skip_databases: bool,

    /// Also list generic resources of this type, e.g. Microsoft.Compute/virtualMachines
    #[arg(long = "resource-type", action = clap::ArgAction::Append)]
    pub resource_types: Vec<String>,

    /// log4rs YAML configuration file
    #[arg(long, env = "AZ_INVENTORY_LOG_CONFIG", default_value = DEFAULT_LOG_CONFIG)]
    pub log_config: PathBuf,
}

impl Args {
    /// The configured subscription id, trimmed. Missing or blank is an error.
    pub fn subscription_id(&self) -> Result<&str> {
        match self.subscription_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(AzError::Config(
                "subscription id is required (--subscription-id or AZURE_SUBSCRIPTION_ID)"
                    .to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_all_flags() {
        let args = Args::try_parse_from([
            "azure-nic-inventory",
            "--subscription-id",
            " 0000-1111 ",
            "--skip-databases",
            "--resource-type",
            "Microsoft.Compute/virtualMachines",
            "--resource-type",
            "Microsoft.Network/publicIPAddresses",
        ])
        .expect("args should parse");
        assert_eq!(args.subscription_id().unwrap(), "0000-1111");
        assert!(args.skip_databases);
        assert_eq!(args.resource_types.len(), 2);
        assert_eq!(args.log_config, PathBuf::from(DEFAULT_LOG_CONFIG));
    }

    #[test]
    fn test_blank_subscription_is_config_error() {
        let args = Args {
            subscription_id: Some("   ".to_string()),
            skip_databases: false,
            resource_types: vec![],
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        };
        let err = args.subscription_id().unwrap_err();
        assert!(matches!(err, AzError::Config(_)));
        assert!(err.is_fatal());
    }
}
