//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::bootstrap::BootstrapCommand;
use crate::commands::{create, delete, get, list, sign_in, update};
use crate::connection::ConnectionArgs;

/// Key-manager CLI tool for REST API exploration.
#[derive(Parser, Debug)]
#[command(name = "kmgr")]
#[command(author, version = env!("KMGR_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and report the session
    SignIn(sign_in::SignInArgs),

    /// List the resources of a collection endpoint
    List(list::ListArgs),

    /// Fetch a resource, or a whole collection
    Get(get::GetArgs),

    /// Create a resource
    Create(create::CreateArgs),

    /// Update a resource
    Update(update::UpdateArgs),

    /// Delete a resource
    Delete(delete::DeleteArgs),

    /// Unauthenticated bootstrap endpoints
    Bootstrap(BootstrapCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use kmgr_core::{BaseUrl, HttpMethod};

    #[test]
    fn connection_flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "kmgr",
            "--address",
            "https://10.0.0.5",
            "--verify-tls",
            "--timeout-secs",
            "30",
            "list",
            "api/v1/vault/keys2",
        ])
        .unwrap();

        let config = cli.connection.config().unwrap();
        assert_eq!(config.base_url.host(), Some("10.0.0.5"));
        assert!(!config.accept_invalid_certs);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn empty_address_falls_back_to_default() {
        let cli = Cli::try_parse_from(["kmgr", "--address", "", "list", "things"]).unwrap();
        assert_eq!(cli.connection.config().unwrap().base_url, BaseUrl::default());
    }

    #[test]
    fn invalid_address_is_rejected() {
        let cli =
            Cli::try_parse_from(["kmgr", "--address", "not a url", "list", "things"]).unwrap();
        assert!(cli.connection.config().is_err());
    }

    #[test]
    fn tls_verification_is_off_by_default() {
        let cli = Cli::try_parse_from(["kmgr", "get", "api/v1/vault/keys2"]).unwrap();
        assert!(cli.connection.config().unwrap().accept_invalid_certs);

        match cli.command {
            Commands::Get(args) => assert_eq!(args.id, "all"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn delete_accepts_method_names() {
        let cli = Cli::try_parse_from([
            "kmgr", "delete", "things", "--id", "xyz", "--method", "patch",
        ])
        .unwrap();

        match cli.command {
            Commands::Delete(args) => assert_eq!(args.method, Some(HttpMethod::Patch)),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn update_without_id_requires_field() {
        assert!(Cli::try_parse_from(["kmgr", "update", "settings", "--data", "{}"]).is_err());
        assert!(
            Cli::try_parse_from(["kmgr", "update", "settings", "--field", "id"]).is_ok()
        );
    }
}
