use crate::config::Overrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "showcase", version, about = "GitHub portfolio showcase")]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/showcase/config.toml)
    #[arg(long, short, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// GitHub user to showcase
    #[arg(long, short, global = true)]
    pub user: Option<String>,

    /// Log filter, e.g. info or showcase=debug
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch once and write the static site
    Render {
        /// Output directory
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Browse the showcase in the terminal
    Browse,
    /// Sign in with a Google ID token and forward it to the backend
    Identity {
        /// Google ID token (JWT)
        #[arg(long, env = "SHOWCASE_ID_TOKEN")]
        id_token: String,

        /// Token endpoint, overriding the configured one
        #[arg(long)]
        endpoint: Option<String>,

        /// Revoke the session after submitting
        #[arg(long)]
        sign_out: bool,
    },
    /// Print the effective configuration
    Config,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        let (output_dir, token_endpoint) = match self.command {
            Command::Render { ref out } => (out.clone(), None),
            Command::Identity { ref endpoint, .. } => (None, endpoint.clone()),
            _ => (None, None),
        };
        Overrides {
            config_file: self.config.clone(),
            username: self.user.clone(),
            log_level: self.log_level.clone(),
            output_dir,
            token_endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_with_globals() {
        let cli = Cli::parse_from(["showcase", "render", "--user", "ann", "-o", "public"]);
        assert!(matches!(cli.command, Command::Render { .. }));
        let o = cli.overrides();
        assert_eq!(o.username.as_deref(), Some("ann"));
        assert_eq!(o.output_dir, Some(PathBuf::from("public")));
        assert!(o.token_endpoint.is_none());
    }

    #[test]
    fn identity_endpoint_override() {
        let cli = Cli::parse_from([
            "showcase",
            "identity",
            "--id-token",
            "a.b.c",
            "--endpoint",
            "https://backend.example/tokensignin",
            "--sign-out",
        ]);
        match cli.command {
            Command::Identity {
                ref id_token,
                sign_out,
                ..
            } => {
                assert_eq!(id_token, "a.b.c");
                assert!(sign_out);
            }
            _ => panic!("expected identity command"),
        }
        assert_eq!(
            cli.overrides().token_endpoint.as_deref(),
            Some("https://backend.example/tokensignin")
        );
    }

    #[test]
    fn subcommand_required() {
        assert!(Cli::try_parse_from(["showcase"]).is_err());
    }
}
