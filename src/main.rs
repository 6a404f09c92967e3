use anyhow::Result;
use brewlink::package::PackageIdentity;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use std::path::PathBuf;

/// brewlink - Link software installed with brew to somewhere else
///
/// Packages installed as CellarPath/<name>/<version> are linked as
/// SoftwarePath/<name>/<version>/x86_64. Both paths come from .brewlink.json,
/// found next to the executable unless --config is given.
///
/// Examples:
///   brewlink link foo-1.0   # Link foo 1.0
///   brewlink show           # List installed packages, linked in green
#[derive(Parser, Debug)]
#[command(author, version = env!("BREWLINK_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to .brewlink.json next to the executable)
    #[arg(
        long = "config",
        short = 'c',
        env = "BREWLINK_CONFIG",
        value_name = "PATH",
        global = true
    )]
    pub config: Option<PathBuf>,

    /// Disable colored output (also via NO_COLOR)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Link package
    #[command(visible_alias = "l")]
    Link(LinkArgs),

    /// Show status of all packages
    #[command(visible_alias = "s")]
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct LinkArgs {
    /// The package to link, in the format "name-version"
    #[arg(value_name = "NAME-VERSION")]
    pub package: String,
}

impl LinkArgs {
    /// The package argument as an identity, or a usage error.
    fn identity(&self) -> Result<PackageIdentity, clap::Error> {
        self.package
            .parse()
            .map_err(|e: brewlink::Error| Cli::command().error(ErrorKind::ValueValidation, e))
    }
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {}

fn use_color(no_color: bool) -> bool {
    !no_color
        && std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
        && std::io::stdout().is_terminal()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = brewlink::runtime::RealRuntime;

    match cli.command {
        Commands::Link(args) => {
            // Checked before the config is looked at
            let identity = args.identity().unwrap_or_else(|e| e.exit());
            brewlink::commands::link(runtime, &identity, cli.config.as_deref())?
        }
        Commands::Show(_args) => {
            brewlink::commands::show(runtime, cli.config.as_deref(), use_color(cli.no_color))?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_link_parsing() {
        let cli = Cli::try_parse_from(["brewlink", "link", "foo-1.0"]).unwrap();
        match cli.command {
            Commands::Link(args) => {
                assert_eq!(args.package, "foo-1.0");
            }
            _ => panic!("Expected Link command"),
        }
    }

    #[test]
    fn test_cli_link_malformed_package_is_usage_error() {
        for bad in ["foo", "foo-1.0-extra", "-1.0", "foo-", ""] {
            let cli = Cli::try_parse_from(["brewlink", "link", bad]).unwrap();
            let Commands::Link(args) = cli.command else {
                panic!("Expected Link command");
            };
            let err = args.identity().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "{bad}");
            let rendered = err.render().to_string();
            assert!(rendered.contains("expected <name>-<version>"), "{rendered}");
            assert!(rendered.contains("Usage"), "{rendered}");
        }
    }

    #[test]
    fn test_cli_link_identity() {
        let cli = Cli::try_parse_from(["brewlink", "link", "foo-1.0"]).unwrap();
        let Commands::Link(args) = cli.command else {
            panic!("Expected Link command");
        };
        let identity = args.identity().unwrap();
        assert_eq!(identity.name(), "foo");
        assert_eq!(identity.version(), "1.0");
    }

    #[test]
    fn test_cli_link_alias() {
        let cli = Cli::try_parse_from(["brewlink", "l", "foo-1.0"]).unwrap();
        assert!(matches!(cli.command, Commands::Link(_)));
    }

    #[test]
    fn test_cli_show_alias() {
        let cli = Cli::try_parse_from(["brewlink", "s"]).unwrap();
        assert!(matches!(cli.command, Commands::Show(_)));
    }

    #[test]
    fn test_cli_link_requires_exactly_one_argument() {
        assert!(Cli::try_parse_from(["brewlink", "link"]).is_err());
        assert!(Cli::try_parse_from(["brewlink", "link", "foo-1.0", "bar-2.3"]).is_err());
    }

    #[test]
    fn test_cli_global_config_parsing() {
        let cli =
            Cli::try_parse_from(["brewlink", "show", "--config", "/etc/brewlink.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/brewlink.json")));

        let cli = Cli::try_parse_from(["brewlink", "-c", "/tmp/b.json", "--no-color", "s"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/b.json")));
        assert!(cli.no_color);
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        assert!(Cli::try_parse_from(["brewlink"]).is_err());
    }
}
