use anyhow::Result;
use clap::Parser;
use ghrel::commands::{self, RenderOptions};
use ghrel::config::{Config, SiteConfig};
use std::path::PathBuf;

/// ghrel - GitHub release page generator
///
/// Fetches the release list of a GitHub repository and renders it as a
/// static HTML page: the latest release as a card, older ones in a dropdown.
///
/// Examples:
///   ghrel render -o public/index.html
///   ghrel --repo owner/repo --lang en list
#[derive(Parser, Debug)]
#[command(author, version = env!("GHREL_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Repository to show, "owner/repo" (defaults to xassiver/timeproject)
    #[arg(
        long = "repo",
        env = "GHREL_REPO",
        value_name = "OWNER/REPO",
        global = true
    )]
    pub repo: Option<String>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Page language: tr or en (defaults to tr)
    #[arg(long = "lang", env = "GHREL_LANG", value_name = "LANG", global = true)]
    pub lang: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Render the release page
    Render(RenderArgs),

    /// Print the releases, latest first
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Output file (defaults to stdout)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Show the archived release at this dropdown index already selected
    #[arg(long = "select", value_name = "INDEX")]
    pub select: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = ghrel::runtime::RealRuntime;

    let site = SiteConfig::new(cli.repo.as_deref(), cli.api_url, cli.lang.as_deref())?;
    let config = Config::new(site)?;

    match cli.command {
        Commands::Render(args) => {
            let options = RenderOptions {
                output: args.output,
                select: args.select,
            };
            commands::render(&runtime, &config, &options).await?
        }
        Commands::List(_args) => commands::list(&runtime, &config).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_render_parsing() {
        let cli = Cli::try_parse_from(["ghrel", "render"]).unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.output, None);
                assert_eq!(args.select, None);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_render_output_and_select() {
        let cli =
            Cli::try_parse_from(["ghrel", "render", "-o", "/tmp/index.html", "--select", "2"])
                .unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.output, Some(PathBuf::from("/tmp/index.html")));
                assert_eq!(args.select, Some(2));
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "ghrel",
            "--repo",
            "owner/repo",
            "list",
            "--api-url",
            "http://localhost:1234",
            "--lang",
            "en",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
        assert_eq!(cli.repo.as_deref(), Some("owner/repo"));
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:1234"));
        assert_eq!(cli.lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_cli_select_must_be_a_number() {
        assert!(Cli::try_parse_from(["ghrel", "render", "--select", "latest"]).is_err());
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        assert!(Cli::try_parse_from(["ghrel"]).is_err());
    }
}
