use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use git_version::config;
use git_version::git::Git2Repository;
use git_version::versioner::Versioner;

#[derive(clap::Parser)]
#[command(
    name = "git-version",
    about = "Derive a semantic version string from git tags and commit history"
)]
struct Args {
    #[arg(
        env = "GIT_VERSION_ROOT_DIR",
        default_value = ".",
        help = "Path to git repository"
    )]
    path: PathBuf,

    #[arg(
        short,
        long,
        env = "GIT_VERSION_CONFIG_PATH",
        help = "Path to a manifest with a [tool.git-version] section"
    )]
    config: Option<PathBuf>,

    #[arg(long, help = "Enable debug logging")]
    debug: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Logs go to stderr; stdout carries only the resolved version string
    let default_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config(args.config.as_deref());

    let repo = match Git2Repository::open(&args.path) {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!("{} {}", style("ERROR:").red().bold(), e);
            std::process::exit(1);
        }
    };

    match Versioner::new(&repo, &config) {
        Ok(versioner) => {
            println!("{}", versioner.version());
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", style("ERROR:").red().bold(), e);
            std::process::exit(1);
        }
    }
}
