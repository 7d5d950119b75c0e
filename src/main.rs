use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scm_version::cli::orchestration::DEFAULT_VERSION_FILE;
use scm_version::cli::{run_workflow, WorkflowArgs};
use scm_version::config;
use scm_version::git::Git2Repository;
use scm_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "scm-version",
    version,
    about = "Compute the next semantic version from git tags and commit markers"
)]
struct Args {
    #[arg(long, help = "Print out the current version and end")]
    current: bool,

    #[arg(
        long,
        help = "Bump the version based on #major/#minor markers in the log; default to patch"
    )]
    auto: bool,

    #[arg(long, help = "Update major version")]
    major: bool,

    #[arg(long, help = "Update minor version")]
    minor: bool,

    #[arg(long, help = "Update patch version")]
    patch: bool,

    #[arg(long, value_name = "LABEL", help = "Update prerelease channel")]
    pre: Option<String>,

    #[arg(long, value_name = "LABEL", help = "Set build metadata")]
    build: Option<String>,

    #[arg(long, help = "Actually write the version file and create the git tag")]
    write: bool,

    #[arg(long, help = "Directory from which to open the git repository")]
    dir: Option<PathBuf>,

    #[arg(
        long,
        default_value = DEFAULT_VERSION_FILE,
        help = "File to write with the updated version number"
    )]
    file: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Do not fetch from the remote before resolving")]
    no_fetch: bool,

    #[arg(long, help = "Enable debug logging of the version process")]
    debug: bool,
}

impl Args {
    fn workflow_args(&self) -> WorkflowArgs {
        WorkflowArgs {
            current: self.current,
            auto: self.auto,
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre: self.pre.clone(),
            build: self.build.clone(),
            write: self.write,
            file: self.file.clone(),
            fetch: !self.no_fetch,
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let dir = args.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let repo = Git2Repository::open(&dir)?;

    let result = run_workflow(&args.workflow_args(), &repo, &config)?;
    ui::display_workflow_result(&result, args.debug);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
