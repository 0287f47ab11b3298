mod brief_cmd;
mod config;
mod export_cmd;
mod plan_cmds;
mod serve_cmd;
#[cfg(test)]
mod test_util;

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};

use config::CarecastConfig;

#[derive(Parser)]
#[command(name = "carecast", about = "Campaign planning agent for Bharat Life Care")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that works from a campaign brief.
#[derive(clap::Args, Debug, Default)]
pub struct BriefArgs {
    /// Brief file (overrides CARECAST_BRIEF env var and config file)
    #[arg(long)]
    pub brief: Option<PathBuf>,
    /// Campaign kick-off date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Campaign length in weeks
    #[arg(long, allow_negative_numbers = true)]
    pub weeks: Option<i64>,
    /// Platform to include; repeat to list several (replaces the brief's list)
    #[arg(long = "platform")]
    pub platforms: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a carecast config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Print the campaign brief as TOML, a starting point for editing
    Brief {
        #[command(flatten)]
        args: BriefArgs,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate and print the campaign plan
    Plan {
        #[command(flatten)]
        args: BriefArgs,
        /// Print the full plan bundle as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the publishing calendar
    Calendar {
        #[command(flatten)]
        args: BriefArgs,
        /// Group events into week buckets
        #[arg(long)]
        by_week: bool,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the publishing calendar as CSV
    Export {
        #[command(flatten)]
        args: BriefArgs,
        /// Output file path (default: stdout)
        #[arg(long, short)]
        output: Option<String>,
    },
    /// List the platform playbook
    Platforms,
    /// Serve the planner over HTTP
    Serve {
        /// Address to bind (overrides CARECAST_BIND env var and config file)
        #[arg(long)]
        bind: Option<String>,
        /// Port to listen on (overrides CARECAST_PORT env var and config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

/// Execute the `carecast init` command: write config file.
fn cmd_init(force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile::default();
    config::save_config_to(&cfg, &path)?;

    println!("Config written to {}", path.display());
    println!("  server.bind = {}", cfg.server.bind);
    println!("  server.port = {}", cfg.server.port);
    println!();
    println!("Next: run `carecast brief --output brief.toml`, edit it, and set brief.path.");

    Ok(())
}

/// Resolve the brief file and build the input for a brief-driven command.
fn resolve_input(args: &BriefArgs) -> anyhow::Result<carecast_core::CampaignInput> {
    let resolved = CarecastConfig::resolve(args.brief.as_deref(), None, None)?;
    brief_cmd::load_input(args, resolved.brief_path.as_deref(), brief_cmd::today())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            cmd_init(force)?;
        }
        Commands::Brief { args, output } => {
            let input = resolve_input(&args)?;
            brief_cmd::run_brief(&input, output.as_ref())?;
        }
        Commands::Plan { args, json } => {
            let input = resolve_input(&args)?;
            plan_cmds::run_plan(&input, json, &mut io::stdout().lock())?;
        }
        Commands::Calendar {
            args,
            by_week,
            json,
        } => {
            let input = resolve_input(&args)?;
            plan_cmds::run_calendar(&input, by_week, json, &mut io::stdout().lock())?;
        }
        Commands::Export { args, output } => {
            let input = resolve_input(&args)?;
            export_cmd::run_export_csv(&input, output.as_deref())?;
        }
        Commands::Platforms => {
            plan_cmds::run_platforms(&mut io::stdout().lock())?;
        }
        Commands::Serve { bind, port } => {
            let resolved = CarecastConfig::resolve(None, bind.as_deref(), port)?;
            serve_cmd::run_serve(&resolved.bind, resolved.port).await?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "carecast", &mut io::stdout());
        }
    }

    Ok(())
}
