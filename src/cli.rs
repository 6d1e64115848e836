use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands;
use crate::commands::inject::InjectFormat;

#[derive(Debug, Parser)]
#[command(name = "counter-inject")]
#[command(about = "Pre-build hook: injects countdown and build-id preprocessor definitions")]
#[command(version, long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (hook build ",
    env!("BUILD_UUID"),
    ")"
))]
pub struct Cli {
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the countdown and append the definitions to the build artifact
    Inject(InjectArgs),
    /// Report resolved config, clock state, and the current countdown
    Status,
    /// Inspect the layered configuration
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct InjectArgs {
    #[arg(long, value_enum, default_value = "header")]
    pub format: FormatArg,
    /// Override the artifact path from config
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Generated C header with the three #defines
    Header,
    /// Line of -DNAME=VALUE tokens appended to a flags file
    Flags,
}

impl From<FormatArg> for InjectFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Header => InjectFormat::Header,
            FormatArg::Flags => InjectFormat::Flags,
        }
    }
}

#[derive(Debug, Args, Default)]
pub struct ConfigArgs {
    #[arg(long)]
    pub show: bool,
}

fn print_report(report: &commands::CommandReport, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("command: {}", report.command);
    println!("ok: {}", report.ok);
    if !report.details.is_empty() {
        println!("details:");
        for detail in &report.details {
            println!("- {detail}");
        }
    }
    if !report.issues.is_empty() {
        println!("issues:");
        for issue in &report.issues {
            println!("- {issue}");
        }
    }
    Ok(())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let report = match &cli.command {
        Command::Inject(args) => commands::inject::run(&commands::inject::InjectOptions {
            format: args.format.into(),
            out: args.out.clone(),
            dry_run: args.dry_run,
        })?,
        Command::Status => commands::status::run()?,
        Command::Config(args) => {
            commands::config::run(&commands::config::ConfigOptions { show: args.show })?
        }
    };

    print_report(&report, cli.json)?;

    if report.ok {
        Ok(())
    } else {
        std::process::exit(2);
    }
}
