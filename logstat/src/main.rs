use clap::{Parser, Subcommand};
use logstat_core::cli;
use logstat_core::cli::run::RunArgs;
use logstat_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "logstat",
    version,
    about = "logstat: min/max/mean log severity over a line protocol",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    run: RunArgs,

    /// Log output format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process commands from the input (default)
    Run(RunArgs),

    /// Config file tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let result: anyhow::Result<()> = match cli.command {
        Some(Command::Run(args)) => cli::run::run(&args).map(drop),
        Some(Command::Config { cmd }) => cli::config::run(cmd),
        None => cli::run::run(&cli.run).map(drop),
    };

    if let Err(e) = result {
        eprintln!("logstat error: {e:#}");
        std::process::exit(1);
    }
}
