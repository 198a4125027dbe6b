use crate::conf::{ConfigError, MonitorConfig, ParseErrorPolicy, resolve_config};
use crate::session::{Session, SessionOptions, SessionSummary};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

/// Flags for a processing run. Each one overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Path to a config file (defaults to ./logstat.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Write results to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Stop at the first malformed line instead of skipping it
    #[arg(long)]
    pub abort_on_error: bool,

    /// Reject direction tokens other than BEFORE/AFTER
    #[arg(long)]
    pub strict_directions: bool,
}

impl RunArgs {
    pub fn resolve(&self) -> Result<MonitorConfig, ConfigError> {
        let mut cfg = resolve_config(self.config.as_deref())?;
        self.apply(&mut cfg);
        cfg.validate()?;
        Ok(cfg)
    }

    pub(crate) fn apply(&self, cfg: &mut MonitorConfig) {
        if let Some(input) = &self.input {
            cfg.input = Some(input.clone());
        }
        if let Some(output) = &self.output {
            cfg.output = Some(output.clone());
        }
        if self.abort_on_error {
            cfg.on_parse_error = ParseErrorPolicy::Abort;
        }
        if self.strict_directions {
            cfg.strict_directions = true;
        }
    }
}

pub fn run(args: &RunArgs) -> Result<SessionSummary> {
    let cfg = args.resolve()?;
    run_with_config(&cfg)
}

pub fn run_with_config(cfg: &MonitorConfig) -> Result<SessionSummary> {
    let input: Box<dyn BufRead> = match &cfg.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let options = SessionOptions::from(cfg);

    match &cfg.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output {}", path.display()))?;
            drive(input, BufWriter::new(file), options)
        }
        None => {
            let stdout = io::stdout();
            let interactive = stdout.is_terminal();
            drive(input, stdout.lock(), options.flush_each_line(interactive))
        }
    }
}

fn drive<R: BufRead, W: Write>(
    input: R,
    output: W,
    options: SessionOptions,
) -> Result<SessionSummary> {
    let mut session = Session::new(output, options);
    let summary = session.run(input)?;
    Ok(summary)
}
