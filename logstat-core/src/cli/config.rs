use crate::conf::{DEFAULT_CONFIG_FILE, MonitorConfig, load_config};
use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        /// Path to the config file
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },

    /// Print the resolved configuration
    Dump {
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Output as JSON (default)
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path),
        ConfigCmd::Dump { path, yaml, .. } => dump(path, yaml),
    }
}

pub fn check(path: PathBuf) -> Result<()> {
    let cfg = load_config(&path)?;

    println!("✔ Config loaded successfully");
    for line in describe(&cfg) {
        println!("✔ {line}");
    }

    Ok(())
}

pub fn dump(path: PathBuf, yaml: bool) -> Result<()> {
    let cfg = load_config(&path)?;

    println!("{}", render_dump(&cfg, yaml)?);
    Ok(())
}

/// Serialize `cfg` as YAML when asked, JSON otherwise.
pub(crate) fn render_dump(cfg: &MonitorConfig, yaml: bool) -> Result<String> {
    if yaml {
        dump_yaml(cfg)
    } else {
        dump_json(cfg)
    }
}

pub(crate) fn describe(cfg: &MonitorConfig) -> Vec<String> {
    let input = cfg
        .input
        .as_ref()
        .map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    let output = cfg
        .output
        .as_ref()
        .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());

    vec![
        format!("input: {input}"),
        format!("output: {output}"),
        format!("on parse error: {:?}", cfg.on_parse_error).to_lowercase(),
        format!("strict directions: {}", cfg.strict_directions),
    ]
}

fn dump_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn dump_yaml<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}
