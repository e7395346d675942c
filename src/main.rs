use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use frozen_lake::lake::LakeConfig;
use frozen_lake::logging::{init_logging, LogTarget};
use frozen_lake::modes::{HumanMode, TextMode, WatchMode};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "frozen_lake")]
#[command(version, about = "FrozenLake grid world with a random agent")]
struct Cli {
    /// How to run the episode
    #[arg(long, default_value = "text")]
    mode: Mode,

    /// Side length of the square lake (overrides the config file)
    #[arg(long)]
    size: Option<usize>,

    /// Seed for the lake layout and the random agent (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with lake settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pause between text frames, in milliseconds
    #[arg(long, default_value = "0")]
    delay_ms: u64,

    /// Log filter, e.g. "info" or "frozen_lake=trace"
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Print the lake after every random step
    Text,
    /// Watch the random agent in the terminal UI
    Watch,
    /// Steer the agent with the keyboard
    Human,
}

fn load_config(cli: &Cli) -> Result<LakeConfig> {
    let mut config = match &cli.config {
        Some(path) => LakeConfig::load(path)?,
        None => LakeConfig::default(),
    };

    if let Some(size) = cli.size {
        config.size = size;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    config
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {}", e))?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let target = match (&cli.log_file, &cli.mode) {
        (Some(path), _) => LogTarget::File(path),
        (None, Mode::Text) => LogTarget::Stderr,
        (None, _) => LogTarget::Off,
    };
    init_logging(&cli.log_level, target)?;

    let config = load_config(&cli)?;

    match cli.mode {
        Mode::Text => {
            let mut text_mode = TextMode::new(config);
            if cli.delay_ms > 0 {
                text_mode = text_mode.with_frame_delay(Duration::from_millis(cli.delay_ms));
            }
            text_mode.run(&mut stdout().lock())?;
        }
        Mode::Watch => {
            let mut watch_mode = WatchMode::new(config);
            watch_mode.run().await?;
        }
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
    }

    Ok(())
}
