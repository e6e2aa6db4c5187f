use anyhow::Result;
use clap::{Parser, ValueEnum};
use console_snake::game::GameConfig;
use console_snake::modes::{ConsoleMode, TuiMode};
use console_snake::render::game_over_message;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "console_snake")]
#[command(version, about = "Turn-based Snake for the terminal")]
struct Cli {
    /// Front end to play with
    #[arg(long, default_value = "console")]
    mode: Mode,

    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Initial snake length
    #[arg(long)]
    length: Option<usize>,

    /// Ignore turns straight back into the snake's neck
    #[arg(long)]
    block_reversal: bool,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Type a move and press Enter each turn
    Console,
    /// Full-screen board, one key press per turn
    Tui,
}

/// Defaults, then the config file, then individual flags
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(width) = cli.width {
        config.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.grid_height = height;
    }
    if let Some(length) = cli.length {
        config.initial_snake_length = length;
    }
    if cli.block_reversal {
        config.block_reversal = true;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    log::debug!("Starting with {:?}", config);

    match cli.mode {
        Mode::Console => {
            let mut console_mode = ConsoleMode::new(config)?;
            console_mode.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Mode::Tui => {
            let mut tui_mode = TuiMode::new(config)?;
            tui_mode.run()?;
            if let Some(message) = game_over_message(tui_mode.state()) {
                println!("{}", message);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_default_game() {
        let cli = Cli::parse_from(["console_snake"]);
        assert_eq!(build_config(&cli).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "console_snake",
            "--width",
            "20",
            "--length",
            "3",
            "--block-reversal",
            "--seed",
            "11",
        ]);
        let config = build_config(&cli).unwrap();

        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 10);
        assert_eq!(config.initial_snake_length, 3);
        assert!(config.block_reversal);
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn test_invalid_flags_are_rejected() {
        let cli = Cli::parse_from(["console_snake", "--width", "0"]);
        assert!(build_config(&cli).is_err());
    }
}
