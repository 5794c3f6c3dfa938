use anyhow::Result;
use clap::Parser;
use torus_snake::game::GameConfig;
use torus_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "torus-snake")]
#[command(version, about = "Grid snake that wraps around the screen edges")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "15")]
    height: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // World geometry is fixed for the lifetime of the game
    let config = GameConfig::new(cli.width, cli.height);

    let mut mode = HumanMode::new(config);
    mode.run().await
}
