mod config;
mod pipeline;
mod render;

use anyhow::Result;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from the environment
    let config = Config::load()?;
    docscout_logging::init_logging(&config.log)?;

    // The block goes to stdout; everything else stays on stderr
    if let Some(block) = pipeline::run(&config).await? {
        println!("{block}");
    }
    Ok(())
}
