mod transform;
mod actions;

use tracing::{error, debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::*;
use actions::*;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logoround=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    debug!("Logging initialized...");

    let config = match Config::new() {
        Ok(c) => c,
        Err(e) => panic!("Failed to init config: {}", e),
    };

    debug!("Config loaded...");

    let logo_config = match config.logo() {
        Ok(l) => l,
        Err(e) => panic!("Incomplete config for logo: {}", e),
    };

    debug!("Logo config loaded...");

    // Relative paths live next to the config.toml file, absolute ones win on push
    let mut source = config.dir.to_owned();
    source.push(&logo_config.source);

    let mut output = config.dir.to_owned();
    output.push(&logo_config.output);

    match round_action(&source, &output) {
        Ok(saved) => info!("Circular logo saved successfully to {}", saved.display()),
        Err(e) => error!("Failed to crop {:?} to circle: {}", source, e),
    }
}
