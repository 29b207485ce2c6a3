use anyhow::Result;
use eatery::prelude::*;
use eatery::server::builder::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::var("EATERY_CONFIG") {
        Ok(path) => AppConfig::from_yaml_file(&path)?,
        Err(_) => AppConfig::default(),
    };

    AppBuilder::new().serve(&config).await
}
