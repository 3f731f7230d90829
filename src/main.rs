use envconfig::Envconfig;
use log::error;
use timetable_synth::{config, server};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match config::Config::init_from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load configuration from env: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server::run_server(config.address).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
