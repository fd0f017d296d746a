use std::sync::Arc;

use structopt::StructOpt;

mod config;
mod controllers;
mod errors;
mod http;
mod routes;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dunmail-server",
    about = "HTTP API for sending billing-failure emails."
)]
struct Opt {
    /// Port to listen on
    #[structopt(short, long, default_value = "3030")]
    port: u16,

    /// Optional TOML config file, merged under the environment
    #[structopt(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::builder().format_timestamp_micros().init();

    let opt = Opt::from_args();

    let config = match dunmail::config::Config::load(opt.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    if config.resend_api_key.is_none() {
        // Not fatal: each send request reports the missing credential.
        log::warn!("RESEND_API_KEY not set; send requests will fail");
    }

    let mailer = dunmail::resend::Client::new(
        config.resend_api_key.clone().unwrap_or_default(),
    );

    log::info!("Starting server...");

    let arg = config::HttpArg {
        port: opt.port,
        config: Arc::new(config),
        mailer: Arc::new(mailer),
    };

    http::run(arg).await;
}
