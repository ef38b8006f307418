use std::{net::IpAddr, sync::Arc};

use clap::Parser;
use simple_logger::SimpleLogger;
use tgrelay_lib::{
    server::{start_api_server, ServerState},
    Result, Settings,
};
use tgrelay_proto::{DEFAULT_API_URL, DEFAULT_BIND, DEFAULT_MAX_UPLOAD_SIZE, DEFAULT_PORT};

#[derive(Parser)]
#[command(version, about = "Relay uploaded files to a Telegram chat")]
struct Args {
    /// Telegram bot token used to send documents
    #[arg(long, env = "TGRELAY_BOT_TOKEN", hide_env_values = true)]
    bot_token: String,

    /// Chat that receives every relayed file
    #[arg(long, env = "TGRELAY_CHAT_ID")]
    chat_id: String,

    /// Base url of the bot api
    #[arg(long, env = "TGRELAY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Address of the http server
    #[arg(long, env = "TGRELAY_BIND", default_value = DEFAULT_BIND)]
    bind: IpAddr,

    /// Port of the http server
    #[arg(long, env = "TGRELAY_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Maximum size of an upload request in bytes
    #[arg(long, env = "TGRELAY_MAX_UPLOAD_SIZE", default_value_t = DEFAULT_MAX_UPLOAD_SIZE)]
    max_upload_size: usize,
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        let mut settings = Settings::new(args.bot_token, args.chat_id);
        settings.api_url = args.api_url;
        settings.bind = args.bind;
        settings.port = args.port;
        settings.max_upload_size = args.max_upload_size;
        settings
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .expect("Failed to init logger");

    let settings: Settings = Args::parse().into();
    log::debug!("settings: {:?}", settings);

    let (running_tx, mut running_rx) = tokio::sync::mpsc::channel::<()>(1);
    let handled = match ctrlc::set_handler(move || {
        running_tx.blocking_send(()).ok();
    }) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Failed to set Ctrl-C handler: {}", e);
            false
        }
    };
    let shutdown = async move {
        if !handled {
            std::future::pending::<()>().await
        }
        running_rx.recv().await;
        log::info!("Shutting down");
    };

    let state = Arc::new(ServerState::new(settings));
    start_api_server(state, shutdown).await?;
    Ok(())
}
