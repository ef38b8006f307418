use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use tgrelay_proto::{DEFAULT_API_URL, DEFAULT_MAX_UPLOAD_SIZE, DEFAULT_PORT};

pub struct Settings {
    pub api_url: String,
    pub bot_token: String,
    pub chat_id: String,
    pub bind: IpAddr,
    pub port: u16,
    pub max_upload_size: usize,
}

impl Settings {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

// The bot token grants full control of the bot, keep it out of logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_url", &self.api_url)
            .field("bot_token", &"***")
            .field("chat_id", &self.chat_id)
            .field("bind", &self.bind)
            .field("port", &self.port)
            .field("max_upload_size", &self.max_upload_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_port_5000() {
        let settings = Settings::new("123:secret", "42");
        assert_eq!(settings.addr().to_string(), "127.0.0.1:5000");
        assert_eq!(settings.api_url, "https://api.telegram.org");
    }

    #[test]
    fn debug_masks_token() {
        let settings = Settings::new("123:secret", "42");
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("42"));
    }
}
