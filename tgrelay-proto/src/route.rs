pub enum ApiRoute {
    UploadTelegram,
}

impl ApiRoute {
    pub fn path(&self) -> &'static str {
        match self {
            ApiRoute::UploadTelegram => "/upload_telegram",
        }
    }
}

pub enum BotRoute {
    SendDocument,
}

impl BotRoute {
    fn method(&self) -> &'static str {
        match self {
            BotRoute::SendDocument => "sendDocument",
        }
    }

    /// Bot API methods live under `/bot<token>/<method>`.
    pub fn target(&self, api_url: impl AsRef<str>, token: impl AsRef<str>) -> String {
        format!(
            "{}/bot{}/{}",
            api_url.as_ref().trim_end_matches('/'),
            token.as_ref(),
            self.method()
        )
    }
}
