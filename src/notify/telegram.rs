//! Отправка в Telegram Bot API. POST `sendMessage`, parse_mode=HTML,
//! fire-and-forget: ошибка логируется и никогда не блокирует мутацию,
//! которую описывала.

use async_trait::async_trait;
use serde::Serialize;

use crate::notify::{Notifier, NotifyError, NotifyMessage};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Serialize)]
struct SendMessageBody<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Вебхук группового чата.
pub struct TelegramNotifier {
    http: reqwest::Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    fn send_url(&self) -> String {
        format!("{TELEGRAM_API_BASE}/bot{}/sendMessage", self.bot_token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &NotifyMessage) -> Result<(), NotifyError> {
        let body = SendMessageBody {
            chat_id: &self.chat_id,
            text: &message.text,
            parse_mode: "HTML",
        };

        let response = self
            .http
            .post(self.send_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotifyError(format!(
                "Telegram API вернул статус {}",
                response.status()
            )));
        }

        Ok(())
    }
}

/// Заглушка: уведомления выключены (нет токена) или идёт тест.
#[derive(Clone, Debug, Default)]
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn send(&self, _message: &NotifyMessage) -> Result<(), NotifyError> {
        Ok(())
    }
}
