//! Уведомления: форматирование сообщений, вебхук Telegram,
//! дебаунс-планировщик для "ростер изменился".

pub mod debounce;
pub mod format;
pub mod telegram;

use async_trait::async_trait;
use thiserror::Error;

pub use debounce::DebouncedNotifier;
pub use format::{format_roster_message, format_teams_message};
pub use telegram::{NullNotifier, TelegramNotifier};

/// Ошибка отправки уведомления. Наружу пользователю никогда не уходит:
/// сервис логирует и продолжает.
#[derive(Clone, Debug, Error)]
#[error("Не удалось отправить уведомление: {0}")]
pub struct NotifyError(pub String);

/// Исходящее сообщение: HTML-lite разметка (одни теги <b>, переводы строк).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotifyMessage {
    pub text: String,
}

impl NotifyMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Канал исходящих уведомлений. Fire-and-forget: никакого контракта
/// на ответ, кроме успех/ошибка для логирования.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &NotifyMessage) -> Result<(), NotifyError>;
}
