//! Дебаунс исходящих сообщений "ростер изменился".
//!
//! Быстрая серия правок схлопывается в одно сообщение: каждое новое
//! `schedule` отменяет ещё не отправленное и заводит таймер заново
//! (reset, не накопление). Публикация команд идёт через `send_now`
//! и в дебаунсе не участвует.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::notify::{Notifier, NotifyMessage};

/// Окно дебаунса по умолчанию.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(10);

pub struct DebouncedNotifier {
    notifier: Arc<dyn Notifier>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl DebouncedNotifier {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self::with_delay(notifier, DEFAULT_DEBOUNCE)
    }

    pub fn with_delay(notifier: Arc<dyn Notifier>, delay: Duration) -> Self {
        Self {
            notifier,
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Запланировать отправку через окно дебаунса.
    /// Ранее запланированное сообщение отменяется – уйдёт последний текст.
    pub async fn schedule(&self, message: NotifyMessage) {
        let mut pending = self.pending.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let notifier = Arc::clone(&self.notifier);
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(err) = notifier.send(&message).await {
                log::warn!("уведомление о ростере не ушло: {err}");
            }
        }));
    }

    /// Отправить немедленно, мимо дебаунса (публикация команд).
    /// Ошибка глотается с логированием – мутацию она не откатывает.
    pub async fn send_now(&self, message: NotifyMessage) {
        if let Err(err) = self.notifier.send(&message).await {
            log::warn!("уведомление не ушло: {err}");
        }
    }

    /// Сбросить отложенную отправку, если она есть (конец цикла).
    pub async fn cancel_pending(&self) {
        if let Some(handle) = self.pending.lock().await.take() {
            handle.abort();
        }
    }
}
