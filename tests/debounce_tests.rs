//! Тесты дебаунса: окно сбрасывается (не накапливается), уходит
//! последний текст. Время токио на паузе – тесты мгновенные.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use roster_engine::notify::{
    DebouncedNotifier, Notifier, NotifyError, NotifyMessage,
};

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &NotifyMessage) -> Result<(), NotifyError> {
        self.sent.lock().await.push(message.text.clone());
        Ok(())
    }
}

const WINDOW: Duration = Duration::from_secs(10);

#[tokio::test(start_paused = true)]
async fn second_schedule_resets_the_window() {
    let recorder = Arc::new(RecordingNotifier::default());
    let debounced = DebouncedNotifier::with_delay(recorder.clone(), WINDOW);

    debounced.schedule(NotifyMessage::new("first")).await;
    tokio::time::sleep(Duration::from_secs(6)).await;

    // Вторая правка внутри окна: таймер заводится заново, не складывается.
    debounced.schedule(NotifyMessage::new("second")).await;
    tokio::time::sleep(Duration::from_secs(6)).await;

    // t=12s: от первого сообщения прошло больше окна, но оно отменено,
    // а второму ещё 4 секунды.
    assert!(recorder.sent.lock().await.is_empty());

    tokio::time::sleep(Duration::from_secs(5)).await;

    let sent = recorder.sent.lock().await;
    assert_eq!(sent.as_slice(), ["second".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn single_schedule_fires_after_window() {
    let recorder = Arc::new(RecordingNotifier::default());
    let debounced = DebouncedNotifier::with_delay(recorder.clone(), WINDOW);

    debounced.schedule(NotifyMessage::new("only")).await;
    tokio::time::sleep(Duration::from_secs(9)).await;
    assert!(recorder.sent.lock().await.is_empty());

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(recorder.sent.lock().await.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn send_now_bypasses_the_window() {
    let recorder = Arc::new(RecordingNotifier::default());
    let debounced = DebouncedNotifier::with_delay(recorder.clone(), WINDOW);

    debounced.schedule(NotifyMessage::new("pending")).await;
    debounced.send_now(NotifyMessage::new("teams")).await;

    // Немедленное сообщение ушло, отложенное всё ещё ждёт.
    assert_eq!(recorder.sent.lock().await.as_slice(), ["teams".to_string()]);

    tokio::time::sleep(WINDOW + Duration::from_secs(1)).await;
    assert_eq!(recorder.sent.lock().await.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn cancel_pending_drops_scheduled_message() {
    let recorder = Arc::new(RecordingNotifier::default());
    let debounced = DebouncedNotifier::with_delay(recorder.clone(), WINDOW);

    debounced.schedule(NotifyMessage::new("doomed")).await;
    debounced.cancel_pending().await;

    tokio::time::sleep(WINDOW + Duration::from_secs(1)).await;
    assert!(recorder.sent.lock().await.is_empty());
}
