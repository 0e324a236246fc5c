use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::domain::PlayerId;

/// Текущее время в unix-миллисекундах.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Сгенерировать id записи игрока: unix-миллисекунды + случайный суффикс.
///
/// Этого достаточно для уникальности в рамках одного ростера: коллизия
/// требует одинаковой миллисекунды И одинакового 6-символьного суффикса.
pub fn generate_player_id(now: i64) -> PlayerId {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("{now}-{suffix}")
}
