//! Недельное расписание: чистые функции от "сейчас".
//!
//! Игра – каждую среду в 20:30, запись заново открывается в воскресенье
//! в 12:00. Это derived-представление для обратного отсчёта, не часть
//! состояния ростера.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};

/// Ближайший будущий момент `weekday time` (строго позже `now` –
/// если момент уже наступил, берём следующую неделю).
fn next_weekly(now: NaiveDateTime, weekday: Weekday, time: NaiveTime) -> NaiveDateTime {
    let days_ahead = (7 + weekday.num_days_from_monday() as i64
        - now.weekday().num_days_from_monday() as i64)
        % 7;
    let candidate = (now.date() + Duration::days(days_ahead)).and_time(time);
    if candidate > now {
        candidate
    } else {
        candidate + Duration::days(7)
    }
}

/// Следующий стартовый свисток: среда, 20:30.
pub fn next_kickoff(now: NaiveDateTime) -> NaiveDateTime {
    let kickoff = NaiveTime::from_hms_opt(20, 30, 0).unwrap_or_default();
    next_weekly(now, Weekday::Wed, kickoff)
}

/// Следующее открытие записи: воскресенье, 12:00.
pub fn next_registration_opening(now: NaiveDateTime) -> NaiveDateTime {
    let opening = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default();
    next_weekly(now, Weekday::Sun, opening)
}

/// Сколько осталось до цели. Для прошедших целей – ноль.
pub fn time_until(now: NaiveDateTime, target: NaiveDateTime) -> Duration {
    (target - now).max(Duration::zero())
}
