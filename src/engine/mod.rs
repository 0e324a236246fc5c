//! Движок ростера: запись игроков, подтверждения, генерация команд,
//! недельный жизненный цикл.
//!
//! Все операции – чистые синхронные функции над снапшотом `RosterState`:
//! принимают текущее состояние, возвращают новое (или типизированный отказ).
//! Никакого IO: персистентность и уведомления живут в `infra` / `service`.

pub mod confirmation;
pub mod errors;
pub mod lifecycle;
pub mod registration;
pub mod teams;

pub use confirmation::{confirm_all, needs_team_update, set_confirmed, unconfirm_all};
pub use errors::RosterError;
pub use lifecycle::{blow_final_whistle, toggle_lock, WhistleOutcome, GAME_DURATION_MINUTES};
pub use registration::{
    register_guest, register_self, remove_player, NewPlayer, RemovalOutcome, REGISTRATION_QUOTA,
};
pub use teams::{
    draft_from_published, generate_teams, move_player, publish_teams, unpublish_teams,
    MIN_PLAYERS_FOR_TEAMS,
};

/// RNG интерфейс для движка (перемешивание при генерации команд).
/// Реализации – в `infra::rng`: системная и детерминированная для тестов.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
