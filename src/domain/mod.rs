//! Доменная модель ростера: игроки, состав недели, команды, аккаунты.

pub mod identity;
pub mod player;
pub mod roster;
pub mod teams;

/// Непрозрачный идентификатор записи игрока в ростере.
/// Формат: `<unix-millis>-<случайный суффикс>`, см. `infra::ids`.
pub type PlayerId = String;

/// Логин аккаунта в каталоге пользователей.
pub type Username = String;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Player и т.п.
pub use identity::*;
pub use player::*;
pub use roster::*;
pub use teams::*;
