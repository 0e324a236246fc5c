//! Движок регистрации на еженедельную игру и формирования команд.
//!
//! Ядро – state machine над одним общим документом `RosterState`:
//! - распределение мест (основа из 18 слотов + очередь запасных);
//! - подтверждения участия и признак устаревания публикации;
//! - генерация команд со случайным содержимым и ручной правкой черновика;
//! - недельный цикл: замок записи и финальный свисток.
//!
//! Слои:
//! - `domain` – чистые данные и инварианты;
//! - `engine` – чистые операции над снапшотами;
//! - `infra` – стор документов, каталог аккаунтов, RNG, ID;
//! - `notify` – форматирование сообщений, Telegram, дебаунс;
//! - `service` – права, конкурентный протокол, коммиты, рассылка;
//! - `schedule` – обратный отсчёт до игры/открытия записи.

pub mod domain;
pub mod engine;
pub mod infra;
pub mod notify;
pub mod schedule;
pub mod service;

pub use domain::{
    EditingTeams, Identity, IdentityStats, Player, PlayerId, PublishedTeams, RosterState,
    StatsDelta, TeamId, Username, MAIN_ROSTER_SIZE,
};
pub use engine::RosterError;
pub use service::{RosterService, ServiceError};
