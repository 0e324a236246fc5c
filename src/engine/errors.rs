use thiserror::Error;

use crate::domain::PlayerId;

/// Ошибки движка ростера – всё, что пользователь может исправить сам.
///
/// Это ожидаемые отказы валидации, не исключения: операции движка
/// возвращают их как `Err`, ничего не меняя в состоянии.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Имя игрока не может быть пустым")]
    EmptyName,

    #[error("Игрок с именем «{0}» уже записан")]
    DuplicateName(String),

    #[error("Телефон {0} уже указан у другого игрока")]
    DuplicatePhone(String),

    #[error("Аккаунт {username} уже записал {limit} игроков")]
    QuotaExceeded { username: String, limit: usize },

    #[error("Запись на игру закрыта")]
    RegistrationLocked,

    #[error("В профиле не указано имя игрока – нельзя записаться за себя")]
    NoDisplayName,

    #[error("Вы уже записаны на эту игру")]
    AlreadySelfRegistered,

    #[error("Игрок {0} не найден в ростере")]
    PlayerNotFound(PlayerId),

    #[error("Недостаточно подтверждённых игроков: есть {have}, нужно {need}")]
    NotEnoughConfirmed { have: usize, need: usize },

    #[error("Сейчас нет опубликованных команд")]
    NoPublishedTeams,

    #[error("В команде {team} нет позиции {index}")]
    InvalidTeamSlot { team: &'static str, index: usize },
}
