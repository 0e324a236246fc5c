use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, Username};

/// Запись игрока в ростере недели.
///
/// Это не аккаунт: запись может быть гостевой (кто-то записал знакомого)
/// или "своей" – тогда `is_registered_user == true` и `registered_by`
/// указывает на аккаунт самого игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    /// Отображаемое имя (для своей записи совпадает с display_name аккаунта).
    pub name: String,
    /// Контактный телефон. Для гостя может отсутствовать.
    pub phone_number: Option<String>,
    /// Кто выполнил запись (для квоты и проверок прав).
    pub registered_by: Username,
    /// Момент записи, unix-миллисекунды. Порядок продвижения запасных.
    pub registered_at: i64,
    /// Подтвердил ли игрок участие.
    pub is_confirmed: bool,
    /// true только для записи "за себя" – игрок и есть аккаунт.
    pub is_registered_user: bool,
}

impl Player {
    /// Гостевая запись: не подтверждена, не привязана к аккаунту.
    pub fn guest(
        id: PlayerId,
        name: String,
        phone_number: Option<String>,
        registered_by: Username,
        registered_at: i64,
    ) -> Self {
        Self {
            id,
            name,
            phone_number,
            registered_by,
            registered_at,
            is_confirmed: false,
            is_registered_user: false,
        }
    }

    /// Запись "за себя": сразу подтверждена и помечена как аккаунтная.
    pub fn self_registered(
        id: PlayerId,
        name: String,
        phone_number: Option<String>,
        username: Username,
        registered_at: i64,
    ) -> Self {
        Self {
            id,
            name,
            phone_number,
            registered_by: username,
            registered_at,
            is_confirmed: true,
            is_registered_user: true,
        }
    }

    /// Сравнение имён без учёта регистра – так проверяем дубликаты.
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.trim().to_lowercase() == other.trim().to_lowercase()
    }
}
