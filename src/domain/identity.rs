use serde::{Deserialize, Serialize};

use crate::domain::Username;

/// Накопленная статистика аккаунта.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityStats {
    pub games_played: u32,
    /// Минуты на поле.
    pub time_played_minutes: u32,
    /// Голы заносятся вручную, финальный свисток их не трогает.
    pub goals_scored: u32,
}

/// Аккаунт из каталога пользователей.
///
/// Для движка это почти read-only справочник: ростер хранит записи
/// `Player`, а сюда мы ходим за display_name, флагами и статистикой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub username: Username,
    /// Имя игрока, как оно пишется в ростер. Без него нельзя записаться "за себя".
    pub display_name: Option<String>,
    pub phone_number: Option<String>,
    pub is_admin: bool,
    /// Заблокированный аккаунт не может менять ростер вообще.
    pub is_blocked: bool,
    pub stats: IdentityStats,
}

impl Identity {
    pub fn new(username: impl Into<Username>) -> Self {
        Self {
            username: username.into(),
            display_name: None,
            phone_number: None,
            is_admin: false,
            is_blocked: false,
            stats: IdentityStats::default(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }

    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

/// Прибавка к статистике за одну игру.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsDelta {
    pub games_played: u32,
    pub time_played_minutes: u32,
}
