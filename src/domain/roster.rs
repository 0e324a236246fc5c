use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::teams::PublishedTeams;
use crate::domain::{PlayerId, Username};

/// Количество мест в основном составе.
pub const MAIN_ROSTER_SIZE: usize = 18;

/// Индекс места в основном составе (0..MAIN_ROSTER_SIZE-1).
pub type SlotIndex = usize;

/// Состояние ростера одной недели – единственный общий изменяемый документ.
///
/// Каждая операция движка берёт снапшот и возвращает новый; частичных
/// состояний наружу не уходит.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterState {
    /// Основной состав: индекс вектора = номер места.
    /// None – место свободно. Дыры легальны и не уплотняются,
    /// кроме синхронного продвижения запасного при удалении.
    pub main_roster: Vec<Option<Player>>,

    /// Запасные в порядке записи; порядок = очередь на продвижение.
    pub substitutes: Vec<Player>,

    /// Закрыта ли запись (для не-админов).
    pub is_registration_locked: bool,

    /// Опубликованные команды или None, если публикации сейчас нет.
    pub published_teams: Option<PublishedTeams>,
}

impl RosterState {
    /// Пустой ростер: 18 свободных мест, без запасных, запись открыта.
    pub fn new() -> Self {
        Self {
            main_roster: vec![None; MAIN_ROSTER_SIZE],
            substitutes: Vec::new(),
            is_registration_locked: false,
            published_teams: None,
        }
    }

    /// Все игроки: основной состав (без дыр) + запасные, в этом порядке.
    pub fn all_players(&self) -> impl Iterator<Item = &Player> {
        self.main_roster
            .iter()
            .filter_map(|slot| slot.as_ref())
            .chain(self.substitutes.iter())
    }

    /// Найти игрока по id где угодно (основа или запасные).
    pub fn find_player(&self, id: &str) -> Option<&Player> {
        self.all_players().find(|p| p.id == id)
    }

    /// Первое свободное место слева направо.
    pub fn first_open_slot(&self) -> Option<SlotIndex> {
        self.main_roster.iter().position(|slot| slot.is_none())
    }

    /// Есть ли игрок с таким именем (без учёта регистра).
    pub fn contains_name(&self, name: &str) -> bool {
        self.all_players().any(|p| p.name_matches(name))
    }

    /// Есть ли игрок с точно таким телефоном.
    pub fn contains_phone(&self, phone: &str) -> bool {
        self.all_players()
            .any(|p| p.phone_number.as_deref() == Some(phone))
    }

    /// Сколько записей сделано этим аккаунтом (для квоты).
    pub fn count_registered_by(&self, username: &str) -> usize {
        self.all_players()
            .filter(|p| p.registered_by == username)
            .count()
    }

    /// Есть ли уже запись "за себя" от этого аккаунта.
    pub fn has_self_registration(&self, username: &Username) -> bool {
        self.all_players()
            .any(|p| p.is_registered_user && &p.registered_by == username)
    }

    /// Подтверждённые игроки основного состава – вход генератора команд.
    /// Запасные не участвуют, даже подтверждённые.
    pub fn confirmed_main_players(&self) -> Vec<Player> {
        self.main_roster
            .iter()
            .filter_map(|slot| slot.as_ref())
            .filter(|p| p.is_confirmed)
            .cloned()
            .collect()
    }

    /// Общее число игроков (основа + запасные).
    pub fn player_count(&self) -> usize {
        self.all_players().count()
    }

    /// Заполнена ли основа целиком.
    pub fn is_main_roster_full(&self) -> bool {
        self.first_open_slot().is_none()
    }

    /// Индекс места игрока в основе, если он там.
    pub fn main_slot_of(&self, id: &PlayerId) -> Option<SlotIndex> {
        self.main_roster.iter().position(|slot| {
            slot.as_ref().map(|p| &p.id == id).unwrap_or(false)
        })
    }
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new()
    }
}
