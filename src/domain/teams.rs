use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::Username;

/// Одна из трёх команд. Третья может оказаться пустой.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TeamId {
    Team1,
    Team2,
    Team3,
}

impl TeamId {
    pub const ALL: [TeamId; 3] = [TeamId::Team1, TeamId::Team2, TeamId::Team3];

    /// Человекочитаемый номер для сообщений.
    pub fn label(&self) -> &'static str {
        match self {
            TeamId::Team1 => "Team 1",
            TeamId::Team2 => "Team 2",
            TeamId::Team3 => "Team 3",
        }
    }
}

/// Опубликованный (разосланный всем) расклад по командам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishedTeams {
    pub team1: Vec<Player>,
    pub team2: Vec<Player>,
    pub team3: Vec<Player>,
    /// Момент публикации, unix-миллисекунды.
    pub published_at: i64,
    /// Кто опубликовал.
    pub published_by: Username,
}

impl PublishedTeams {
    pub fn team(&self, id: TeamId) -> &[Player] {
        match id {
            TeamId::Team1 => &self.team1,
            TeamId::Team2 => &self.team2,
            TeamId::Team3 => &self.team3,
        }
    }

    /// Все участники всех трёх команд.
    pub fn all_members(&self) -> impl Iterator<Item = &Player> {
        self.team1.iter().chain(&self.team2).chain(&self.team3)
    }
}

/// Черновик команд на время ручной перестановки.
///
/// Живёт только в памяти редактирующего: отмена просто выбрасывает его,
/// публикация превращает в `PublishedTeams`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditingTeams {
    pub team1: Vec<Player>,
    pub team2: Vec<Player>,
    pub team3: Vec<Player>,
}

impl EditingTeams {
    pub fn team(&self, id: TeamId) -> &Vec<Player> {
        match id {
            TeamId::Team1 => &self.team1,
            TeamId::Team2 => &self.team2,
            TeamId::Team3 => &self.team3,
        }
    }

    pub fn team_mut(&mut self, id: TeamId) -> &mut Vec<Player> {
        match id {
            TeamId::Team1 => &mut self.team1,
            TeamId::Team2 => &mut self.team2,
            TeamId::Team3 => &mut self.team3,
        }
    }

    /// Глубокая копия опубликованного расклада для повторного редактирования.
    /// Отмена правок не должна трогать опубликованный снапшот.
    pub fn from_published(published: &PublishedTeams) -> Self {
        Self {
            team1: published.team1.clone(),
            team2: published.team2.clone(),
            team3: published.team3.clone(),
        }
    }

    pub fn total_players(&self) -> usize {
        self.team1.len() + self.team2.len() + self.team3.len()
    }
}
