//! Генерация команд и ручная перестановка черновика.

use crate::domain::{EditingTeams, PublishedTeams, RosterState, TeamId, Username};
use crate::engine::errors::RosterError;
use crate::engine::RandomSource;

/// Минимум подтверждённых игроков основы для генерации.
pub const MIN_PLAYERS_FOR_TEAMS: usize = 6;

/// Разбить подтверждённых игроков основы на (до) три команды.
///
/// Содержимое случайное (перемешивание через `RandomSource`), форма
/// детерминированная: target = ceil(n/3), команды заполняются
/// ПОСЛЕДОВАТЕЛЬНО – team1 до target, team2 до target, team3 остаток.
/// Это не round-robin: при n=10 получится 4/4/2, а не 4/3/3.
/// Никакого автоматического баланса по силе – балансируют руками.
pub fn generate_teams<R: RandomSource>(
    roster: &RosterState,
    rng: &mut R,
) -> Result<EditingTeams, RosterError> {
    let mut pool = roster.confirmed_main_players();
    let n = pool.len();
    if n < MIN_PLAYERS_FOR_TEAMS {
        return Err(RosterError::NotEnoughConfirmed {
            have: n,
            need: MIN_PLAYERS_FOR_TEAMS,
        });
    }

    rng.shuffle(&mut pool);

    let target = n.div_ceil(3);
    let take1 = target.min(pool.len());
    let team1: Vec<_> = pool.drain(..take1).collect();
    let take2 = target.min(pool.len());
    let team2: Vec<_> = pool.drain(..take2).collect();
    let team3 = pool;

    Ok(EditingTeams { team1, team2, team3 })
}

/// Переставить игрока в черновике.
///
/// - `to_index = Some(занятая позиция)` – обмен местами двух игроков;
/// - `to_index = Some(длина команды)` или `None` – убрать из источника
///   и дописать в хвост целевой команды;
/// - перенос в ту же позицию – no-op.
///
/// Всё только в памяти черновика, опубликованный снапшот не трогаем.
pub fn move_player(
    draft: &mut EditingTeams,
    from: TeamId,
    from_index: usize,
    to: TeamId,
    to_index: Option<usize>,
) -> Result<(), RosterError> {
    if from_index >= draft.team(from).len() {
        return Err(RosterError::InvalidTeamSlot {
            team: from.label(),
            index: from_index,
        });
    }

    match to_index {
        Some(to_index) if from == to && to_index == from_index => Ok(()),

        Some(to_index) if to_index < draft.team(to).len() => {
            // Обе позиции заняты – меняем игроков местами.
            if from == to {
                draft.team_mut(from).swap(from_index, to_index);
            } else {
                let from_player = draft.team(from)[from_index].clone();
                let to_player =
                    std::mem::replace(&mut draft.team_mut(to)[to_index], from_player);
                draft.team_mut(from)[from_index] = to_player;
            }
            Ok(())
        }

        Some(to_index) if to_index > draft.team(to).len() => Err(RosterError::InvalidTeamSlot {
            team: to.label(),
            index: to_index,
        }),

        // Позиция не указана (или равна длине) – append в хвост.
        _ => {
            let moved = draft.team_mut(from).remove(from_index);
            draft.team_mut(to).push(moved);
            Ok(())
        }
    }
}

/// Опубликовать черновик: с этого момента расклад durable и рассылается.
pub fn publish_teams(
    roster: &RosterState,
    draft: &EditingTeams,
    publisher: &Username,
    now: i64,
) -> RosterState {
    let mut next = roster.clone();
    next.published_teams = Some(PublishedTeams {
        team1: draft.team1.clone(),
        team2: draft.team2.clone(),
        team3: draft.team3.clone(),
        published_at: now,
        published_by: publisher.clone(),
    });
    next
}

/// Снять публикацию. Вместе с ней исчезает и признак устаревания.
pub fn unpublish_teams(roster: &RosterState) -> RosterState {
    let mut next = roster.clone();
    next.published_teams = None;
    next
}

/// Черновик для повторного редактирования уже опубликованных команд.
/// Глубокая копия: отмена правок оставит публикацию нетронутой.
pub fn draft_from_published(roster: &RosterState) -> Result<EditingTeams, RosterError> {
    roster
        .published_teams
        .as_ref()
        .map(EditingTeams::from_published)
        .ok_or(RosterError::NoPublishedTeams)
}
