//! Подтверждения участия и признак устаревания опубликованных команд.

use crate::domain::{PlayerId, RosterState};
use crate::engine::errors::RosterError;

/// Выставить флаг подтверждения игроку – одинаково для основы и запасных.
/// Чистое обновление поля, позиция игрока не меняется.
pub fn set_confirmed(
    roster: &RosterState,
    id: &PlayerId,
    value: bool,
) -> Result<RosterState, RosterError> {
    let mut next = roster.clone();

    for slot in next.main_roster.iter_mut() {
        if let Some(player) = slot {
            if &player.id == id {
                player.is_confirmed = value;
                return Ok(next);
            }
        }
    }

    for player in next.substitutes.iter_mut() {
        if &player.id == id {
            player.is_confirmed = value;
            return Ok(next);
        }
    }

    Err(RosterError::PlayerNotFound(id.clone()))
}

/// Подтвердить всех одним проходом – один результирующий снапшот,
/// не по записи на игрока.
pub fn confirm_all(roster: &RosterState) -> RosterState {
    set_all(roster, true)
}

/// Снять подтверждение у всех одним проходом.
pub fn unconfirm_all(roster: &RosterState) -> RosterState {
    set_all(roster, false)
}

fn set_all(roster: &RosterState, value: bool) -> RosterState {
    let mut next = roster.clone();
    for slot in next.main_roster.iter_mut() {
        if let Some(player) = slot {
            player.is_confirmed = value;
        }
    }
    for player in next.substitutes.iter_mut() {
        player.is_confirmed = value;
    }
    next
}

/// Устарели ли опубликованные команды.
///
/// true, если публикация есть и хотя бы один её участник либо больше
/// не существует в ростере, либо существует, но не подтверждён.
/// Всегда пересчитывается на чтении, нигде не хранится.
pub fn needs_team_update(roster: &RosterState) -> bool {
    let Some(teams) = roster.published_teams.as_ref() else {
        return false;
    };

    teams.all_members().any(|member| {
        match roster.find_player(&member.id) {
            Some(current) => !current.is_confirmed,
            None => true,
        }
    })
}
