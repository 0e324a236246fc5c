//! Тексты сообщений. Формат фиксированный – на него завязаны подписчики
//! группового чата, меняем только вместе с ними.

use std::fmt::Write;

use crate::domain::{PublishedTeams, RosterState, TeamId, MAIN_ROSTER_SIZE};

/// Сообщение "ростер изменился": все 18 мест основы по номерам
/// (двузначным, с ведущим нулём), галочка у подтверждённых, затем
/// секция запасных в том же виде. Уходит после дебаунс-окна.
pub fn format_roster_message(roster: &RosterState) -> String {
    let mut text = String::from("<b>Main Roster:</b>\n");

    for index in 0..MAIN_ROSTER_SIZE {
        let slot_number = index + 1;
        match roster.main_roster.get(index).and_then(|s| s.as_ref()) {
            Some(player) => {
                let mark = if player.is_confirmed { " ✅" } else { "" };
                let _ = writeln!(text, "{slot_number:02}. {}{mark}", player.name);
            }
            None => {
                let _ = writeln!(text, "{slot_number:02}. ");
            }
        }
    }

    if !roster.substitutes.is_empty() {
        text.push_str("\n<b>Substitutes:</b>\n");
        for (index, player) in roster.substitutes.iter().enumerate() {
            let mark = if player.is_confirmed { " ✅" } else { "" };
            let _ = writeln!(text, "{:02}. {}{mark}", index + 1, player.name);
        }
    }

    text
}

/// Сообщение "команды опубликованы": каждая команда списком
/// "номер. имя" (1-based), без телефонов и галочек; третья команда
/// только если непустая. Уходит немедленно, мимо дебаунса.
pub fn format_teams_message(teams: &PublishedTeams) -> String {
    let mut text = String::from("<b>TEAMS PUBLISHED!</b>\n");

    for id in TeamId::ALL {
        let members = teams.team(id);
        if id == TeamId::Team3 && members.is_empty() {
            continue;
        }
        let _ = write!(text, "\n<b>{}:</b>\n", id.label());
        for (index, player) in members.iter().enumerate() {
            let _ = writeln!(text, "{}. {}", index + 1, player.name);
        }
    }

    text
}
