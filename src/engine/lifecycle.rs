//! Недельный жизненный цикл: замок записи и "финальный свисток".

use crate::domain::{Identity, RosterState, StatsDelta, Username};

/// Фиксированная длительность одной игры в минутах –
/// столько добавляем в time_played каждому сыгравшему.
pub const GAME_DURATION_MINUTES: u32 = 90;

/// Результат финального свистка: что записать в статистику и чем
/// заменить ростер. Оба результата вычисляются вместе, коммитит их
/// вызывающий (service) – и обязан попытаться записать оба.
#[derive(Clone, Debug)]
pub struct WhistleOutcome {
    /// Новый пустой ростер следующей недели.
    pub roster: RosterState,
    /// Кому и сколько добавить (только реально "свои" записи).
    pub stats: Vec<(Username, StatsDelta)>,
    /// Насколько увеличить глобальный счётчик сыгранных игр.
    pub games_delta: u64,
}

/// Перещёлкнуть замок записи. Замок ортогонален заполненности:
/// запись можно закрыть при любом количестве игроков.
pub fn toggle_lock(roster: &RosterState) -> RosterState {
    let mut next = roster.clone();
    next.is_registration_locked = !next.is_registration_locked;
    next
}

/// Финальный свисток.
///
/// Статистику получают только записи "за себя": гостевые и прокси-записи
/// ничьи счётчики не трогают. Авторитетный признак – `is_registered_user`;
/// сравнение имени с display_name аккаунта оставлено как shim совместимости
/// для записей, сделанных до появления флага, и не должно быть основным путём.
pub fn blow_final_whistle(roster: &RosterState, identities: &[Identity]) -> WhistleOutcome {
    let delta = StatsDelta {
        games_played: 1,
        time_played_minutes: GAME_DURATION_MINUTES,
    };

    let mut stats: Vec<(Username, StatsDelta)> = Vec::new();

    for player in roster.all_players() {
        let Some(identity) = identities.iter().find(|i| i.username == player.registered_by)
        else {
            continue;
        };

        let self_identified = player.is_registered_user
            // shim: старые записи без флага узнаём по совпадению имени
            || identity.display_name.as_deref() == Some(player.name.as_str());

        if self_identified && !stats.iter().any(|(u, _)| u == &identity.username) {
            stats.push((identity.username.clone(), delta));
        }
    }

    WhistleOutcome {
        roster: RosterState::new(),
        stats,
        games_delta: 1,
    }
}
