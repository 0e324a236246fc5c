//! Распределение мест: куда падает новая запись и как закрывается дыра
//! после удаления из основы.

use crate::domain::{Identity, Player, PlayerId, RosterState};
use crate::engine::errors::RosterError;

/// Сколько активных записей может держать один не-админский аккаунт
/// (считается по `registered_by` через основу и запасных, включая "за себя").
pub const REGISTRATION_QUOTA: usize = 2;

/// Данные новой гостевой записи.
#[derive(Clone, Debug)]
pub struct NewPlayer {
    pub name: String,
    pub phone_number: Option<String>,
}

/// Результат удаления: новый снапшот плюс сигнальный флаг для UI.
#[derive(Clone, Debug)]
pub struct RemovalOutcome {
    pub roster: RosterState,
    /// Удалённый игрок числился в опубликованных командах – стоит
    /// предупредить, что публикация теперь ссылается на отсутствующего.
    pub was_in_published_teams: bool,
}

/// Общие проверки перед любой записью. Порядок фиксирован:
/// замок → имя → квота → дубликат имени → дубликат телефона.
fn validate_candidate(
    roster: &RosterState,
    name: &str,
    phone: Option<&str>,
    actor: &Identity,
) -> Result<(), RosterError> {
    if roster.is_registration_locked && !actor.is_admin {
        return Err(RosterError::RegistrationLocked);
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(RosterError::EmptyName);
    }

    if !actor.is_admin && roster.count_registered_by(&actor.username) >= REGISTRATION_QUOTA {
        return Err(RosterError::QuotaExceeded {
            username: actor.username.clone(),
            limit: REGISTRATION_QUOTA,
        });
    }

    if roster.contains_name(name) {
        return Err(RosterError::DuplicateName(name.to_string()));
    }

    if let Some(phone) = phone {
        if !phone.is_empty() && roster.contains_phone(phone) {
            return Err(RosterError::DuplicatePhone(phone.to_string()));
        }
    }

    Ok(())
}

/// Положить игрока в первое свободное место основы, иначе – в хвост запасных.
fn place(roster: &mut RosterState, player: Player) {
    match roster.first_open_slot() {
        Some(index) => roster.main_roster[index] = Some(player),
        None => roster.substitutes.push(player),
    }
}

/// Записать гостя (запись "за другого").
///
/// `id` и `now` передаёт вызывающий – движок сам время не читает.
pub fn register_guest(
    roster: &RosterState,
    candidate: NewPlayer,
    actor: &Identity,
    id: PlayerId,
    now: i64,
) -> Result<RosterState, RosterError> {
    validate_candidate(roster, &candidate.name, candidate.phone_number.as_deref(), actor)?;

    let player = Player::guest(
        id,
        candidate.name.trim().to_string(),
        candidate.phone_number.filter(|p| !p.is_empty()),
        actor.username.clone(),
        now,
    );

    let mut next = roster.clone();
    place(&mut next, player);
    Ok(next)
}

/// Записаться "за себя".
///
/// Требует настроенного display_name; вторая запись "за себя" от того же
/// аккаунта отклоняется. Запись сразу подтверждена – раз человек записался
/// сам, он собирается прийти.
pub fn register_self(
    roster: &RosterState,
    actor: &Identity,
    id: PlayerId,
    now: i64,
) -> Result<RosterState, RosterError> {
    let display_name = match actor.display_name.as_deref() {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => return Err(RosterError::NoDisplayName),
    };

    if roster.has_self_registration(&actor.username) {
        return Err(RosterError::AlreadySelfRegistered);
    }

    validate_candidate(roster, &display_name, actor.phone_number.as_deref(), actor)?;

    let player = Player::self_registered(
        id,
        display_name,
        actor.phone_number.clone(),
        actor.username.clone(),
        now,
    );

    let mut next = roster.clone();
    place(&mut next, player);
    Ok(next)
}

/// Удалить игрока по id.
///
/// Если место освободилось в основе и есть запасные – голова очереди
/// (самый старый по записи) синхронно занимает ровно этот индекс.
/// Это единственный путь продвижения запасных.
pub fn remove_player(
    roster: &RosterState,
    id: &PlayerId,
) -> Result<RemovalOutcome, RosterError> {
    let was_in_published_teams = roster
        .published_teams
        .as_ref()
        .map(|teams| teams.all_members().any(|p| &p.id == id))
        .unwrap_or(false);

    let mut next = roster.clone();

    if let Some(index) = next.main_slot_of(id) {
        next.main_roster[index] = None;
        if !next.substitutes.is_empty() {
            let promoted = next.substitutes.remove(0);
            next.main_roster[index] = Some(promoted);
        }
        return Ok(RemovalOutcome {
            roster: next,
            was_in_published_teams,
        });
    }

    let before = next.substitutes.len();
    next.substitutes.retain(|p| &p.id != id);
    if next.substitutes.len() == before {
        return Err(RosterError::PlayerNotFound(id.clone()));
    }

    Ok(RemovalOutcome {
        roster: next,
        was_in_published_teams,
    })
}

/// Может ли актор удалять/менять эту запись: админ или автор записи.
pub fn can_modify_entry(actor: &Identity, player: &Player) -> bool {
    actor.is_admin || player.registered_by == actor.username
}
