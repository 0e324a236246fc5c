//! Тесты форматов исходящих сообщений: на эти тексты завязан групповой чат.

use roster_engine::domain::{Player, PublishedTeams, RosterState};
use roster_engine::notify::{format_roster_message, format_teams_message};

fn guest(id: &str, name: &str, confirmed: bool) -> Player {
    let mut player = Player::guest(
        id.to_string(),
        name.to_string(),
        None,
        "admin".to_string(),
        0,
    );
    player.is_confirmed = confirmed;
    player
}

#[test]
fn roster_message_lists_all_slots_zero_padded() {
    let mut roster = RosterState::new();
    roster.main_roster[0] = Some(guest("p1", "Alice", true));
    roster.main_roster[1] = Some(guest("p2", "Bob", false));

    let text = format_roster_message(&roster);

    assert!(text.starts_with("<b>Main Roster:</b>\n"));
    assert!(text.contains("01. Alice ✅\n"));
    assert!(text.contains("02. Bob\n"));
    // Свободные места перечисляются пустыми, с ведущим нулём до десятки.
    assert!(text.contains("03. \n"));
    assert!(text.contains("10. \n"));
    assert!(text.contains("18. \n"));
    // Запасных нет – секции нет.
    assert!(!text.contains("Substitutes"));
}

#[test]
fn roster_message_appends_substitutes_section() {
    let mut roster = RosterState::new();
    roster.main_roster[0] = Some(guest("p1", "Alice", true));
    roster.substitutes.push(guest("s1", "Sub One", true));
    roster.substitutes.push(guest("s2", "Sub Two", false));

    let text = format_roster_message(&roster);

    let section = text
        .split("<b>Substitutes:</b>\n")
        .nth(1)
        .expect("нет секции запасных");
    assert!(section.contains("01. Sub One ✅\n"));
    assert!(section.contains("02. Sub Two\n"));
}

#[test]
fn teams_message_numbers_players_per_team() {
    let teams = PublishedTeams {
        team1: vec![guest("p1", "Alice", true), guest("p2", "Bob", true)],
        team2: vec![guest("p3", "Carol", true)],
        team3: vec![guest("p4", "Dave", true)],
        published_at: 0,
        published_by: "admin".to_string(),
    };

    let text = format_teams_message(&teams);

    assert!(text.starts_with("<b>TEAMS PUBLISHED!</b>\n"));
    assert!(text.contains("<b>Team 1:</b>\n1. Alice\n2. Bob\n"));
    assert!(text.contains("<b>Team 2:</b>\n1. Carol\n"));
    assert!(text.contains("<b>Team 3:</b>\n1. Dave\n"));
    // Без телефонов и без галочек.
    assert!(!text.contains("✅"));
}

#[test]
fn empty_third_team_is_omitted() {
    let teams = PublishedTeams {
        team1: vec![guest("p1", "Alice", true)],
        team2: vec![guest("p2", "Bob", true)],
        team3: vec![],
        published_at: 0,
        published_by: "admin".to_string(),
    };

    let text = format_teams_message(&teams);
    assert!(!text.contains("Team 3"));
}
