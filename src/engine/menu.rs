use crate::engine::actions::Action;
use crate::engine::output::Output;
use crate::world::{Entity, Room};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Interact,
    Move,
    Status,
    Quit,
}

impl MainChoice {
    const ALL: [MainChoice; 4] = [
        MainChoice::Interact,
        MainChoice::Move,
        MainChoice::Status,
        MainChoice::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MainChoice::Interact => "Interact with entities",
            MainChoice::Move => "Move to another room",
            MainChoice::Status => "View player status",
            MainChoice::Quit => "Quit game",
        }
    }

    /// Reads a main menu line. There is no 0 entry on this menu.
    pub fn parse(input: &str) -> Option<MainChoice> {
        parse_choice(input, Self::ALL.len())
            .and_then(|n| n.checked_sub(1))
            .map(|i| Self::ALL[i])
    }
}

/// Parse a menu selection in `0..=max`.
///
/// Anything else (not a number, negative, extra words, out of range) is
/// `None`, which callers treat as an invalid choice and re-prompt.
pub fn parse_choice(input: &str, max: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (n <= max).then_some(n)
}

pub fn main_menu(out: &mut Output) {
    out.menu(
        "=== Actions ===",
        MainChoice::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}. {}", i + 1, c.label())),
    );
    out.rule(15);
}

pub fn entity_menu(out: &mut Output, room: &Room) {
    let mut options: Vec<String> = room
        .entities()
        .iter()
        .enumerate()
        .map(|(i, e)| format!("  {}. {}", i + 1, e.name()))
        .collect();
    options.push("  0. Cancel".to_string());
    out.menu("What would you like to interact with?", options);
}

pub fn action_menu(out: &mut Output, entity: &Entity) {
    let mut options: Vec<String> = Action::ALL
        .iter()
        .enumerate()
        .map(|(i, a)| format!("  {}. {}", i + 1, a.label()))
        .collect();
    options.push("  0. Cancel".to_string());
    out.menu(
        format!("What do you want to do with the {}?", entity.name()),
        options,
    );
}

pub fn door_menu(out: &mut Output, room: &Room) {
    let mut options: Vec<String> = room
        .doors()
        .iter()
        .enumerate()
        .map(|(i, d)| format!("  {}. {}", i + 1, d.label))
        .collect();
    options.push("  0. Stay here".to_string());
    out.menu("Where would you like to go?", options);
}
