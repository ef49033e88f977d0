//! Menu input parsing

/// A menu selection; anything unrecognised maps to `Invalid`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    GenerateCharacter,
    GenerateEnemy,
    SingleFight,
    TeamFight,
    Stash,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub const OPTIONS: [(MenuChoice, &'static str); 6] = [
        (MenuChoice::GenerateCharacter, "Generate Character"),
        (MenuChoice::GenerateEnemy, "Generate Enemy"),
        (MenuChoice::SingleFight, "Character vs Enemy Fight"),
        (MenuChoice::TeamFight, "Squad vs Enemy Fight"),
        (MenuChoice::Stash, "Manage Stash"),
        (MenuChoice::Exit, "Exit"),
    ];

    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<u32>() {
            Ok(1) => MenuChoice::GenerateCharacter,
            Ok(2) => MenuChoice::GenerateEnemy,
            Ok(3) => MenuChoice::SingleFight,
            Ok(4) => MenuChoice::TeamFight,
            Ok(5) => MenuChoice::Stash,
            Ok(6) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }

    pub fn menu_lines() -> Vec<String> {
        Self::OPTIONS
            .iter()
            .enumerate()
            .map(|(i, (_, label))| format!("{}. {}", i + 1, label))
            .collect()
    }
}
