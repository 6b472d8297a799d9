use crate::world::PlayerStart;

/// The adventurer. Health stays within `0..=max_health`, score never
/// goes down and the inventory only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    health: u32,
    max_health: u32,
    attack: u32,
    score: u32,
    inventory: Vec<String>,
}

impl Player {
    pub fn new(name: impl Into<String>, health: u32, attack: u32) -> Self {
        Player {
            name: name.into(),
            health,
            max_health: health,
            attack,
            score: 0,
            inventory: Vec::new(),
        }
    }

    pub fn from_start(start: &PlayerStart) -> Self {
        Player::new(start.name.clone(), start.health, start.attack)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn add_to_inventory(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }
}
