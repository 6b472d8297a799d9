use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::world::{Clue, Entity, Item, Monster};

pub const MONSTER_DEFEAT_SCORE: u32 = 50;
pub const CLUE_REVEAL_SCORE: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Attack,
    Collect,
    Examine,
}

impl Action {
    /// Menu order.
    pub const ALL: [Action; 3] = [Action::Attack, Action::Collect, Action::Examine];

    pub fn label(self) -> &'static str {
        match self {
            Action::Attack => "Attack",
            Action::Collect => "Collect",
            Action::Examine => "Examine",
        }
    }

    /// 1-based menu choice to action.
    pub fn from_choice(choice: usize) -> Option<Action> {
        choice.checked_sub(1).and_then(|i| Action::ALL.get(i).copied())
    }

    fn verb(self) -> &'static str {
        match self {
            Action::Attack => "attack",
            Action::Collect => "collect",
            Action::Examine => "examine",
        }
    }

    fn gerund(self) -> &'static str {
        match self {
            Action::Attack => "attacking",
            Action::Collect => "collecting",
            Action::Examine => "examining",
        }
    }
}

/// What an action did, for callers that need more than the narration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The monster survived and struck back.
    Hit { dealt: u32, remaining: u32, retaliation: u32 },
    Defeated { dealt: u32 },
    AlreadyDefeated,
    Collected { value: u32 },
    AlreadyCollected,
    Revealed,
    Recalled,
    Inspected,
    /// Wrong action for this kind of entity; nothing changed.
    Redirected { suggested: Action },
}

impl Outcome {
    pub fn score_delta(&self) -> u32 {
        match self {
            Outcome::Defeated { .. } => MONSTER_DEFEAT_SCORE,
            Outcome::Collected { value } => *value,
            Outcome::Revealed => CLUE_REVEAL_SCORE,
            _ => 0,
        }
    }
}

/// Apply `action` to `entity` on behalf of `player`.
pub fn apply_action(
    out: &mut Output,
    action: Action,
    entity: &mut Entity,
    player: &mut Player,
) -> Outcome {
    match (action, entity) {
        (Action::Attack, Entity::Monster(m)) => attack_monster(out, m, player),
        (Action::Attack, Entity::Item(i)) => redirect(out, action, &i.name, Action::Collect),
        (Action::Attack, Entity::Clue(c)) => redirect(out, action, &c.name, Action::Examine),

        (Action::Collect, Entity::Monster(m)) => redirect(out, action, &m.name, Action::Attack),
        (Action::Collect, Entity::Item(i)) => collect_item(out, i, player),
        (Action::Collect, Entity::Clue(c)) => redirect(out, action, &c.name, Action::Examine),

        (Action::Examine, Entity::Monster(m)) => examine_monster(out, m),
        (Action::Examine, Entity::Item(i)) => examine_item(out, i),
        (Action::Examine, Entity::Clue(c)) => examine_clue(out, c, player),
    }
}

fn redirect(out: &mut Output, action: Action, name: &str, suggested: Action) -> Outcome {
    out.say(format!(
        "You can't {} the {}! Try {} it instead.",
        action.verb(),
        name,
        suggested.gerund()
    ));
    Outcome::Redirected { suggested }
}

fn attack_monster(out: &mut Output, monster: &mut Monster, player: &mut Player) -> Outcome {
    if !monster.alive {
        out.say(format!("The {} has already been defeated.", monster.name));
        return Outcome::AlreadyDefeated;
    }

    let dealt = player.attack();
    out.event(format!("{} attacks the {}!", player.name(), monster.name));
    out.event(format!("You deal {dealt} damage!"));

    if monster.take_damage(dealt) {
        out.event(format!("The {} has been defeated!", monster.name));
        player.add_score(MONSTER_DEFEAT_SCORE);
        out.event(format!("+{MONSTER_DEFEAT_SCORE} points!"));
        return Outcome::Defeated { dealt };
    }

    out.event(format!(
        "The {} has {} health remaining.",
        monster.name, monster.health
    ));
    out.event(format!("The {} strikes back!", monster.name));
    player.take_damage(monster.damage);
    out.event(format!(
        "You take {} damage! Health: {}/{}",
        monster.damage,
        player.health(),
        player.max_health()
    ));

    Outcome::Hit {
        dealt,
        remaining: monster.health,
        retaliation: monster.damage,
    }
}

fn collect_item(out: &mut Output, item: &mut Item, player: &mut Player) -> Outcome {
    if item.collected {
        out.say(format!("You have already collected the {}.", item.name));
        return Outcome::AlreadyCollected;
    }

    item.collected = true;
    player.add_to_inventory(item.name.clone());
    player.add_score(item.value);

    out.event(format!("You collect the {}!", item.name));
    out.event(item.desc.clone());
    out.event(format!("+{} points!", item.value));

    Outcome::Collected { value: item.value }
}

fn examine_monster(out: &mut Output, monster: &Monster) -> Outcome {
    out.event(format!("You examine the {}:", monster.name));
    out.event(monster.desc.clone());
    if monster.alive {
        out.event(format!("Health: {}", monster.health));
        out.event(format!("Damage: {}", monster.damage));
        out.event("Status: Hostile and ready to attack!");
    } else {
        out.event("Status: Defeated");
    }
    Outcome::Inspected
}

fn examine_item(out: &mut Output, item: &Item) -> Outcome {
    out.event(format!("You examine the {}:", item.name));
    out.event(item.desc.clone());
    out.event(format!("Value: {} points", item.value));
    if item.collected {
        out.event("Status: Already collected");
    } else {
        out.event("Status: Available to collect");
    }
    Outcome::Inspected
}

fn examine_clue(out: &mut Output, clue: &mut Clue, player: &mut Player) -> Outcome {
    out.event(format!("You examine the {}:", clue.name));
    out.event(clue.desc.clone());

    if clue.examined {
        out.say(format!("Previously discovered: {}", clue.hidden));
        return Outcome::Recalled;
    }

    clue.examined = true;
    player.add_score(CLUE_REVEAL_SCORE);

    out.say("*** Hidden Information Revealed: ***");
    out.say(clue.hidden.clone());
    out.say(format!("+{CLUE_REVEAL_SCORE} points for discovering a clue!"));
    Outcome::Revealed
}
