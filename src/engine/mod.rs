mod actions;
mod menu;
mod movement;
mod output;
mod player;
mod render;

pub use actions::{Action, CLUE_REVEAL_SCORE, MONSTER_DEFEAT_SCORE, Outcome, apply_action};

pub use menu::{MainChoice, action_menu, door_menu, entity_menu, main_menu, parse_choice};

pub use movement::take_door;
pub use output::{Output, OutputBlock};
pub use player::Player;
pub use render::{
    render_dungeon_info, render_final_score, render_game_over, render_room, render_status,
    render_welcome,
};
