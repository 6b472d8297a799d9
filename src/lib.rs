pub mod engine;
pub mod error;
pub mod logging;
pub mod world;

use engine::{
    Action, MainChoice, Output, Player, action_menu, apply_action, door_menu, entity_menu,
    main_menu, parse_choice, render_dungeon_info, render_final_score, render_game_over,
    render_room, render_status, render_welcome, take_door,
};
use world::{Dungeon, Room, RoomId};

pub use error::{NavigationError, WorldError};
pub use world::{builtin_dungeon, load_dungeon_from_file, load_dungeon_from_str};

/// Which menu the next line of input answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Main,
    Entity,
    Action { entity: usize },
    Door,
}

pub struct GameState {
    pub dungeon: Dungeon,
    pub player: Player,
    pub current_room: RoomId,
    prompt: Prompt,
    finished: bool,
}

impl GameState {
    pub fn new(dungeon: Dungeon) -> Self {
        let player = Player::from_start(&dungeon.player);
        let current_room = dungeon.entrance();
        GameState {
            dungeon,
            player,
            current_room,
            prompt: Prompt::Main,
            finished: false,
        }
    }

    pub fn prompt(&self) -> Prompt {
        self.prompt
    }

    pub fn room(&self) -> &Room {
        self.dungeon.room(self.current_room)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Opening text: dungeon info, welcome banner and the first turn.
    pub fn initialize(&mut self) -> Output {
        let mut out = Output::new();
        render_dungeon_info(&mut out, &self.dungeon);
        render_welcome(&mut out, &self.dungeon);
        self.begin_turn(&mut out);
        out
    }

    /// Process one line of player input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();
        if self.finished {
            return (out, true);
        }
        if !self.player.is_alive() {
            self.lose(&mut out);
            return (out, true);
        }

        match self.prompt {
            Prompt::Main => self.step_main(&mut out, input),
            Prompt::Entity => self.step_entity(&mut out, input),
            Prompt::Action { entity } => self.step_action(&mut out, input, entity),
            Prompt::Door => self.step_door(&mut out, input),
        }

        (out, self.finished)
    }

    /// Input ran out; treated like choosing Quit.
    pub fn end_of_input(&mut self) -> Output {
        let mut out = Output::new();
        if !self.finished {
            out.event("Goodbye.");
            self.finish(&mut out);
        }
        out
    }

    fn begin_turn(&mut self, out: &mut Output) {
        self.prompt = Prompt::Main;
        render_room(out, &self.dungeon, self.current_room);
        main_menu(out);
    }

    fn finish(&mut self, out: &mut Output) {
        render_final_score(out, &self.player);
        self.finished = true;
        tracing::info!(
            score = self.player.score(),
            alive = self.player.is_alive(),
            "game over"
        );
    }

    fn lose(&mut self, out: &mut Output) {
        render_game_over(out);
        self.finish(out);
    }

    fn invalid(out: &mut Output) {
        out.event("Invalid choice. Try again.");
    }

    fn step_main(&mut self, out: &mut Output, input: &str) {
        let Some(choice) = MainChoice::parse(input) else {
            Self::invalid(out);
            self.begin_turn(out);
            return;
        };

        match choice {
            MainChoice::Interact => {
                if self.room().entities().is_empty() {
                    out.event("There's nothing to interact with in this room.");
                    self.begin_turn(out);
                } else {
                    entity_menu(out, self.room());
                    self.prompt = Prompt::Entity;
                }
            }
            MainChoice::Move => {
                if self.room().doors().is_empty() {
                    out.event("There are no exits from this room!");
                    self.begin_turn(out);
                } else {
                    door_menu(out, self.room());
                    self.prompt = Prompt::Door;
                }
            }
            MainChoice::Status => {
                render_status(out, &self.player);
                self.begin_turn(out);
            }
            MainChoice::Quit => {
                out.event("Thanks for playing!");
                self.finish(out);
            }
        }
    }

    fn step_entity(&mut self, out: &mut Output, input: &str) {
        let count = self.room().entities().len();
        match parse_choice(input, count) {
            None => {
                Self::invalid(out);
                entity_menu(out, self.room());
            }
            Some(0) => self.begin_turn(out),
            Some(n) => {
                let entity = n - 1;
                if let Some(e) = self.room().entity(entity) {
                    action_menu(out, e);
                    self.prompt = Prompt::Action { entity };
                }
            }
        }
    }

    fn step_action(&mut self, out: &mut Output, input: &str, entity: usize) {
        let choice = parse_choice(input, Action::ALL.len());
        let action = match choice {
            None => {
                Self::invalid(out);
                if let Some(e) = self.room().entity(entity) {
                    action_menu(out, e);
                }
                return;
            }
            Some(0) => {
                out.event("No action performed.");
                self.begin_turn(out);
                return;
            }
            Some(n) => match Action::from_choice(n) {
                Some(a) => a,
                None => return,
            },
        };

        let room = self.dungeon.room_mut(self.current_room);
        let Some(target) = room.entity_mut(entity) else {
            self.begin_turn(out);
            return;
        };
        let outcome = apply_action(out, action, target, &mut self.player);
        tracing::debug!(
            room = %self.room().id,
            ?outcome,
            gained = outcome.score_delta(),
            score = self.player.score(),
            "action applied"
        );

        if self.player.is_alive() {
            self.begin_turn(out);
        } else {
            self.lose(out);
        }
    }

    fn step_door(&mut self, out: &mut Output, input: &str) {
        let count = self.room().doors().len();
        match parse_choice(input, count) {
            None => {
                Self::invalid(out);
                door_menu(out, self.room());
            }
            Some(0) => {
                out.event("You stay where you are.");
                self.begin_turn(out);
            }
            Some(n) => {
                if let Err(e) = take_door(out, &self.dungeon, &mut self.current_room, n - 1) {
                    tracing::warn!(error = %e, "door choice passed the menu but not the room");
                    Self::invalid(out);
                }
                self.begin_turn(out);
            }
        }
    }
}
