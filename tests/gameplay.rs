//! Full playthroughs of the temple, driven through the same line protocol
//! as the console binary.

use temple_crawl::engine::{Action, Outcome, Output, apply_action};
use temple_crawl::world::Entity;
use temple_crawl::{GameState, Prompt, builtin_dungeon};

fn new_game() -> GameState {
    let mut game = GameState::new(builtin_dungeon().expect("built-in temple is valid"));
    game.initialize();
    game
}

fn play(game: &mut GameState, lines: &[&str]) -> String {
    let mut transcript = String::new();
    for line in lines {
        let (out, quit) = game.step(line);
        transcript.push_str(&out.to_string());
        if quit {
            break;
        }
    }
    transcript
}

// =============================================================================
// Combat
// =============================================================================

#[test]
fn giant_spider_two_hits() {
    let mut game = new_game();
    assert_eq!(game.player.health(), 100);
    assert_eq!(game.player.attack(), 25);

    play(&mut game, &["2", "1"]);
    assert_eq!(game.room().name, "Main Hall");

    play(&mut game, &["1", "1", "1"]);
    match game.room().entity(0) {
        Some(Entity::Monster(m)) => {
            assert_eq!(m.health, 15);
            assert!(m.alive);
        }
        other => panic!("expected spider, got {other:?}"),
    }
    assert_eq!(game.player.health(), 85);

    let text = play(&mut game, &["1", "1", "1"]);
    assert!(text.contains("+50 points!"));
    match game.room().entity(0) {
        Some(Entity::Monster(m)) => {
            assert_eq!(m.health, 0);
            assert!(!m.alive);
        }
        other => panic!("expected spider, got {other:?}"),
    }
    assert_eq!(game.player.health(), 85);
    assert_eq!(game.player.score(), 50);

    // a third swing is a no-op
    let text = play(&mut game, &["1", "1", "1"]);
    assert!(text.contains("already been defeated"));
    assert_eq!(game.player.score(), 50);
    assert_eq!(game.player.health(), 85);
}

#[test]
fn skeleton_warrior_takes_three_hits() {
    let mut game = new_game();
    // entrance -> main hall -> guard chamber
    play(&mut game, &["2", "1", "2", "1"]);
    assert_eq!(game.room().name, "Guard Chamber");

    for _ in 0..3 {
        play(&mut game, &["1", "1", "1"]);
    }

    // 60 -> 35 -> 10 -> 0, two retaliations of 20
    assert_eq!(game.player.health(), 60);
    assert_eq!(game.player.score(), 50);
}

// =============================================================================
// Items and clues
// =============================================================================

#[test]
fn golden_amulet_scores_once() {
    let mut game = new_game();
    // entrance -> main hall -> treasure vault
    play(&mut game, &["2", "1", "2", "2"]);
    assert_eq!(game.room().name, "Treasure Vault");

    let before = game.player.score();
    play(&mut game, &["1", "1", "2"]);
    assert_eq!(game.player.score(), before + 100);
    assert_eq!(game.player.inventory(), ["Golden Amulet"]);

    let text = play(&mut game, &["1", "1", "3"]);
    assert!(text.contains("Status: Already collected"));
    assert_eq!(game.player.score(), before + 100);

    let text = play(&mut game, &["1", "1", "2"]);
    assert!(text.contains("already collected"));
    assert_eq!(game.player.score(), before + 100);
    assert_eq!(game.player.inventory().len(), 1);
}

#[test]
fn clues_reveal_once() {
    let mut game = new_game();

    let text = play(&mut game, &["1", "1", "3"]);
    assert!(text.contains("Only the brave shall claim the crystal."));
    assert_eq!(game.player.score(), 25);

    let text = play(&mut game, &["1", "1", "3"]);
    assert!(text.contains("Previously discovered:"));
    assert_eq!(game.player.score(), 25);
}

#[test]
fn dispatch_works_on_entities_outside_the_loop() {
    let mut dungeon = builtin_dungeon().unwrap();
    let vault = dungeon.find_room("treasure_vault").unwrap();
    let mut player = temple_crawl::engine::Player::from_start(&dungeon.player);

    let coins = dungeon.room_mut(vault).entity_mut(1).unwrap();
    let mut out = Output::new();
    assert_eq!(
        apply_action(&mut out, Action::Attack, coins, &mut player),
        Outcome::Redirected {
            suggested: Action::Collect
        }
    );
    assert_eq!(
        apply_action(&mut out, Action::Collect, coins, &mut player),
        Outcome::Collected { value: 50 }
    );
    assert_eq!(player.score(), 50);
}

// =============================================================================
// Whole game
// =============================================================================

#[test]
fn reach_the_crystal_and_quit() {
    let mut game = new_game();
    let text = play(
        &mut game,
        &[
            "1", "1", "3", // tablet +25
            "2", "1", // to main hall
            "1", "2", "2", // potion +30
            "2", "3", // secret passage
            "1", "1", "3", // journal +25
            "2", "1", // inner sanctum
            "1", "1", "2", // crystal +500
            "3", // status
            "4", // quit
        ],
    );

    assert!(game.is_finished());
    assert_eq!(game.room().name, "Inner Sanctum");
    assert_eq!(game.player.score(), 580);
    assert_eq!(
        game.player.inventory(),
        ["Health Potion", "Crystal of Power"]
    );
    assert!(text.contains("There are no visible exits."));
    assert!(text.contains("  - Crystal of Power"));
    assert!(text.contains("Final Score: 580"));
}

#[test]
fn nonsense_never_moves_the_player() {
    let mut game = new_game();
    play(&mut game, &["2", "banana", "5", "-1", "1.5", ""]);
    assert_eq!(game.prompt(), Prompt::Door);
    assert_eq!(game.current_room, game.dungeon.entrance());
    assert_eq!(game.player.score(), 0);
}
