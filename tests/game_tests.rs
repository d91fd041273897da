//! Turn loop tests across player counts.

mod common;

use rust_scrabble::core::{GameConfig, GameError, PlayError, PlayerId};
use rust_scrabble::game::{Game, GameResult, NullPresenter, Presenter, TracingPresenter, TurnInput};
use rust_scrabble::rules::Play;

fn seated(players: usize, seed: u64) -> Game {
    let names: Vec<String> = (1..=players).map(|n| format!("p{n}")).collect();
    Game::new(GameConfig::new().with_players(names).with_seed(seed)).unwrap()
}

/// Records every event it is shown.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Presenter for Recorder {
    fn input_received(&mut self, player: PlayerId, input: &TurnInput) {
        self.events.push(format!("input {player} {input}"));
    }

    fn turn_committed(&mut self, play: &Play) {
        self.events.push(format!("commit {} {}", play.player(), play.points_made()));
    }

    fn turn_rejected(&mut self, player: PlayerId, error: &PlayError) {
        self.events.push(format!("reject {player} {error:?}"));
    }

    fn turn_passed(&mut self, player: PlayerId) {
        self.events.push(format!("pass {player}"));
    }

    fn game_over(&mut self, result: &GameResult) {
        self.events.push(format!("over {result:?}"));
    }
}

#[test]
fn test_turns_rotate_for_every_player_count() {
    for players in 1..=4 {
        let mut game = seated(players, 11);
        assert_eq!(game.player_count(), players);

        for round in 0..2 {
            for seat in 0..players {
                let expected = PlayerId::new(seat as u8);
                assert_eq!(game.current_player(), expected, "round {round}, {players} players");
                assert!(game.player(expected).is_on_turn());

                let input = common::safe_move(&game, round * 3 + seat).unwrap();
                game.submit(&input, &mut NullPresenter).unwrap();
                assert_eq!(game.player(expected).is_on_turn(), players == 1);
            }
        }
        assert_eq!(game.history().len(), 2 * players);
        assert!(game.locations_consistent());
    }
}

#[test]
fn test_every_rack_is_full_after_dealing() {
    for players in 1..=4 {
        let game = seated(players, 3);
        for player in game.players() {
            assert_eq!(player.rack.len(), 7);
        }
        assert_eq!(game.bag().remaining_count(), 100 - 7 * players);
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = seated(3, 2024);
    let mut b = seated(3, 2024);

    for pick in 0..12 {
        assert_eq!(a.rack_letters(a.current_player()), b.rack_letters(b.current_player()));
        let input = common::safe_move(&a, pick).unwrap();
        let pa = a.submit(&input, &mut NullPresenter).unwrap();
        let pb = b.submit(&input, &mut NullPresenter).unwrap();
        assert_eq!(pa, pb);
    }
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_presenter_sees_each_event() {
    let mut game = seated(2, 5);
    let mut recorder = Recorder::default();

    let err = game
        .submit(&TurnInput::new("A", 0, 0, 'h'), &mut recorder)
        .unwrap_err();
    assert_eq!(err, GameError::Play(PlayError::CenterNotCovered));

    let input = common::safe_move(&game, 0).unwrap();
    game.submit(&input, &mut recorder).unwrap();
    game.pass(&mut recorder).unwrap();

    assert_eq!(recorder.events.len(), 5);
    assert_eq!(recorder.events[0], "input Player 1 A-0-0-h");
    assert!(recorder.events[1].starts_with("reject Player 1 CenterNotCovered"));
    assert!(recorder.events[3].starts_with("commit Player 1 "));
    assert_eq!(recorder.events[4], "pass Player 2");
}

#[test]
fn test_stalled_game_reports_result() {
    let mut game = seated(2, 8);
    let mut recorder = Recorder::default();

    let input = common::safe_move(&game, 1).unwrap();
    let play = game.submit(&input, &mut recorder).unwrap();
    for _ in 0..4 {
        game.pass(&mut recorder).unwrap();
    }

    assert!(game.is_over());
    assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::new(0))));
    assert_eq!(
        recorder.events.last().map(String::as_str),
        Some("over Winner(PlayerId(0))")
    );
    assert!(play.points_made() > 0);
    assert_eq!(game.pass(&mut NullPresenter), Err(GameError::GameOver));
    assert_eq!(
        game.submit(&input, &mut NullPresenter),
        Err(GameError::GameOver)
    );
}

#[test]
fn test_tracing_presenter_runs_a_game() {
    let mut game = seated(4, 99);
    for pick in 0..40 {
        if game.is_over() {
            break;
        }
        match common::safe_move(&game, pick) {
            Some(input) => {
                game.submit(&input, &mut TracingPresenter).unwrap();
            }
            None => game.pass(&mut TracingPresenter).unwrap(),
        }
    }
    assert_eq!(game.tile_count(), 100);
}

#[test]
fn test_history_serializes() {
    let mut game = seated(2, 4);
    for pick in 0..3 {
        let input = common::safe_move(&game, pick).unwrap();
        game.submit(&input, &mut NullPresenter).unwrap();
    }

    let json = serde_json::to_string(game.history()).unwrap();
    let back: im::Vector<Play> = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, game.history());
    assert_eq!(back.len(), 3);
}
