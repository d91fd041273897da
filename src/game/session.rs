//! The shared turn loop.
//!
//! `Game` owns every piece of state: the tile arena, bag, board, players and
//! the history of committed plays. A turn either commits completely or
//! leaves all of it as it was.
//!
//! ```
//! use rust_scrabble::core::GameConfig;
//! use rust_scrabble::game::{Game, NullPresenter, TurnInput};
//!
//! let mut game = Game::new(GameConfig::new().with_players(["ada", "brian"]))?;
//! let rack = game.rack_letters(game.current_player());
//! let letter: String = rack.chars().filter(|&c| c != '_').take(1).collect();
//!
//! let play = game.submit(&TurnInput::new(letter.as_str(), 7, 7, 'h'), &mut NullPresenter).unwrap();
//! assert_eq!(play.words()[0].text(), letter);
//! assert!(!game.is_first_turn());
//! # Ok::<(), rust_scrabble::core::ConfigError>(())
//! ```

use im::Vector;
use tracing::{debug, info};

use super::presenter::Presenter;
use super::result::GameResult;
use super::turn::TurnInput;
use crate::board::{Board, Direction};
use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, PlayError, Player, PlayerId, PlayerMap,
};
use crate::rules::{Play, ScoringRules};
use crate::tiles::{Bag, TileArena, TileLocation};

/// Full rounds of consecutive passes that end the game.
const PASS_ROUNDS_TO_END: usize = 2;

/// One game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    tiles: TileArena,
    bag: Bag,
    board: Board,
    players: PlayerMap<Player>,
    current: PlayerId,
    history: Vector<Play>,
    turn: u32,
    consecutive_passes: usize,
}

impl Game {
    /// Set up the board and bag, seat the players and deal their racks.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut tiles = TileArena::from_distribution(&config.distribution);
        let mut bag = Bag::new(&tiles, GameRng::new(config.seed));
        let mut names = config.player_names.iter();
        let mut players = PlayerMap::new(config.player_count(), |id| {
            let name = names.next().cloned().unwrap_or_else(|| id.to_string());
            Player::new(id, name, config.rack_size)
        });
        for (_, player) in players.iter_mut() {
            player.rack.fill(&mut bag, &mut tiles);
        }

        let current = PlayerId::new(0);
        players[current].toggle_turn();
        info!(
            players = config.player_count(),
            tiles = tiles.len(),
            seed = config.seed,
            "game started"
        );

        Ok(Self {
            config,
            tiles,
            bag,
            board: Board::new(),
            players,
            current,
            history: Vector::new(),
            turn: 1,
            consecutive_passes: 0,
        })
    }

    /// Play `input` for the player on turn.
    ///
    /// On a rule violation nothing changes and the same player stays on turn.
    pub fn submit<P: Presenter>(
        &mut self,
        input: &TurnInput,
        presenter: &mut P,
    ) -> Result<Play, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let player = self.current;
        presenter.input_received(player, input);

        match self.commit(player, input) {
            Ok(play) => {
                presenter.turn_committed(&play);
                self.consecutive_passes = 0;
                self.end_turn(presenter);
                Ok(play)
            }
            Err(err) => {
                presenter.turn_rejected(player, &err);
                Err(err.into())
            }
        }
    }

    /// Give up the turn without placing anything.
    pub fn pass<P: Presenter>(&mut self, presenter: &mut P) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        debug!(player = %self.current, "pass");
        presenter.turn_passed(self.current);
        self.consecutive_passes += 1;
        self.end_turn(presenter);
        Ok(())
    }

    fn commit(&mut self, player: PlayerId, input: &TurnInput) -> Result<Play, PlayError> {
        let mut play = Play::new(player, self.turn, ScoringRules::from(&self.config));
        play.validate(
            &input.letters,
            &self.board,
            input.row,
            input.col,
            input.direction,
            self.is_first_turn(),
        )?;
        let dir = Direction::try_from(input.direction)?;

        let seat = &mut self.players[player];
        let placed = seat.rack.place_tile_str(
            &input.letters,
            &mut self.board,
            &mut self.tiles,
            input.row,
            input.col,
            dir,
        )?;
        let words = play.get_words(&placed, &self.board, input.row, input.col, dir);
        let points = play.calculate_points(&words);

        seat.add_points(points);
        seat.rack.fill(&mut self.bag, &mut self.tiles);
        self.history.push_back(play.clone());

        info!(
            %player,
            turn = self.turn,
            letters = play.letters(),
            points,
            total = seat.score(),
            "play committed"
        );
        Ok(play)
    }

    fn end_turn<P: Presenter>(&mut self, presenter: &mut P) {
        self.players[self.current].toggle_turn();
        self.current = self.current.next(self.player_count());
        self.players[self.current].toggle_turn();
        self.turn += 1;

        if let Some(result) = self.result() {
            info!(?result, turns = self.turn - 1, "game over");
            presenter.game_over(&result);
        }
    }

    /// No play has been committed yet.
    #[must_use]
    pub fn is_first_turn(&self) -> bool {
        self.history.is_empty()
    }

    /// All tiles are out, or every player passed twice in a row.
    #[must_use]
    pub fn is_over(&self) -> bool {
        let tiles_out = self.bag.is_empty() && self.players.values().all(|p| p.rack.is_empty());
        let stalled = self.consecutive_passes >= PASS_ROUNDS_TO_END * self.player_count();
        tiles_out || stalled
    }

    /// The outcome, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        let scores: Vec<(PlayerId, u32)> = self.players.iter().map(|(id, p)| (id, p.score())).collect();
        Some(GameResult::from_scores(&scores))
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Letters on a player's rack, blanks shown as `_`.
    #[must_use]
    pub fn rack_letters(&self, id: PlayerId) -> String {
        self.players[id]
            .rack
            .tiles()
            .iter()
            .map(|&tile| self.tiles[tile].letter())
            .collect()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    #[must_use]
    pub fn tiles(&self) -> &TileArena {
        &self.tiles
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Committed plays, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Play> {
        &self.history
    }

    /// Number of the turn in progress (starts at 1, passes included).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    /// Tiles in bag + racks + board; constant for the whole game.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        let racked: usize = self.players.values().map(|p| p.rack.len()).sum();
        self.bag.remaining_count() + racked + self.board.occupied_count()
    }

    /// Every tile's location tag agrees with the container holding it.
    #[must_use]
    pub fn locations_consistent(&self) -> bool {
        let racked: usize = self.players.values().map(|p| p.rack.len()).sum();
        self.tiles.count_in(TileLocation::Bag) == self.bag.remaining_count()
            && self.tiles.count_in(TileLocation::Rack) == racked
            && self.tiles.count_in(TileLocation::Board) == self.board.occupied_count()
            && self
                .players
                .values()
                .flat_map(|p| p.rack.tiles())
                .all(|&id| self.tiles[id].location() == TileLocation::Rack)
    }
}
