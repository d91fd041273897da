//! A player's held tiles.
//!
//! `Rack::place_tile_str` is the only operation that moves tiles onto the
//! board. It plans the whole placement first and commits only when every
//! letter resolves, so a failed request leaves rack, board and arena untouched.

use smallvec::SmallVec;
use tracing::trace;

use super::arena::TileArena;
use super::bag::Bag;
use super::tile::parse_letters;
use crate::board::{run, Board, Direction, Position};
use crate::core::{PlayError, TileId};

/// One tile going onto the board.
struct PlannedTile {
    slot: usize,
    position: Position,
    letter: char,
}

/// Tiles held by one player, in draw order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rack {
    tiles: SmallVec<[TileId; 7]>,
    capacity: usize,
}

impl Rack {
    /// Create an empty rack holding at most `capacity` tiles.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            tiles: SmallVec::new(),
            capacity,
        }
    }

    /// Top the rack up to capacity from the bag.
    ///
    /// No-op when the rack is full or the bag is empty.
    pub fn fill(&mut self, bag: &mut Bag, arena: &mut TileArena) {
        let missing = self.capacity.saturating_sub(self.tiles.len());
        if missing == 0 || bag.is_empty() {
            return;
        }
        self.tiles.extend(bag.draw(missing, arena));
    }

    /// Lay `letters` from (row, col) along `dir`.
    ///
    /// Each letter either matches the tile already on its square, or takes a
    /// distinct rack tile with that letter, falling back to a blank. Returns
    /// the newly placed tiles in run order.
    pub fn place_tile_str(
        &mut self,
        letters: &str,
        board: &mut Board,
        arena: &mut TileArena,
        row: usize,
        col: usize,
        dir: Direction,
    ) -> Result<Vec<TileId>, PlayError> {
        let letters = parse_letters(letters)?;
        let squares = run(Position::new(row, col), dir, letters.len())?;

        let mut plan: SmallVec<[PlannedTile; 7]> = SmallVec::new();
        for (&position, &letter) in squares.iter().zip(letters.iter()) {
            if let Some(occ) = board.occupant(position) {
                if occ.letter == letter {
                    continue;
                }
                return Err(PlayError::OccupiedSquare {
                    row: position.row,
                    col: position.col,
                });
            }
            let slot = self
                .find_slot(arena, letter, &plan)
                .ok_or(PlayError::TileNotInRack(letter))?;
            plan.push(PlannedTile {
                slot,
                position,
                letter,
            });
        }

        let placed: Vec<TileId> = plan.iter().map(|p| self.tiles[p.slot]).collect();
        for (planned, &id) in plan.iter().zip(&placed) {
            let tile = arena.get_mut(id).ok_or(PlayError::TileNotInRack(planned.letter))?;
            if tile.is_blank() {
                tile.assign(planned.letter);
            }
            board.place(tile, planned.position.row, planned.position.col)?;
            trace!(tile = %id, letter = %planned.letter, at = %planned.position, "placed tile");
        }
        self.tiles.retain(|id| !placed.contains(id));
        Ok(placed)
    }

    /// Rack slot able to spell `letter`, preferring an exact tile to a blank.
    fn find_slot(&self, arena: &TileArena, letter: char, plan: &[PlannedTile]) -> Option<usize> {
        let free = |slot: &usize| !plan.iter().any(|p| p.slot == *slot);
        let exact = (0..self.tiles.len())
            .filter(free)
            .find(|&slot| arena[self.tiles[slot]].letter() == letter);
        exact.or_else(|| {
            (0..self.tiles.len())
                .filter(free)
                .find(|&slot| arena[self.tiles[slot]].is_blank())
        })
    }

    /// True when the rack holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Held tiles in draw order.
    #[must_use]
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    /// Put explicit tiles on the rack; they must already be marked as racked.
    pub fn extend(&mut self, tiles: impl IntoIterator<Item = TileId>) {
        self.tiles.extend(tiles);
        debug_assert!(self.tiles.len() <= self.capacity, "rack over capacity");
    }

    /// Render helper showing the held letters.
    #[must_use]
    pub fn show<'a>(&'a self, arena: &'a TileArena) -> RackView<'a> {
        RackView { rack: self, arena }
    }
}

/// Display adapter pairing a rack with the arena it points into.
pub struct RackView<'a> {
    rack: &'a Rack,
    arena: &'a TileArena,
}

impl std::fmt::Display for RackView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, id) in self.rack.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", self.arena[*id])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::tiles::{TileLocation, BLANK};

    /// Arena + rack holding the given (letter, points) tiles.
    fn rack_with(faces: &[(char, u32)]) -> (Rack, TileArena) {
        let mut arena = TileArena::new();
        let mut rack = Rack::new(7);
        for &(letter, points) in faces {
            let id = arena.create(letter, points);
            arena.move_to(id, TileLocation::Rack);
            rack.extend([id]);
        }
        (rack, arena)
    }

    #[test]
    fn test_fill_tops_up_to_capacity() {
        let mut arena = TileArena::new();
        let ids: Vec<_> = (0..10).map(|_| arena.create('E', 1)).collect();
        let mut bag = Bag::from_tiles(ids, GameRng::new(5));
        let mut rack = Rack::new(7);

        rack.fill(&mut bag, &mut arena);
        assert_eq!(rack.len(), 7);
        assert_eq!(bag.remaining_count(), 3);

        rack.fill(&mut bag, &mut arena);
        assert_eq!(rack.len(), 7);
        assert_eq!(bag.remaining_count(), 3);
    }

    #[test]
    fn test_fill_from_empty_bag_is_noop() {
        let mut arena = TileArena::new();
        let mut bag = Bag::from_tiles(Vec::new(), GameRng::new(5));
        let mut rack = Rack::new(7);

        rack.fill(&mut bag, &mut arena);
        assert!(rack.is_empty());
    }

    #[test]
    fn test_place_word() {
        let (mut rack, mut arena) = rack_with(&[('C', 1), ('A', 1), ('T', 1), ('S', 1)]);
        let mut board = Board::new();

        let placed = rack
            .place_tile_str("CAT", &mut board, &mut arena, 7, 7, Direction::Horizontal)
            .unwrap();

        assert_eq!(placed.len(), 3);
        assert_eq!(board.letter_at(Position::new(7, 7)), Some('C'));
        assert_eq!(board.letter_at(Position::new(7, 8)), Some('A'));
        assert_eq!(board.letter_at(Position::new(7, 9)), Some('T'));
        assert_eq!(rack.len(), 1);
        for id in placed {
            assert_eq!(arena[id].location(), TileLocation::Board);
        }
    }

    #[test]
    fn test_missing_letter_changes_nothing() {
        let (mut rack, mut arena) = rack_with(&[('I', 1), ('T', 1)]);
        let mut board = Board::new();

        let err = rack
            .place_tile_str("QI", &mut board, &mut arena, 7, 7, Direction::Horizontal)
            .unwrap_err();

        assert_eq!(err, PlayError::TileNotInRack('Q'));
        assert!(board.is_blank());
        assert_eq!(rack.len(), 2);
        assert_eq!(arena.count_in(TileLocation::Rack), 2);
    }

    #[test]
    fn test_same_tile_not_used_twice() {
        let (mut rack, mut arena) = rack_with(&[('O', 1), ('N', 1)]);
        let mut board = Board::new();

        let err = rack
            .place_tile_str("NOON", &mut board, &mut arena, 7, 7, Direction::Horizontal)
            .unwrap_err();

        assert_eq!(err, PlayError::TileNotInRack('O'));
        assert!(board.is_blank());
    }

    #[test]
    fn test_blank_fills_missing_letter() {
        let (mut rack, mut arena) = rack_with(&[('Q', 10), (BLANK, 0)]);
        let mut board = Board::new();

        let placed = rack
            .place_tile_str("QI", &mut board, &mut arena, 7, 7, Direction::Vertical)
            .unwrap();

        let blank = placed[1];
        assert_eq!(arena[blank].assigned(), Some('I'));
        assert_eq!(board.letter_at(Position::new(8, 7)), Some('I'));
        assert_eq!(board.occupant(Position::new(8, 7)).map(|o| o.points), Some(0));
    }

    #[test]
    fn test_exact_tile_preferred_over_blank() {
        let (mut rack, mut arena) = rack_with(&[(BLANK, 0), ('A', 1)]);
        let mut board = Board::new();

        rack.place_tile_str("A", &mut board, &mut arena, 7, 7, Direction::Horizontal)
            .unwrap();

        assert_eq!(rack.len(), 1);
        assert!(arena[rack.tiles()[0]].is_blank());
    }

    #[test]
    fn test_existing_letters_are_reused() {
        let (mut rack, mut arena) = rack_with(&[('C', 1), ('A', 1), ('T', 1), ('S', 1)]);
        let mut board = Board::new();
        rack.place_tile_str("CAT", &mut board, &mut arena, 7, 7, Direction::Horizontal)
            .unwrap();

        let placed = rack
            .place_tile_str("CATS", &mut board, &mut arena, 7, 7, Direction::Horizontal)
            .unwrap();

        assert_eq!(placed.len(), 1);
        assert_eq!(board.letter_at(Position::new(7, 10)), Some('S'));
        assert!(rack.is_empty());
    }

    #[test]
    fn test_conflicting_square_changes_nothing() {
        let (mut rack, mut arena) = rack_with(&[('C', 1), ('A', 1), ('T', 1), ('D', 2), ('O', 1), ('G', 2)]);
        let mut board = Board::new();
        rack.place_tile_str("CAT", &mut board, &mut arena, 7, 7, Direction::Horizontal)
            .unwrap();

        let err = rack
            .place_tile_str("DOG", &mut board, &mut arena, 6, 8, Direction::Vertical)
            .unwrap_err();

        assert_eq!(err, PlayError::OccupiedSquare { row: 7, col: 8 });
        assert_eq!(board.occupied_count(), 3);
        assert_eq!(rack.len(), 3);
        assert_eq!(arena.count_in(TileLocation::Rack), 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rack over capacity")]
    fn test_extend_past_capacity_panics() {
        let mut arena = TileArena::new();
        let mut rack = Rack::new(2);
        let ids: Vec<_> = ['A', 'B', 'C'].into_iter().map(|c| arena.create(c, 1)).collect();
        rack.extend(ids);
    }

    #[test]
    fn test_show_lists_letters() {
        let (rack, arena) = rack_with(&[('Q', 10), ('I', 1)]);
        assert_eq!(rack.show(&arena).to_string(), "Q-10 I-1");
    }
}
