use super::direction::Direction;
use super::grid::{Cell, Grid};
use crate::consts;
use std::collections::VecDeque;

/// The snake: a head followed by an ordered run of body cells.
///
/// Every body cell sits where its predecessor was one tick earlier, so a
/// single deque of positions is enough to describe the whole chain.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Chain {
    /// The position of the head
    pub(super) head: Cell,

    /// The positions of the body segments, nearest the head first
    pub(super) body: VecDeque<Cell>,

    /// The direction in which the head will move on the next tick
    pub(super) direction: Direction,

    /// The direction in which the head moved on the most recent tick (or
    /// the starting direction, before the first tick)
    pub(super) heading: Direction,
}

impl Chain {
    /// Create a chain with its head at `head`, facing in `direction`, and
    /// with `body_len` body segments trailing straight behind it.  A
    /// `body_len` of zero is treated as one.
    pub(super) fn new(head: Cell, direction: Direction, body_len: usize, grid: Grid) -> Chain {
        let head = grid.wrap(head);
        let behind = direction.reverse();
        let body = std::iter::successors(Some(head), |&c| Some(behind.advance(c, grid)))
            .skip(1)
            .take(body_len.max(1))
            .collect();
        Chain {
            head,
            body,
            direction,
            heading: direction,
        }
    }

    pub(super) fn head(&self) -> Cell {
        self.head
    }

    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterate over every cell the chain occupies, head first
    pub(super) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Iterate over the chain's segments, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        std::iter::once(Segment {
            cell: self.head,
            role: Role::Head,
        })
        .chain(self.body.iter().map(|&cell| Segment {
            cell,
            role: Role::Body,
        }))
    }

    /// Point the head in `direction` unless that is the opposite of the
    /// current direction, or would send the head straight back into its own
    /// neck.  Returns whether the direction was accepted.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() || direction == self.heading.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Fold any segment lying outside `grid` back onto it
    pub(super) fn wrap(&mut self, grid: Grid) {
        self.head = grid.wrap(self.head);
        for cell in &mut self.body {
            *cell = grid.wrap(*cell);
        }
    }

    /// Append a segment one step past the tail, continuing the line from the
    /// second-to-last segment through the tail
    pub(super) fn grow(&mut self, grid: Grid) {
        let tail = self.body.back().copied().unwrap_or(self.head);
        let before = self
            .body
            .len()
            .checked_sub(2)
            .and_then(|i| self.body.get(i))
            .copied()
            .unwrap_or(self.head);
        let extension = Direction::between(before, tail, grid)
            .map_or(tail, |d| d.advance(tail, grid));
        self.body.push_back(extension);
    }

    /// Whether the head shares its cell with any body segment
    pub(super) fn bites_itself(&self) -> bool {
        self.body.contains(&self.head)
    }

    /// Shift every segment into its predecessor's cell, tail first, and move
    /// the head one step in the current direction
    pub(super) fn advance(&mut self, grid: Grid) {
        let _ = self.body.pop_back();
        self.body.push_front(self.head);
        self.head = self.direction.advance(self.head, grid);
        self.heading = self.direction;
    }
}

/// A single positioned piece of the chain
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Segment {
    pub(crate) cell: Cell,
    pub(crate) role: Role,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Role {
    Head,
    Body,
}

impl Role {
    pub(crate) fn glyph(self) -> char {
        match self {
            Role::Head => consts::HEAD_GLYPH,
            Role::Body => consts::BODY_GLYPH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid20() -> Grid {
        Grid::new(20, 20).unwrap()
    }

    #[test]
    fn new_extends_backwards() {
        let chain = Chain::new(Cell::new(10, 10), Direction::Right, 6, grid20());
        assert_eq!(chain.head(), Cell::new(10, 10));
        assert_eq!(
            chain.body,
            VecDeque::from([
                Cell::new(10, 9),
                Cell::new(10, 8),
                Cell::new(10, 7),
                Cell::new(10, 6),
                Cell::new(10, 5),
                Cell::new(10, 4),
            ])
        );
        assert_eq!(chain.len(), 7);
    }

    #[test]
    fn new_facing_up_trails_down() {
        let chain = Chain::new(Cell::new(18, 3), Direction::Up, 3, grid20());
        assert_eq!(
            chain.body,
            VecDeque::from([Cell::new(19, 3), Cell::new(0, 3), Cell::new(1, 3)])
        );
    }

    #[test]
    fn new_never_empty_body() {
        let chain = Chain::new(Cell::new(5, 5), Direction::Left, 0, grid20());
        assert_eq!(chain.body, VecDeque::from([Cell::new(5, 6)]));
    }

    #[test]
    fn advance_lags_by_one() {
        let mut chain = Chain::new(Cell::new(10, 10), Direction::Right, 4, grid20());
        let before = chain.cells().collect::<Vec<_>>();
        chain.advance(grid20());
        assert_eq!(chain.head(), Cell::new(10, 11));
        assert_eq!(chain.len(), before.len());
        let after = chain.cells().collect::<Vec<_>>();
        for i in 1..after.len() {
            assert_eq!(after[i], before[i - 1], "segment {i} did not follow");
        }
    }

    #[test]
    fn turn_rejects_reversal() {
        let mut chain = Chain::new(Cell::new(10, 10), Direction::Right, 4, grid20());
        assert!(!chain.turn(Direction::Left));
        assert_eq!(chain.direction(), Direction::Right);
        assert!(chain.turn(Direction::Up));
        assert_eq!(chain.direction(), Direction::Up);
    }

    #[test]
    fn turn_checks_last_movement() {
        let mut chain = Chain::new(Cell::new(10, 10), Direction::Right, 4, grid20());
        assert!(chain.turn(Direction::Up));
        // Still moving right until the next tick, so left stays forbidden
        assert!(!chain.turn(Direction::Left));
        assert_eq!(chain.direction(), Direction::Up);
        chain.advance(grid20());
        assert!(chain.turn(Direction::Left));
    }

    #[test]
    fn turn_rejects_reversal_of_pending() {
        let mut chain = Chain::new(Cell::new(10, 10), Direction::Right, 4, grid20());
        assert!(chain.turn(Direction::Up));
        assert!(!chain.turn(Direction::Down));
        assert_eq!(chain.direction(), Direction::Up);
        chain.advance(grid20());
        assert_eq!(chain.head(), Cell::new(9, 10));
    }

    #[test]
    fn grow_continues_tail_line() {
        let mut chain = Chain::new(Cell::new(10, 10), Direction::Right, 2, grid20());
        chain.grow(grid20());
        assert_eq!(chain.body.back(), Some(&Cell::new(10, 7)));

        let mut chain = Chain::new(Cell::new(10, 10), Direction::Up, 2, grid20());
        chain.grow(grid20());
        assert_eq!(chain.body.back(), Some(&Cell::new(13, 10)));
    }

    #[test]
    fn grow_across_edge() {
        let mut chain = Chain::new(Cell::new(4, 1), Direction::Right, 2, grid20());
        assert_eq!(chain.body.back(), Some(&Cell::new(4, 19)));
        chain.grow(grid20());
        assert_eq!(chain.body.back(), Some(&Cell::new(4, 18)));
    }

    #[test]
    fn grow_then_advance_keeps_lag() {
        let mut chain = Chain::new(Cell::new(10, 10), Direction::Right, 3, grid20());
        let before = chain.cells().collect::<Vec<_>>();
        chain.grow(grid20());
        chain.advance(grid20());
        let after = chain.cells().collect::<Vec<_>>();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[1..], &before[..]);
    }

    #[test]
    fn bites_itself() {
        let mut chain = Chain::new(Cell::new(10, 10), Direction::Right, 6, grid20());
        assert!(!chain.bites_itself());
        chain.body[3] = chain.head;
        assert!(chain.bites_itself());
    }

    #[test]
    fn segments_head_first() {
        let chain = Chain::new(Cell::new(10, 10), Direction::Right, 2, grid20());
        assert_eq!(
            chain.segments().collect::<Vec<_>>(),
            [
                Segment {
                    cell: Cell::new(10, 10),
                    role: Role::Head
                },
                Segment {
                    cell: Cell::new(10, 9),
                    role: Role::Body
                },
                Segment {
                    cell: Cell::new(10, 8),
                    role: Role::Body
                },
            ]
        );
    }
}
