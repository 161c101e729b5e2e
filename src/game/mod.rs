mod chain;
mod direction;
mod grid;
pub(crate) use self::chain::Segment;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Cell, Grid};
use self::chain::Chain;
use crate::config::GameConfig;
use crate::consts;
use crate::display::Display;
use rand::{rngs::StdRng, seq::IteratorRandom, Rng, SeedableRng};
use std::collections::HashSet;
use std::io;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SnakeGame<R = StdRng> {
    rng: R,
    grid: Grid,
    chain: Chain,
    food: HashSet<Cell>,
    food_target: usize,
    state: GameState,
    fast: bool,
}

impl SnakeGame<StdRng> {
    /// Start a game in the middle of `grid`, heading right, with sizes taken
    /// from `config`
    pub(crate) fn new(grid: Grid, config: &GameConfig) -> Self {
        SnakeGame::new_with_rng(
            grid,
            grid.center(),
            Direction::Right,
            config.body_length,
            config.food,
            StdRng::from_os_rng(),
        )
    }
}

impl<R: Rng> SnakeGame<R> {
    pub(crate) fn new_with_rng(
        grid: Grid,
        start: Cell,
        direction: Direction,
        body_length: usize,
        food_target: usize,
        rng: R,
    ) -> SnakeGame<R> {
        let mut game = SnakeGame {
            rng,
            grid,
            chain: Chain::new(start, direction, body_length, grid),
            food: HashSet::new(),
            food_target,
            state: GameState::Running,
            fast: false,
        };
        game.restock();
        log::info!(
            "New game on {}x{} grid: head at {}, {} segments, {} food",
            grid.height(),
            grid.width(),
            game.chain.head(),
            game.chain.len(),
            game.food.len()
        );
        game
    }

    /// Advance the game by one step.
    ///
    /// Nothing happens while the game is paused.  Once the snake has bitten
    /// itself, every further call reports [`TickOutcome::GameOver`] without
    /// changing anything.
    pub(crate) fn tick(&mut self) -> TickOutcome {
        match self.state {
            GameState::Running => (),
            GameState::Paused => return TickOutcome::Skipped,
            GameState::Over => return TickOutcome::GameOver,
        }
        self.chain.wrap(self.grid);
        let grew = self.food.remove(&self.chain.head());
        if grew {
            log::debug!("Ate food at {}", self.chain.head());
            self.restock();
            self.chain.grow(self.grid);
        }
        if self.chain.bites_itself() {
            log::info!(
                "Snake bit itself at {} with length {}",
                self.chain.head(),
                self.chain.len()
            );
            self.state = GameState::Over;
            return TickOutcome::GameOver;
        }
        self.chain.advance(self.grid);
        TickOutcome::Continue
    }

    /// Place food until the target count is reached or the grid is full
    fn restock(&mut self) {
        while self.food.len() < self.food_target {
            if !self.place_food() {
                log::warn!("No free cell left for food");
                break;
            }
        }
    }

    /// Put a new piece of food on a random cell not occupied by the snake or
    /// by other food.  Returns `false` if there are no such cells.
    fn place_food(&mut self) -> bool {
        let mut occupied = self.food.clone();
        occupied.extend(self.chain.cells());
        let choice = self
            .grid
            .cells()
            .filter(move |c| !occupied.contains(c))
            .choose(&mut self.rng);
        if let Some(cell) = choice {
            self.food.insert(cell);
            true
        } else {
            false
        }
    }
}

impl<R> SnakeGame<R> {
    /// Change the direction the snake will move in on the next tick.  A
    /// request for the opposite of the current direction, or to turn straight
    /// back the way the snake last moved, is ignored.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if !self.chain.turn(direction) {
            log::debug!("Ignoring reversal to {direction:?}");
        }
    }

    pub(crate) fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Running => GameState::Paused,
            GameState::Paused => GameState::Running,
            GameState::Over => GameState::Over,
        };
        log::info!("Game state is now {:?}", self.state);
    }

    /// Pause the game if it is running
    pub(crate) fn pause(&mut self) {
        if self.state == GameState::Running {
            self.state = GameState::Paused;
            log::info!("Game paused");
        }
    }

    pub(crate) fn toggle_speed(&mut self) {
        self.fast = !self.fast;
        log::info!("Fast mode {}", if self.fast { "on" } else { "off" });
    }

    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn is_paused(&self) -> bool {
        self.state == GameState::Paused
    }

    pub(crate) fn is_fast(&self) -> bool {
        self.fast
    }

    pub(crate) fn direction(&self) -> Direction {
        self.chain.direction()
    }

    pub(crate) fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.chain.segments()
    }

    pub(crate) fn food(&self) -> &HashSet<Cell> {
        &self.food
    }

    /// Draw the current frame: the food, then the body, then the head.  Once
    /// the game is over, the frame is just the game-over message.
    pub(crate) fn render<D: Display>(&self, display: &mut D) -> io::Result<()> {
        display.clear();
        if self.state == GameState::Over {
            display.draw_text(Cell::ORIGIN, consts::GAME_OVER_MESSAGE);
        } else {
            for &cell in self.food() {
                display.draw_cell(cell, consts::FOOD_GLYPH);
            }
            // Draw the head last so that it's visible even when it overlaps
            // something
            let mut segments = self.segments();
            let head = segments.next();
            for seg in segments.chain(head) {
                display.draw_cell(seg.cell, seg.role.glyph());
            }
        }
        display.present()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    Running,
    Paused,
    /// The snake has run into itself
    Over,
}

/// What happened on a call to [`SnakeGame::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    /// The snake moved and the game goes on
    Continue,
    /// The game is paused, so nothing moved
    Skipped,
    /// The snake has bitten itself; no more ticks are needed
    GameOver,
}
