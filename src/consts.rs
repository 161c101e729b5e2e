//! Assorted constants & hard-coded defaults
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(125);

/// Time between movements of the snake while fast mode is on
pub(crate) const FAST_TICK_PERIOD: Duration = Duration::from_millis(60);

/// How often a waiting ticker wakes up to check whether the game has been
/// paused, unpaused, sped up, or shut down
pub(crate) const POLL_PERIOD: Duration = Duration::from_millis(10);

/// Number of food items kept on the field at once
pub(crate) const FOOD_COUNT: usize = 3;

/// Number of body segments behind the head at the start of a game
pub(crate) const INITIAL_BODY_LENGTH: usize = 6;

/// Smallest number of rows the playing field may have
pub(crate) const MIN_HEIGHT: u16 = 10;

/// Smallest number of columns the playing field may have
pub(crate) const MIN_WIDTH: u16 = 10;

/// Glyph for the snake's head
pub(crate) const HEAD_GLYPH: char = 'O';

/// Glyph for the parts of the snake's body
pub(crate) const BODY_GLYPH: char = '#';

/// Glyph for food
pub(crate) const FOOD_GLYPH: char = 'O';

/// Text shown once the snake has run into itself
pub(crate) const GAME_OVER_MESSAGE: &str = "Game over!";
