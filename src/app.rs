use crate::command::Command;
use crate::config::GameConfig;
use crate::display::Display;
use crate::game::{Direction, Grid, SnakeGame};
use crate::input::InputSource;
use crate::ticker::{lock, SharedGame, Ticker, Timing};
use rand::{rngs::StdRng, Rng};
use std::io;
use std::sync::{Arc, Mutex};

/// Ties a game to its ticker thread and to the player's input
#[derive(Debug)]
pub(crate) struct App<R = StdRng> {
    game: SharedGame<R>,
    timing: Timing,
}

impl App<StdRng> {
    pub(crate) fn new(grid: Grid, config: &GameConfig) -> App {
        App::from_game(SnakeGame::new(grid, config), Timing::from(config))
    }
}

impl<R: Rng + Send + 'static> App<R> {
    pub(crate) fn from_game(game: SnakeGame<R>, timing: Timing) -> App<R> {
        App {
            game: Arc::new(Mutex::new(game)),
            timing,
        }
    }

    /// Play until the player quits.  The ticker keeps drawing on `display`
    /// in the background while this thread waits on `input`; after the game
    /// ends, input is still read so that the final screen stays up until the
    /// player quits.
    pub(crate) fn run<I, D>(&self, input: &mut I, display: D) -> io::Result<()>
    where
        I: InputSource,
        D: Display + Send + 'static,
    {
        let ticker = Ticker::spawn(Arc::clone(&self.game), display, self.timing);
        let r = self.process_input(input);
        let stopped = ticker.stop();
        r?;
        stopped.map(drop)
    }

    fn process_input<I: InputSource>(&self, input: &mut I) -> io::Result<()> {
        loop {
            let Some(cmd) = input.next_command()? else {
                continue;
            };
            log::trace!("Received command {cmd:?}");
            let mut game = lock(&self.game);
            match cmd {
                Command::Quit => {
                    log::info!("Quit requested");
                    return Ok(());
                }
                Command::Up => game.set_direction(Direction::Up),
                Command::Down => game.set_direction(Direction::Down),
                Command::Left => game.set_direction(Direction::Left),
                Command::Right => game.set_direction(Direction::Right),
                Command::Pause => game.toggle_pause(),
                Command::Speed => game.toggle_speed(),
                Command::FocusLost => game.pause(),
            }
            log::trace!(
                "Now heading {:?}, state {:?}",
                game.direction(),
                game.state()
            );
        }
    }
}
