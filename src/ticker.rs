use crate::config::GameConfig;
use crate::consts;
use crate::display::Display;
use crate::game::{SnakeGame, TickOutcome};
use rand::Rng;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A game shared between the ticker thread and the input loop
pub(crate) type SharedGame<R> = Arc<Mutex<SnakeGame<R>>>;

/// Lock the game, carrying on even if another thread panicked while holding
/// the lock
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Timing {
    /// Time between ticks
    pub(crate) normal: Duration,

    /// Time between ticks in fast mode
    pub(crate) fast: Duration,

    /// Longest stretch the ticker sleeps without checking the game's flags
    pub(crate) poll: Duration,
}

impl Timing {
    fn interval(self, fast: bool) -> Duration {
        if fast {
            self.fast
        } else {
            self.normal
        }
    }
}

impl From<&GameConfig> for Timing {
    fn from(config: &GameConfig) -> Timing {
        Timing {
            normal: config.tick_period,
            fast: config.fast_tick_period,
            poll: consts::POLL_PERIOD,
        }
    }
}

impl Default for Timing {
    fn default() -> Timing {
        Timing {
            normal: consts::TICK_PERIOD,
            fast: consts::FAST_TICK_PERIOD,
            poll: consts::POLL_PERIOD,
        }
    }
}

/// Handle to a background thread that ticks a game and draws each frame.
///
/// The thread stops by itself once the game is over, or when asked to via
/// [`Ticker::stop()`].  Either way, joining it gives the display back.
#[derive(Debug)]
pub(crate) struct Ticker<D> {
    handle: JoinHandle<io::Result<D>>,
    shutdown: Arc<AtomicBool>,
}

impl<D: Display + Send + 'static> Ticker<D> {
    pub(crate) fn spawn<R: Rng + Send + 'static>(
        game: SharedGame<R>,
        display: D,
        timing: Timing,
    ) -> Ticker<D> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);
        let handle = thread::spawn(move || run(&game, display, timing, &flag));
        Ticker { handle, shutdown }
    }

    /// Ask the thread to stop and wait for it to do so
    pub(crate) fn stop(self) -> io::Result<D> {
        self.shutdown.store(true, Ordering::Release);
        self.join()
    }

    /// Wait for the thread to finish on its own
    pub(crate) fn join(self) -> io::Result<D> {
        self.handle
            .join()
            .map_err(|_| io::Error::other("ticker thread panicked"))?
    }
}

fn run<R: Rng, D: Display>(
    game: &Mutex<SnakeGame<R>>,
    mut display: D,
    timing: Timing,
    shutdown: &AtomicBool,
) -> io::Result<D> {
    lock(game).render(&mut display)?;
    while wait_for_tick(game, timing, shutdown) {
        let mut g = lock(game);
        match g.tick() {
            TickOutcome::Continue => g.render(&mut display)?,
            TickOutcome::Skipped => (),
            TickOutcome::GameOver => {
                g.render(&mut display)?;
                log::info!("Game over; ticker stopping");
                break;
            }
        }
    }
    Ok(display)
}

/// Sleep until the next tick is due.  Time spent paused does not count
/// towards the wait, and a change of speed takes effect immediately.
/// Returns `false` if shutdown was requested in the meantime.
fn wait_for_tick<R>(
    game: &Mutex<SnakeGame<R>>,
    timing: Timing,
    shutdown: &AtomicBool,
) -> bool {
    let mut waited = Duration::ZERO;
    loop {
        if shutdown.load(Ordering::Acquire) {
            return false;
        }
        let (paused, interval) = {
            let g = lock(game);
            (g.is_paused(), timing.interval(g.is_fast()))
        };
        let nap = if paused {
            waited = Duration::ZERO;
            timing.poll
        } else if waited >= interval {
            return true;
        } else {
            timing.poll.min(interval.saturating_sub(waited))
        };
        thread::sleep(nap);
        waited += nap;
    }
}
