use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snapshot::Snapshot;

/// Cloneable handle to one game shared between the input, tick and render
/// threads.
///
/// Every operation holds the lock for its whole duration, so a tick is
/// published as a single unit and a snapshot never sees half of one.
#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<Session>>,
}

#[derive(Debug)]
struct Session {
    state: GameState,
    config: GameConfig,
    games_started: u64,
}

impl SharedGame {
    /// Builds the first game from `config`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let state = GameState::new(config)?;
        Ok(Self::from_state(state))
    }

    /// Wraps an already constructed game; restarts reuse its configuration.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        let config = *state.config();
        Self {
            inner: Arc::new(Mutex::new(Session {
                state,
                config,
                games_started: 1,
            })),
        }
    }

    /// Queues a turn; see [`GameState::enqueue_direction`].
    pub fn enqueue_direction(&self, direction: Direction) -> bool {
        self.lock().state.enqueue_direction(direction)
    }

    /// Advances one tick and returns the resulting status.
    pub fn advance_one_tick(&self) -> GameStatus {
        let mut session = self.lock();
        session.state.advance_one_tick();
        session.state.status()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.lock().state.snapshot()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.lock().state.status()
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.lock().config.tick_interval()
    }

    /// Discards the current game and starts a new one.
    ///
    /// Seeded configurations offset the seed by the number of games played,
    /// so a session is reproducible without every game being identical.
    pub fn restart(&self) -> Result<(), ConfigError> {
        let mut session = self.lock();
        let mut config = session.config;
        config.seed = config
            .seed
            .map(|seed| seed.wrapping_add(session.games_started));

        session.state = GameState::new(config)?;
        session.games_started += 1;
        info!("game {} started", session.games_started);
        Ok(())
    }

    // State is plain data and each operation leaves it consistent, so a
    // panic on another thread does not invalidate it.
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Fixed-rate clock thread that advances a [`SharedGame`].
///
/// The thread exits by itself once the game reaches a terminal status.
/// Dropping the ticker stops and joins it.
#[derive(Debug)]
pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Starts ticking `game` every `interval`.
    pub fn spawn(game: SharedGame, interval: Duration) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("snake-ticker".into())
            .spawn(move || run_clock(&game, interval, &thread_stop))?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Returns true once the clock thread has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Stops the clock and waits for the thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_clock(game: &SharedGame, interval: Duration, stop: &AtomicBool) {
    let mut next_tick = Instant::now() + interval;

    loop {
        // park_timeout may wake early, so wait against a deadline.
        loop {
            if stop.load(Ordering::Acquire) {
                debug!("ticker stopped");
                return;
            }
            let now = Instant::now();
            if now >= next_tick {
                break;
            }
            thread::park_timeout(next_tick - now);
        }

        let status = game.advance_one_tick();
        if status != GameStatus::Running {
            debug!("ticker finished with status {status:?}");
            return;
        }

        next_tick += interval;
    }
}
