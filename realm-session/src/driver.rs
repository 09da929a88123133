//! Memory-match timer driver.
//!
//! [`GameDriver`] runs the two timed parts of the minigame on tokio:
//!   - a game clock that ticks once per `tick_interval_ms` while playing
//!   - a one-shot flip-back that turns a mismatched pair face-down after
//!     `flip_back_delay_ms`
//!
//! The game itself lives behind a `parking_lot::Mutex`. The lock is never
//! held across an `.await`, and hooks run after it is released.
//!
//! All methods that spawn tasks must be called from inside a tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info};

use realm_core::config::GameConfig;
use realm_core::error::Result;
use realm_core::game::{Difficulty, FlipOutcome, MemoryMatch};

use crate::hooks::PresentationHooks;

/// Drives a [`MemoryMatch`] in real time.
pub struct GameDriver {
    game: Arc<Mutex<MemoryMatch>>,
    hooks: Arc<dyn PresentationHooks>,
    tick_interval: Duration,
    flip_back_delay: Duration,
    ticker: Option<JoinHandle<()>>,
    flip_backs: Vec<JoinHandle<()>>,
}

impl GameDriver {
    /// Create a driver in the setup phase.
    ///
    /// A zero tick interval is raised to one millisecond.
    #[must_use]
    pub fn new(config: &GameConfig, hooks: Arc<dyn PresentationHooks>) -> Self {
        Self {
            game: Arc::new(Mutex::new(MemoryMatch::new())),
            hooks,
            tick_interval: Duration::from_millis(config.tick_interval_ms.max(1)),
            flip_back_delay: Duration::from_millis(config.flip_back_delay_ms),
            ticker: None,
            flip_backs: Vec::new(),
        }
    }

    /// Deal a fresh board and start the clock. Any running round is dropped.
    pub fn start(&mut self, difficulty: Difficulty) {
        self.abort_tasks();
        let snapshot = {
            let mut game = self.game.lock();
            game.start(difficulty);
            game.clone()
        };
        info!(difficulty = %difficulty, tiles = snapshot.tiles().len(), "Memory match started");
        self.hooks.on_game_state_changed(&snapshot);
        self.ticker = Some(self.spawn_ticker());
    }

    /// Flip the tile at `index`.
    ///
    /// A mismatch schedules the flip-back; a win stops the clock.
    ///
    /// # Errors
    ///
    /// Returns [`realm_core::RealmError::TileOutOfRange`] for an index off
    /// the board.
    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome> {
        let (outcome, snapshot) = {
            let mut game = self.game.lock();
            let outcome = game.flip_tile(index)?;
            (outcome, game.clone())
        };

        match outcome {
            FlipOutcome::Ignored => return Ok(outcome),
            FlipOutcome::Mismatched { first, second } => {
                debug!(first, second, "Mismatch, scheduling flip-back");
                self.flip_backs.retain(|handle| !handle.is_finished());
                self.flip_backs.push(self.spawn_flip_back());
            }
            FlipOutcome::Won { score, elapsed_secs } => {
                info!(score, elapsed_secs, "Memory match won");
                if let Some(ticker) = self.ticker.take() {
                    ticker.abort();
                }
            }
            FlipOutcome::Revealed { .. } | FlipOutcome::Matched { .. } => {}
        }

        self.hooks.on_game_state_changed(&snapshot);
        Ok(outcome)
    }

    /// Stop all timers and return to the setup phase.
    pub fn reset(&mut self) {
        self.abort_tasks();
        let snapshot = {
            let mut game = self.game.lock();
            game.reset();
            game.clone()
        };
        debug!("Memory match reset");
        self.hooks.on_game_state_changed(&snapshot);
    }

    /// Copy of the current game state.
    #[must_use]
    pub fn snapshot(&self) -> MemoryMatch {
        self.game.lock().clone()
    }

    fn spawn_ticker(&self) -> JoinHandle<()> {
        let game = Arc::clone(&self.game);
        let hooks = Arc::clone(&self.hooks);
        let period = self.tick_interval;

        tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let snapshot = {
                    let mut game = game.lock();
                    if !game.tick() {
                        break;
                    }
                    game.clone()
                };
                hooks.on_game_state_changed(&snapshot);
            }
        })
    }

    fn spawn_flip_back(&self) -> JoinHandle<()> {
        let game = Arc::clone(&self.game);
        let hooks = Arc::clone(&self.hooks);
        let delay = self.flip_back_delay;

        tokio::spawn(async move {
            time::sleep(delay).await;
            let snapshot = {
                let mut game = game.lock();
                game.resolve_mismatch().then(|| game.clone())
            };
            if let Some(snapshot) = snapshot {
                hooks.on_game_state_changed(&snapshot);
            }
        })
    }

    fn abort_tasks(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        for handle in self.flip_backs.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for GameDriver {
    fn drop(&mut self) {
        self.abort_tasks();
    }
}
