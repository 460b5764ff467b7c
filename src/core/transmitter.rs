//! Background loop that samples, composes and sends on a fixed cadence.
//!
//! The loop runs on its own Tokio runtime so the interactive side is never
//! blocked. Start/stop is cooperative: the state flag is checked once per
//! iteration boundary and an in-flight tick always completes. Every start
//! opens a new run generation; a loop from an older generation exits at its
//! next boundary even if the transmitter has been started again meanwhile.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::chatbox::{ChatboxSink, SendRequest};
use crate::core::composer::{compose, sample};
use crate::core::sensors::Sensors;
use crate::core::toggles::Toggles;
use crate::error::{ChatboxError, Result};

/// Whether the loop should keep sending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Active,
}

/// Shared state published to the loops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunState {
    state: LoopState,
    generation: u64,
}

impl RunState {
    fn allows(&self, generation: u64) -> bool {
        self.state == LoopState::Active && self.generation == generation
    }
}

/// Result of one iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub message: String,
    pub delivered: bool,
}

/// Sample every enabled source, compose and send once.
///
/// Blocking: the CPU sample alone takes about a second.
pub fn run_tick(toggles: &Toggles, sensors: &dyn Sensors, sink: &dyn ChatboxSink) -> TickOutcome {
    let readings = sample(toggles, sensors);
    let message = compose(toggles, &readings);

    let delivered = match sink.send(&SendRequest::new(message.as_str())) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Error sending chat message: {}", e);
            false
        }
    };

    TickOutcome { message, delivered }
}

/// Owns the transmission loop and the runtime it runs on.
pub struct Transmitter {
    state_tx: watch::Sender<RunState>,
    toggles_tx: watch::Sender<Toggles>,
    sensors: Arc<dyn Sensors>,
    sink: Arc<dyn ChatboxSink>,
    interval: Duration,
    workers: Mutex<Vec<JoinHandle<()>>>,
    runtime: tokio::runtime::Runtime,
}

impl Transmitter {
    pub fn new(
        sensors: Arc<dyn Sensors>,
        sink: Arc<dyn ChatboxSink>,
        toggles: Toggles,
        interval: Duration,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .thread_name("chatbox-loop")
            .build()
            .map_err(|e| ChatboxError::runtime(format!("Failed to build runtime: {}", e)))?;

        let (state_tx, _) = watch::channel(RunState {
            state: LoopState::Idle,
            generation: 0,
        });
        let (toggles_tx, _) = watch::channel(toggles);

        Ok(Self {
            state_tx,
            toggles_tx,
            sensors,
            sink,
            interval,
            workers: Mutex::new(Vec::new()),
            runtime,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state_tx.borrow().state
    }

    pub fn is_active(&self) -> bool {
        self.state() == LoopState::Active
    }

    /// Idle → Active. Returns `false` if the loop was already active.
    ///
    /// Always spawns a fresh loop when leaving Idle. A loop that was stopped
    /// but is still finishing its tick belongs to an older generation and
    /// exits on its own.
    pub fn start(&self) -> bool {
        let mut workers = self.workers.lock();

        let mut was_idle = false;
        let mut generation = 0;
        self.state_tx.send_modify(|run| {
            was_idle = run.state == LoopState::Idle;
            if was_idle {
                run.state = LoopState::Active;
                run.generation += 1;
            }
            generation = run.generation;
        });

        if was_idle {
            workers.retain(|handle| !handle.is_finished());
            workers.push(self.runtime.spawn(transmission_loop(
                generation,
                self.state_tx.subscribe(),
                self.toggles_tx.subscribe(),
                self.sensors.clone(),
                self.sink.clone(),
                self.interval,
            )));
        }

        was_idle
    }

    /// Active → Idle. Loops exit at their next iteration boundary.
    pub fn stop(&self) {
        self.state_tx.send_modify(|run| run.state = LoopState::Idle);
    }

    /// Stop and wait up to `limit` for every loop to exit.
    ///
    /// Must not be called from inside a Tokio runtime.
    pub fn stop_and_wait(&self, limit: Duration) -> bool {
        let handles = {
            let mut workers = self.workers.lock();
            self.stop();
            std::mem::take(&mut *workers)
        };

        if handles.is_empty() {
            return true;
        }

        self.runtime
            .block_on(async {
                tokio::time::timeout(limit, async {
                    for handle in handles {
                        let _ = handle.await;
                    }
                })
                .await
            })
            .is_ok()
    }

    /// Publish a new toggle set; picked up at the next tick.
    pub fn update_toggles(&self, toggles: Toggles) {
        self.toggles_tx.send_replace(toggles);
    }

    pub fn toggles(&self) -> Toggles {
        self.toggles_tx.borrow().clone()
    }
}

impl Drop for Transmitter {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn transmission_loop(
    generation: u64,
    state_rx: watch::Receiver<RunState>,
    toggles_rx: watch::Receiver<Toggles>,
    sensors: Arc<dyn Sensors>,
    sink: Arc<dyn ChatboxSink>,
    interval: Duration,
) {
    log::info!("Transmission loop started (run {})", generation);

    while state_rx.borrow().allows(generation) {
        let toggles = toggles_rx.borrow().clone();
        let sensors = sensors.clone();
        let sink = sink.clone();

        let tick = tokio::task::spawn_blocking(move || {
            run_tick(&toggles, sensors.as_ref(), sink.as_ref())
        })
        .await;

        match tick {
            Ok(outcome) => log::debug!(
                "Tick sent={} message={:?}",
                outcome.delivered,
                outcome.message
            ),
            Err(e) => log::error!("Tick aborted: {}", e),
        }

        tokio::time::sleep(interval).await;
    }

    log::info!("Transmission loop stopped (run {})", generation);
}
