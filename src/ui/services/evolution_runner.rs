use crate::config::evolution::EvolutionConfig;
use crate::engines::evaluation::Target;
use crate::engines::generation::{BestSnapshot, EvolutionEngine, SnapshotReader};
use crate::error::{PhotogenicError, Result};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Messages from the UI to the engine thread
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    SetPopulationSize(usize),
    SetMutationRate(f64),
    Pause,
    Resume,
    Stop,
}

/// Messages from the engine thread to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum RunnerEvent {
    Rejected(String),
    MutationRate(f64),
    Paused,
    Resumed,
    Stopped { generation: u64 },
}

/// Owns an engine on a background thread that steps it as fast as it can.
///
/// The UI never waits on the engine: commands go over a channel and are
/// applied between steps, and the best palette is read from the shared
/// snapshot at whatever rate the UI repaints.
pub struct EvolutionRunner {
    handle: Option<JoinHandle<()>>,
    command_tx: Sender<EngineCommand>,
    event_rx: Receiver<RunnerEvent>,
    snapshots: SnapshotReader,
}

impl EvolutionRunner {
    /// Build the engine on the calling thread, so configuration errors are
    /// reported here, then hand it to a new engine thread.
    pub fn start(config: EvolutionConfig, target: Target) -> Result<Self> {
        let engine = EvolutionEngine::new(config, target)?;
        Self::spawn(engine)
    }

    pub fn spawn(engine: EvolutionEngine) -> Result<Self> {
        let (command_tx, command_rx) = channel();
        let (event_tx, event_rx) = channel();
        let snapshots = engine.snapshot_reader();

        log::info!(
            "Starting engine thread: {} colors, population {}",
            engine.color_count(),
            engine.population_size()
        );

        let handle = thread::Builder::new()
            .name("engine".to_owned())
            .spawn(move || Self::run(engine, command_rx, event_tx))
            .map_err(|e| PhotogenicError::Runner(format!("Failed to spawn engine thread: {}", e)))?;

        Ok(Self {
            handle: Some(handle),
            command_tx,
            event_rx,
            snapshots,
        })
    }

    fn run(mut engine: EvolutionEngine, command_rx: Receiver<EngineCommand>, event_tx: Sender<RunnerEvent>) {
        let mut paused = false;

        'outer: loop {
            // Drain pending commands; block only while paused
            loop {
                let command = if paused {
                    match command_rx.recv() {
                        Ok(command) => command,
                        Err(_) => break 'outer,
                    }
                } else {
                    match command_rx.try_recv() {
                        Ok(command) => command,
                        Err(TryRecvError::Empty) => break,
                        Err(TryRecvError::Disconnected) => break 'outer,
                    }
                };

                match command {
                    EngineCommand::SetPopulationSize(size) => {
                        if let Err(e) = engine.set_population_size(size) {
                            log::warn!("Rejected population size {}: {}", size, e);
                            let _ = event_tx.send(RunnerEvent::Rejected(e.to_string()));
                        }
                    }
                    EngineCommand::SetMutationRate(rate) => {
                        let applied = engine.set_mutation_rate(rate);
                        let _ = event_tx.send(RunnerEvent::MutationRate(applied));
                    }
                    EngineCommand::Pause => {
                        paused = true;
                        let _ = event_tx.send(RunnerEvent::Paused);
                    }
                    EngineCommand::Resume => {
                        paused = false;
                        let _ = event_tx.send(RunnerEvent::Resumed);
                    }
                    EngineCommand::Stop => break 'outer,
                }
            }

            engine.step();
        }

        log::info!("Engine thread stopped at generation {}", engine.generation());
        let _ = event_tx.send(RunnerEvent::Stopped {
            generation: engine.generation(),
        });
    }

    fn send(&self, command: EngineCommand) {
        if self.command_tx.send(command).is_err() {
            log::warn!("Engine thread is gone; command dropped");
        }
    }

    pub fn set_population_size(&self, size: usize) {
        self.send(EngineCommand::SetPopulationSize(size));
    }

    pub fn set_mutation_rate(&self, rate: f64) {
        self.send(EngineCommand::SetMutationRate(rate));
    }

    pub fn pause(&self) {
        self.send(EngineCommand::Pause);
    }

    pub fn resume(&self) {
        self.send(EngineCommand::Resume);
    }

    /// Latest best palette (non-blocking)
    pub fn latest(&self) -> Arc<BestSnapshot> {
        self.snapshots.latest()
    }

    pub fn snapshot_reader(&self) -> SnapshotReader {
        self.snapshots.clone()
    }

    /// Poll for events (non-blocking)
    pub fn poll_events(&self) -> Vec<RunnerEvent> {
        self.event_rx.try_iter().collect()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the engine thread and wait for it
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.command_tx.send(EngineCommand::Stop);
            if handle.join().is_err() {
                log::warn!("Engine thread panicked");
            }
        }
    }
}

impl Drop for EvolutionRunner {
    fn drop(&mut self) {
        self.stop();
    }
}
