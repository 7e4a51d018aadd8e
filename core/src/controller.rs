use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use serde::{Deserialize, Serialize};

use crate::*;

/// Source of the current time in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> Millis;
}

/// Deferred execution of the reveal timeout.
///
/// When `delay_ms` has passed the environment is expected to call [`GameController::reveal_elapsed`] with the same
/// round. Cancelling a handle must keep that call from happening.
pub trait Scheduler {
    type Handle;

    fn schedule(&mut self, round: RoundId, delay_ms: Millis) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Best-effort playback of the game's sound cues.
pub trait AudioSink {
    type Error: Debug;

    fn play(&mut self, cue: SoundCue) -> core::result::Result<(), Self::Error>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    Click,
    Win,
    Lose,
}

impl SoundCue {
    pub const ALL: [Self; 3] = [Self::Click, Self::Win, Self::Lose];

    pub const fn file_name(self) -> &'static str {
        use SoundCue::*;
        match self {
            Click => "metal-button-push.mp3",
            Win => "achievement-bell.mp3",
            Lose => "wrong-answer.mp3",
        }
    }
}

/// Everything a renderer needs to draw the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cells: Vec<Cell>,
    pub state: GameState,
    pub progress: CellCount,
    pub number_count: CellCount,
    pub elapsed_ms: Millis,
    pub elapsed: String,
}

/// Drives a [`MemoryEngine`] with dealt rounds, time, the reveal timer and sound.
///
/// Every operation reports whether observable state changed so the presentation layer knows when to redraw.
pub struct GameController<G, C, S: Scheduler, A> {
    engine: MemoryEngine,
    generator: G,
    clock: C,
    scheduler: S,
    audio: A,
    pending_reveal: Option<S::Handle>,
}

impl<G, C, S, A> GameController<G, C, S, A>
where
    G: RoundGenerator,
    C: Clock,
    S: Scheduler,
    A: AudioSink,
{
    pub fn new(config: GameConfig, generator: G, clock: C, scheduler: S, audio: A) -> Self {
        Self {
            engine: MemoryEngine::new(config),
            generator,
            clock,
            scheduler,
            audio,
            pending_reveal: None,
        }
    }

    pub fn engine(&self) -> &MemoryEngine {
        &self.engine
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn state(&self) -> GameState {
        self.engine.state()
    }

    pub fn cells(&self) -> &[Cell] {
        self.engine.cells()
    }

    pub fn progress(&self) -> CellCount {
        self.engine.progress()
    }

    pub fn elapsed_ms(&self) -> Millis {
        self.engine.elapsed_ms()
    }

    pub fn formatted_elapsed(&self) -> String {
        format_time(self.engine.elapsed_ms())
    }

    pub fn has_pending_reveal(&self) -> bool {
        self.pending_reveal.is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.engine.cells().to_vec(),
            state: self.engine.state(),
            progress: self.engine.progress(),
            number_count: self.engine.config().number_count,
            elapsed_ms: self.engine.elapsed_ms(),
            elapsed: self.formatted_elapsed(),
        }
    }

    /// Deals a new round and schedules the end of its reveal. Ignored while a round is in progress.
    pub fn start_game(&mut self) -> Result<UpdateOutcome> {
        let state = self.engine.state();
        if !state.can_start() {
            log::debug!("start ignored while {:?}", state);
            return Ok(UpdateOutcome::NoChange);
        }

        let layout = self.generator.generate(self.engine.config())?;
        self.cancel_pending_reveal();
        let round = self.engine.start(&layout, self.clock.now_ms())?;

        let delay_ms = self.engine.config().reveal_ms;
        self.pending_reveal = Some(self.scheduler.schedule(round, delay_ms));
        log::debug!("round {} showing for {}ms", round, delay_ms);
        Ok(UpdateOutcome::Changed)
    }

    /// Called by the environment once the reveal delay for `round` has passed.
    pub fn reveal_elapsed(&mut self, round: RoundId) -> UpdateOutcome {
        let outcome = self.engine.end_reveal(round);
        if outcome.has_update() {
            // already fired, nothing left to cancel
            self.pending_reveal = None;
        }
        outcome
    }

    pub fn click_cell(&mut self, id: CellId) -> ClickOutcome {
        use ClickOutcome::*;

        let outcome = match self.engine.click(id, self.clock.now_ms()) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("click on cell {} ignored: {}", id, err);
                return NoChange;
            }
        };

        match outcome {
            NoChange => {}
            Correct => self.play(SoundCue::Click),
            Won => {
                self.play(SoundCue::Click);
                log::info!("round won in {}s", self.formatted_elapsed());
                self.play(SoundCue::Win);
            }
            Lost => {
                self.play(SoundCue::Click);
                log::info!(
                    "round lost after {} of {}",
                    self.engine.progress(),
                    self.engine.config().number_count
                );
                self.play(SoundCue::Lose);
            }
        }
        outcome
    }

    pub fn reset_game(&mut self) -> UpdateOutcome {
        self.cancel_pending_reveal();
        self.engine.reset()
    }

    fn cancel_pending_reveal(&mut self) {
        if let Some(handle) = self.pending_reveal.take() {
            log::debug!("cancelling pending reveal timeout");
            self.scheduler.cancel(handle);
        }
    }

    fn play(&mut self, cue: SoundCue) {
        if let Err(err) = self.audio.play(cue) {
            log::error!("Error playing sound {:?}: {:?}", cue, err);
        }
    }
}
