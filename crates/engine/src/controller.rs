//! Session controller - owns the live session and executes its effects
//!
//! Player inputs and due timers both become [`Event`]s and go through
//! [`SessionController::dispatch`], so the controller is the only writer of the
//! session. Timer payloads carry the generation they were scheduled under; a tag
//! from an older generation is dropped instead of being delivered.

use tracing::{debug, info, trace, warn};

use memory_match_core::{
    Dealer, Difficulty, Effect, Event, IgnoreReason, Palette, Session, SessionSnapshot, SessionSummary, Step,
};
use memory_match_types::{DifficultyLevel, Phase, PlayerInput, Preferences, TileId, TimerKind};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::notify::Notifier;
use crate::timer::{Fired, TimerManager};

/// Timer payload: what fired and which session instance scheduled it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTag {
    pub kind: TimerKind,
    pub generation: u64,
}

/// What happened to a dispatched event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

pub struct SessionController<N: Notifier> {
    session: Session,
    dealer: Dealer,
    timers: TimerManager<TimerTag>,
    notifier: N,
    preferences: Preferences,
}

impl<N: Notifier> SessionController<N> {
    /// Lobby session using the builtin palette for the configured emoji set
    pub fn new(config: &EngineConfig, notifier: N) -> Self {
        Self::with_dealer(config, config.dealer(), notifier)
    }

    /// Lobby session dealing from an explicit palette
    pub fn with_palette(config: &EngineConfig, palette: Palette, notifier: N) -> Self {
        Self::with_dealer(config, config.dealer_for(palette), notifier)
    }

    pub fn with_dealer(config: &EngineConfig, dealer: Dealer, notifier: N) -> Self {
        Self {
            session: Session::new(config.difficulty, config.timings),
            dealer,
            timers: TimerManager::new(),
            notifier,
            preferences: config.preferences,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Layout of the active (or staged) difficulty, for sizing the grid
    pub fn current_difficulty(&self) -> Difficulty {
        Difficulty::of(self.session.difficulty())
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn palette(&self) -> &Palette {
        self.dealer.palette()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.session.snapshot_into(out);
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_snapshot(&self.session.snapshot(), &self.preferences)
    }

    /// Virtual clock reading
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn set_difficulty(&mut self, level: DifficultyLevel) -> Result<Outcome, EngineError> {
        self.dispatch(Event::SetDifficulty(level))
    }

    pub fn start(&mut self) -> Result<Outcome, EngineError> {
        self.dispatch(Event::Start)
    }

    pub fn restart(&mut self) -> Result<Outcome, EngineError> {
        self.dispatch(Event::Restart)
    }

    pub fn go_to_lobby(&mut self) -> Result<Outcome, EngineError> {
        self.dispatch(Event::GoToLobby)
    }

    pub fn select_tile(&mut self, id: TileId) -> Result<Outcome, EngineError> {
        self.dispatch(Event::SelectTile(id))
    }

    pub fn open_settings(&mut self) -> Result<Outcome, EngineError> {
        self.dispatch(Event::OpenSettings)
    }

    /// Close the panel without applying anything
    pub fn close_settings(&mut self) -> Result<Outcome, EngineError> {
        self.dispatch(Event::CloseSettings {
            changes_applied: false,
        })
    }

    /// Close the panel with `preferences`
    ///
    /// Identical preferences close like [`Self::close_settings`]. Different
    /// ones are stored, the palette is swapped when the emoji set changed, and
    /// the session regenerates (or resets, if opened from the lobby). A failed
    /// deal restores the previous preferences and palette.
    pub fn apply_settings(&mut self, preferences: Preferences) -> Result<Outcome, EngineError> {
        if !self.session.settings_open() {
            let event = Event::CloseSettings {
                changes_applied: true,
            };
            return Ok(self.ignored(event, IgnoreReason::SettingsNotOpen));
        }

        let changes_applied = preferences != self.preferences;
        let previous = self.preferences;
        let previous_palette = (preferences.emoji_set != previous.emoji_set)
            .then(|| self.dealer.palette().clone());

        if changes_applied {
            if previous_palette.is_some() {
                self.dealer.set_palette(Palette::builtin(preferences.emoji_set));
            }
            self.preferences = preferences;
            info!(
                color_scheme = preferences.color_scheme.as_str(),
                emoji_set = preferences.emoji_set.as_str(),
                "preferences changed"
            );
        }

        let result = self.dispatch(Event::CloseSettings { changes_applied });
        if result.is_err() {
            self.preferences = previous;
            if let Some(palette) = previous_palette {
                self.dealer.set_palette(palette);
            }
        }
        result
    }

    pub fn handle(&mut self, input: PlayerInput) -> Result<Outcome, EngineError> {
        match input {
            PlayerInput::SetDifficulty(level) => self.set_difficulty(level),
            PlayerInput::Start => self.start(),
            PlayerInput::Restart => self.restart(),
            PlayerInput::GoToLobby => self.go_to_lobby(),
            PlayerInput::SelectTile(id) => self.select_tile(id),
            PlayerInput::OpenSettings => self.open_settings(),
            PlayerInput::CloseSettings => self.close_settings(),
            PlayerInput::ApplySettings(preferences) => self.apply_settings(preferences),
        }
    }

    /// Run one event through the state machine and execute its effects
    pub fn dispatch(&mut self, event: Event) -> Result<Outcome, EngineError> {
        let step = match self.session.transition(event, &mut self.dealer) {
            Ok(step) => step,
            Err(err) => {
                warn!(event = event.as_str(), error = %err, "deal failed");
                return Err(err.into());
            }
        };

        match step {
            Step::Ignored(reason) => Ok(self.ignored(event, reason)),
            Step::Next { session, effects } => {
                let from = self.session.phase();
                self.session = session;

                let to = self.session.phase();
                if from != to {
                    info!(
                        from = from.as_str(),
                        to = to.as_str(),
                        generation = self.session.generation(),
                        "phase change"
                    );
                }

                self.run_effects(&effects);
                Ok(Outcome::Applied)
            }
        }
    }

    /// Move the virtual clock forward by `elapsed_ms`
    pub fn advance(&mut self, elapsed_ms: u64) -> Result<usize, EngineError> {
        self.advance_to(self.now_ms().saturating_add(elapsed_ms))
    }

    /// Fire every timer due by `until_ms`, in order; returns how many were delivered
    pub fn advance_to(&mut self, until_ms: u64) -> Result<usize, EngineError> {
        let mut delivered = 0;

        while let Some(Fired { payload: tag, due_ms, .. }) = self.timers.pop_due(until_ms) {
            if tag.generation != self.session.generation() {
                trace!(
                    kind = tag.kind.as_str(),
                    tag_generation = tag.generation,
                    generation = self.session.generation(),
                    due_ms,
                    "stale timer dropped"
                );
                continue;
            }

            delivered += 1;
            self.dispatch(Event::Timer(tag.kind))?;
        }

        self.timers.advance_to(until_ms);
        Ok(delivered)
    }

    fn ignored(&self, event: Event, reason: IgnoreReason) -> Outcome {
        debug!(
            event = event.as_str(),
            reason = reason.as_str(),
            phase = self.session.phase().as_str(),
            "event ignored"
        );
        Outcome::Ignored(reason)
    }

    fn run_effects(&mut self, effects: &[Effect]) {
        let generation = self.session.generation();

        for effect in effects {
            match *effect {
                Effect::Schedule { kind, delay_ms } => {
                    self.timers
                        .schedule(u64::from(delay_ms), TimerTag { kind, generation });
                }
                Effect::ScheduleRepeating { kind, interval_ms } => {
                    self.timers
                        .schedule_repeating(u64::from(interval_ms), TimerTag { kind, generation });
                }
                Effect::Cancel(kind) => {
                    self.timers.cancel_where(|tag| tag.kind == kind);
                }
                Effect::CancelAll => self.timers.cancel_all(),
                Effect::Notify(kind) => {
                    if let Err(err) = self.notifier.notify(kind) {
                        debug!(kind = kind.as_str(), error = %err, "notification failed");
                    }
                }
            }
        }
    }
}
