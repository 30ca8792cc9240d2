//! Session state machine - the game reducer
//!
//! [`Session::transition`] maps `(session, event)` to the next session plus the
//! side effects the caller must execute (schedule/cancel timers, notify). The
//! session itself never touches a clock or a sink; it only describes what should
//! happen, which keeps every rule testable without real time.
//!
//! Selection and matched membership are sets of tile ids. Tiles carry no
//! per-tile flags, so there is a single source of truth for what is face-up.

use std::collections::BTreeSet;
use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::catalog::Difficulty;
use crate::deck::{DeckSource, Tile};
use crate::error::DeckError;
use crate::snapshot::{SessionSnapshot, TileView};
use crate::types::*;

/// Upper bound on effects produced by one transition
pub const MAX_EFFECTS: usize = 8;

/// Side effects of a transition, in execution order
pub type Effects = ArrayVec<Effect, MAX_EFFECTS>;

/// Discrete inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SetDifficulty(DifficultyLevel),
    Start,
    Restart,
    GoToLobby,
    SelectTile(TileId),
    OpenSettings,
    /// `changes_applied` is supplied by the settings collaborator
    CloseSettings { changes_applied: bool },
    /// A scheduled timer came due
    Timer(TimerKind),
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SetDifficulty(_) => "setDifficulty",
            Event::Start => "start",
            Event::Restart => "restart",
            Event::GoToLobby => "goToLobby",
            Event::SelectTile(_) => "selectTile",
            Event::OpenSettings => "openSettings",
            Event::CloseSettings { .. } => "closeSettings",
            Event::Timer(_) => "timer",
        }
    }
}

/// Work the caller performs after adopting the next session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// One-shot timer, `delay_ms` from now
    Schedule { kind: TimerKind, delay_ms: u32 },
    /// Periodic timer, first firing `interval_ms` from now
    ScheduleRepeating { kind: TimerKind, interval_ms: u32 },
    /// Cancel every pending timer of this kind
    Cancel(TimerKind),
    /// Cancel every pending timer
    CancelAll,
    /// Fire-and-forget notification
    Notify(NotifyKind),
}

/// Why an event left the session unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// Event is not valid in the current phase
    WrongPhase,
    /// Two tiles are face-up and awaiting the verdict
    ResolutionPending,
    /// Tile id is outside the dealt deck
    UnknownTile,
    /// Tile is already selected or matched
    AlreadyRevealed,
    /// Resolve fired without a full selection
    NothingToResolve,
    SettingsAlreadyOpen,
    SettingsNotOpen,
}

impl IgnoreReason {
    pub fn as_str(self) -> &'static str {
        match self {
            IgnoreReason::WrongPhase => "wrong_phase",
            IgnoreReason::ResolutionPending => "resolution_pending",
            IgnoreReason::UnknownTile => "unknown_tile",
            IgnoreReason::AlreadyRevealed => "already_revealed",
            IgnoreReason::NothingToResolve => "nothing_to_resolve",
            IgnoreReason::SettingsAlreadyOpen => "settings_already_open",
            IgnoreReason::SettingsNotOpen => "settings_not_open",
        }
    }
}

/// Result of a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Next { session: Session, effects: Effects },
    Ignored(IgnoreReason),
}

impl Step {
    fn next(session: Session, effects: Effects) -> Self {
        Step::Next { session, effects }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Step::Ignored(_))
    }
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    phase: Phase,
    difficulty: DifficultyLevel,
    /// Frozen once dealt; shared between successive session values.
    tiles: Arc<[Tile]>,
    selection: ArrayVec<TileId, PICKS_PER_TURN>,
    matched: BTreeSet<TileId>,
    moves: u32,
    elapsed_seconds: u32,
    settings_open: bool,
    /// Phase recorded when the settings panel opened.
    settings_opened_from: Option<Phase>,
    /// Monotonic session instance id (increments on every reset or deal).
    generation: u64,
    timings: Timings,
}

impl Session {
    /// Fresh lobby session
    pub fn new(difficulty: DifficultyLevel, timings: Timings) -> Self {
        Self {
            phase: Phase::Lobby,
            difficulty,
            tiles: Arc::from(Vec::new()),
            selection: ArrayVec::new(),
            matched: BTreeSet::new(),
            moves: 0,
            elapsed_seconds: 0,
            settings_open: false,
            settings_opened_from: None,
            generation: 0,
            timings,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    pub fn difficulty_config(&self) -> Difficulty {
        Difficulty::of(self.difficulty)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn selection(&self) -> &[TileId] {
        &self.selection
    }

    pub fn matched(&self) -> &BTreeSet<TileId> {
        &self.matched
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn settings_opened_from(&self) -> Option<Phase> {
        self.settings_opened_from
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Two tiles are face-up and the verdict has not landed yet
    pub fn is_resolution_pending(&self) -> bool {
        self.selection.is_full()
    }

    /// Every dealt tile is matched
    pub fn is_complete(&self) -> bool {
        !self.tiles.is_empty() && self.matched.len() == self.tiles.len()
    }

    /// Whether `SelectTile(id)` would be accepted right now
    pub fn is_selectable(&self, id: TileId) -> bool {
        self.phase == Phase::Playing
            && !self.selection.is_full()
            && id < self.tiles.len()
            && !self.selection.contains(&id)
            && !self.matched.contains(&id)
    }

    /// Presentation should not accept taps
    pub fn input_locked(&self) -> bool {
        self.phase != Phase::Playing || self.is_resolution_pending()
    }

    /// Apply an event
    ///
    /// Dealing events (`Start`, `Restart`, an applied `CloseSettings`) draw a
    /// deck from `deck`. A failed deal returns the error and leaves `self` as
    /// the current session.
    pub fn transition<D>(&self, event: Event, deck: &mut D) -> Result<Step, DeckError>
    where
        D: DeckSource + ?Sized,
    {
        let step = match event {
            Event::SetDifficulty(level) => self.set_difficulty(level),
            Event::Start => {
                if self.phase != Phase::Lobby {
                    Step::Ignored(IgnoreReason::WrongPhase)
                } else {
                    self.deal(deck)?
                }
            }
            Event::Restart => self.deal(deck)?,
            Event::GoToLobby => self.reset_to_lobby(),
            Event::SelectTile(id) => self.select(id),
            Event::OpenSettings => self.open_settings(),
            Event::CloseSettings { changes_applied } => {
                self.close_settings(changes_applied, deck)?
            }
            Event::Timer(kind) => self.on_timer(kind),
        };
        Ok(step)
    }

    fn set_difficulty(&self, level: DifficultyLevel) -> Step {
        if self.phase != Phase::Lobby {
            return Step::Ignored(IgnoreReason::WrongPhase);
        }

        let mut next = self.clone();
        next.difficulty = level;
        Step::next(next, Effects::new())
    }

    /// Fresh `Initializing` session with a new deck and generation
    fn deal<D>(&self, deck: &mut D) -> Result<Step, DeckError>
    where
        D: DeckSource + ?Sized,
    {
        let tiles = deck.deal(&self.difficulty_config())?;

        let mut next = Session::new(self.difficulty, self.timings);
        next.generation = self.generation.wrapping_add(1);
        next.tiles = Arc::from(tiles);
        next.phase = Phase::Initializing;

        let mut effects = Effects::new();
        effects.push(Effect::CancelAll);
        effects.push(Effect::Schedule {
            kind: TimerKind::Reveal,
            delay_ms: self.timings.reveal_ms,
        });
        Ok(Step::next(next, effects))
    }

    fn reset_to_lobby(&self) -> Step {
        let mut next = Session::new(self.difficulty, self.timings);
        next.generation = self.generation.wrapping_add(1);

        let mut effects = Effects::new();
        effects.push(Effect::CancelAll);
        Step::next(next, effects)
    }

    fn select(&self, id: TileId) -> Step {
        if self.phase != Phase::Playing {
            return Step::Ignored(IgnoreReason::WrongPhase);
        }
        if self.selection.is_full() {
            return Step::Ignored(IgnoreReason::ResolutionPending);
        }
        if id >= self.tiles.len() {
            return Step::Ignored(IgnoreReason::UnknownTile);
        }
        if self.selection.contains(&id) || self.matched.contains(&id) {
            return Step::Ignored(IgnoreReason::AlreadyRevealed);
        }

        let mut next = self.clone();
        next.selection.push(id);

        let mut effects = Effects::new();
        effects.push(Effect::Notify(NotifyKind::Tap));

        if next.selection.is_full() {
            next.moves = next.moves.saturating_add(1);
            effects.push(Effect::Schedule {
                kind: TimerKind::Resolve,
                delay_ms: self.timings.resolve_ms,
            });
        }

        Step::next(next, effects)
    }

    fn on_timer(&self, kind: TimerKind) -> Step {
        match kind {
            TimerKind::Reveal => self.end_reveal(),
            TimerKind::Resolve => self.resolve(),
            TimerKind::Clock => self.tick(),
            TimerKind::Victory(step) => {
                if self.phase != Phase::Won {
                    return Step::Ignored(IgnoreReason::WrongPhase);
                }
                let mut effects = Effects::new();
                effects.push(Effect::Notify(step.notify_kind()));
                Step::next(self.clone(), effects)
            }
        }
    }

    fn end_reveal(&self) -> Step {
        if self.phase != Phase::Initializing {
            return Step::Ignored(IgnoreReason::WrongPhase);
        }

        let mut next = self.clone();
        let mut effects = Effects::new();

        // Settings opened during the memorize window: go straight to paused.
        if next.settings_open {
            next.phase = Phase::Paused;
        } else {
            next.phase = Phase::Playing;
            effects.push(next.clock_effect());
        }

        Step::next(next, effects)
    }

    fn resolve(&self) -> Step {
        if !matches!(self.phase, Phase::Playing | Phase::Paused) {
            return Step::Ignored(IgnoreReason::WrongPhase);
        }
        let [first, second] = match self.selection.as_slice() {
            &[first, second] => [first, second],
            _ => return Step::Ignored(IgnoreReason::NothingToResolve),
        };

        let mut next = self.clone();
        let mut effects = Effects::new();
        next.selection.clear();

        if self.tiles[first].symbol == self.tiles[second].symbol {
            next.matched.insert(first);
            next.matched.insert(second);
            effects.push(Effect::Notify(NotifyKind::MatchSuccess));
        } else {
            effects.push(Effect::Notify(NotifyKind::MatchFail));
        }

        // A paused session wins when it resumes.
        if next.phase == Phase::Playing && next.is_complete() {
            next.enter_won(&mut effects);
        }

        Step::next(next, effects)
    }

    fn tick(&self) -> Step {
        if self.phase != Phase::Playing {
            return Step::Ignored(IgnoreReason::WrongPhase);
        }

        let mut next = self.clone();
        next.elapsed_seconds = next.elapsed_seconds.saturating_add(1);
        Step::next(next, Effects::new())
    }

    fn open_settings(&self) -> Step {
        if self.settings_open {
            return Step::Ignored(IgnoreReason::SettingsAlreadyOpen);
        }

        let mut next = self.clone();
        let mut effects = Effects::new();
        next.settings_open = true;
        next.settings_opened_from = Some(self.phase);

        if self.phase == Phase::Playing {
            next.phase = Phase::Paused;
            effects.push(Effect::Cancel(TimerKind::Clock));
        }

        Step::next(next, effects)
    }

    fn close_settings<D>(&self, changes_applied: bool, deck: &mut D) -> Result<Step, DeckError>
    where
        D: DeckSource + ?Sized,
    {
        if !self.settings_open {
            return Ok(Step::Ignored(IgnoreReason::SettingsNotOpen));
        }

        if changes_applied {
            return match self.settings_opened_from {
                Some(Phase::Lobby) | None => Ok(self.reset_to_lobby()),
                Some(_) => self.deal(deck),
            };
        }

        let mut next = self.clone();
        let mut effects = Effects::new();
        next.settings_open = false;
        next.settings_opened_from = None;

        if next.phase == Phase::Paused {
            if next.is_complete() {
                next.enter_won(&mut effects);
            } else {
                next.phase = Phase::Playing;
                effects.push(next.clock_effect());
            }
        }

        Ok(Step::next(next, effects))
    }

    fn clock_effect(&self) -> Effect {
        Effect::ScheduleRepeating {
            kind: TimerKind::Clock,
            interval_ms: self.timings.clock_tick_ms,
        }
    }

    fn enter_won(&mut self, effects: &mut Effects) {
        self.phase = Phase::Won;
        effects.push(Effect::Cancel(TimerKind::Clock));
        for step in VictoryStep::ALL {
            effects.push(Effect::Schedule {
                kind: TimerKind::Victory(step),
                delay_ms: self.timings.victory_offset_ms(step),
            });
        }
    }

    /// Write the presentation view into `out`, reusing its tile buffer
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        let showing_all = self.phase == Phase::Initializing;

        out.tiles.clear();
        out.tiles.extend(self.tiles.iter().map(|tile| {
            let matched = self.matched.contains(&tile.id);
            TileView {
                id: tile.id,
                symbol: tile.symbol.clone(),
                revealed: showing_all || matched || self.selection.contains(&tile.id),
                matched,
            }
        }));

        out.phase = self.phase;
        out.selection = self.selection.clone();
        out.matched_count = self.matched.len();
        out.moves = self.moves;
        out.elapsed_seconds = self.elapsed_seconds;
        out.difficulty = self.difficulty;
        out.settings_open = self.settings_open;
        out.input_locked = self.input_locked();
        out.generation = self.generation;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DifficultyLevel::default(), Timings::default())
    }
}
