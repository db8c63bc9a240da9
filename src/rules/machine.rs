//! The sequence state machine.
//!
//! Players alternately append one entity to a shared sequence. Before adding
//! a step, the player whose turn it is must replay the whole sequence; the
//! first wrong selection ends the round with that player as the loser.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{EntityId, PlayerId, SetupError, SetupResult};
use crate::events::{EventBus, GameEvent};
use crate::present::Presenter;

/// What a single selection did to the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// A new step was appended and the turn passed.
    StepAdded {
        /// The player who must now replay the sequence.
        next_player: PlayerId,
        /// Sequence length after the append.
        length: usize,
    },

    /// The selection matched the step at `index`.
    Replayed { index: usize },

    /// The selection did not match; the round is over and the machine reset.
    Mismatch {
        loser: PlayerId,
        index: usize,
        expected: EntityId,
    },

    /// The entity is not in the roster. Nothing changed.
    Ignored,
}

impl SelectionOutcome {
    /// Whether this selection ended the round.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }
}

/// Snapshot of turn progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub current_player: PlayerId,
    pub expected_index: usize,
    pub length: usize,
}

impl TurnState {
    /// True when the next selection appends a new step.
    #[must_use]
    pub fn awaiting_new_step(&self) -> bool {
        self.expected_index == self.length
    }
}

/// Owns the sequence, replay progress, and turn ownership.
#[derive(Clone, Debug)]
pub struct SequenceMachine {
    /// Entities that may be selected.
    roster: FxHashSet<EntityId>,

    /// Steps so far, oldest first.
    sequence: Vec<EntityId>,

    /// Active flag per step indicator, paired with `sequence` by position.
    indicators: Vec<bool>,

    /// Position the next replay selection must match.
    expected_index: usize,

    current_player: PlayerId,
}

impl SequenceMachine {
    /// Create a machine for the given roster.
    ///
    /// ```
    /// use monster_echo::core::{EntityId, SetupError};
    /// use monster_echo::rules::SequenceMachine;
    ///
    /// assert!(SequenceMachine::new([EntityId(1), EntityId(2)], 2).is_ok());
    /// assert_eq!(
    ///     SequenceMachine::new([EntityId(1), EntityId(1)], 2).unwrap_err(),
    ///     SetupError::TooFewEntities { found: 1, required: 2 },
    /// );
    /// ```
    pub fn new(roster: impl IntoIterator<Item = EntityId>, min_distinct: usize) -> SetupResult<Self> {
        if min_distinct < 2 {
            return Err(SetupError::MinimumTooSmall(min_distinct));
        }

        let roster: FxHashSet<EntityId> = roster.into_iter().collect();
        if roster.len() < min_distinct {
            return Err(SetupError::TooFewEntities {
                found: roster.len(),
                required: min_distinct,
            });
        }

        Ok(Self {
            roster,
            sequence: Vec::new(),
            indicators: Vec::new(),
            expected_index: 0,
            current_player: PlayerId::ONE,
        })
    }

    /// Process one validated selection.
    pub fn add_selection(
        &mut self,
        entity: EntityId,
        bus: &mut EventBus,
        presenter: &mut dyn Presenter,
    ) -> SelectionOutcome {
        if !self.roster.contains(&entity) {
            tracing::warn!(%entity, "selection of entity outside the roster ignored");
            return SelectionOutcome::Ignored;
        }

        if self.sequence.is_empty() {
            presenter.show_round_start_ui();
            tracing::info!(player = %self.current_player, "round started");
        }

        if self.awaiting_new_step() {
            return self.append_step(entity, bus, presenter);
        }

        let index = self.expected_index;
        let expected = self.sequence[index];
        if expected != entity {
            let loser = self.current_player;
            tracing::info!(%loser, index, %expected, got = %entity, "wrong selection, round over");

            bus.publish(&GameEvent::GameOver(loser));
            presenter.show_result(loser);
            self.reset(presenter);

            return SelectionOutcome::Mismatch {
                loser,
                index,
                expected,
            };
        }

        self.set_indicator(index, true, presenter);
        self.expected_index += 1;
        tracing::debug!(%entity, index, "replayed step");

        SelectionOutcome::Replayed { index }
    }

    fn append_step(
        &mut self,
        entity: EntityId,
        bus: &mut EventBus,
        presenter: &mut dyn Presenter,
    ) -> SelectionOutcome {
        let index = self.sequence.len();
        self.sequence.push(entity);
        self.indicators.push(false);
        presenter.add_indicator(index);
        self.set_indicator(index, true, presenter);

        self.current_player = self.current_player.opponent();
        tracing::debug!(%entity, length = self.sequence.len(), next = %self.current_player, "step added");
        bus.publish(&GameEvent::TurnPassed(self.current_player));

        self.expected_index = 0;
        for index in 0..self.indicators.len() {
            self.set_indicator(index, false, presenter);
        }

        SelectionOutcome::StepAdded {
            next_player: self.current_player,
            length: self.sequence.len(),
        }
    }

    fn set_indicator(&mut self, index: usize, active: bool, presenter: &mut dyn Presenter) {
        if let Some(flag) = self.indicators.get_mut(index) {
            *flag = active;
            if active {
                presenter.set_indicator_active(index);
            } else {
                presenter.set_indicator_inactive(index);
            }
        }
    }

    /// Restore the initial state: empty sequence, player one to move.
    pub fn reset(&mut self, presenter: &mut dyn Presenter) {
        self.sequence.clear();
        self.indicators.clear();
        self.expected_index = 0;
        self.current_player = PlayerId::ONE;
        presenter.clear_indicators();
    }

    #[must_use]
    pub fn sequence(&self) -> &[EntityId] {
        &self.sequence
    }

    #[must_use]
    pub fn indicators(&self) -> &[bool] {
        &self.indicators
    }

    #[must_use]
    pub fn expected_index(&self) -> usize {
        self.expected_index
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// True when the next selection appends a new step.
    #[must_use]
    pub fn awaiting_new_step(&self) -> bool {
        self.expected_index == self.sequence.len()
    }

    #[must_use]
    pub fn in_roster(&self, entity: EntityId) -> bool {
        self.roster.contains(&entity)
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        TurnState {
            current_player: self.current_player,
            expected_index: self.expected_index,
            length: self.sequence.len(),
        }
    }
}
