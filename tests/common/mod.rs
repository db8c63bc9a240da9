//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use monster_echo::core::{EntityId, GameConfig, PlayerId};
use monster_echo::events::{EventKind, GameEvent};
use monster_echo::game::{Game, GameBuilder};
use monster_echo::input::ScreenPoint;
use monster_echo::present::Presenter;

pub const A: EntityId = EntityId(1);
pub const B: EntityId = EntityId(2);
pub const C: EntityId = EntityId(3);

/// One presenter call, as recorded.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Raise(EntityId),
    Lower(EntityId),
    StartFeedback(EntityId),
    StopFeedback(EntityId),
    AddIndicator(usize),
    IndicatorActive(usize),
    IndicatorInactive(usize),
    ClearIndicators,
    RoundStart,
    Result(PlayerId),
    Clip(usize),
}

/// Presenter that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<Call>,
}

impl RecordingPresenter {
    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn position(&self, call: &Call) -> Option<usize> {
        self.calls.iter().position(|c| c == call)
    }

    pub fn clips(&self) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Clip(clip) => Some(*clip),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn raise(&mut self, entity: EntityId) {
        self.calls.push(Call::Raise(entity));
    }
    fn lower(&mut self, entity: EntityId) {
        self.calls.push(Call::Lower(entity));
    }
    fn start_feedback(&mut self, entity: EntityId) {
        self.calls.push(Call::StartFeedback(entity));
    }
    fn stop_feedback(&mut self, entity: EntityId) {
        self.calls.push(Call::StopFeedback(entity));
    }
    fn add_indicator(&mut self, index: usize) {
        self.calls.push(Call::AddIndicator(index));
    }
    fn set_indicator_active(&mut self, index: usize) {
        self.calls.push(Call::IndicatorActive(index));
    }
    fn set_indicator_inactive(&mut self, index: usize) {
        self.calls.push(Call::IndicatorInactive(index));
    }
    fn clear_indicators(&mut self) {
        self.calls.push(Call::ClearIndicators);
    }
    fn show_round_start_ui(&mut self) {
        self.calls.push(Call::RoundStart);
    }
    fn show_result(&mut self, loser: PlayerId) {
        self.calls.push(Call::Result(loser));
    }
    fn play_clip(&mut self, clip: usize) {
        self.calls.push(Call::Clip(clip));
    }
}

/// Three entities laid out as unit-wide columns: x in [0,1) is A, [1,2) is
/// B, [2,3) is C.
pub fn columns(point: ScreenPoint) -> Option<EntityId> {
    if point.x < 0.0 || point.x >= 3.0 {
        return None;
    }
    Some(EntityId(point.x as u32 + 1))
}

pub type TestGame = Game<RecordingPresenter, fn(ScreenPoint) -> Option<EntityId>>;

pub fn game_with(config: GameConfig) -> TestGame {
    init_tracing();
    GameBuilder::new()
        .with_config(config)
        .entity(A, "Blob")
        .entity(B, "Fuzz")
        .entity(C, "Squid")
        .build(RecordingPresenter::default(), columns as fn(ScreenPoint) -> Option<EntityId>)
        .unwrap()
}

pub fn game() -> TestGame {
    game_with(GameConfig::default())
}

/// Record every event published on the game's bus.
pub fn record_events(game: &mut TestGame) -> Rc<RefCell<Vec<GameEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for kind in EventKind::ALL {
        let sink = Rc::clone(&log);
        game.subscribe(kind, move |event| sink.borrow_mut().push(*event));
    }
    log
}

/// Count events of one kind in a log.
pub fn count(log: &[GameEvent], kind: EventKind) -> usize {
    log.iter().filter(|e| e.kind() == kind).count()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
