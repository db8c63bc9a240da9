//! Game session and its builder.

use crate::audio::{BeatClock, SoundPicker};
use crate::core::{EntityId, GameConfig, GameRng, SetupResult};
use crate::entities::{Entity, EntityPool};
use crate::events::{self, EventBus, EventKind, GameEvent, SubscriptionId};
use crate::input::{HitTest, InputContext, InputOutcome, InputResolver, PointerEvent};
use crate::present::Presenter;
use crate::rules::{SelectionOutcome, SequenceMachine};

/// Builder for creating a [`Game`].
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    entities: Vec<(EntityId, String)>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Register an entity. Ids must be unique.
    #[must_use]
    pub fn entity(mut self, id: EntityId, name: impl Into<String>) -> Self {
        self.entities.push((id, name.into()));
        self
    }

    /// Validate the configuration, spawn every entity, and wire the bus.
    ///
    /// A rejected setup is logged once at `error` level and returned.
    pub fn build<P: Presenter, H: HitTest>(self, presenter: P, hit_test: H) -> SetupResult<Game<P, H>> {
        let result = self.assemble(presenter, hit_test);
        if let Err(err) = &result {
            tracing::error!(%err, "game setup rejected");
        }
        result
    }

    fn assemble<P: Presenter, H: HitTest>(self, presenter: P, hit_test: H) -> SetupResult<Game<P, H>> {
        let config = self.config;

        let mut distinct: Vec<EntityId> = self.entities.iter().map(|(id, _)| *id).collect();
        distinct.sort_unstable();
        distinct.dedup();
        config.validate(distinct.len())?;

        let mut bus = EventBus::new();
        if config.trace_events {
            events::trace_events(&mut bus);
        }

        let mut pool = EntityPool::new();
        for (id, name) in self.entities {
            pool.spawn(Entity::new(id, name, &config.elevation), &mut bus)?;
        }

        let machine = SequenceMachine::new(pool.ids().iter().copied(), config.min_entities)?;
        let beat = BeatClock::new(config.tempo_bpm)?;

        let rng = GameRng::new(config.seed);
        let turn_cue = if config.sounds.enabled() {
            Some(TurnCue {
                picker: SoundPicker::new(config.sounds.turn_clips, config.sounds.repeat_interval)?,
                rng: rng.for_context("turn-cue"),
            })
        } else {
            None
        };

        tracing::info!(
            entities = pool.len(),
            tempo = config.tempo_bpm,
            seed = config.seed,
            "game ready"
        );

        Ok(Game {
            config,
            bus,
            pool,
            machine,
            input: InputResolver::new(),
            beat,
            turn_cue,
            presenter,
            hit_test,
        })
    }
}

#[derive(Clone, Debug)]
struct TurnCue {
    picker: SoundPicker,
    rng: GameRng,
}

/// A running game: every component, wired together.
///
/// ```
/// use monster_echo::core::{EntityId, PlayerId};
/// use monster_echo::game::GameBuilder;
/// use monster_echo::input::ScreenPoint;
/// use monster_echo::present::NullPresenter;
///
/// let no_hits = |_: ScreenPoint| -> Option<EntityId> { None };
/// let mut game = GameBuilder::new()
///     .entity(EntityId(1), "Blob")
///     .entity(EntityId(2), "Fuzz")
///     .build(NullPresenter, no_hits)
///     .unwrap();
///
/// game.press(EntityId(1));
/// game.release();
/// assert_eq!(game.machine().current_player(), PlayerId::TWO);
/// ```
pub struct Game<P: Presenter, H: HitTest> {
    config: GameConfig,
    bus: EventBus,
    pool: EntityPool,
    machine: SequenceMachine,
    input: InputResolver,
    beat: BeatClock,
    turn_cue: Option<TurnCue>,
    presenter: P,
    hit_test: H,
}

impl<P: Presenter, H: HitTest> std::fmt::Debug for Game<P, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("entities", &self.pool.ids())
            .field("turn", &self.machine.turn_state())
            .field("engaged", &self.input.engaged())
            .field("bus", &self.bus)
            .finish_non_exhaustive()
    }
}

impl<P: Presenter, H: HitTest> Game<P, H> {
    /// Hit-test a raw pointer event and handle it.
    pub fn pointer(&mut self, event: PointerEvent) -> InputOutcome {
        let ctx = InputContext {
            pool: &self.pool,
            bus: &mut self.bus,
            machine: &mut self.machine,
            presenter: &mut self.presenter,
        };
        let outcome = self.input.handle(event, &self.hit_test, ctx);
        self.after_input(outcome);
        outcome
    }

    /// Press on an already resolved entity.
    pub fn press(&mut self, target: EntityId) -> InputOutcome {
        let ctx = InputContext {
            pool: &self.pool,
            bus: &mut self.bus,
            machine: &mut self.machine,
            presenter: &mut self.presenter,
        };
        let outcome = self.input.press(target, ctx);
        self.after_input(outcome);
        outcome
    }

    /// Release whatever is engaged.
    pub fn release(&mut self) -> InputOutcome {
        self.input.release(&self.pool, &mut self.presenter)
    }

    fn after_input(&mut self, outcome: InputOutcome) {
        let InputOutcome::Selected {
            selection: SelectionOutcome::StepAdded { .. },
            ..
        } = outcome
        else {
            return;
        };

        if let Some(cue) = &mut self.turn_cue {
            let clip = cue.picker.pick(&mut cue.rng);
            self.presenter.play_clip(clip);
        }
    }

    /// Advance time by `dt` seconds: fire a beat if one is due, then move
    /// every entity toward its target.
    ///
    /// Returns the beat phase if a beat fired.
    pub fn tick(&mut self, dt: f32) -> Option<bool> {
        let beat = self.beat.advance(dt);
        if let Some(phase) = beat {
            self.bus.publish(&GameEvent::BeatPulse(phase));
        }
        self.pool.advance_all(dt, self.config.move_speed);
        beat
    }

    /// Subscribe presentation code to game events.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&GameEvent) + 'static,
    ) -> SubscriptionId {
        self.bus.subscribe(kind, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Release input and start a fresh round.
    pub fn reset(&mut self) {
        self.input.release(&self.pool, &mut self.presenter);
        self.machine.reset(&mut self.presenter);
        if let Some(cue) = &mut self.turn_cue {
            cue.picker.reset();
        }
        tracing::info!("game reset");
    }

    /// Release input and despawn every entity, removing their beat
    /// subscriptions. Presses on the old entities are ignored afterwards.
    pub fn teardown(&mut self) {
        self.input.release(&self.pool, &mut self.presenter);
        let count = self.pool.len();
        self.pool.clear(&mut self.bus);
        tracing::info!(despawned = count, "game torn down");
    }

    /// Consume the game and hand back the presenter.
    pub fn into_presenter(mut self) -> P {
        self.teardown();
        self.presenter
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn machine(&self) -> &SequenceMachine {
        &self.machine
    }

    pub fn pool(&self) -> &EntityPool {
        &self.pool
    }

    pub fn input(&self) -> &InputResolver {
        &self.input
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn beat(&self) -> &BeatClock {
        &self.beat
    }
}
