//! Turn and score coordinator.
//!
//! [`ArenaMatch`] owns every mover, the board and the timer queue. Hosts call
//! [`ArenaMatch::step`] once per frame; nothing else mutates match state.
//!
//! ```text
//! Setup --(level card hidden)--> PlayerPhase <--> EnemyPhase
//!                                     |
//!                   (team reaches winning score)   (player starves)
//!                                     v                  v
//!                              LevelComplete          GameOver
//!                                     |
//!                         (restart delay, level + 1)
//!                                     v
//!                                   Setup
//! ```

mod play;
mod scoring;
mod setup;
mod turns;

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::{BoardBuilder, SceneRefs};
use crate::body::{Mover, MovingBody};
use crate::collision::Obstacles;
use crate::components::{Blocker, BodyRef};
use crate::config::ArenaConfig;
use crate::egg::Egg;
use crate::enemy::Enemy;
use crate::error::SetupError;
use crate::geometry::{LineGroup, Rect};
use crate::input::InputSource;
use crate::player::Player;
use crate::presentation::Presenter;
use crate::projectile::PushProjectile;
use crate::scheduler::TimerQueue;
use crate::score::{GameScore, Team};
use crate::turn::{Phase, TurnState};
use crate::wall::Wall;

use turns::Scheduled;

/// A running match.
pub struct ArenaMatch {
    config: ArenaConfig,
    board: Box<dyn BoardBuilder>,
    presenter: Box<dyn Presenter>,
    rng: ChaCha8Rng,
    clock: f32,
    level: u32,
    phase: Phase,
    turn: TurnState,
    timers: TimerQueue<Scheduled>,
    scene: SceneRefs,
    players: Vec<Player>,
    left_roster: Vec<usize>,
    right_roster: Vec<usize>,
    enemies: Vec<Enemy>,
    walls: Vec<Wall>,
    egg: Egg,
    projectiles: Vec<PushProjectile>,
    next_projectile_id: u64,
    score: GameScore,
    guides: LineGroup,
}

impl ArenaMatch {
    /// Builds the players and starts level 1.
    ///
    /// `seed` drives every random choice, so equal seeds and inputs replay
    /// identically.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidSlot`] or [`SetupError::DuplicateSlot`]
    /// for a bad roster, or whatever level 1 setup reports.
    pub fn new(
        config: ArenaConfig,
        board: Box<dyn BoardBuilder>,
        presenter: Box<dyn Presenter>,
        seed: u64,
    ) -> Result<Self, SetupError> {
        let players = setup::seat_players(&config)?;
        let guides = LineGroup::new(players.len(), config.player.aim_line_thickness);
        let mut arena = Self {
            egg: Egg::new(Vec2::ZERO, config.egg),
            config,
            board,
            presenter,
            rng: ChaCha8Rng::seed_from_u64(seed),
            clock: 0.0,
            level: 1,
            phase: Phase::Setup,
            turn: TurnState::default(),
            timers: TimerQueue::new(),
            scene: SceneRefs {
                background: Rect::from_corners(Vec2::ZERO, Vec2::ZERO),
                safe_zone: Rect::from_corners(Vec2::ZERO, Vec2::ZERO),
                left_base: Vec2::ZERO,
                right_base: Vec2::ZERO,
                egg_spawn: Vec2::ZERO,
            },
            players,
            left_roster: Vec::new(),
            right_roster: Vec::new(),
            enemies: Vec::new(),
            walls: Vec::new(),
            projectiles: Vec::new(),
            next_projectile_id: 0,
            score: GameScore::default(),
            guides,
        };
        arena.init_game()?;
        Ok(arena)
    }

    /// Advances the match by `dt` seconds.
    ///
    /// Runs due continuations, then (while the level is live) moves every
    /// body, resolves projectiles, deaths, pickups and scoring, checks for a
    /// winner, and hands the turn to the enemies once the players have moved.
    /// A finished match ignores further steps.
    ///
    /// # Errors
    ///
    /// Propagates a [`SetupError`] from a level restart.
    pub fn step(&mut self, dt: f32, input: &dyn InputSource) -> Result<(), SetupError> {
        if self.phase == Phase::GameOver {
            return Ok(());
        }
        self.clock += dt;
        self.run_due()?;
        if self.phase.is_live() {
            self.move_players(dt, input);
            if self.phase.is_live() {
                self.coast_others(dt);
                self.resolve_projectiles(dt);
                self.check_deaths();
                self.check_egg();
                self.check_win();
                self.maybe_start_enemy_phase();
            }
        }
        self.refresh_guides();
        Ok(())
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Turn flags.
    #[must_use]
    pub const fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Seconds simulated so far.
    #[must_use]
    pub const fn clock(&self) -> f32 {
        self.clock
    }

    /// Level number, starting at 1.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// This level's score.
    #[must_use]
    pub const fn score(&self) -> &GameScore {
        &self.score
    }

    /// Configuration the match runs with.
    #[must_use]
    pub const fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Markers resolved for the current level.
    #[must_use]
    pub const fn scene(&self) -> &SceneRefs {
        &self.scene
    }

    /// Players in index order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Player `index`, if it exists.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Mutable access to player `index`, for hosts that script positions.
    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Player indices on `team`, in roster order.
    #[must_use]
    pub fn roster(&self, team: Team) -> &[usize] {
        match team {
            Team::Left => &self.left_roster,
            Team::Right => &self.right_roster,
        }
    }

    /// Enemies in roster order.
    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Walls, including knocked-down ones.
    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// The egg.
    #[must_use]
    pub const fn egg(&self) -> &Egg {
        &self.egg
    }

    /// Mutable access to the egg.
    pub const fn egg_mut(&mut self) -> &mut Egg {
        &mut self.egg
    }

    /// Projectiles in flight.
    #[must_use]
    pub fn projectiles(&self) -> &[PushProjectile] {
        &self.projectiles
    }

    /// Aiming guides to draw this frame.
    #[must_use]
    pub const fn aim_guides(&self) -> &LineGroup {
        &self.guides
    }

    /// Continuations still waiting to run.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    /// Snapshot of everything that blocks movement right now.
    ///
    /// Standing walls and active players and enemies block; the egg never
    /// does.
    fn obstacles(&self) -> Obstacles {
        let mut obstacles = Obstacles::new();
        for (i, wall) in self.walls.iter().enumerate() {
            if !wall.is_destroyed() {
                obstacles.push(Blocker::Wall(i), wall.bounds);
            }
        }
        for (i, player) in self.players.iter().enumerate() {
            if player.body().is_active() {
                obstacles.push(Blocker::Body(BodyRef::Player(i)), player.body().bounds());
            }
        }
        for (i, enemy) in self.enemies.iter().enumerate() {
            if enemy.body().is_active() {
                obstacles.push(Blocker::Body(BodyRef::Enemy(i)), enemy.body().bounds());
            }
        }
        obstacles
    }

    fn body_mut_of(&mut self, body: BodyRef) -> Option<&mut MovingBody> {
        match body {
            BodyRef::Player(i) => self.players.get_mut(i).map(Mover::body_mut),
            BodyRef::Enemy(i) => self.enemies.get_mut(i).map(Mover::body_mut),
            BodyRef::Egg => Some(self.egg.body_mut()),
        }
    }

    fn refresh_guides(&mut self) {
        self.guides.deactivate_segments();
        for player in &self.players {
            let line = player.aim_line();
            if line.is_active() {
                self.guides.activate_line(line.start(), line.end());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{
        BoardLayout, Marker, MockBoardBuilder, BACKGROUND, EGG, LEFT_BASE, RIGHT_BASE, SAFE_ZONE,
    };
    use crate::config::PlayerSpec;
    use crate::presentation::{Cue, CueLog, SilentPresenter};
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn layout() -> BoardLayout {
        BoardLayout::default()
            .with_marker(
                BACKGROUND,
                Marker::Area(Rect::from_corners(Vec2::splat(-10.0), Vec2::splat(10.0))),
            )
            .with_marker(
                SAFE_ZONE,
                Marker::Area(Rect::from_corners(Vec2::splat(-1.0), Vec2::splat(1.0))),
            )
            .with_marker(LEFT_BASE, Marker::Point(Vec2::new(-8.0, 0.0)))
            .with_marker(RIGHT_BASE, Marker::Point(Vec2::new(8.0, 0.0)))
            .with_marker(EGG, Marker::Point(Vec2::new(0.0, 5.0)))
    }

    #[fixture]
    fn config() -> ArenaConfig {
        let mut config = ArenaConfig {
            players: vec![PlayerSpec {
                slot: 0,
                team: Team::Left,
                spawn: Some(Vec2::ZERO),
            }],
            ..ArenaConfig::default()
        };
        config.timing.level_start_delay = 0.0;
        config
    }

    #[rstest]
    fn first_level_asks_the_board_for_level_one(layout: BoardLayout, config: ArenaConfig) {
        let mut board = MockBoardBuilder::new();
        board
            .expect_setup_scene()
            .with(eq(1))
            .times(1)
            .returning(move |_| Ok(layout.clone()));
        let cues = CueLog::new();
        let arena = ArenaMatch::new(config, Box::new(board), Box::new(cues.clone()), 0)
            .expect("level 1 builds");

        assert_eq!(arena.phase(), Phase::Setup);
        assert_eq!(arena.level(), 1);
        assert_eq!(arena.pending_tasks(), 1);
        assert_eq!(arena.egg().body().position(), Vec2::new(0.0, 5.0));
        assert_eq!(arena.roster(Team::Left), &[0]);
        assert!(arena.roster(Team::Right).is_empty());
        assert_eq!(cues.count(&Cue::LevelText("Round 1".to_owned())), 1);
        assert_eq!(cues.count(&Cue::LevelImage(true)), 1);
    }

    #[rstest]
    fn board_failure_aborts_setup(config: ArenaConfig) {
        let mut board = MockBoardBuilder::new();
        board.expect_setup_scene().returning(|level| {
            Err(SetupError::Board {
                level,
                detail: "no tiles".to_owned(),
            })
        });
        let result = ArenaMatch::new(config, Box::new(board), Box::new(SilentPresenter), 0);
        assert!(matches!(result, Err(SetupError::Board { level: 1, .. })));
    }

    #[rstest]
    fn shared_slot_is_rejected_before_the_board_is_built(mut config: ArenaConfig) {
        let mut board = MockBoardBuilder::new();
        board.expect_setup_scene().never();
        config.players.push(PlayerSpec {
            slot: 0,
            team: Team::Right,
            spawn: None,
        });
        let result = ArenaMatch::new(config, Box::new(board), Box::new(SilentPresenter), 0);
        assert!(matches!(result, Err(SetupError::DuplicateSlot(0))));
    }

    #[rstest]
    fn finished_match_ignores_steps(layout: BoardLayout, mut config: ArenaConfig) {
        config.player.starting_food = 1;
        let board = crate::board::StaticBoard::new(layout);
        let mut arena = ArenaMatch::new(config, Box::new(board), Box::new(SilentPresenter), 0)
            .expect("level 1 builds");
        let mut input = crate::input::PadInput::new();
        input.set_axis("Horizontal", 1.0);
        arena.step(0.1, &input).expect("step");
        assert_eq!(arena.phase(), Phase::GameOver);

        let clock = arena.clock();
        arena.step(0.1, &input).expect("step");
        assert!((arena.clock() - clock).abs() < f32::EPSILON);
    }
}
