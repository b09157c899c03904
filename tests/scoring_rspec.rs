//! Behaviour tests for egg pickup, delivery and level wins using rust-rspec.
//!
//! Each scenario seats players next to the egg and a base so the outcome
//! is decided within a few ticks.

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

#[path = "support/thread_safe_match.rs"]
mod thread_safe_match;

use std::sync::MutexGuard;

use egg_arena::{Cue, Mover, Phase, PlayerSpec, SoundClip, Team};
use glam::Vec2;
use rspec::block::Context as Scenario;
use rspec_runner::run_serial;
use test_utils::{open_board, quick_config, seat, MatchHarness, TICK};
use thread_safe_match::{lock_match, share, SharedMatch, ThreadSafeMatch};

#[derive(Debug, Clone)]
struct ScoringFixture {
    shared: SharedMatch,
}

impl ScoringFixture {
    fn bootstrap(egg: Vec2, seats: Vec<PlayerSpec>, winning_score: u32) -> Self {
        let mut config = quick_config(open_board(egg), seats);
        config.winning_score = winning_score;
        Self {
            shared: share(MatchHarness::new(config, 7)),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ThreadSafeMatch> {
        lock_match(&self.shared)
    }

    fn ticks(&self, count: usize) {
        self.guard().ticks(count, TICK);
    }

    fn score_of(&self, team: Team) -> u32 {
        self.guard().arena.score().of(team)
    }

    fn holders(&self) -> Vec<usize> {
        self.guard()
            .arena
            .players()
            .iter()
            .filter(|p| p.is_holding_egg())
            .map(|p| p.index())
            .collect()
    }

    fn cue_count(&self, cue: &Cue) -> usize {
        self.guard().cues.count(cue)
    }
}

#[test]
fn carrier_scores_only_at_own_base() {
    // The left player stands on the right team's base with the egg.
    let fixture = ScoringFixture::bootstrap(
        Vec2::new(7.5, 0.5),
        vec![seat(0, Team::Left, Vec2::new(7.5, 0.0))],
        3,
    );

    run_serial(&rspec::given(
        "a left player carrying the egg on the right base",
        fixture,
        |scenario: &mut Scenario<ScoringFixture>| {
            scenario.when("the match runs for a while", |ctx| {
                ctx.then("nobody scores and the egg stays carried", |state| {
                    state.ticks(30);
                    assert_eq!(state.holders(), vec![0]);
                    assert_eq!(state.score_of(Team::Left), 0);
                    assert_eq!(state.score_of(Team::Right), 0);
                    assert_eq!(state.cue_count(&Cue::Clip(SoundClip::Score)), 0);
                });
            });
        },
    ));
}

#[test]
fn right_carrier_scores_for_right_team() {
    let fixture = ScoringFixture::bootstrap(
        Vec2::new(7.5, 0.5),
        vec![seat(0, Team::Right, Vec2::new(7.5, 0.0))],
        3,
    );

    run_serial(&rspec::given(
        "a right player next to the egg on its own base",
        fixture,
        |scenario: &mut Scenario<ScoringFixture>| {
            scenario.when("the player picks up the egg and stays put", |ctx| {
                ctx.then("the pickup scores on the same tick, once", |state| {
                    state.ticks(1);
                    assert_eq!(state.score_of(Team::Right), 1);
                    assert_eq!(state.cue_count(&Cue::Clip(SoundClip::PickUp)), 1);
                    assert_eq!(state.cue_count(&Cue::Clip(SoundClip::Score)), 1);
                    state.ticks(1);
                    assert_eq!(state.score_of(Team::Right), 1);
                    assert_eq!(state.score_of(Team::Left), 0);
                    assert!(state.holders().is_empty());

                    let guard = state.guard();
                    assert!(guard.arena.egg().body().is_active());
                    assert_eq!(guard.arena.egg().body().position(), Vec2::ZERO);
                    assert_eq!(
                        guard.cues.count(&Cue::ScoreText("Left: 0  Right: 1".to_owned())),
                        1
                    );
                });
            });
        },
    ));
}

#[test]
fn one_carrier_at_a_time() {
    let fixture = ScoringFixture::bootstrap(
        Vec2::ZERO,
        vec![
            seat(0, Team::Right, Vec2::new(-0.6, 0.0)),
            seat(1, Team::Left, Vec2::new(0.6, 0.0)),
        ],
        3,
    );

    run_serial(&rspec::given(
        "two players of different teams equally close to the egg",
        fixture,
        |scenario: &mut Scenario<ScoringFixture>| {
            scenario.when("both are in reach on the same tick", |ctx| {
                ctx.then("the left roster claims it and nobody else can", |state| {
                    state.ticks(5);
                    assert_eq!(state.holders(), vec![1]);
                    assert_eq!(state.cue_count(&Cue::Clip(SoundClip::PickUp)), 1);
                    assert!(!state.guard().arena.egg().body().is_active());
                });
            });
        },
    ));
}

#[test]
fn winning_score_ends_the_level_once() {
    let fixture = ScoringFixture::bootstrap(
        Vec2::new(-7.5, 0.5),
        vec![seat(0, Team::Left, Vec2::new(-7.5, 0.0))],
        1,
    );

    run_serial(&rspec::given(
        "a left carrier on its own base with one goal to win",
        fixture,
        |scenario: &mut Scenario<ScoringFixture>| {
            scenario.when("the goal is scored", |ctx| {
                ctx.then("the level completes once and the next round starts", |state| {
                    state.ticks(1);
                    assert_eq!(state.guard().arena.phase(), Phase::LevelComplete);
                    state.ticks(30);
                    assert_eq!(
                        state.cue_count(&Cue::LevelText("Left team wins!".to_owned())),
                        1
                    );
                    assert_eq!(state.score_of(Team::Left), 1);

                    let mut guard = state.guard();
                    let restarted = guard.run_until(TICK, 300, |arena| arena.level() == 2);
                    assert!(restarted, "round 2 should start after the restart delay");
                    assert_eq!(guard.arena.score().of(Team::Left), 0);
                    assert_eq!(guard.cues.count(&Cue::LevelText("Round 2".to_owned())), 1);
                });
            });
        },
    ));
}

#[test]
fn dying_carrier_drops_the_egg() {
    let fixture = ScoringFixture::bootstrap(
        Vec2::new(5.0, 0.5),
        vec![seat(0, Team::Left, Vec2::new(5.0, 0.0))],
        3,
    );

    run_serial(&rspec::given(
        "a left player holding the egg",
        fixture,
        |scenario: &mut Scenario<ScoringFixture>| {
            scenario.when("the player is knocked off the board", |ctx| {
                ctx.then("the egg resets without scoring", |state| {
                    state.ticks(1);
                    assert_eq!(state.holders(), vec![0]);
                    {
                        let mut guard = state.guard();
                        let player = guard.arena.player_mut(0).expect("player 0");
                        player.body_mut().set_position(Vec2::new(30.0, 0.0));
                    }
                    state.ticks(1);

                    assert!(state.holders().is_empty());
                    assert_eq!(state.cue_count(&Cue::Clip(SoundClip::Drop)), 1);
                    assert_eq!(state.score_of(Team::Left), 0);
                    let guard = state.guard();
                    let player = guard.arena.player(0).expect("player 0");
                    assert!(player.body().is_dying());
                    assert!(guard.arena.egg().body().is_active());
                    assert_eq!(guard.arena.egg().body().position(), Vec2::ZERO);
                });
            });
        },
    ));
}

#[test]
#[should_panic(expected = "rspec suite reported failing examples")]
fn failing_scenario_fails_the_test() {
    run_serial(&rspec::given(
        "a scenario whose expectation cannot hold",
        (),
        |scenario: &mut Scenario<()>| {
            scenario.then::<_, ()>("the failure reaches the test harness", |_: &()| {
                panic!("this example always fails");
            });
        },
    ));
}
