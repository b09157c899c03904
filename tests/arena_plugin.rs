//! Integration tests for the Bevy plugin wrapper.

use std::time::Duration;

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use egg_arena::{
    ArenaConfig, ArenaCue, ArenaInput, ArenaState, Cue, InputSource, Phase, SlotBindings,
};
use rstest::rstest;
use test_utils::plugin_app;

#[derive(Resource, Default)]
struct SeenCues(Vec<Cue>);

fn record_cue(event: On<ArenaCue>, mut seen: ResMut<SeenCues>) {
    seen.0.push(event.event().0.clone());
}

fn arena_clock(app: &App) -> f32 {
    app.world()
        .get_non_send_resource::<ArenaState>()
        .map_or(0.0, |state| state.arena.clock())
}

#[rstest]
fn plugin_steps_the_match_and_forwards_cues() {
    let mut app = plugin_app(ArenaConfig::default(), 9, Duration::from_millis(50));
    app.init_resource::<SeenCues>();
    app.add_observer(record_cue);

    for _ in 0..60 {
        app.update();
    }

    assert!(arena_clock(&app) > 2.0, "match clock should follow app time");
    let seen = &app.world().resource::<SeenCues>().0;
    assert!(seen.contains(&Cue::LevelText("Round 1".to_owned())));
    assert!(seen.contains(&Cue::LevelImage(false)));

    let state = app
        .world()
        .get_non_send_resource::<ArenaState>()
        .expect("arena state");
    assert_eq!(state.arena.phase(), Phase::PlayerPhase);
}

#[rstest]
fn presses_are_cleared_after_each_step() {
    let mut app = plugin_app(ArenaConfig::default(), 9, Duration::from_millis(50));
    let fire = SlotBindings::for_slot(0).expect("slot 0").fire;
    app.world_mut().resource_mut::<ArenaInput>().0.press(&fire);
    app.update();

    let input = app.world().resource::<ArenaInput>();
    assert!(!input.0.button_down(&fire));
}
