//! Delayed continuations and the enemy phase.
//!
//! The enemy phase is a chain of timer entries: an opening pause of
//! `turn_delay`, then one entry per enemy spaced by that enemy's move time,
//! then a final entry that hands the turn back to the players. Each entry is
//! scheduled from its predecessor's due time so the chain's length does not
//! depend on the tick rate.

use glam::Vec2;
use log::debug;

use super::ArenaMatch;
use crate::body::{Mover, MovingBody};
use crate::components::{Blocker, BodyRef};
use crate::enemy::Enemy;
use crate::error::SetupError;
use crate::presentation::AnimationCue;
use crate::turn::Phase;

/// Continuation waiting on the match clock.
///
/// Level-scoped entries carry the level they were scheduled in and are
/// dropped if the match has moved on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Scheduled {
    /// Take the level card down and let players act.
    HideLevelImage { level: u32 },
    /// Move enemy `next`, or end the phase when it does not exist.
    EnemyTurn { level: u32, next: usize },
    /// Bring a dead body back.
    Respawn { level: u32, body: BodyRef },
    /// Remove an unhit projectile.
    ExpireProjectile { id: u64 },
    /// Advance to the next level after a win.
    RestartLevel { level: u32 },
}

impl ArenaMatch {
    /// Runs every continuation due at the current clock.
    pub(super) fn run_due(&mut self) -> Result<(), SetupError> {
        while let Some((due, task)) = self.timers.pop_due(self.clock) {
            match task {
                Scheduled::HideLevelImage { level } => self.hide_level_image(level),
                Scheduled::EnemyTurn { level, next } => {
                    if level == self.level && self.phase == Phase::EnemyPhase {
                        self.enemy_turn(due, next);
                    }
                }
                Scheduled::Respawn { level, body } => {
                    if level == self.level {
                        self.respawn(body);
                    }
                }
                Scheduled::ExpireProjectile { id } => self.projectiles.retain(|p| p.id() != id),
                Scheduled::RestartLevel { level } => {
                    if level == self.level && self.phase == Phase::LevelComplete {
                        self.level += 1;
                        self.init_game()?;
                    }
                }
            }
            if self.phase == Phase::GameOver {
                break;
            }
        }
        Ok(())
    }

    fn hide_level_image(&mut self, level: u32) {
        if level != self.level || self.phase != Phase::Setup {
            return;
        }
        self.presenter.set_level_image_visible(false);
        self.turn.doing_setup = false;
        self.phase = Phase::PlayerPhase;
        debug!("round {level}: players' turn");
    }

    fn respawn(&mut self, body: BodyRef) {
        let safe_zone = self.scene.safe_zone;
        let Some(target) = (match body {
            BodyRef::Player(i) => self.players.get_mut(i).map(Mover::body_mut),
            BodyRef::Enemy(i) => self.enemies.get_mut(i).map(Mover::body_mut),
            BodyRef::Egg => Some(self.egg.body_mut()),
        }) else {
            return;
        };
        if !target.is_dying() {
            return;
        }
        target.respawn(&safe_zone, &mut self.rng);
        debug!("{body} respawned at {}", target.position());
    }

    /// Hands the turn to the enemies once the players have moved.
    pub(super) fn maybe_start_enemy_phase(&mut self) {
        if self.phase != Phase::PlayerPhase || !self.turn.enemy_phase_due() {
            return;
        }
        self.turn.enemies_moving = true;
        self.phase = Phase::EnemyPhase;
        let delay = self.config.timing.turn_delay;
        let opening = if self.enemies.is_empty() {
            delay * 2.0
        } else {
            delay
        };
        self.timers.schedule(
            self.clock + opening,
            Scheduled::EnemyTurn {
                level: self.level,
                next: 0,
            },
        );
        debug!("enemy phase: {} enemies", self.enemies.len());
    }

    fn enemy_turn(&mut self, due: f32, next: usize) {
        let Some(move_time) = self.enemies.get(next).map(Enemy::move_time) else {
            self.turn.enemies_moving = false;
            self.turn.players_turn = true;
            self.phase = Phase::PlayerPhase;
            debug!("players' turn");
            return;
        };
        self.move_enemy(next);
        if self.phase == Phase::EnemyPhase {
            self.timers.schedule(
                due + move_time,
                Scheduled::EnemyTurn {
                    level: self.level,
                    next: next + 1,
                },
            );
        }
    }

    fn move_enemy(&mut self, index: usize) {
        let obstacles = self.obstacles();
        let targets: Vec<Vec2> = self
            .players
            .iter()
            .map(Mover::body)
            .filter(|b| b.is_active())
            .map(MovingBody::position)
            .collect();
        let Some(enemy) = self.enemies.get_mut(index) else {
            return;
        };
        if !enemy.body().is_active() {
            return;
        }
        let direction = enemy.step_towards(targets);
        let outcome = enemy.attempt_move(direction, &obstacles);
        let Some(Blocker::Body(BodyRef::Player(victim))) = enemy.blocked_by_interactable(&outcome)
        else {
            return;
        };
        let Some(player) = self.players.get_mut(victim) else {
            return;
        };
        enemy.on_cant_move(player, self.presenter.as_mut());
        self.presenter
            .trigger_animation(BodyRef::Player(victim), AnimationCue::PlayerHit);
        debug!(
            "{} hit {}: {} food left",
            BodyRef::Enemy(index),
            BodyRef::Player(victim),
            player.food()
        );
        if player.is_starved() {
            self.game_over(victim);
        }
    }
}
