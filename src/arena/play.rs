//! Per-tick movement, firing, projectile contacts and deaths.

use glam::Vec2;
use log::debug;

use super::{ArenaMatch, Scheduled};
use crate::body::{Mover, MovingBody};
use crate::components::{Blocker, BodyRef};
use crate::input::InputSource;
use crate::player::Launch;
use crate::presentation::SoundClip;
use crate::projectile::PushProjectile;
use crate::turn::Phase;

impl ArenaMatch {
    /// Lets every active player read its slot, move or coast, aim and fire.
    ///
    /// Only players whose movement axes are off centre spend a move, and only
    /// while the players hold the turn. Everyone else coasts on leftover
    /// knockback.
    pub(super) fn move_players(&mut self, dt: f32, input: &dyn InputSource) {
        let may_move = self.phase == Phase::PlayerPhase && self.turn.players_turn;
        let mut obstacles = self.obstacles();
        let mut launches: Vec<Launch> = Vec::new();
        let mut starved = None;

        for (i, player) in self.players.iter_mut().enumerate() {
            if !player.body().is_active() {
                continue;
            }
            let me = Blocker::Body(BodyRef::Player(i));
            let controls = player.read_controls(input);
            if may_move && controls.wants_to_move() {
                let outcome = player.attempt_move(controls.movement, dt, &obstacles, &mut self.turn);
                if outcome.moved {
                    self.presenter.play_clip(SoundClip::Move);
                    obstacles.update(me, player.body().bounds());
                }
                // Only a move attempt chops; coasting into a wall does not.
                if let Some(Blocker::Wall(w)) = player.blocked_by_interactable(&outcome) {
                    if let Some(wall) = self.walls.get_mut(w) {
                        player.on_cant_move(wall, self.presenter.as_mut());
                        if wall.is_destroyed() {
                            obstacles.remove(Blocker::Wall(w));
                            debug!("wall {w} knocked down by {}", BodyRef::Player(i));
                        }
                    }
                }
            } else if player.body_mut().move_by(Vec2::ZERO, dt, &obstacles, me).moved {
                obstacles.update(me, player.body().bounds());
            }
            player.body_mut().recover_if_at_rest();
            player.aim_towards(controls.aim);
            if controls.fire {
                launches.extend(player.fire_primary(self.clock));
            }
            if starved.is_none() && player.is_starved() {
                starved = Some(i);
            }
        }

        for launch in launches {
            self.launch(launch);
        }
        if let Some(i) = starved {
            self.game_over(i);
        }
    }

    fn launch(&mut self, launch: Launch) {
        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        let tuning = self.config.projectile;
        let shot = PushProjectile::launch(
            id,
            launch.owner,
            launch.origin,
            launch.direction,
            &tuning,
            self.clock,
        );
        self.timers.schedule(
            self.clock + tuning.time_to_live,
            Scheduled::ExpireProjectile { id },
        );
        self.presenter.play_clip(SoundClip::Fire);
        debug!(
            "{} fired projectile {id} heading {:.0} degrees",
            BodyRef::Player(launch.owner),
            shot.heading_degrees()
        );
        self.projectiles.push(shot);
    }

    /// Lets enemies and the egg coast on leftover knockback.
    pub(super) fn coast_others(&mut self, dt: f32) {
        let mut obstacles = self.obstacles();
        for (i, enemy) in self.enemies.iter_mut().enumerate() {
            let me = Blocker::Body(BodyRef::Enemy(i));
            if enemy.body_mut().move_by(Vec2::ZERO, dt, &obstacles, me).moved {
                obstacles.update(me, enemy.body().bounds());
            }
            enemy.body_mut().recover_if_at_rest();
        }
        self.egg.settle(dt, &obstacles);
    }

    /// Advances projectiles and applies at most one knockback per projectile.
    pub(super) fn resolve_projectiles(&mut self, dt: f32) {
        for shot in &mut self.projectiles {
            shot.advance(dt);
        }
        let hits: Vec<(PushProjectile, BodyRef)> = self
            .projectiles
            .iter()
            .filter_map(|shot| self.first_contact(shot).map(|target| (*shot, target)))
            .collect();
        for (shot, target) in &hits {
            if let Some(body) = self.body_mut_of(*target) {
                let impulse = shot.impulse_towards(body.position());
                body.push(impulse);
                debug!("projectile {} pushed {target} by {impulse}", shot.id());
            }
        }
        self.projectiles
            .retain(|p| !hits.iter().any(|(shot, _)| shot.id() == p.id()));
    }

    /// First body `shot` touches: players other than the owner, then
    /// enemies, then the egg.
    fn first_contact(&self, shot: &PushProjectile) -> Option<BodyRef> {
        let touching = |body: &MovingBody| body.is_active() && shot.touches(&body.bounds());
        self.players
            .iter()
            .enumerate()
            .find(|(i, p)| *i != shot.owner() && touching(p.body()))
            .map(|(i, _)| BodyRef::Player(i))
            .or_else(|| {
                self.enemies
                    .iter()
                    .enumerate()
                    .find(|(_, e)| touching(e.body()))
                    .map(|(i, _)| BodyRef::Enemy(i))
            })
            .or_else(|| touching(self.egg.body()).then_some(BodyRef::Egg))
    }

    /// Starts death episodes for bodies outside the background.
    ///
    /// A dying egg carrier drops the egg without scoring.
    pub(super) fn check_deaths(&mut self) {
        let background = self.scene.background;
        let mut died: Vec<(BodyRef, f32)> = Vec::new();
        let mut dropped = false;
        for (i, player) in self.players.iter_mut().enumerate() {
            if player.body_mut().die_if_needed(&background) {
                died.push((BodyRef::Player(i), player.body().tuning().respawn_delay));
                dropped |= player.is_holding_egg();
            }
        }
        for (i, enemy) in self.enemies.iter_mut().enumerate() {
            if enemy.body_mut().die_if_needed(&background) {
                died.push((BodyRef::Enemy(i), enemy.body().tuning().respawn_delay));
            }
        }
        if self.egg.body_mut().die_if_needed(&background) {
            died.push((BodyRef::Egg, self.egg.body().tuning().respawn_delay));
        }

        for (body, delay) in died {
            debug!("{body} left the arena; back in {delay}s");
            self.timers.schedule(
                self.clock + delay,
                Scheduled::Respawn {
                    level: self.level,
                    body,
                },
            );
        }
        if dropped {
            self.reset_egg();
            self.presenter.play_clip(SoundClip::Drop);
            debug!("egg dropped");
        }
    }
}
