//! Egg pickup, delivery, and the end-of-level conditions.

use log::{debug, info};

use super::{ArenaMatch, Scheduled};
use crate::body::Mover;
use crate::components::BodyRef;
use crate::presentation::SoundClip;
use crate::score::Team;
use crate::turn::Phase;

impl ArenaMatch {
    /// Runs pickups and deliveries for both rosters, left team first.
    ///
    /// A free egg goes to the first roster member within the pickup radius.
    /// A carrier inside its own base scores for its team and the egg resets,
    /// including one that picked the egg up on this same tick.
    /// The opposing base does nothing.
    pub(super) fn check_egg(&mut self) {
        let radius = self.config.pickup_radius;
        let order: Vec<usize> = self
            .left_roster
            .iter()
            .chain(&self.right_roster)
            .copied()
            .collect();
        for i in order {
            let Some(player) = self.players.get_mut(i) else {
                continue;
            };
            if player.body().is_dying() {
                continue;
            }
            let at = player.body().position();
            if !player.is_holding_egg() {
                let egg = self.egg.body();
                if egg.is_active() && at.distance(egg.position()) < radius {
                    self.egg.body_mut().set_active(false);
                    player.set_holding_egg(true);
                    self.presenter.play_clip(SoundClip::PickUp);
                    debug!("{} picked up the egg", BodyRef::Player(i));
                }
            }
            // A pickup inside the carrier's own base also scores this tick.
            if !player.is_holding_egg() {
                continue;
            }
            let team = player.team();
            let base = match team {
                Team::Left => self.scene.left_base,
                Team::Right => self.scene.right_base,
            };
            if at.distance(base) < radius {
                self.score.award(team);
                self.reset_egg();
                self.presenter.play_clip(SoundClip::Score);
                self.presenter.set_score_text(&self.score.to_string());
                info!("{team} team scores ({})", self.score);
            }
        }
    }

    /// Clears every carrier flag and puts the egg back at its respawn point.
    pub(super) fn reset_egg(&mut self) {
        for player in &mut self.players {
            player.set_holding_egg(false);
        }
        let safe_zone = self.scene.safe_zone;
        self.egg.body_mut().respawn(&safe_zone, &mut self.rng);
    }

    /// Ends the level the first time a team reaches the winning score.
    pub(super) fn check_win(&mut self) {
        let Some(team) = self.score.leader_at(self.config.winning_score) else {
            return;
        };
        self.phase = Phase::LevelComplete;
        self.presenter.set_level_text(&format!("{team} team wins!"));
        self.presenter.set_level_image_visible(true);
        self.timers.schedule(
            self.clock + self.config.timing.restart_delay,
            Scheduled::RestartLevel { level: self.level },
        );
        info!("{team} team wins round {} ({})", self.level, self.score);
    }

    /// Halts the match after `starving` runs out of food.
    pub(super) fn game_over(&mut self, starving: usize) {
        self.phase = Phase::GameOver;
        self.presenter
            .set_level_text(&format!("After {} days, you starved.", self.level));
        self.presenter.set_level_image_visible(true);
        self.presenter.play_clip(SoundClip::GameOver);
        info!(
            "{} starved on round {}; game over",
            BodyRef::Player(starving),
            self.level
        );
    }
}
