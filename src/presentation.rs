//! Presentation collaborators reached by the simulation.
//!
//! The core never renders, plays audio or lays out UI. It emits
//! fire-and-forget cues through [`Presenter`]; hosts decide what to do with
//! them. [`CueLog`] records cues so a host loop (or a test) can drain them
//! after each tick.

use std::cell::RefCell;
use std::rc::Rc;

use crate::components::BodyRef;

/// Named audio clips the core asks to be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundClip {
    /// A player moved.
    Move,
    /// A player struck a wall.
    Chop,
    /// A projectile launched.
    Fire,
    /// The egg was picked up.
    PickUp,
    /// The egg was dropped.
    Drop,
    /// A team scored.
    Score,
    /// An enemy struck a player.
    EnemyAttack,
    /// A player starved.
    GameOver,
}

/// Animation triggers forwarded to whatever animates the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationCue {
    /// Player swings at a wall.
    PlayerChop,
    /// Player takes a hit.
    PlayerHit,
    /// Enemy attacks.
    EnemyAttack,
}

/// Sink for presentation side effects.
#[cfg_attr(test, mockall::automock)]
pub trait Presenter {
    /// Plays a clip once.
    fn play_clip(&mut self, clip: SoundClip);
    /// Replaces the score read-out.
    fn set_score_text(&mut self, text: &str);
    /// Replaces the level card text.
    fn set_level_text(&mut self, text: &str);
    /// Shows or hides the level card.
    fn set_level_image_visible(&mut self, visible: bool);
    /// Fires an animation trigger on `actor`.
    fn trigger_animation(&mut self, actor: BodyRef, cue: AnimationCue);
}

/// One recorded presentation side effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cue {
    /// See [`Presenter::play_clip`].
    Clip(SoundClip),
    /// See [`Presenter::set_score_text`].
    ScoreText(String),
    /// See [`Presenter::set_level_text`].
    LevelText(String),
    /// See [`Presenter::set_level_image_visible`].
    LevelImage(bool),
    /// See [`Presenter::trigger_animation`].
    Animation(BodyRef, AnimationCue),
}

/// Shared, cloneable recorder of [`Cue`]s.
///
/// Clones share one buffer: hand one clone to the match and keep another to
/// drain.
#[derive(Clone, Debug, Default)]
pub struct CueLog {
    cues: Rc<RefCell<Vec<Cue>>>,
}

impl CueLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far.
    #[must_use]
    pub fn drain(&self) -> Vec<Cue> {
        self.cues.borrow_mut().drain(..).collect()
    }

    /// Copies everything recorded so far without clearing it.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Cue> {
        self.cues.borrow().clone()
    }

    /// Number of recorded cues equal to `cue`.
    #[must_use]
    pub fn count(&self, cue: &Cue) -> usize {
        self.cues.borrow().iter().filter(|c| *c == cue).count()
    }

    fn record(&self, cue: Cue) {
        self.cues.borrow_mut().push(cue);
    }
}

impl Presenter for CueLog {
    fn play_clip(&mut self, clip: SoundClip) {
        self.record(Cue::Clip(clip));
    }

    fn set_score_text(&mut self, text: &str) {
        self.record(Cue::ScoreText(text.to_owned()));
    }

    fn set_level_text(&mut self, text: &str) {
        self.record(Cue::LevelText(text.to_owned()));
    }

    fn set_level_image_visible(&mut self, visible: bool) {
        self.record(Cue::LevelImage(visible));
    }

    fn trigger_animation(&mut self, actor: BodyRef, cue: AnimationCue) {
        self.record(Cue::Animation(actor, cue));
    }
}

/// Presenter that discards every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentPresenter;

impl Presenter for SilentPresenter {
    fn play_clip(&mut self, _clip: SoundClip) {}
    fn set_score_text(&mut self, _text: &str) {}
    fn set_level_text(&mut self, _text: &str) {}
    fn set_level_image_visible(&mut self, _visible: bool) {}
    fn trigger_animation(&mut self, _actor: BodyRef, _cue: AnimationCue) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn clones_share_one_buffer() {
        let log = CueLog::new();
        let mut writer = log.clone();
        writer.play_clip(SoundClip::Fire);
        writer.set_level_text("Round 1");
        assert_eq!(log.count(&Cue::Clip(SoundClip::Fire)), 1);
        assert_eq!(
            log.drain(),
            vec![
                Cue::Clip(SoundClip::Fire),
                Cue::LevelText("Round 1".to_owned())
            ]
        );
        assert!(log.snapshot().is_empty());
    }
}
