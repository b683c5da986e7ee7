//! The page entrance sequence: the photo bounces in, then the text fades in line by line.
//!
//! Both phases are positioned relative to the sequence start, so the text reveal begins
//! while the photo is still settling.

use crate::{
    animation::ease::Ease,
    animation::timeline::{Position, Timeline},
    animation::tween::{Tween, VisualState},
    foundation::classes,
    foundation::core::Selector,
};

/// Label of the photo phase.
pub const ENTRANCE: &str = "entrance";
/// Label of the text phase.
pub const REVEAL: &str = "reveal";

/// Timing and easing knobs of the entrance sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Photo scale-in duration, seconds.
    pub entrance_duration: f64,
    /// Photo scale at the start of the entrance.
    pub entrance_scale_from: f64,
    /// Photo scale at the end of the entrance.
    pub entrance_scale_to: f64,
    pub entrance_ease: Ease,
    /// Fade-in duration of each text element, seconds.
    pub reveal_duration: f64,
    /// Start of the text reveal, seconds from the sequence start.
    pub reveal_offset: f64,
    /// Delay between consecutive text elements, seconds.
    pub reveal_stagger: f64,
    pub reveal_ease: Ease,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            entrance_duration: 1.2,
            entrance_scale_from: 0.7,
            entrance_scale_to: 1.0,
            entrance_ease: Ease::ElasticOut,
            reveal_duration: 0.5,
            reveal_offset: 0.3,
            reveal_stagger: 0.1,
            reveal_ease: Ease::ExpoInOut,
        }
    }
}

/// Build a fresh, paused entrance timeline.
pub fn entrance_timeline(motion: &MotionConfig) -> Timeline {
    let mut timeline = Timeline::new();

    timeline.add(
        ENTRANCE,
        Tween::from_to(
            vec![Selector::class(classes::ICON)],
            motion.entrance_duration,
            VisualState::opacity_scale(1.0, motion.entrance_scale_from),
            VisualState::opacity_scale(1.0, motion.entrance_scale_to),
            motion.entrance_ease,
        ),
        Position::End,
    );

    timeline.add(
        REVEAL,
        Tween::stagger_from_to(
            [classes::TITLE, classes::SUBTITLE, classes::PARAGRAPH]
                .into_iter()
                .map(Selector::class)
                .collect(),
            motion.reveal_duration,
            VisualState::opacity(0.0),
            VisualState::opacity(1.0),
            motion.reveal_ease,
            motion.reveal_stagger,
        ),
        Position::At(motion.reveal_offset),
    );

    timeline
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequencer.rs"]
mod tests;
