use std::collections::BTreeMap;

use crate::{
    animation::timeline::Timeline,
    animation::tween::VisualState,
    foundation::core::{Fps, FrameIndex, Selector},
    foundation::error::{PageError, PageResult},
};

/// Upper bound on frames a single playback may yield (about 4.5 hours at 60 fps).
pub const MAX_FRAMES: u64 = 1_000_000;

/// Evaluated timeline state for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameState {
    /// Frame being shown.
    pub frame: FrameIndex,
    /// Timeline time in seconds.
    pub time_secs: f64,
    /// Resolved state per targeted selector.
    pub targets: BTreeMap<Selector, VisualState>,
}

/// Steps a timeline frame by frame, from frame 0 to the frame that reaches its end.
///
/// A paused timeline never advances, so every frame shows the time-zero state.
pub struct Playback<'a> {
    timeline: &'a Timeline,
    fps: Fps,
    next: u64,
    last: u64,
}

impl<'a> Playback<'a> {
    /// Validate `timeline` and prepare frame iteration at `fps`.
    #[tracing::instrument(skip(timeline))]
    pub fn new(timeline: &'a Timeline, fps: Fps) -> PageResult<Self> {
        timeline.validate()?;
        let frames = timeline.duration() * fps.as_f64();
        if !frames.is_finite() || frames >= MAX_FRAMES as f64 {
            return Err(PageError::validation(format!(
                "timeline of {}s at {} fps exceeds {MAX_FRAMES} frames",
                timeline.duration(),
                fps.as_f64()
            )));
        }
        let last = fps.secs_to_frames_ceil(timeline.duration());
        tracing::debug!(
            frames = last.saturating_add(1),
            paused = timeline.is_paused(),
            "playback ready"
        );
        Ok(Self {
            timeline,
            fps,
            next: 0,
            last,
        })
    }

    /// Total number of frames this playback yields.
    pub fn frame_count(&self) -> u64 {
        self.last.saturating_add(1)
    }

    /// Evaluate a single frame without advancing.
    pub fn state_at(&self, frame: FrameIndex) -> FrameState {
        let time_secs = if self.timeline.is_paused() {
            0.0
        } else {
            self.fps.frame_to_secs(frame)
        };
        FrameState {
            frame,
            time_secs,
            targets: self.timeline.sample(time_secs),
        }
    }
}

impl Iterator for Playback<'_> {
    type Item = FrameState;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let state = self.state_at(FrameIndex(self.next));
        self.next += 1;
        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.frame_count().saturating_sub(self.next) as usize;
        (left, Some(left))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/playback.rs"]
mod tests;
