use crate::{
    animation::css,
    animation::timeline::Timeline,
    foundation::error::PageResult,
};

/// Host that runs timelines handed over by mounted components.
///
/// Playback is fire-and-forget: there is no handle back to the caller.
pub trait TimelinePlayer {
    /// Start `timeline`.
    fn play(&mut self, timeline: Timeline);
}

/// Player that turns every timeline it receives into CSS for the rendered document.
#[derive(Debug, Default)]
pub struct CssPlayer {
    played: Vec<Timeline>,
}

impl CssPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timelines received so far.
    pub fn played(&self) -> usize {
        self.played.len()
    }

    /// Compile everything played into one stylesheet.
    pub fn finish(self) -> PageResult<String> {
        let mut out = String::new();
        for timeline in &self.played {
            out.push_str(&css::compile(timeline)?);
        }
        Ok(out)
    }
}

impl TimelinePlayer for CssPlayer {
    fn play(&mut self, timeline: Timeline) {
        tracing::debug!(
            phases = timeline.phases().len(),
            state = ?timeline.state(),
            duration_secs = timeline.duration(),
            "timeline started"
        );
        self.played.push(timeline);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/player.rs"]
mod tests;
