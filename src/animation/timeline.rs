use std::collections::BTreeMap;

use crate::{
    animation::tween::{Property, Tween, VisualState},
    foundation::core::{Selector, validate_ident},
    foundation::error::{PageError, PageResult},
};

/// Where a phase is placed when added to a [`Timeline`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Position {
    /// Append after everything already on the timeline.
    End,
    /// Absolute offset in seconds from the start of the sequence.
    At(f64),
}

/// Playback state of a timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PlayState {
    /// Built but not started.
    Paused,
    /// Started; advances with the host clock.
    Playing,
}

/// Labeled tween placed at a fixed start time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Phase {
    /// Label, also used to name compiled keyframes.
    pub label: String,
    /// Start time in seconds from the sequence start.
    pub start: f64,
    /// Tween played by this phase.
    pub tween: Tween,
}

/// One target of one phase, with its absolute start time.
#[derive(Clone, Copy, Debug)]
pub struct ScheduledTarget<'a> {
    /// Owning phase label.
    pub label: &'a str,
    /// Targeted element class.
    pub selector: &'a Selector,
    /// Absolute start in seconds (phase start plus stagger offset).
    pub start: f64,
    /// Tween driving the target.
    pub tween: &'a Tween,
}

/// Ordered sequence of phases. Phases may overlap; every start is relative to the
/// sequence start, not to the end of the previous phase.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    phases: Vec<Phase>,
    state: PlayState,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    /// Create an empty, paused timeline.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            state: PlayState::Paused,
        }
    }

    /// Place `tween` on the timeline under `label`.
    pub fn add(&mut self, label: impl Into<String>, tween: Tween, position: Position) -> &mut Self {
        let start = match position {
            Position::End => self.duration(),
            Position::At(secs) => secs,
        };
        self.phases.push(Phase {
            label: label.into(),
            start,
            tween,
        });
        self
    }

    /// Start playback.
    pub fn resume(mut self) -> Self {
        self.state = PlayState::Playing;
        self
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlayState::Paused
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// End time of the latest-ending phase, in seconds.
    pub fn duration(&self) -> f64 {
        self.phases
            .iter()
            .map(|p| p.start + p.tween.span())
            .fold(0.0, f64::max)
    }

    pub fn validate(&self) -> PageResult<()> {
        for (i, phase) in self.phases.iter().enumerate() {
            validate_ident("phase label", &phase.label)?;
            if self.phases[..i].iter().any(|p| p.label == phase.label) {
                return Err(PageError::animation(format!(
                    "duplicate phase label '{}'",
                    phase.label
                )));
            }
            if !phase.start.is_finite() || phase.start < 0.0 {
                return Err(PageError::animation(format!(
                    "phase '{}' start must be finite and >= 0",
                    phase.label
                )));
            }
            phase.tween.validate()?;
        }
        Ok(())
    }

    /// Every (phase, target) pair in insertion order.
    pub fn scheduled(&self) -> impl Iterator<Item = ScheduledTarget<'_>> + '_ {
        self.phases.iter().flat_map(|phase| {
            phase
                .tween
                .targets
                .iter()
                .enumerate()
                .map(move |(i, selector)| ScheduledTarget {
                    label: &phase.label,
                    selector,
                    start: phase.start + phase.tween.target_offset(i),
                    tween: &phase.tween,
                })
        })
    }

    /// Resolve the visual state of every targeted selector at `time` seconds.
    ///
    /// A tween shows its `from` state before it starts. When several tweens drive the same
    /// property of a selector, the one that started most recently wins; if none has started
    /// yet, the one starting first provides its `from` value.
    pub fn sample(&self, time: f64) -> BTreeMap<Selector, VisualState> {
        struct Candidate<'a> {
            start: f64,
            target: ScheduledTarget<'a>,
        }

        let mut winners: BTreeMap<(&Selector, Property), Candidate<'_>> = BTreeMap::new();
        for target in self.scheduled() {
            for prop in target.tween.from.properties() {
                let incoming = Candidate {
                    start: target.start,
                    target,
                };
                let replace = match winners.get(&(target.selector, prop)) {
                    None => true,
                    Some(cur) => {
                        let cur_started = cur.start <= time;
                        let new_started = incoming.start <= time;
                        match (cur_started, new_started) {
                            (_, true) => incoming.start >= cur.start || !cur_started,
                            (true, false) => false,
                            (false, false) => incoming.start < cur.start,
                        }
                    }
                };
                if replace {
                    winners.insert((target.selector, prop), incoming);
                }
            }
        }

        let mut out: BTreeMap<Selector, VisualState> = BTreeMap::new();
        for ((selector, prop), cand) in winners {
            let state = cand.target.tween.state_at(time - cand.start);
            if let Some(v) = state.get(prop) {
                out.entry(selector.clone()).or_default().set(prop, v);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
