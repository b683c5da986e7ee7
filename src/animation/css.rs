//! Compile a [`Timeline`] into CSS `@keyframes` so the browser plays it without script.
//!
//! Easing curves are baked into keyframe stops and each stop is reached linearly, which keeps
//! curves CSS cannot express natively (elastic overshoot) intact.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::{
    animation::timeline::{ScheduledTarget, Timeline},
    animation::tween::{Lerp as _, VisualState},
    foundation::core::Selector,
    foundation::error::PageResult,
};

/// Compile every scheduled target of `timeline` into keyframes plus per-selector rules.
#[tracing::instrument(skip(timeline), fields(phases = timeline.phases().len()))]
pub fn compile(timeline: &Timeline) -> PageResult<String> {
    timeline.validate()?;

    let mut out = String::new();
    let mut rules: BTreeMap<&Selector, Vec<(f64, String)>> = BTreeMap::new();

    for target in timeline.scheduled() {
        let name = keyframes_name(&target);
        write_keyframes(&mut out, &name, &target);
        rules
            .entry(target.selector)
            .or_default()
            .push((target.start, name_with_timing(&name, &target)));
    }

    for (selector, animations) in &mut rules {
        // The last listed running animation wins, so list by start time and let only the
        // earliest fill backwards: later ones must stay invisible during their delay.
        animations.sort_by(|a, b| a.0.total_cmp(&b.0));
        let list: Vec<String> = animations
            .iter()
            .enumerate()
            .map(|(i, (_, anim))| {
                let fill = if i == 0 { "both" } else { "forwards" };
                format!("{anim} {fill}")
            })
            .collect();

        let _ = writeln!(out, "{} {{", selector.css());
        let _ = writeln!(out, "  animation: {};", list.join(", "));
        if timeline.is_paused() {
            let _ = writeln!(out, "  animation-play-state: paused;");
        }
        let _ = writeln!(out, "}}");
    }

    tracing::debug!(
        selectors = rules.len(),
        bytes = out.len(),
        "compiled timeline css"
    );
    Ok(out)
}

fn name_with_timing(name: &str, target: &ScheduledTarget<'_>) -> String {
    format!(
        "{name} {}s linear {}s 1",
        fmt_num(target.tween.duration),
        fmt_num(target.start),
    )
}

fn keyframes_name(target: &ScheduledTarget<'_>) -> String {
    format!("{}-{}", target.label, target.selector.class_name())
}

fn write_keyframes(out: &mut String, name: &str, target: &ScheduledTarget<'_>) {
    let tween = target.tween;
    let segments = tween.ease.keyframe_segments();
    let _ = writeln!(out, "@keyframes {name} {{");
    for k in 0..=segments {
        let t = k as f64 / segments as f64;
        let state = VisualState::lerp(&tween.from, &tween.to, tween.ease.apply(t));
        let _ = writeln!(
            out,
            "  {}% {{ {} }}",
            fmt_num(t * 100.0),
            declarations(&state)
        );
    }
    let _ = writeln!(out, "}}");
}

fn declarations(state: &VisualState) -> String {
    let mut decls = Vec::with_capacity(2);
    if let Some(opacity) = state.opacity {
        decls.push(format!("opacity: {};", fmt_num(opacity)));
    }
    if let Some(scale) = state.scale {
        decls.push(format!("transform: scale({});", fmt_num(scale)));
    }
    decls.join(" ")
}

/// Format a number with at most four decimals and no trailing zeros.
pub(crate) fn fmt_num(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/css.rs"]
mod tests;
