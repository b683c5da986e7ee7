use crate::{
    animation::ease::Ease,
    foundation::core::Selector,
    foundation::error::{PageError, PageResult},
};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` by `t` (not clamped, so overshooting curves extrapolate).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        // Exact at t == 1 so settled tweens land on their target value.
        if t == 1.0 { *b } else { a + (b - a) * t }
    }
}

impl<T: Lerp + Clone> Lerp for Option<T> {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Some(a), Some(b)) => Some(T::lerp(a, b, t)),
            _ => None,
        }
    }
}

/// Animatable visual properties of one element. `None` leaves the property untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualState {
    /// Opacity in `[0, 1]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Uniform scale factor around the element center.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl VisualState {
    /// State that only sets opacity.
    pub fn opacity(opacity: f64) -> Self {
        Self {
            opacity: Some(opacity),
            scale: None,
        }
    }

    /// State that sets both opacity and scale.
    pub fn opacity_scale(opacity: f64, scale: f64) -> Self {
        Self {
            opacity: Some(opacity),
            scale: Some(scale),
        }
    }

    /// Return `true` when no property is set.
    pub fn is_empty(&self) -> bool {
        self.opacity.is_none() && self.scale.is_none()
    }

    /// Read one property.
    pub fn get(&self, prop: Property) -> Option<f64> {
        match prop {
            Property::Opacity => self.opacity,
            Property::Scale => self.scale,
        }
    }

    /// Write one property.
    pub fn set(&mut self, prop: Property, value: f64) {
        match prop {
            Property::Opacity => self.opacity = Some(value),
            Property::Scale => self.scale = Some(value),
        }
    }

    /// Properties that are set, in a fixed order.
    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        Property::ALL
            .into_iter()
            .filter(|p| self.get(*p).is_some())
    }
}

impl Lerp for VisualState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: Lerp::lerp(&a.opacity, &b.opacity, t),
            scale: Lerp::lerp(&a.scale, &b.scale, t),
        }
    }
}

/// A single animatable property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    /// Element opacity.
    Opacity,
    /// Element scale.
    Scale,
}

impl Property {
    /// Every property, in declaration order.
    pub const ALL: [Property; 2] = [Property::Opacity, Property::Scale];
}

/// Interpolation of visual properties on one or more targets over a duration.
///
/// With a non-zero `stagger`, target `i` starts `i * stagger` seconds after target 0.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    /// Elements to animate, matched by class.
    pub targets: Vec<Selector>,
    /// Per-target duration in seconds.
    pub duration: f64,
    /// State rendered before the tween starts.
    pub from: VisualState,
    /// State held after the tween ends.
    pub to: VisualState,
    /// Easing applied to progress.
    pub ease: Ease,
    /// Delay between consecutive targets, in seconds.
    pub stagger: f64,
}

impl Tween {
    /// Tween every target over the same window.
    pub fn from_to(
        targets: Vec<Selector>,
        duration: f64,
        from: VisualState,
        to: VisualState,
        ease: Ease,
    ) -> Self {
        Self::stagger_from_to(targets, duration, from, to, ease, 0.0)
    }

    /// Tween targets one after another, each starting `stagger` seconds after the previous.
    pub fn stagger_from_to(
        targets: Vec<Selector>,
        duration: f64,
        from: VisualState,
        to: VisualState,
        ease: Ease,
        stagger: f64,
    ) -> Self {
        Self {
            targets,
            duration,
            from,
            to,
            ease,
            stagger,
        }
    }

    pub fn validate(&self) -> PageResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(PageError::animation(
                "tween duration must be finite and >= 0",
            ));
        }
        if !self.stagger.is_finite() || self.stagger < 0.0 {
            return Err(PageError::animation(
                "tween stagger must be finite and >= 0",
            ));
        }
        if self.from.is_empty() {
            return Err(PageError::animation("tween must animate at least one property"));
        }
        for prop in Property::ALL {
            let (a, b) = (self.from.get(prop), self.to.get(prop));
            if a.is_some() != b.is_some() {
                return Err(PageError::animation(format!(
                    "tween from/to must set the same properties ({prop:?} differs)"
                )));
            }
            for v in [a, b].into_iter().flatten() {
                if !v.is_finite() {
                    return Err(PageError::animation(format!(
                        "tween {prop:?} value must be finite"
                    )));
                }
                if prop == Property::Opacity && !(0.0..=1.0).contains(&v) {
                    return Err(PageError::animation("tween opacity must be in [0, 1]"));
                }
            }
        }
        for (i, target) in self.targets.iter().enumerate() {
            target.validate()?;
            if self.targets[..i].contains(target) {
                return Err(PageError::animation(format!(
                    "tween targets '{target}' more than once"
                )));
            }
        }
        Ok(())
    }

    /// Start offset of target `index` relative to the tween start.
    pub fn target_offset(&self, index: usize) -> f64 {
        self.stagger * index as f64
    }

    /// Time from the first target's start to the last target's end.
    pub fn span(&self) -> f64 {
        match self.targets.len() {
            0 => 0.0,
            n => self.target_offset(n - 1) + self.duration,
        }
    }

    /// Interpolated state `local` seconds after a target's own start.
    pub fn state_at(&self, local: f64) -> VisualState {
        let progress = if self.duration <= 0.0 {
            if local >= 0.0 { 1.0 } else { 0.0 }
        } else {
            (local / self.duration).clamp(0.0, 1.0)
        };
        VisualState::lerp(&self.from, &self.to, self.ease.apply(progress))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
