use crate::foundation::error::{PageError, PageResult};

/// Absolute 0-based frame index in playback space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> PageResult<Self> {
        if den == 0 {
            return Err(PageError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(PageError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Timestamp of the start of `frame`, in seconds.
    pub fn frame_to_secs(self, frame: FrameIndex) -> f64 {
        (frame.0 as f64) * f64::from(self.den) / f64::from(self.num)
    }

    /// Number of frames needed to cover `secs`, rounding up.
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        // Absorb float noise so 1.2s at 10fps is 12 frames, not 13.
        let frames = secs * self.as_f64();
        (frames - 1e-9).ceil().max(0.0) as u64
    }
}

/// Class selector used to target rendered elements by tag instead of by reference.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Selector(String);

impl Selector {
    /// Build a selector matching elements carrying class `name`.
    pub fn class(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The bare class name.
    pub fn class_name(&self) -> &str {
        &self.0
    }

    /// CSS selector text (`.name`).
    pub fn css(&self) -> String {
        format!(".{}", self.0)
    }

    /// Validate that the class name is usable both as an HTML class and a CSS identifier.
    pub fn validate(&self) -> PageResult<()> {
        validate_ident("selector", &self.0)
    }
}

/// Check that `s` is a plain CSS identifier (`[A-Za-z_-][A-Za-z0-9_-]*`).
pub(crate) fn validate_ident(what: &str, s: &str) -> PageResult<()> {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return Err(PageError::validation(format!("{what} must not be empty")));
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '-') {
        return Err(PageError::validation(format!(
            "{what} '{s}' must start with a letter, '_' or '-'"
        )));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(PageError::validation(format!(
            "{what} '{s}' contains characters outside [A-Za-z0-9_-]"
        )));
    }
    Ok(())
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
