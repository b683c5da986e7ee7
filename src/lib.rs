//! Renders a static personal profile page with a compiled entrance animation.
//!
//! The page is assembled from a handful of stateless markup primitives inside one layout
//! container. Mounting the container hands a freshly built [`Timeline`] to a
//! [`TimelinePlayer`]; the document renderer uses a [`CssPlayer`], which bakes the timeline
//! into CSS keyframes so the browser plays it once the page is shown.
//!
//! - Load a [`SiteConfig`] (or use the default profile)
//! - Render the document with [`Page::render`]
//! - Inspect the sequence frame by frame with [`Playback`]
#![forbid(unsafe_code)]

/// Timeline engine and the page entrance sequence.
pub mod animation;
/// Errors, frame timing and stable class tags.
pub mod foundation;
/// HTML rendering of the primitives, layout container and page root.
pub mod markup;
/// Page content and site configuration.
pub mod profile;

pub use crate::animation::css::compile as compile_css;
pub use crate::animation::ease::Ease;
pub use crate::animation::playback::{FrameState, Playback};
pub use crate::animation::player::{CssPlayer, TimelinePlayer};
pub use crate::animation::sequencer::{MotionConfig, entrance_timeline};
pub use crate::animation::timeline::{Phase, PlayState, Position, Timeline};
pub use crate::animation::tween::{Tween, VisualState};
pub use crate::foundation::core::{Fps, FrameIndex, Selector};
pub use crate::foundation::error::{PageError, PageResult};
pub use crate::markup::layout::Profile;
pub use crate::markup::page::Page;
pub use crate::profile::config::SiteConfig;
pub use crate::profile::content::{Inline, ProfileContent};
