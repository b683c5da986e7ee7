//! Stable class tags shared by the rendered markup and the animation targets.

/// Profile photo wrapper.
pub const ICON: &str = "icon";
/// Text column next to (or below) the photo.
pub const BIO: &str = "bio";
/// Name heading.
pub const TITLE: &str = "title";
/// Role lines under the heading.
pub const SUBTITLE: &str = "subtitle";
/// Body paragraphs.
pub const PARAGRAPH: &str = "paragraph";
/// Layout container.
pub const PROFILE: &str = "profile";

/// Elements hidden by the global reset until the entrance timeline reveals them.
pub const ANIMATED: [&str; 4] = [ICON, TITLE, SUBTITLE, PARAGRAPH];
