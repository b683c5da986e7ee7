pub mod css;
pub mod ease;
pub mod playback;
pub mod player;
pub mod sequencer;
pub mod timeline;
pub mod tween;
