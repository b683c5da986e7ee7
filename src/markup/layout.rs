use maud::{Markup, Render, html};

use crate::{
    animation::player::TimelinePlayer,
    animation::sequencer::{MotionConfig, entrance_timeline},
    foundation::classes,
    markup::primitives::{Bio, Icon, Paragraph, Subtitle, Title},
    profile::content::ProfileContent,
};

/// Layout container: photo and text column, stacked vertically on tall viewports and side by
/// side at or below 850px of viewport height.
pub struct Profile<'a> {
    content: &'a ProfileContent,
    motion: &'a MotionConfig,
}

impl<'a> Profile<'a> {
    pub fn new(content: &'a ProfileContent, motion: &'a MotionConfig) -> Self {
        Self { content, motion }
    }

    /// Mount hook: build a fresh entrance timeline and hand it to `player`, once per call.
    ///
    /// Mounting again plays the sequence again.
    pub fn mount(&self, player: &mut dyn TimelinePlayer) {
        tracing::debug!(name = %self.content.name, "profile mounted");
        player.play(entrance_timeline(self.motion).resume());
    }
}

impl Render for Profile<'_> {
    fn render(&self) -> Markup {
        let c = self.content;
        let bio = html! {
            (Title { text: &c.name })
            (Subtitle { lines: &c.roles })
            @for paragraph in &c.paragraphs {
                (Paragraph { runs: paragraph })
            }
        };
        html! {
            div class=(classes::PROFILE) {
                (Icon { url: &c.photo_url, title: &c.name })
                (Bio(bio))
            }
        }
    }
}

pub(crate) const PROFILE_STYLE: &str = "\
.profile {
  display: flex;
  flex: 1 auto;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 4rem;
  font-family: 'Raleway';
  font-weight: 100;
  box-sizing: border-box;
  color: #eee;
  width: 100%;
  margin: auto;
}
@media screen and (max-height: 850px) {
  .profile {
    flex-direction: row;
  }
}
";

#[cfg(test)]
#[path = "../../tests/unit/markup/layout.rs"]
mod tests;
