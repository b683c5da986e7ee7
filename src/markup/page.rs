use maud::{DOCTYPE, Markup, PreEscaped, Render, html};

use crate::{
    animation::player::CssPlayer,
    foundation::classes,
    foundation::error::PageResult,
    markup::layout::{PROFILE_STYLE, Profile},
    markup::primitives::{BIO_STYLE, ICON_STYLE, SUBTITLE_STYLE, TITLE_STYLE},
    profile::config::SiteConfig,
};

/// External font stylesheets: headings use Alegreya Sans SC, body text uses Raleway.
pub const FONT_STYLESHEETS: [&str; 2] = [
    "https://fonts.googleapis.com/css?family=Alegreya+Sans+SC:200,300,400",
    "https://fonts.googleapis.com/css?family=Raleway:200,300,400",
];

const GLOBAL_STYLE: &str = "\
body { background-color: #272324; }

em {
  font-style: normal;
  border-bottom: thin solid white;
}

a, a:link, a:visited {
  color: inherit;
  text-decoration: none;
  border-bottom: thin solid white;
}

p a {
  display: inline-block;
  margin-right: 1rem;
}
";

/// Global reset plus the initial hidden state of every animated element.
pub fn global_style() -> String {
    let hidden: Vec<String> = classes::ANIMATED
        .iter()
        .map(|class| format!(".{class}"))
        .collect();
    format!("{GLOBAL_STYLE}\n{} {{ opacity: 0; }}\n", hidden.join(", "))
}

/// Scoped styles of the layout container and every primitive.
pub fn component_styles() -> String {
    [PROFILE_STYLE, ICON_STYLE, BIO_STYLE, TITLE_STYLE, SUBTITLE_STYLE].concat()
}

/// Page root: the whole served document.
pub struct Page<'a> {
    config: &'a SiteConfig,
}

impl<'a> Page<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Render the document, mounting the layout so its entrance sequence ends up as CSS.
    #[tracing::instrument(skip(self), fields(name = %self.config.profile.name))]
    pub fn render(&self) -> PageResult<String> {
        let content = &self.config.profile;
        let profile = Profile::new(content, &self.config.motion);

        let body = profile.render();
        let mut player = CssPlayer::new();
        profile.mount(&mut player);
        tracing::debug!(timelines = player.played(), "entrance sequence queued");
        let animation = player.finish()?;

        let doc = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (content.name) }
                    link rel="icon" href=(content.photo_url);
                    @for href in FONT_STYLESHEETS {
                        link href=(href) rel="stylesheet";
                    }
                    (style_block(&global_style()))
                    (style_block(&component_styles()))
                    (style_block(&animation))
                }
                body { (body) }
            }
        };

        let out = doc.into_string();
        tracing::info!(bytes = out.len(), "rendered page");
        Ok(out)
    }
}

fn style_block(css: &str) -> Markup {
    html! { style { (PreEscaped(css)) } }
}

#[cfg(test)]
#[path = "../../tests/unit/markup/page.rs"]
mod tests;
