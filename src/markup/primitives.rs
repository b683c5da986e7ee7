//! Stateless display elements. Each one renders a single root element tagged with its class
//! from [`classes`] and ships its own style, scoped under that class.

use maud::{Markup, Render, html};

use crate::{
    foundation::classes,
    profile::content::{Inline, Line},
};

impl Render for Inline {
    fn render(&self) -> Markup {
        match self {
            Inline::Text { text } => html! { (text) },
            Inline::Emphasis { text } => html! { em { (text) } },
            Inline::Link { label, href } => html! { a href=(href) { (label) } },
        }
    }
}

/// Round profile photo.
pub struct Icon<'a> {
    pub url: &'a str,
    /// Hover caption and alt text.
    pub title: &'a str,
}

impl Render for Icon<'_> {
    fn render(&self) -> Markup {
        html! {
            div class=(classes::ICON) {
                img src=(self.url) title=(self.title) alt=(self.title);
            }
        }
    }
}

/// Text column wrapping the heading, subheading and paragraphs.
pub struct Bio(pub Markup);

impl Render for Bio {
    fn render(&self) -> Markup {
        html! {
            div class=(classes::BIO) { (self.0) }
        }
    }
}

/// Name heading.
pub struct Title<'a> {
    pub text: &'a str,
}

impl Render for Title<'_> {
    fn render(&self) -> Markup {
        html! {
            h1 class=(classes::TITLE) { (self.text) }
        }
    }
}

/// Role lines, one block per line.
pub struct Subtitle<'a> {
    pub lines: &'a [Line],
}

impl Render for Subtitle<'_> {
    fn render(&self) -> Markup {
        html! {
            h2 class=(classes::SUBTITLE) {
                @for line in self.lines {
                    div { @for run in line { (run) } }
                }
            }
        }
    }
}

pub struct Paragraph<'a> {
    pub runs: &'a [Inline],
}

impl Render for Paragraph<'_> {
    fn render(&self) -> Markup {
        html! {
            p class=(classes::PARAGRAPH) {
                @for run in self.runs { (run) }
            }
        }
    }
}

pub(crate) const ICON_STYLE: &str = "\
.icon {
  display: flex;
  flex: 0 auto;
}
.icon img {
  border-radius: 50%;
  width: 400px;
  height: 400px;
}
";

pub(crate) const BIO_STYLE: &str = "\
.bio {
  display: flex;
  flex: 0 auto;
  flex-direction: column;
  box-sizing: border-box;
  width: 400px;
  padding: 4rem 0rem 0rem 0rem;
}
@media screen and (max-height: 850px) {
  .bio {
    padding: 0rem 0rem 0rem 4rem;
  }
}
";

pub(crate) const TITLE_STYLE: &str = "\
.title {
  font-family: 'Alegreya Sans SC';
  font-weight: 400;
  margin: 0;
}
";

pub(crate) const SUBTITLE_STYLE: &str = "\
.subtitle {
  margin: 0 0 1rem 0;
  font-family: 'Alegreya Sans SC';
  font-size: 1.35rem;
  font-weight: 200;
}
";

#[cfg(test)]
#[path = "../../tests/unit/markup/primitives.rs"]
mod tests;
