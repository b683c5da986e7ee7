/// One run of inline text.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inline {
    /// Plain text.
    Text { text: String },
    /// Emphasized text.
    Emphasis { text: String },
    /// Hyperlink. `href` is passed through as-is.
    Link { label: String, href: String },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        Self::Emphasis { text: text.into() }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A line or paragraph made of inline runs.
pub type Line = Vec<Inline>;

/// Everything shown on the page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileContent {
    /// Display name; also the document title.
    pub name: String,
    /// Profile photo, also used as the favicon.
    pub photo_url: String,
    /// Role lines shown under the name.
    pub roles: Vec<Line>,
    /// Body paragraphs.
    pub paragraphs: Vec<Line>,
}

const PHOTO_URL: &str =
    "https://pbs.twimg.com/profile_images/747365723203321856/P9gO00pv_400x400.jpg";

impl Default for ProfileContent {
    fn default() -> Self {
        Self {
            name: "Jannis Pohlmann".to_string(),
            photo_url: PHOTO_URL.to_string(),
            roles: vec![
                vec![
                    Inline::text("Tech Lead & Co-Founder at "),
                    Inline::link("The Graph", "https://thegraph.com"),
                    Inline::text("."),
                ],
                vec![
                    Inline::text("Musician at "),
                    Inline::link("MÆNAD", "https://soundcloud.com/maenadband"),
                    Inline::text("."),
                ],
            ],
            paragraphs: vec![
                vec![
                    Inline::text("I have been called many things. I think "),
                    Inline::emphasis("beast"),
                    Inline::text(" is my favorite."),
                ],
                vec![
                    Inline::link("@", "mailto:contact@jannispohlmann.de"),
                    Inline::link("Twitter", "https://twitter.com/jannispohlmann"),
                    Inline::link("LinkedIn", "https://linkedin.com/in/jannispohlmann"),
                ],
            ],
        }
    }
}

impl ProfileContent {
    /// All `(label, href)` pairs in document order.
    pub fn links(&self) -> Vec<(&str, &str)> {
        self.roles
            .iter()
            .chain(&self.paragraphs)
            .flatten()
            .filter_map(|run| match run {
                Inline::Link { label, href } => Some((label.as_str(), href.as_str())),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/profile/content.rs"]
mod tests;
