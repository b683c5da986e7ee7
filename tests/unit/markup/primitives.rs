use super::*;

fn render(r: impl Render) -> String {
    r.render().into_string()
}

#[test]
fn icon_carries_url_and_class() {
    let out = render(Icon {
        url: "https://example.com/me.jpg",
        title: "Me",
    });
    assert_eq!(
        out,
        r#"<div class="icon"><img src="https://example.com/me.jpg" title="Me" alt="Me"></div>"#
    );
}

#[test]
fn title_renders_text_unmodified() {
    assert_eq!(
        render(Title {
            text: "Jannis Pohlmann"
        }),
        r#"<h1 class="title">Jannis Pohlmann</h1>"#
    );
}

#[test]
fn text_is_html_escaped() {
    assert_eq!(
        render(Title { text: "A & <B>" }),
        r#"<h1 class="title">A &amp; &lt;B&gt;</h1>"#
    );
}

#[test]
fn empty_input_renders_empty_element() {
    assert_eq!(render(Title { text: "" }), r#"<h1 class="title"></h1>"#);
    assert_eq!(render(Paragraph { runs: &[] }), r#"<p class="paragraph"></p>"#);
    assert_eq!(render(Subtitle { lines: &[] }), r#"<h2 class="subtitle"></h2>"#);
}

#[test]
fn subtitle_wraps_each_line() {
    let lines = vec![
        vec![
            Inline::text("Musician at "),
            Inline::link("MÆNAD", "https://soundcloud.com/maenadband"),
        ],
        vec![Inline::text("Second")],
    ];
    assert_eq!(
        render(Subtitle { lines: &lines }),
        concat!(
            r#"<h2 class="subtitle">"#,
            r#"<div>Musician at <a href="https://soundcloud.com/maenadband">MÆNAD</a></div>"#,
            r#"<div>Second</div>"#,
            r#"</h2>"#
        )
    );
}

#[test]
fn paragraph_renders_emphasis_and_links() {
    let runs = vec![
        Inline::text("I think "),
        Inline::emphasis("beast"),
        Inline::link("@", "mailto:contact@jannispohlmann.de"),
    ];
    assert_eq!(
        render(Paragraph { runs: &runs }),
        r#"<p class="paragraph">I think <em>beast</em><a href="mailto:contact@jannispohlmann.de">@</a></p>"#
    );
}

#[test]
fn bio_wraps_children() {
    let inner = Title { text: "x" }.render();
    assert_eq!(
        render(Bio(inner)),
        r#"<div class="bio"><h1 class="title">x</h1></div>"#
    );
}

#[test]
fn styles_are_scoped_to_their_class() {
    assert!(ICON_STYLE.contains(".icon img {"));
    assert!(BIO_STYLE.contains("@media screen and (max-height: 850px)"));
    assert!(TITLE_STYLE.starts_with(".title {"));
    assert!(SUBTITLE_STYLE.starts_with(".subtitle {"));
}
