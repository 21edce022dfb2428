use mdsite_core::{render, HtmlError, HtmlNode};
use pretty_assertions::assert_eq;

fn page() -> HtmlNode {
    HtmlNode::parent(
        "div",
        vec![
            HtmlNode::parent("h2", vec![HtmlNode::text("Blog posts")]),
            HtmlNode::parent(
                "ul",
                vec![HtmlNode::parent(
                    "li",
                    vec![HtmlNode::leaf("a", "Glorfindel").with_attr("href", "/blog/glorfindel")],
                )],
            ),
            HtmlNode::parent("p", vec![HtmlNode::image("/images/tolkien.png", "JRR Tolkien")]),
        ],
    )
}

#[test]
fn test_render_matches_to_html() {
    let tree = page();
    assert_eq!(render(&tree).unwrap(), tree.to_html().unwrap());
    assert_eq!(
        render(&tree).unwrap(),
        concat!(
            "<div><h2>Blog posts</h2>",
            "<ul><li><a href=\"/blog/glorfindel\">Glorfindel</a></li></ul>",
            "<p><img src=\"/images/tolkien.png\" alt=\"JRR Tolkien\" /></p></div>"
        )
    );
}

#[test]
fn test_render_is_deterministic() {
    let tree = page();
    assert_eq!(tree.to_html().unwrap(), tree.clone().to_html().unwrap());
}

#[test]
fn test_text_round_trip() {
    for value in ["plain", "  spaced  ", "<em>raw</em> & more"] {
        assert_eq!(HtmlNode::text(value).to_html().unwrap(), value);
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        HtmlNode::parent("div", vec![]).to_html().unwrap_err().to_string(),
        "parent node <div> has no children"
    );
    assert_eq!(
        HtmlError::MissingValue { tag: None }.to_string(),
        "leaf node (raw text) missing value"
    );
}
