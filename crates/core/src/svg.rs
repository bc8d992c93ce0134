//! SVG serializer: turns an [`Element`] tree into a standalone SVG string.

use std::fmt::Write as _;

use folio_protocol::Element;

/// Render `root` and its subtree as markup.
///
/// Native animations are written as `<animate>`/`<animateTransform>`
/// children after the element's own children.
pub fn render_svg(root: &Element) -> String {
    let mut out = String::with_capacity(4096);
    write_element(&mut out, root);
    out
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attributes {
        let _ = write!(out, " {name}=\"");
        push_escaped(out, &value.to_string());
        out.push('"');
    }

    let empty =
        element.children.is_empty() && element.animations.is_empty() && element.text.is_none();
    if empty {
        out.push_str("/>");
        return;
    }
    out.push('>');

    if let Some(text) = &element.text {
        push_escaped(out, text);
    }
    for child in &element.children {
        write_element(out, child);
    }
    for animation in &element.animations {
        write_element(out, &animation.to_element());
    }

    let _ = write!(out, "</{}>", element.tag);
}

/// Append `text` to `out` with the five XML entities escaped.
fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
}
