/// Render a styled text card with a title, as one HTML fragment.
///
/// Both the title and the body are escaped, so remote-supplied text can
/// never inject markup into the page.
pub fn text_card(text: &str, title: &str) -> String {
    format!(
        r#"<div class="card">
  <div class="card-body">
    <h4>{}</h4>
    <p>{}</p>
  </div>
</div>"#,
        escape_html(title),
        escape_html(text)
    )
}

/// Minimal HTML entity escaping for text interpolated into markup.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
