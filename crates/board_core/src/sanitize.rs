/// The five entities the board API escapes inside job content.
const ENTITIES: [(&str, &str); 5] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Reduce HTML-bearing job content to plain text for keyword search.
///
/// Entities are decoded until none remain (board content is frequently
/// escaped twice), every `<...>` span becomes a single space, whitespace runs
/// collapse to one space and the result is trimmed. The output is stable
/// under a second pass.
pub fn sanitize_content(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    let decoded = decode_entities(html);
    let stripped = strip_tags(&decoded);
    collapse_whitespace(&stripped)
}

fn decode_entities(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        if !current.contains('&') {
            return current;
        }
        let next = ENTITIES
            .iter()
            .fold(current.clone(), |text, (entity, literal)| {
                text.replace(entity, literal)
            });
        if next == current {
            return next;
        }
        current = next;
    }
}

/// Replace each `<` ... `>` span with a space. A `<` with no closing `>`
/// after it is kept as text.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => {
                out.push(' ');
                rest = &rest[open + close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for word in input.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
