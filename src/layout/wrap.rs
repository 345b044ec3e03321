/// Greedily pack the whitespace-separated words of `text` into lines no wider than `max_width`.
///
/// A word joins the current line when the joined line still fits, or when the current line is
/// empty (so a single over-long word gets a line of its own). Text without any words is
/// returned unchanged as one line.
pub fn wrap_words<M>(text: &str, max_width: i32, mut measure: M) -> Vec<String>
where
    M: FnMut(&str) -> i32,
{
    let mut words = text.split_whitespace().peekable();
    if words.peek().is_none() {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in words {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
