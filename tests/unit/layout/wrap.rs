use super::*;

fn char_width(s: &str) -> i32 {
    s.chars().count() as i32 * 10
}

#[test]
fn blank_text_is_returned_as_is() {
    assert_eq!(wrap_words("", 50, char_width), vec![String::new()]);
    assert_eq!(wrap_words("   ", 50, char_width), vec!["   ".to_string()]);
}

#[test]
fn packs_words_up_to_the_limit() {
    let lines = wrap_words("aa bb cc dd", 50, char_width);
    assert_eq!(lines, vec!["aa bb", "cc dd"]);
}

#[test]
fn collapses_repeated_whitespace() {
    let lines = wrap_words("  one \t two\nthree  ", 1000, char_width);
    assert_eq!(lines, vec!["one two three"]);
}

#[test]
fn overlong_word_gets_its_own_line() {
    let lines = wrap_words("a incomprehensibilities b", 40, char_width);
    assert_eq!(lines, vec!["a", "incomprehensibilities", "b"]);
}

#[test]
fn rejoined_lines_preserve_word_order() {
    let text = "the quick brown fox jumps over the lazy dog again";
    let lines = wrap_words(text, 90, char_width);
    assert!(lines.len() > 1);
    assert_eq!(lines.join(" "), text);
    assert!(lines.iter().all(|l| char_width(l) <= 90));
}
