//! Removal of the chat command word that prefixes a submitted chart.

const COMMAND: &str = "/liuyao";

/// Trim `text` and drop a leading `/liuyao` command word.
///
/// The command is matched case-insensitively and only as a whole word: it
/// must be followed by whitespace or the end of the text.
pub(crate) fn strip_command(text: &str) -> &str {
    let text = text.trim();

    let Some(head) = text.get(..COMMAND.len()) else {
        return text;
    };
    if !head.eq_ignore_ascii_case(COMMAND) {
        return text;
    }

    let rest = &text[COMMAND.len()..];
    match rest.chars().next() {
        None => "",
        Some(c) if c.is_whitespace() => rest.trim(),
        Some(_) => text,
    }
}
