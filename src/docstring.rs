//! Normalization of view documentation into request descriptions.

const TAB_SIZE: usize = 8;

/// Normalizes raw documentation text the way docstring indentation is conventionally trimmed.
///
/// The first line is stripped on both sides. Every following line loses the indentation
/// common to all of them (blank lines are ignored when computing it) and its trailing
/// whitespace, so nested blocks keep their relative indentation. Leading and trailing blank
/// lines are dropped, blank lines inside the text are kept.
///
/// ```
/// use postman_from_routes::docstring::trim_docstring;
///
/// let doc = "  Get some foo.\n\n  Returns:\n      A nice foo.";
/// assert_eq!(trim_docstring(doc), "Get some foo.\n\nReturns:\n    A nice foo.");
/// ```
pub fn trim_docstring(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let expanded = expand_tabs(raw, TAB_SIZE);
    let lines = split_lines(&expanded);
    let Some((first, rest)) = lines.split_first() else {
        return String::new();
    };

    let indent = rest
        .iter()
        .filter(|line| !line.trim_start().is_empty())
        .map(|line| leading_width(line))
        .min();

    let mut trimmed: Vec<&str> = vec![first.trim()];
    if let Some(indent) = indent {
        trimmed.extend(rest.iter().map(|line| skip_chars(line, indent).trim_end()));
    }

    let start = trimmed.iter().position(|line| !line.is_empty());
    let end = trimmed.iter().rposition(|line| !line.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => trimmed[start..=end].join("\n"),
        _ => String::new(),
    }
}

/// Normalizes optional documentation; absent text yields an empty description.
pub fn describe(raw: Option<&str>) -> String {
    raw.map(trim_docstring).unwrap_or_default()
}

/// Replaces tabs with spaces up to the next multiple of `tab_size`, column counted per line.
fn expand_tabs(text: &str, tab_size: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let spaces = tab_size - column % tab_size;
                out.extend(std::iter::repeat(' ').take(spaces));
                column += spaces;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Whether `c` ends a line: `\n`, `\r`, vertical tab, form feed, the file/group/record
/// separators, NEL, and the Unicode line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits `text` at every line break, `\r\n` counting as one. A break at the very end
/// does not start another line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..offset]);
        start = offset + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Number of leading whitespace characters
fn leading_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// `line` without its first `count` characters
fn skip_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(trim_docstring(""), "");
        assert_eq!(describe(None), "");
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(trim_docstring("   \n  \n\t"), "");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(trim_docstring("  Get some foo.  "), "Get some foo.");
    }

    #[test]
    fn test_relative_indentation_is_kept() {
        let doc = "  Get some foo.\n\n  Returns:\n      A nice foo.";
        assert_eq!(trim_docstring(doc), "Get some foo.\n\nReturns:\n    A nice foo.");
    }

    #[test]
    fn test_first_line_indent_does_not_count() {
        let doc = "Get some foo.\n\n    Returns:\n        A string contaning a nice foo.\n    ";
        assert_eq!(
            trim_docstring(doc),
            "Get some foo.\n\nReturns:\n    A string contaning a nice foo."
        );
    }

    #[test]
    fn test_leading_blank_lines_are_dropped() {
        let doc = "\n    Delete a user.\n\n    Irreversible.\n";
        assert_eq!(trim_docstring(doc), "Delete a user.\n\nIrreversible.");
    }

    #[test]
    fn test_internal_blank_lines_are_kept() {
        let doc = "Summary.\n\n\n    Details.";
        assert_eq!(trim_docstring(doc), "Summary.\n\n\nDetails.");
    }

    #[test]
    fn test_tabs_are_expanded() {
        let doc = "Summary.\n\tIndented.\n\t    More.";
        assert_eq!(trim_docstring(doc), "Summary.\nIndented.\n    More.");
    }

    #[test]
    fn test_trailing_whitespace_is_stripped() {
        let doc = "Summary.   \n    line one   \n    line two\t";
        assert_eq!(trim_docstring(doc), "Summary.\nline one\nline two");
    }

    #[test]
    fn test_normalizing_twice_is_stable() {
        let doc = "  Get some foo.\n\n  Returns:\n      A nice foo.";
        let once = trim_docstring(doc);
        assert_eq!(trim_docstring(&once), once);
    }

    #[test]
    fn test_every_line_break_form_splits() {
        for brk in [
            "\n", "\r", "\r\n", "\x0b", "\x0c", "\x1c", "\x1d", "\x1e", "\u{85}", "\u{2028}",
            "\u{2029}",
        ] {
            let doc = format!("Summary.{brk}    Detail.{brk}        Nested.");
            assert_eq!(
                trim_docstring(&doc),
                "Summary.\nDetail.\n    Nested.",
                "line break {:?}",
                brk
            );
        }
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\r\nb\rc\n"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("\r\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_expand_tabs_uses_columns() {
        assert_eq!(expand_tabs("ab\tc", 8), "ab      c");
        assert_eq!(expand_tabs("a\n\tb", 4), "a\n    b");
    }
}
