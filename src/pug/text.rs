use super::options::SiblingSpacing;

/// What goes in front of each line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    /// Piped text, `| `.
    Pipe,
    /// Buffered comment, `// `.
    Comment,
    /// Nothing; with `preserve` this is a dot block.
    Bare,
}

impl Marker {
    fn as_str(self) -> &'static str {
        match self {
            Marker::Pipe => "| ",
            Marker::Comment => "// ",
            Marker::Bare => "",
        }
    }
}

/// Whether a text node has element siblings right next to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Adjacent {
    pub(crate) before: bool,
    pub(crate) after: bool,
}

fn is_blank(segment: &str) -> bool {
    segment.trim().is_empty()
}

/// Split text into lines, dropping the blank lines that merely wrap it.
/// Blank lines in between are kept.
pub(crate) fn segments(text: &str) -> Vec<&str> {
    let mut segments = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect::<Vec<_>>();
    while segments.last().map_or(false, |s| is_blank(s)) {
        segments.pop();
    }
    let leading = segments.iter().take_while(|s| is_blank(s)).count();
    segments.drain(..leading);
    segments
}

/// Trim a line. With `preserve`, a single space at either end survives: it
/// is deliberate spacing, anything longer is indentation.
fn trim_segment(segment: &str, preserve: bool) -> String {
    let trimmed = segment.trim();
    if !preserve {
        return trimmed.to_string();
    }
    let leading = &segment[..segment.len() - segment.trim_start().len()];
    let trailing = &segment[segment.trim_end().len()..];
    let mut result = String::with_capacity(trimmed.len() + 2);
    if leading == " " {
        result.push(' ');
    }
    result.push_str(trimmed);
    if trailing == " " {
        result.push(' ');
    }
    result
}

fn leading_whitespace(segment: &str) -> &str {
    &segment[..segment.len() - segment.trim_start().len()]
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map_or(0, |((i, c), _)| i + c.len_utf8());
    &a[..len]
}

// Whitespace shared by the start of every non-blank line.
fn margin<'a>(segments: &[&'a str]) -> &'a str {
    segments
        .iter()
        .copied()
        .filter(|s| !is_blank(s))
        .map(leading_whitespace)
        .reduce(common_prefix)
        .unwrap_or("")
}

fn verbatim_lines(text: &str, indent: &str) -> Vec<String> {
    let segments = segments(text);
    let margin = margin(&segments);
    segments
        .into_iter()
        .map(|segment| {
            if is_blank(segment) {
                String::new()
            } else {
                let content = segment.strip_prefix(margin).unwrap_or(segment);
                format!("{}{}", indent, content)
            }
        })
        .collect()
}

fn prefixed(contents: Vec<Option<String>>, indent: &str, marker: Marker) -> Vec<String> {
    contents
        .into_iter()
        .map(|content| match content {
            Some(content) => format!("{}{}{}", indent, marker.as_str(), content),
            None => String::new(),
        })
        .collect()
}

fn contents(text: &str, preserve: bool) -> Vec<Option<String>> {
    segments(text)
        .into_iter()
        .map(|segment| (!is_blank(segment)).then(|| trim_segment(segment, preserve)))
        .collect()
}

/// Format text as lines at the given indentation.
///
/// A bare marker with `preserve` produces a dot block: lines keep their
/// relative indentation and are only shifted to `indent`. Otherwise every
/// line is trimmed and prefixed with the marker. Blank lines between text
/// become empty lines.
pub(crate) fn format_text(text: &str, indent: &str, marker: Marker, preserve: bool) -> Vec<String> {
    if marker == Marker::Bare && preserve {
        return verbatim_lines(text, indent);
    }
    prefixed(contents(text, preserve), indent, marker)
}

/// Format the text of a single-line text node for use after a head.
pub(crate) fn inline_text(text: &str) -> String {
    segments(text)
        .first()
        .map(|segment| trim_segment(segment, true))
        .unwrap_or_default()
}

/// Format a text node that sits among siblings as piped lines.
pub(crate) fn piped_lines(
    text: &str,
    indent: &str,
    adjacent: Adjacent,
    spacing: SiblingSpacing,
) -> Vec<String> {
    let mut contents = contents(text, spacing != SiblingSpacing::Lines);
    match spacing {
        SiblingSpacing::Off => {}
        SiblingSpacing::Inline => {
            if adjacent.before {
                if let Some(Some(first)) = contents.first_mut() {
                    if !first.starts_with(' ') {
                        first.insert(0, ' ');
                    }
                }
            }
            if adjacent.after {
                if let Some(Some(last)) = contents.last_mut() {
                    if !last.ends_with(' ') {
                        last.push(' ');
                    }
                }
            }
        }
        SiblingSpacing::Lines => {
            if adjacent.before {
                contents.insert(0, Some(" ".to_string()));
            }
            if adjacent.after {
                contents.push(Some(" ".to_string()));
            }
        }
    }
    prefixed(contents, indent, Marker::Pipe)
}

/// Format a comment. A single line stays on the `//` line; more lines go
/// underneath it, one level deeper, each trimmed.
pub(crate) fn comment_lines(text: &str, indent: &str, body_indent: &str) -> Vec<String> {
    let segments = segments(text);
    match segments.as_slice() {
        [] => vec![format!("{}//", indent)],
        [_] => format_text(text, indent, Marker::Comment, false),
        _ => {
            let mut lines = vec![format!("{}//", indent)];
            lines.extend(format_text(text, body_indent, Marker::Bare, false));
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello", vec!["Hello"])]
    #[case("\n  Hello\n", vec!["  Hello"])]
    #[case("\n\n  a\n\n  b\n  \n", vec!["  a", "", "  b"])]
    #[case("a\r\nb", vec!["a", "b"])]
    #[case("  \n \t", vec![])]
    fn test_segments(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(segments(text), expected);
    }

    #[rstest]
    #[case(" | ", true, " | ")]
    #[case("    Full-time  ", true, "Full-time")]
    #[case("\tx ", true, "x ")]
    #[case(" | ", false, "|")]
    fn test_trim_segment(#[case] segment: &str, #[case] preserve: bool, #[case] expected: &str) {
        assert_eq!(trim_segment(segment, preserve), expected);
    }

    #[test]
    fn test_pipe_block() {
        let lines = format_text("\n  Jade is terse\n  and simple\n", "  ", Marker::Pipe, false);
        assert_eq!(lines, ["  | Jade is terse", "  | and simple"]);
    }

    #[test]
    fn test_pipe_block_keeps_inner_blank_line() {
        let lines = format_text("a\n\nb", "", Marker::Pipe, false);
        assert_eq!(lines, ["| a", "", "| b"]);
    }

    #[test]
    fn test_dot_block_keeps_relative_indentation() {
        let text = "\n    if (foo) {\n      bar()\n    }\n\n    done()\n  ";
        let lines = format_text(text, "  ", Marker::Bare, true);
        assert_eq!(lines, ["  if (foo) {", "    bar()", "  }", "", "  done()"]);
    }

    #[test]
    fn test_dot_block_mixed_margin() {
        let lines = format_text("\t a\n\t\tb", "", Marker::Bare, true);
        assert_eq!(lines, [" a", "\tb"]);
    }

    #[test]
    fn test_inline_text() {
        assert_eq!(inline_text("Hello World "), "Hello World ");
        assert_eq!(inline_text("\n  Hello\n"), "Hello");
        assert_eq!(inline_text(""), "");
    }

    #[test]
    fn test_piped_off_keeps_single_spaces() {
        let lines = piped_lines(" | ", "..", Adjacent::default(), SiblingSpacing::Off);
        assert_eq!(lines, ["..|  | "]);
    }

    #[test]
    fn test_piped_inline_adds_spaces() {
        let adjacent = Adjacent {
            before: true,
            after: true,
        };
        let lines = piped_lines("\n  and\n", "", adjacent, SiblingSpacing::Inline);
        assert_eq!(lines, ["|  and "]);
    }

    #[test]
    fn test_piped_inline_does_not_double_spaces() {
        let adjacent = Adjacent {
            before: false,
            after: true,
        };
        let lines = piped_lines("Hello ", "", adjacent, SiblingSpacing::Inline);
        assert_eq!(lines, ["| Hello "]);
    }

    #[test]
    fn test_piped_lines_spacing() {
        let adjacent = Adjacent {
            before: true,
            after: false,
        };
        let lines = piped_lines(" and more ", "  ", adjacent, SiblingSpacing::Lines);
        assert_eq!(lines, ["  |  ", "  | and more"]);
    }

    #[test]
    fn test_comment_single_line() {
        assert_eq!(comment_lines(" hello ", "  ", "    "), ["  // hello"]);
    }

    #[test]
    fn test_comment_empty() {
        assert_eq!(comment_lines("", "", "  "), ["//"]);
    }

    #[test]
    fn test_comment_multi_line() {
        let lines = comment_lines("\n  first\n    second\n", "", "  ");
        assert_eq!(lines, ["//", "  first", "  second"]);
    }
}
