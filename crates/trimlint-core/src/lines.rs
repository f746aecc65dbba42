//! Line splitting that keeps each line's terminator.
//!
//! Unlike [`str::lines`], the terminator of every line is kept so callers can
//! reassemble the text byte-for-byte. `"\r\n"`, `"\n"` and a lone `"\r"` are
//! all recognised as terminators.

/// A single line of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Line number (1-indexed).
    pub number: usize,
    /// Byte offset of the first content byte in the source text.
    pub offset: usize,
    /// Line content without its terminator.
    pub content: &'a str,
    /// The terminator following the content; empty for a final unterminated line.
    pub terminator: &'a str,
}

/// Iterator over the lines of a text. See [`source_lines`].
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    text: &'a str,
    pos: usize,
    number: usize,
    done: bool,
}

/// Splits `text` into lines, keeping terminators.
///
/// The segment after the last terminator is always a line, so the empty
/// string is one empty line and `"a\n"` is `"a"` followed by an empty line.
///
/// ```
/// use trimlint_core::source_lines;
///
/// let lines: Vec<_> = source_lines("a\r\nb").collect();
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].terminator, "\r\n");
/// assert_eq!(lines[1].terminator, "");
///
/// assert_eq!(source_lines("a\n").count(), 2);
/// ```
#[must_use]
pub fn source_lines(text: &str) -> SourceLines<'_> {
    SourceLines {
        text,
        pos: 0,
        number: 0,
        done: false,
    }
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = SourceLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let rest = self.text.get(self.pos..)?;

        let offset = self.pos;
        let (content, terminator) = match rest.find(|c| c == '\n' || c == '\r') {
            Some(idx) => {
                let (content, tail) = rest.split_at(idx);
                let len = if tail.starts_with("\r\n") { 2 } else { 1 };
                (content, &tail[..len])
            }
            None => {
                self.done = true;
                (rest, "")
            }
        };

        self.pos += content.len() + terminator.len();
        self.number += 1;

        Some(SourceLine {
            number: self.number,
            offset,
            content,
            terminator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<(&str, &str)> {
        source_lines(text)
            .map(|l| (l.content, l.terminator))
            .collect()
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(split(""), vec![("", "")]);
    }

    #[test]
    fn unterminated_last_line_is_kept() {
        assert_eq!(split("a\nb"), vec![("a", "\n"), ("b", "")]);
    }

    #[test]
    fn trailing_terminator_is_followed_by_empty_line() {
        assert_eq!(split("a\n"), vec![("a", "\n"), ("", "")]);
        assert_eq!(split("\n"), vec![("", "\n"), ("", "")]);
    }

    #[test]
    fn whitespace_line_and_empty_line_are_both_lines() {
        assert_eq!(split(" "), vec![(" ", "")]);
        assert_eq!(split(" \n"), vec![(" ", "\n"), ("", "")]);
    }

    #[test]
    fn mixed_terminators_are_preserved() {
        assert_eq!(
            split("a\r\nb\rc\n\nd"),
            vec![("a", "\r\n"), ("b", "\r"), ("c", "\n"), ("", "\n"), ("d", "")]
        );
    }

    #[test]
    fn lone_cr_before_crlf() {
        assert_eq!(split("a\r\r\n"), vec![("a", "\r"), ("", "\r\n"), ("", "")]);
    }

    #[test]
    fn numbers_and_offsets() {
        let lines: Vec<_> = source_lines("ab\r\ncd\ne").collect();
        let meta: Vec<_> = lines.iter().map(|l| (l.number, l.offset)).collect();
        assert_eq!(meta, vec![(1, 0), (2, 4), (3, 7)]);

        let last = source_lines("ab\n").last().unwrap();
        assert_eq!((last.number, last.offset, last.content), (2, 3, ""));
    }

    #[test]
    fn reassembly_is_lossless() {
        let text = " x \r\n\t\n\r\ny  \rz ";
        let rebuilt: String = source_lines(text)
            .map(|l| format!("{}{}", l.content, l.terminator))
            .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn multibyte_content_offsets_are_bytes() {
        let lines: Vec<_> = source_lines("é\nü").collect();
        assert_eq!(lines[1].offset, 3);
        assert_eq!(lines[1].content, "ü");
    }
}
