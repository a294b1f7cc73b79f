//! Line-level view of raw debug output.
//!
//! A [`Trace`] is the raw text split on `\n`. Segments are half-open index
//! ranges into it; lines are never reordered or rewritten in place.

use std::ops::Range;

/// Raw debug output split into lines
#[derive(Debug, Clone)]
pub struct Trace<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Trace<'a> {
    /// Split raw debug output on newlines.
    ///
    /// Carriage returns stay in place; [`clean_line`] removes them later.
    pub fn new(raw: &'a str) -> Self {
        Self {
            lines: raw.split('\n').collect(),
        }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the first line starting with `marker`, searching forward
    pub fn first_index_of(&self, marker: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.starts_with(marker))
    }

    /// Index of the last line starting with `marker`, searching backward
    pub fn last_index_of(&self, marker: &str) -> Option<usize> {
        self.lines.iter().rposition(|line| line.starts_with(marker))
    }

    /// Lines in `range` with `marker` stripped from the lines that carry it
    pub fn segment(&self, range: Range<usize>, marker: &'static str) -> Segment<'a> {
        Segment {
            marker,
            raw: self.lines[range].to_vec(),
        }
    }
}

/// A contiguous run of trace lines belonging to one side of the exchange
#[derive(Debug, Clone)]
pub struct Segment<'a> {
    marker: &'static str,
    raw: Vec<&'a str>,
}

impl<'a> Segment<'a> {
    /// Number of lines in the segment
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Iterate over segment lines as [`SegmentLine`]s, marker stripped and cleaned
    pub fn lines(&self) -> impl Iterator<Item = SegmentLine<'a>> + '_ {
        self.raw.iter().map(move |raw| {
            let raw: &'a str = raw;
            match raw.strip_prefix(self.marker) {
                Some(rest) => SegmentLine {
                    raw,
                    text: clean_line(rest),
                    marked: true,
                },
                None => SegmentLine {
                    raw,
                    text: clean_line(raw),
                    marked: false,
                },
            }
        })
    }
}

/// One cleaned line of a segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentLine<'a> {
    /// Line exactly as it appears in the trace
    pub raw: &'a str,

    /// Line text after marker stripping and [`clean_line`]
    pub text: String,

    /// Whether the raw line carried the segment marker
    pub marked: bool,
}

/// Undo the quoting the debug output wraps around wire data.
///
/// Removes every carriage return, then one leading and one trailing
/// double quote.
pub fn clean_line(line: &str) -> String {
    let line = line.replace('\r', "");
    let line = line.strip_prefix('"').unwrap_or(&line);
    line.strip_suffix('"').unwrap_or(line).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line_strips_quotes_and_carriage_returns() {
        assert_eq!(clean_line("\"HTTP/1.1 200 OK\r"), "HTTP/1.1 200 OK");
        assert_eq!(clean_line("Host: a\r"), "Host: a");
        assert_eq!(clean_line("\"{}\""), "{}");
    }

    #[test]
    fn test_clean_line_removes_only_one_quote_each_side() {
        assert_eq!(clean_line("\"\"quoted\"\""), "\"quoted\"");
        assert_eq!(clean_line("Etag: W/\"41-abc\"\r"), "Etag: W/\"41-abc");
    }

    #[test]
    fn test_clean_line_lone_quote_becomes_empty() {
        assert_eq!(clean_line("\""), "");
        assert_eq!(clean_line("\r"), "");
        assert_eq!(clean_line(""), "");
    }

    #[test]
    fn test_first_and_last_index() {
        let trace = Trace::new("a\nread 1 bytes\nb\nread 2 bytes\nc");

        assert_eq!(trace.len(), 5);
        assert_eq!(trace.first_index_of("read "), Some(1));
        assert_eq!(trace.last_index_of("read "), Some(3));
        assert_eq!(trace.first_index_of("-> "), None);
        assert_eq!(trace.last_index_of("-> "), None);
    }

    #[test]
    fn test_trace_keeps_carriage_returns() {
        let trace = Trace::new("one\r\ntwo\r\n");
        assert_eq!(trace.lines(), &["one\r", "two\r", ""]);
    }

    #[test]
    fn test_segment_strips_marker_only_where_present() {
        let trace = Trace::new("<- \"GET / HTTP/1.1\r\nHost: a\r\n\r\n\"\n-> \"x\"");
        let segment = trace.segment(0..4, "<- ");
        let lines: Vec<SegmentLine> = segment.lines().collect();

        assert_eq!(segment.len(), 4);
        assert_eq!(lines[0].text, "GET / HTTP/1.1");
        assert!(lines[0].marked);
        assert_eq!(lines[1].text, "Host: a");
        assert_eq!(lines[1].raw, "Host: a\r");
        assert!(!lines[1].marked);
        assert_eq!(lines[2].text, "");
        assert_eq!(lines[3].text, "");
    }

    #[test]
    fn test_marker_only_stripped_as_prefix() {
        let trace = Trace::new("<- \"a <- b\"");
        let lines: Vec<SegmentLine> = trace.segment(0..1, "<- ").lines().collect();
        assert_eq!(lines[0].text, "a <- b");
    }
}
