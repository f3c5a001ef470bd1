use std::fmt;
use std::ops::{Index, Range};

use regex::{CaptureLocations, Regex};

use crate::{Group, PatternError, Segment};

/// Searches `text` with `pattern` and returns the full decomposition.
///
/// This is the compile-and-go entry point: the pattern is compiled on every
/// call and a malformed pattern is the one error this can return. With a
/// pattern you already compiled (or want compiled once), use
/// [`Research::new`] or the [`research!`](crate::research!) macro instead.
///
/// ```
/// use research::research;
///
/// let result = research("x", "yxz").unwrap();
/// assert_eq!(result.to_string(), "y[x#0]z");
///
/// assert!(research("(unclosed", "yxz").is_err());
/// ```
pub fn research<'t>(pattern: &str, text: &'t str) -> Result<Research<'t>, PatternError> {
    let regex = Regex::new(pattern).map_err(|error| PatternError { error })?;
    Ok(Research::new(&regex, text))
}

/// The ordered decomposition of a searched text into matched and unmatched
/// segments.
///
/// A `Research` is what you get from running a regex over a whole text: every
/// match becomes a [`Group`] tree, every stretch between matches stays a raw
/// [`Segment`], and the two alternate in text order. Nothing is dropped:
/// concatenating the text of all segments reproduces the searched range
/// exactly, which is also what the [`Display`](std::fmt::Display) rendering
/// shows with the matches bracketed:
///
/// ```
/// use research::{research, Segment};
///
/// let result = research(r"t(h)e", "the cat in the hat").unwrap();
///
/// assert_eq!(result.to_string(), "[t[h#1]e#0] cat in [t[h#1]e#0] hat");
/// assert_eq!(result.matches().count(), 2);
/// assert_eq!(result[1], Segment::Raw(" cat in "));
///
/// let rebuilt: String = result.iter().map(Segment::text).collect();
/// assert_eq!(rebuilt, "the cat in the hat");
/// ```
///
/// Zero-width matches are absorbed: the search steps past them without
/// emitting a group, so a pattern like `a*` terminates and the skipped text
/// still comes out as raw segments.
///
/// ```
/// use research::research;
///
/// let result = research("a*", "b").unwrap();
/// assert_eq!(result.to_string(), "b");
/// assert_eq!(result.matches().count(), 0);
/// ```
///
/// A `Research` is immutable once built and borrows the searched text for
/// `'t`; it keeps no handle into the regex engine, so independent searches
/// are free to run on separate threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Research<'t> {
    segments: Vec<Segment<'t>>,
    span: Range<usize>,
}

impl<'t> Research<'t> {
    /// Searches the whole of `text` with a compiled regex.
    pub fn new(regex: &Regex, text: &'t str) -> Research<'t> {
        Research::with_bounds(regex, text, 0..text.len())
    }

    /// Searches `text` restricted to `bounds`.
    ///
    /// Text outside the bounds is invisible to the search: it is neither
    /// matched against nor emitted, and anchors and word boundaries see the
    /// bounded slice. The decomposition covers `text[bounds]` exactly.
    ///
    /// ## Panics
    /// Panics if the bounds are out of range or do not lie on `char`
    /// boundaries, the same misuses that make string slicing panic.
    #[track_caller]
    pub fn with_bounds(regex: &Regex, text: &'t str, bounds: Range<usize>) -> Research<'t> {
        let Range { start, end } = bounds;
        assert!(
            start <= end
                && end <= text.len()
                && text.is_char_boundary(start)
                && text.is_char_boundary(end),
            "research: bounds {start}..{end} do not lie on char boundaries of a text of {} bytes",
            text.len()
        );
        let haystack = &text[..end];
        let mut locations = regex.capture_locations();
        let mut segments = Vec::new();
        // `flushed` trails `scan`: stepping over a zero-width match advances
        // only `scan`, so the skipped text is still pending and no byte is
        // lost from the output.
        let mut flushed = start;
        let mut scan = start;
        let mut count: usize = 0;
        while let Some(whole) = regex.captures_read_at(&mut locations, haystack, scan) {
            count += 1;
            assert!(
                count <= end - start + 1,
                "research: {count} matches in a range of {} bytes means the regex engine is not advancing",
                end - start
            );
            if whole.start() == whole.end() {
                // zero-width: step over one char without emitting a group
                match haystack[whole.end()..].chars().next() {
                    Some(c) => scan = whole.end() + c.len_utf8(),
                    None => break,
                }
                continue;
            }
            if flushed < whole.start() {
                segments.push(Segment::Raw(&text[flushed..whole.start()]));
            }
            let spans = spans_in(&locations);
            segments.push(Segment::Group(Group::from_spans(text, &spans, 0).0));
            flushed = whole.end();
            scan = whole.end();
        }
        if flushed < end {
            segments.push(Segment::Raw(&text[flushed..end]));
        }
        Research {
            segments,
            span: start..end,
        }
    }

    /// Returns the byte range of `text` this decomposition covers.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the number of segments, raw and matched together.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the decomposition has no segments, which happens
    /// exactly when the searched range is empty.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segment at `position`, or `None` past the end.
    pub fn get(&self, position: usize) -> Option<&Segment<'t>> {
        self.segments.get(position)
    }

    /// Iterates over all segments in text order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment<'t>> {
        self.segments.iter()
    }

    /// Iterates over the matches only, dropping raw segments.
    pub fn matches(&self) -> impl Iterator<Item = &Group<'t>> {
        self.segments.iter().filter_map(Segment::as_group)
    }
}

impl<'t> Index<usize> for Research<'t> {
    type Output = Segment<'t>;

    fn index(&self, position: usize) -> &Self::Output {
        &self.segments[position]
    }
}

impl<'r, 't> IntoIterator for &'r Research<'t> {
    type Item = &'r Segment<'t>;
    type IntoIter = std::slice::Iter<'r, Segment<'t>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Renders every segment in order: raw text verbatim, matches in their
/// bracketed trace form. Diagnostic only, not a stable format.
impl fmt::Display for Research<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            segment.fmt(f)?;
        }
        Ok(())
    }
}

/// Flat span list of the most recent match in `locations`, `None` for groups
/// that did not participate.
fn spans_in(locations: &CaptureLocations) -> Vec<Option<Range<usize>>> {
    (0..locations.len())
        .map(|i| locations.get(i).map(|(start, end)| start..end))
        .collect()
}
