use std::fmt;
use std::ops::Range;

use regex::Captures;

/// One element of a decomposition: either a run of text the regex did not
/// capture, or a [`Group`] holding a capture and everything nested inside it.
///
/// Segments appear as the children of a [`Group`] and as the elements of a
/// [`Research`](crate::Research). In both places they tile their surrounding
/// range exactly: concatenating [`text()`](Segment::text) over consecutive
/// segments reproduces the covered text byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'t> {
    /// Text that no capture group claimed.
    Raw(&'t str),
    /// A capture group match, with its nested structure.
    Group(Group<'t>),
}

impl<'t> Segment<'t> {
    /// Returns the text covered by this segment, captured or not.
    pub fn text(&self) -> &'t str {
        match self {
            Segment::Raw(text) => text,
            Segment::Group(group) => group.text(),
        }
    }

    /// Returns the group, if this segment is one.
    pub fn as_group(&self) -> Option<&Group<'t>> {
        match self {
            Segment::Raw(_) => None,
            Segment::Group(group) => Some(group),
        }
    }

    /// Returns the text, if this segment is uncaptured filler.
    pub fn as_raw(&self) -> Option<&'t str> {
        match self {
            Segment::Raw(text) => Some(text),
            Segment::Group(_) => None,
        }
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Raw(text) => f.write_str(text),
            Segment::Group(group) => group.fmt(f),
        }
    }
}

/// The match of one capture group, arranged as a tree.
///
/// A regex engine reports a match as a flat list of spans, one per declared
/// capture group in declaration order, with index 0 covering the whole match.
/// The declaration order plus the guarantee that an inner group's span never
/// crosses its enclosing group's span is enough to reconstruct the nesting,
/// and that reconstruction is what a `Group` is: the node's own span and
/// text, the declared indexes that landed exactly on this span, and an
/// ordered list of [`Segment`] children that tile the span with nested
/// groups interleaved with the raw text between them.
///
/// Groups that did not participate in the match (`(x)?` that matched nothing,
/// the untaken branch of an alternation) do not appear anywhere in the tree.
///
/// Several declared indexes can share one span, for example in `((a))` or
/// when an alternation branch covers its entire enclosing group. Those
/// indexes are folded into a single node as aliases rather than stacked as
/// one-child chains; [`indexes()`](Group::indexes) lists all of them and
/// [`index()`](Group::index) picks the canonical one.
///
/// A `Group` is immutable once built. It owns its children and borrows
/// everything else from the searched text (the `'t` lifetime); it keeps no
/// handle into the regex engine.
///
/// ```
/// use research::research;
///
/// let result = research(r"(\d+)-(\d+)", "around 10-4, over").unwrap();
/// let group = result.matches().next().unwrap();
///
/// assert_eq!(group.text(), "10-4");
/// assert_eq!(group.span(), 7..11);
/// assert_eq!(group.at(0).text(), "10");
/// assert_eq!(group.at(1).text(), "4");
/// assert_eq!(group.to_string(), "[[10#1]-[4#2]#0]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'t> {
    span: Range<usize>,
    text: &'t str,
    indexes: Vec<usize>,
    children: Vec<Segment<'t>>,
}

impl<'t> Group<'t> {
    /// Builds the group tree for a single match.
    ///
    /// `text` must be the haystack the captures were produced from, since the
    /// reported spans are offsets into it. The tree is rooted at capture
    /// index 0, i.e. the whole match.
    ///
    /// This is the one-match counterpart to [`research`](crate::research):
    /// use it when you already drive the regex yourself and only want the
    /// tree for a match you have in hand.
    ///
    /// ```
    /// use research::Group;
    ///
    /// let regex = regex::Regex::new(r"(\w+)@(\w+)").unwrap();
    /// let captures = regex.captures("mail bob@example now").unwrap();
    /// let group = Group::from_captures("mail bob@example now", &captures);
    ///
    /// assert_eq!(group.text(), "bob@example");
    /// assert_eq!(group.at(0).text(), "bob");
    /// assert_eq!(group.at(1).text(), "example");
    /// ```
    pub fn from_captures(text: &'t str, captures: &Captures<'_>) -> Group<'t> {
        let spans = spans_of(captures);
        Group::from_spans(text, &spans, 0).0
    }

    /// Builds one node rooted at `index` from the flat span list of a match.
    ///
    /// Returns the node and the first declared index it did not consume, so
    /// that the caller can continue with the next sibling. The span at
    /// `index` must be participating.
    ///
    /// This is a single forward pass: declaration order puts every group
    /// after its parent and before its next sibling, so each index is
    /// examined exactly once and nesting falls out of span containment.
    pub(crate) fn from_spans(
        text: &'t str,
        spans: &[Option<Range<usize>>],
        index: usize,
    ) -> (Group<'t>, usize) {
        let span = spans[index]
            .clone()
            .expect("research: group tree rooted at a non-participating capture group");
        let mut indexes = vec![index];
        let mut children = Vec::new();
        let mut prev_end = span.start;
        let mut cursor = index + 1;
        while cursor < spans.len() {
            let reg = match &spans[cursor] {
                Some(reg) => reg.clone(),
                None => {
                    // did not participate in this match
                    cursor += 1;
                    continue;
                }
            };
            if reg.start >= span.end && reg.end > span.end {
                // belongs to a sibling or an ancestor
                break;
            }
            assert!(
                reg.start >= span.start && reg.end <= span.end,
                "research: capture group {cursor} at {reg:?} crosses enclosing group {index} at {span:?}"
            );
            if reg == span {
                indexes.push(cursor);
                cursor += 1;
                continue;
            }
            if prev_end < reg.start {
                children.push(Segment::Raw(&text[prev_end..reg.start]));
            }
            let (child, next) = Group::from_spans(text, spans, cursor);
            prev_end = child.span.end;
            cursor = next;
            children.push(Segment::Group(child));
        }
        if !children.is_empty() && prev_end < span.end {
            children.push(Segment::Raw(&text[prev_end..span.end]));
        }
        let group = Group {
            text: &text[span.clone()],
            span,
            indexes,
            children,
        };
        (group, cursor)
    }

    /// Returns the canonical capture index of this node.
    ///
    /// Usually the first declared index whose span is this node's span. The
    /// exception is index 0: "the whole match" is the least specific thing
    /// that can be said about a span, so if any declared group shares the
    /// whole-match span, that group's index is reported instead and 0 is only
    /// returned when no such alias exists.
    pub fn index(&self) -> usize {
        match self.indexes.as_slice() {
            [0, alias, ..] => *alias,
            [first, ..] => *first,
            [] => unreachable!("research: a group always holds its own index"),
        }
    }

    /// Returns every declared capture index whose span is exactly this
    /// node's span, in declaration order. Never empty.
    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }

    /// Returns the byte range of this group within the searched text.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the full matched text of this group, nested matches included.
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// Returns the child segments of this node in text order: nested groups
    /// interleaved with the raw text between them, together covering
    /// [`span()`](Group::span) exactly.
    ///
    /// A node without nested groups has no children at all; its content is
    /// only [`text()`](Group::text). Raw filler never appears on its own.
    pub fn children(&self) -> &[Segment<'t>] {
        &self.children
    }

    /// Iterates over the nested groups of this node, skipping raw filler.
    pub fn groups(&self) -> impl Iterator<Item = &Group<'t>> {
        self.children.iter().filter_map(Segment::as_group)
    }

    /// Returns the number of nested groups directly below this node.
    pub fn num_groups(&self) -> usize {
        self.groups().count()
    }

    /// Returns the nested group at the given position, counting groups only.
    ///
    /// Use this for groups that are known to participate whenever this node
    /// does. For the others, [`get()`](Group::get) returns an `Option`
    /// instead of panicking.
    ///
    /// ## Panics
    /// Panics if there are `position` or fewer nested groups.
    #[track_caller]
    pub fn at(&self, position: usize) -> &Group<'t> {
        match self.get(position) {
            Some(group) => group,
            None => panic!(
                "research: no nested group at position {position} in a group with {} nested groups",
                self.num_groups()
            ),
        }
    }

    /// Returns the nested group at the given position, counting groups only,
    /// or `None` if there are not that many.
    pub fn get(&self, position: usize) -> Option<&Group<'t>> {
        self.groups().nth(position)
    }

    /// Finds the node holding the declared capture index `index`, searching
    /// this node and everything below it.
    ///
    /// Returns `None` when the index is out of range for the pattern or its
    /// group did not participate in this match.
    pub fn group(&self, index: usize) -> Option<&Group<'t>> {
        if self.indexes.contains(&index) {
            return Some(self);
        }
        self.groups().find_map(|group| group.group(index))
    }
}

/// Renders the bracketed trace form `[<children-or-text>#<index>]`.
///
/// Purely diagnostic; the shape is not a stable format and has no parser.
impl fmt::Display for Group<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        if self.children.is_empty() {
            f.write_str(self.text)?;
        } else {
            for child in &self.children {
                child.fmt(f)?;
            }
        }
        write!(f, "#{}]", self.index())
    }
}

/// Extracts the flat span list of a match: one entry per declared capture
/// group in declaration order, `None` for non-participating groups, index 0
/// the whole match.
pub(crate) fn spans_of(captures: &Captures<'_>) -> Vec<Option<Range<usize>>> {
    (0..captures.len())
        .map(|i| captures.get(i).map(|m| m.start()..m.end()))
        .collect()
}
