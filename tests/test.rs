use regex::Regex;
use research::*;

#[test]
fn basic() {
    let input = "born 1987-06-05, hired 2011-01-30";
    let result = research(r"(\d{4})-(\d{2})-(\d{2})", input).unwrap();

    assert_eq!(result.len(), 4);
    assert_eq!(result.matches().count(), 2);
    assert_eq!(
        result.to_string(),
        "born [[1987#1]-[06#2]-[05#3]#0], hired [[2011#1]-[01#2]-[30#3]#0]"
    );

    let first = result.matches().next().unwrap();
    assert_eq!(first.text(), "1987-06-05");
    assert_eq!(first.span(), 5..15);
    assert_eq!(first.num_groups(), 3);
    assert_eq!(first.at(0).text(), "1987");
    assert_eq!(first.at(1).text(), "06");
    assert_eq!(first.at(2).text(), "05");

    let rebuilt: String = result.iter().map(Segment::text).collect();
    assert_eq!(rebuilt, input);
}

#[test]
fn adjacent_groups() {
    // (a)(b) on "ab": the whole match decomposes into the two groups with no
    // filler anywhere
    let result = research("(a)(b)", "ab").unwrap();
    assert_eq!(result.len(), 1);

    let group = result.matches().next().unwrap();
    assert_eq!(group.index(), 0);
    assert_eq!(group.text(), "ab");
    assert_eq!(group.children().len(), 2);
    assert_eq!(group.at(0).text(), "a");
    assert_eq!(group.at(0).index(), 1);
    assert_eq!(group.at(1).text(), "b");
    assert_eq!(group.at(1).index(), 2);
    assert_eq!(result.to_string(), "[[a#1][b#2]#0]");
}

#[test]
fn optional_group_skipped() {
    // the optional group takes no part in the match, so the match is a leaf
    let result = research("a(b)?c", "ac").unwrap();
    assert_eq!(result.len(), 1);

    let group = result.matches().next().unwrap();
    assert_eq!(group.text(), "ac");
    assert!(group.children().is_empty());
    assert_eq!(group.num_groups(), 0);
    assert_eq!(group.get(0), None);
    assert_eq!(group.group(1), None);
    assert_eq!(result.to_string(), "[ac#0]");
}

#[test]
fn raw_text_around_match() {
    let result = research("x", "yxz").unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result[0], Segment::Raw("y"));
    assert_eq!(result[1].text(), "x");
    assert!(result[1].as_group().is_some());
    assert_eq!(result[2], Segment::Raw("z"));
    assert_eq!(result.to_string(), "y[x#0]z");
}

#[test]
fn zero_width_only_matches() {
    // a* matches the empty string at every position; the driver absorbs all
    // of them and the text comes through untouched
    let result = research("a*", "b").unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0], Segment::Raw("b"));
    assert_eq!(result.matches().count(), 0);
}

#[test]
fn zero_width_between_real_matches() {
    // x* is zero-width on every 'a' but real on the 'x'
    let result = research("x*", "axa").unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result[0], Segment::Raw("a"));
    assert_eq!(result[1].text(), "x");
    assert_eq!(result[2], Segment::Raw("a"));
}

#[test]
fn word_boundaries_terminate() {
    let result = research(r"\b", "hi yo").unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0], Segment::Raw("hi yo"));
}

#[test]
fn empty_text() {
    let result = research("a", "").unwrap();
    assert!(result.is_empty());
    assert_eq!(result.len(), 0);
    assert_eq!(result.span(), 0..0);
    assert_eq!(result.to_string(), "");
}

#[test]
fn no_match_at_all() {
    let result = research("q", "yxz").unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0], Segment::Raw("yxz"));
}

#[test]
fn match_at_both_edges() {
    // no empty raw segments appear before the first or after the last match
    let result = research("a", "aba").unwrap();
    assert_eq!(result.len(), 3);
    assert!(result[0].as_group().is_some());
    assert_eq!(result[1], Segment::Raw("b"));
    assert!(result[2].as_group().is_some());
}

#[test]
fn alternation_alias() {
    // the taken branch spans the entire match, so 0, 1 and 2 collapse into
    // one node and the branch index wins the display
    let result = research("((a)|b)", "a").unwrap();
    let group = result.matches().next().unwrap();

    assert_eq!(group.indexes(), [0, 1, 2]);
    assert_eq!(group.index(), 1);
    assert!(group.children().is_empty());
    assert_eq!(result.to_string(), "[a#1]");
}

#[test]
fn alternation_other_branch() {
    let result = research("((a)|b)", "b").unwrap();
    let group = result.matches().next().unwrap();

    // group 2 sits in the untaken branch and leaves no trace
    assert_eq!(group.indexes(), [0, 1]);
    assert_eq!(group.index(), 1);
    assert_eq!(group.group(2), None);
}

#[test]
fn with_bounds_restricts_the_search() {
    let text = "around 10-4, over";
    let regex = Regex::new(r"\d+").unwrap();

    let result = Research::with_bounds(&regex, text, 7..11);
    assert_eq!(result.span(), 7..11);
    assert_eq!(result.to_string(), "[10#0]-[4#0]");

    let rebuilt: String = result.iter().map(Segment::text).collect();
    assert_eq!(rebuilt, &text[7..11]);

    // an empty range decomposes into nothing
    let result = Research::with_bounds(&regex, text, 3..3);
    assert!(result.is_empty());
}

#[test]
fn bounds_clip_a_would_be_match() {
    // the match that would start inside the bounds but end outside them is
    // invisible to the bounded search
    let regex = Regex::new("bcd").unwrap();
    let result = Research::with_bounds(&regex, "abcd", 0..3);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0], Segment::Raw("abc"));
}

#[test]
fn multibyte_text() {
    // zero-width stepping lands on char boundaries, not bytes
    let result = research("x*", "héllo").unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0], Segment::Raw("héllo"));

    let result = research("l+", "héllo").unwrap();
    assert_eq!(result.to_string(), "hé[ll#0]o");
    let rebuilt: String = result.iter().map(Segment::text).collect();
    assert_eq!(rebuilt, "héllo");
}

#[test]
fn iteration_and_indexing() {
    let result = research("a", "aba").unwrap();

    let via_iter: Vec<&Segment> = result.iter().collect();
    let via_into: Vec<&Segment> = (&result).into_iter().collect();
    assert_eq!(via_iter, via_into);

    assert_eq!(result.get(0), Some(&result[0]));
    assert_eq!(result.get(3), None);

    let mut texts = Vec::new();
    for segment in &result {
        texts.push(segment.text());
    }
    assert_eq!(texts, ["a", "b", "a"]);
}

#[test]
fn deep_group_lookup() {
    let result = research("((a)(b))c", "abc").unwrap();
    let group = result.matches().next().unwrap();

    assert_eq!(group.group(0), Some(group));
    assert_eq!(group.group(1).unwrap().text(), "ab");
    assert_eq!(group.group(2).unwrap().text(), "a");
    assert_eq!(group.group(3).unwrap().text(), "b");
    assert_eq!(group.group(4), None);
}

#[test]
fn pattern_error() {
    let error = research("(unclosed", "text").unwrap_err();
    assert!(error.to_string().contains("failed to compile"));

    use std::error::Error;
    assert!(error.source().is_some());
}

#[test]
fn cached_macro() {
    for (line, expected) in [("10-4", 2), ("hello", 0), ("3-7", 2)] {
        let result = research!(line, r"(\d+)-(\d+)");
        let groups = result.matches().map(Group::num_groups).sum::<usize>();
        assert_eq!(groups, expected);
    }
}

#[test]
fn cached_regex() {
    let regex = research_get_regex!(r"\d+");
    assert!(regex.is_match("10"));

    // the same literal at another call site compiles independently but
    // matches the same way
    let result = Research::new(regex, "a1b22c");
    assert_eq!(result.to_string(), "a[1#0]b[22#0]c");
}
