//! The macro front-ends, kept in their own file so their docs stay separate
//! from the crate root docs

/// Searches a text with a pattern literal, compiling the pattern only once.
///
/// ## Signature
/// ```ignore
/// research!(text: &'t str, pattern: <literal>) -> Research<'t>
/// ```
///
/// ## Parameters
/// * `text`: The string to search. Borrowed for the lifetime of the result,
///   never copied.
/// * `pattern`: A literal string. It has to be a literal because the compiled
///   regex is cached in a hidden `static` behind the call site, so the
///   pattern cannot change between invocations.
///
/// Returns: A [`Research`](crate::Research) over the whole text.
///
/// This is the loop-friendly version of [`research()`](crate::research):
/// the function recompiles its pattern on every call and reports a malformed
/// pattern as an error, while this macro compiles once per call site and
/// treats a malformed pattern literal as what it is, a programming error,
/// by panicking on first use.
///
/// ## Examples
/// ```
/// for line in ["10-4", "hello", "3-7"] {
///     let result = research::research!(line, r"(\d+)-(\d+)");
///     let first = result.matches().next();
///     match first {
///         Some(group) => println!("code {} {}", group.at(0).text(), group.at(1).text()),
///         None => println!("no code in {line}"),
///     }
/// }
/// ```
///
/// ## Panics
/// Panics if the pattern literal fails to compile, at the first call site
/// that uses it.
#[macro_export]
macro_rules! research {
    ($text:expr, $pattern:literal $(,)?) => {
        $crate::Research::new($crate::research_get_regex!($pattern), $text)
    };
}

/// Same as [`research!`], but returns the cached regex without running it.
///
/// ## Signature
/// ```ignore
/// research_get_regex!(pattern: <literal>) -> &'static Regex
/// ```
///
/// Useful when the same pattern also drives other regex calls, or together
/// with [`Research::with_bounds`](crate::Research::with_bounds), which has no
/// macro form.
///
/// ## Examples
/// ```
/// use research::{research_get_regex, Research};
///
/// let regex = research_get_regex!(r"\d+");
/// assert!(regex.is_match("around 10-4, over"));
///
/// let result = Research::with_bounds(regex, "around 10-4, over", 7..11);
/// assert_eq!(result.to_string(), "[10#0]-[4#0]");
/// ```
///
/// ## Panics
/// Panics if the pattern literal fails to compile, at the first call site
/// that uses it.
#[macro_export]
macro_rules! research_get_regex {
    ($pattern:literal $(,)?) => {{
        $crate::lazy_static::lazy_static! {
            static ref REGEX: $crate::regex::Regex = $crate::regex::Regex::new($pattern)
                .expect("research: the pattern literal failed to compile");
        }
        &*REGEX
    }};
}
