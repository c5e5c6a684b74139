//! URI composition for nested resources

/// Separator between URI segments
pub const SEPARATOR: char = '/';

/// Join a base URI and path segments with a single separator each
///
/// Segments are neither validated, escaped nor collapsed: identifiers must
/// already be URL-safe, and an empty segment yields a trailing separator.
///
/// ```
/// use telephony_api::locator::join;
///
/// assert_eq!(join("calls/c-1", ["events", "e-1"]), "calls/c-1/events/e-1");
/// assert_eq!(join("calls/c-1", [""]), "calls/c-1/");
/// ```
pub fn join<I, S>(base: &str, segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut uri = String::from(base);
    for segment in segments {
        uri.push(SEPARATOR);
        uri.push_str(segment.as_ref());
    }
    uri
}
