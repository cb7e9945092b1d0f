//! Percent-encoding for values interpolated into API paths.
//!
//! Dashboard slugs and datasource names come from users; a `/` or `?` in a
//! name must not change which resource a request addresses.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in a path segment (RFC 3986 section 3.3 plus
/// characters with URL or template meaning).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode `segment` for use as one URL path segment.
///
/// ```
/// use grafana_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("prod overview"), "prod%20overview");
/// assert_eq!(encode_path_segment("team/graphite"), "team%2Fgraphite");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_pass_through() {
        assert_eq!(encode_path_segment("production-overview"), "production-overview");
        assert_eq!(encode_path_segment("my_dash.v2"), "my_dash.v2");
    }

    #[test]
    fn test_encode_slash_and_query_chars() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("name?x=1"), "name%3Fx=1");
        assert_eq!(encode_path_segment("name#frag"), "name%23frag");
    }

    #[test]
    fn test_encode_percent_and_space() {
        assert_eq!(encode_path_segment("100%"), "100%25");
        assert_eq!(encode_path_segment("My Graphite"), "My%20Graphite");
    }

    #[test]
    fn test_encode_unicode() {
        assert_eq!(encode_path_segment("caf\u{00e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode_path_segment(""), "");
    }
}
