use crate::IMAGE_EXTENSION;

const FILE_PREFIX: &str = "qrcode_";
const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Deterministic auto-save name: `qrcode_{fragment}.png`.
///
/// The fragment is the URL without its scheme, with separators, dots and
/// characters Windows forbids in file names replaced by `_`, cut to
/// `max_fragment_len` characters.
pub fn auto_save_filename(url: &str, max_fragment_len: usize) -> String {
    let fragment = sanitize_fragment(strip_scheme(url), max_fragment_len);
    format!("{FILE_PREFIX}{fragment}.{IMAGE_EXTENSION}")
}

fn strip_scheme(url: &str) -> &str {
    SCHEMES
        .iter()
        .find_map(|scheme| url.strip_prefix(scheme))
        .unwrap_or(url)
}

fn sanitize_fragment(input: &str, max_len: usize) -> String {
    input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .take(max_len)
        .collect()
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '.' | '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}' | '\u{7F}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_FRAGMENT_LEN;

    fn fragment_of(name: &str) -> &str {
        name.strip_prefix(FILE_PREFIX)
            .and_then(|rest| rest.strip_suffix(".png"))
            .expect("qrcode_*.png")
    }

    #[test]
    fn plain_domain() {
        assert_eq!(
            auto_save_filename("https://example.com", MAX_FRAGMENT_LEN),
            "qrcode_example_com.png"
        );
        assert_eq!(
            auto_save_filename("http://example.com", MAX_FRAGMENT_LEN),
            "qrcode_example_com.png"
        );
    }

    #[test]
    fn path_separators_and_dots_are_replaced() {
        let name = auto_save_filename("https://example.com/a/b.html", MAX_FRAGMENT_LEN);
        assert_eq!(name, "qrcode_example_com_a_b_html.png");
        let fragment = fragment_of(&name);
        assert!(!fragment.contains('/'));
        assert!(!fragment.contains('.'));
    }

    #[test]
    fn query_and_port_characters_are_replaced() {
        let name = auto_save_filename("https://host:8080/search?q=\"x\"|y", MAX_FRAGMENT_LEN);
        assert_eq!(name, "qrcode_host_8080_search_q=_x__y.png");
    }

    #[test]
    fn long_fragment_is_truncated() {
        let url = format!("https://{}.example.com/path", "sub".repeat(40));
        let name = auto_save_filename(&url, MAX_FRAGMENT_LEN);
        let fragment = fragment_of(&name);
        assert_eq!(fragment.chars().count(), MAX_FRAGMENT_LEN);
        assert!(fragment.starts_with("subsubsub"));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let url = format!("https://{}", "é".repeat(60));
        let name = auto_save_filename(&url, MAX_FRAGMENT_LEN);
        assert_eq!(fragment_of(&name), "é".repeat(50));
    }

    #[test]
    fn only_leading_scheme_is_stripped() {
        assert_eq!(
            auto_save_filename("https://a.io/?next=https://b.io", MAX_FRAGMENT_LEN),
            "qrcode_a_io__next=https___b_io.png"
        );
    }

    #[test]
    fn same_url_same_name() {
        let first = auto_save_filename("https://example.com/x", MAX_FRAGMENT_LEN);
        let second = auto_save_filename("https://example.com/x", MAX_FRAGMENT_LEN);
        assert_eq!(first, second);
    }
}
