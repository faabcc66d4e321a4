use percent_encoding::percent_decode_str;

/// Look up a cookie by exact name in a raw `Cookie` string (`a=1; b=2`).
///
/// Values are percent-decoded; a value that does not decode to UTF-8 is
/// returned as written. When the name appears more than once the first
/// occurrence wins, matching the browser's own ordering (most specific path
/// first), rather than treating the duplicate as absent.
#[must_use]
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| decode(value.trim()))
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map_or_else(|_| raw.to_string(), |value| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_exact_name() {
        assert_eq!(
            cookie_value("sessionid=xyz; csrftoken=abc123", "csrftoken"),
            Some("abc123".to_string())
        );
        assert_eq!(
            cookie_value("csrftoken=abc123", "csrftoken"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn missing_name_is_none() {
        assert_eq!(cookie_value("sessionid=xyz; theme=dark", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }

    #[test]
    fn prefix_and_suffix_names_do_not_match() {
        let cookies = "xcsrftoken=wrong; csrftoken_old=stale";
        assert_eq!(cookie_value(cookies, "csrftoken"), None);
    }

    #[test]
    fn value_may_contain_equals_and_escapes() {
        assert_eq!(
            cookie_value("csrftoken=a%20b=c", "csrftoken"),
            Some("a b=c".to_string())
        );
        assert_eq!(
            cookie_value("csrftoken=%FF%FE", "csrftoken"),
            Some("%FF%FE".to_string())
        );
    }

    #[test]
    fn first_duplicate_wins() {
        assert_eq!(
            cookie_value("csrftoken=first; csrftoken=second", "csrftoken"),
            Some("first".to_string())
        );
    }

    #[test]
    fn empty_value_is_present() {
        assert_eq!(cookie_value("csrftoken=; a=1", "csrftoken"), Some(String::new()));
    }
}
