use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped so an identifier stays a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Build the toggle route for a task, e.g. `/toggle/7/` for prefix `/toggle/`.
///
/// Returns `None` for `.` and `..`: URL resolution collapses those segments
/// whether or not they are percent-encoded, so no route can carry them.
#[must_use]
pub fn toggle_path(prefix: &str, task_id: &str) -> Option<String> {
    if matches!(task_id, "." | "..") {
        return None;
    }
    let segment = utf8_percent_encode(task_id, PATH_SEGMENT);
    Some(format!("{}/{segment}/", prefix.trim_end_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id() {
        assert_eq!(toggle_path("/toggle/", "7").as_deref(), Some("/toggle/7/"));
    }

    #[test]
    fn prefix_without_trailing_slash() {
        assert_eq!(toggle_path("/api/toggle", "42").as_deref(), Some("/api/toggle/42/"));
    }

    #[test]
    fn id_cannot_escape_segment() {
        assert_eq!(toggle_path("/toggle/", "../admin").as_deref(), Some("/toggle/..%2Fadmin/"));
        assert_eq!(toggle_path("/toggle/", "a b?c").as_deref(), Some("/toggle/a%20b%3Fc/"));
        assert_eq!(toggle_path("/toggle/", ".."), None);
        assert_eq!(toggle_path("/toggle/", "."), None);
    }

    #[test]
    fn dots_inside_an_id_are_kept() {
        assert_eq!(toggle_path("/toggle/", "v1.2").as_deref(), Some("/toggle/v1.2/"));
        assert_eq!(toggle_path("/toggle/", "...").as_deref(), Some("/toggle/.../"));
    }
}
