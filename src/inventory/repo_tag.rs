// ABOUTME: Derives display name and tag from an engine repo-tag list.
// ABOUTME: Anything but a single `name:tag` pair falls back to "<none>".

/// Placeholder shown when an image has no usable repo-tag.
pub const NONE_PLACEHOLDER: &str = "<none>";

/// Split a `name:tag` string on its only colon.
///
/// Returns `None` when the string has no colon or more than one, so
/// `localhost:5000/app:v1` does not split.
pub fn split_repo_tag(repo_tag: &str) -> Option<(&str, &str)> {
    let mut parts = repo_tag.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(tag), None) => Some((name, tag)),
        _ => None,
    }
}

/// Name and tag for an image, taken from the first repo-tag only.
pub fn name_and_tag(repo_tags: &[String]) -> (String, String) {
    repo_tags
        .first()
        .and_then(|first| split_repo_tag(first))
        .map(|(name, tag)| (name.to_string(), tag.to_string()))
        .unwrap_or_else(|| (NONE_PLACEHOLDER.to_string(), NONE_PLACEHOLDER.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_colon_splits() {
        assert_eq!(split_repo_tag("myapp:v1"), Some(("myapp", "v1")));
        assert_eq!(split_repo_tag("org/app:latest"), Some(("org/app", "latest")));
    }

    #[test]
    fn empty_halves_still_split() {
        assert_eq!(split_repo_tag(":v1"), Some(("", "v1")));
        assert_eq!(split_repo_tag("app:"), Some(("app", "")));
    }

    #[test]
    fn registry_port_prevents_split() {
        assert_eq!(split_repo_tag("localhost:5000/app:v1"), None);
        assert_eq!(split_repo_tag("nginx"), None);
    }

    #[test]
    fn only_first_repo_tag_counts() {
        let (name, tag) = name_and_tag(&tags(&["registry:5000/app:v1", "app:v1"]));
        assert_eq!(name, NONE_PLACEHOLDER);
        assert_eq!(tag, NONE_PLACEHOLDER);

        let (name, tag) = name_and_tag(&tags(&["app:v1", "registry:5000/app:v1"]));
        assert_eq!((name.as_str(), tag.as_str()), ("app", "v1"));
    }

    #[test]
    fn no_repo_tags_gives_placeholder() {
        let (name, tag) = name_and_tag(&[]);
        assert_eq!(name, "<none>");
        assert_eq!(tag, "<none>");
    }
}
