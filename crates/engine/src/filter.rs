use std::path::Path;

/// Suffix-based file selector.
///
/// A path matches when its file name ends with `.<ext>` for any configured
/// extension. Comparison is case sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Extensions may be given as `cpp` or `.cpp`; empty entries are dropped.
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        let suffixes = extensions
            .iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.'))
            .filter(|e| !e.is_empty())
            .map(|e| format!(".{e}"))
            .collect();
        Self { suffixes }
    }

    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_configured_suffixes() {
        let filter = ExtensionFilter::new(&["cpp", "hpp"]);
        assert!(filter.matches(Path::new("/proj/src/window.cpp")));
        assert!(filter.matches(Path::new("/proj/include/vec2.hpp")));
        assert!(!filter.matches(Path::new("/proj/src/notes.txt")));
        assert!(!filter.matches(Path::new("/proj/src/Makefile")));
    }

    #[test]
    fn leading_dot_is_optional() {
        let a = ExtensionFilter::new(&[".cpp"]);
        let b = ExtensionFilter::new(&["cpp"]);
        assert_eq!(a, b);
    }

    #[test]
    fn case_sensitive() {
        let filter = ExtensionFilter::new(&["cpp"]);
        assert!(!filter.matches(Path::new("MAIN.CPP")));
    }

    #[test]
    fn suffix_must_follow_a_dot() {
        let filter = ExtensionFilter::new(&["cpp"]);
        assert!(!filter.matches(Path::new("src/notcpp")));
        assert!(filter.matches(Path::new("src/archive.tar.cpp")));
    }

    #[test]
    fn empty_filter_matches_nothing() {
        let filter = ExtensionFilter::new(&["", "  "]);
        assert!(filter.is_empty());
        assert!(!filter.matches(Path::new("a.cpp")));
    }
}
