use crate::compare::eq_ignore_case;

/// The set of top-level folder names the package format recognizes as
/// payload. Entries rooted anywhere else are treated as bookkeeping and
/// hidden from content listings.
///
/// The set is data, not code: the format grows new folder names over time
/// (`contentFiles` and `ref` arrived well after `lib`), so callers that
/// track a newer vocabulary can build their own set with
/// [`KnownFolders::new`]. [`KnownFolders::default`] carries the current
/// snapshot. Membership tests are case-insensitive.
#[derive(Debug, Clone)]
pub struct KnownFolders {
    names: Vec<String>,
}

impl KnownFolders {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KnownFolders {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|known| eq_ignore_case(known, name))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for KnownFolders {
    fn default() -> Self {
        KnownFolders::new([
            "content",
            "contentFiles",
            "build",
            "buildCrossTargeting",
            "tools",
            "lib",
            "native",
            "runtimes",
            "ref",
            "analyzers",
            "source",
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_contains_payload_folders() {
        let known = KnownFolders::default();
        assert!(known.contains("lib"));
        assert!(known.contains("contentFiles"));
        assert!(known.contains("ref"));
        assert!(!known.contains("random"));
        assert!(!known.contains("_rels"));
    }

    #[test]
    fn test_membership_is_case_insensitive() {
        let known = KnownFolders::default();
        assert!(known.contains("LIB"));
        assert!(known.contains("Tools"));
        assert!(known.contains("CONTENTFILES"));
    }

    #[test]
    fn test_custom_set() {
        let known = KnownFolders::new(["lib", "plugins"]);
        assert!(known.contains("plugins"));
        assert!(!known.contains("tools"));
    }
}
