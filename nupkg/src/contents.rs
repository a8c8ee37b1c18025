//! Ordering and grouping of visible package entries into a display tree.
//!
//! The flat entry-path list an archive yields is not what a user should
//! see: content folders come first, names compare case-insensitively, and
//! entries sharing a directory prefix collapse onto one folder node. This
//! module owns that policy. Callers filter with
//! [`EntryPath::is_internal`](crate::entry_path::EntryPath::is_internal)
//! first, [`sort_for_display`] the survivors, then fold them into nodes
//! with [`build_content_tree`]. The whole pass is pure and deterministic:
//! the same entry list always produces the same tree.

use std::cmp::Ordering;

use crate::compare::{compare_ignore_case, eq_ignore_case};
use crate::entry_path::EntryPath;

/// A node in the rendered content tree, either a file or a folder.
#[derive(Debug, Clone)]
pub enum ContentNode {
    File(FileNode),
    Folder(FolderNode),
}

/// A leaf node. `path` is the full archive entry path, kept so a consumer
/// can resolve "open this file" back to the archive; `name` is the label
/// to display (the base name, or the full path for a root-level file).
#[derive(Debug, Clone)]
pub struct FileNode {
    pub name: String,
    pub path: String,
}

/// A folder node with its ordered children.
#[derive(Debug, Clone)]
pub struct FolderNode {
    pub name: String,
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    pub fn name(&self) -> &str {
        match *self {
            ContentNode::File(ref file) => &file.name,
            ContentNode::Folder(ref folder) => &folder.name,
        }
    }

    /// Full archive entry path; present on files only.
    pub fn path(&self) -> Option<&str> {
        match *self {
            ContentNode::File(ref file) => Some(&file.path),
            ContentNode::Folder(_) => None,
        }
    }

    pub fn children(&self) -> &[ContentNode] {
        match *self {
            ContentNode::File(_) => &[],
            ContentNode::Folder(ref folder) => &folder.children,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(*self, ContentNode::Folder(_))
    }

    fn is_folder_named(&self, name: &str) -> bool {
        match *self {
            ContentNode::Folder(ref folder) => eq_ignore_case(&folder.name, name),
            ContentNode::File(_) => false,
        }
    }
}

/// Display order for two entries: everything under a root folder sorts
/// ahead of root-level bare files, and within each of those groups entries
/// order by case-insensitive comparison of the full path.
pub fn compare_for_display(a: &EntryPath, b: &EntryPath) -> Ordering {
    match (a.has_root_folder(), b.has_root_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_ignore_case(a.raw(), b.raw()),
    }
}

/// Sorts entries into display order. Idempotent; ties between equal paths
/// keep their input order.
pub fn sort_for_display(entries: &mut [EntryPath]) {
    entries.sort_by(compare_for_display);
}

/// Folds a sorted, pre-filtered entry list into a content tree.
///
/// One pass over the entries:
///
/// - a root-level bare file becomes a leaf in the root list, labelled with
///   its full path;
/// - a nested file walks its directory segments, finding or creating one
///   folder per segment by case-insensitive name match (first match wins,
///   new folders append at the end, so folders keep first-discovery order
///   and first-seen casing), then appends a leaf labelled with its base
///   name.
///
/// Directory placeholder entries (trailing slash, empty base name)
/// contribute nothing. Duplicate paths produce duplicate leaves.
pub fn build_content_tree(entries: &[EntryPath]) -> Vec<ContentNode> {
    let mut roots: Vec<ContentNode> = Vec::new();

    for entry in entries {
        if entry.file_name().is_empty() {
            continue;
        }

        if !entry.has_root_folder() {
            roots.push(ContentNode::File(FileNode {
                name: entry.raw().to_string(),
                path: entry.raw().to_string(),
            }));
            continue;
        }

        let mut level = &mut roots;
        for directory in entry.directories() {
            let position = level
                .iter()
                .position(|node| node.is_folder_named(directory));
            let index = match position {
                Some(index) => index,
                None => {
                    level.push(ContentNode::Folder(FolderNode {
                        name: directory.clone(),
                        children: Vec::new(),
                    }));
                    level.len() - 1
                }
            };
            level = match level[index] {
                ContentNode::Folder(ref mut folder) => &mut folder.children,
                // is_folder_named never matches a file node
                ContentNode::File(_) => unreachable!(),
            };
        }

        level.push(ContentNode::File(FileNode {
            name: entry.file_name().to_string(),
            path: entry.raw().to_string(),
        }));
    }

    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::known_folders::KnownFolders;

    fn entries(paths: &[&str]) -> Vec<EntryPath> {
        paths
            .iter()
            .map(|p| EntryPath::new(*p).unwrap())
            .collect()
    }

    fn visible(paths: &[&str]) -> Vec<EntryPath> {
        let known = KnownFolders::default();
        let mut list: Vec<EntryPath> = entries(paths)
            .into_iter()
            .filter(|e| !e.is_internal(&known))
            .collect();
        sort_for_display(&mut list);
        list
    }

    #[test]
    fn test_folder_rooted_entries_sort_first() {
        let mut list = entries(&["zzz.txt", "lib/aaa.dll", "icon.png"]);
        sort_for_display(&mut list);
        let raw: Vec<&str> = list.iter().map(EntryPath::raw).collect();
        assert_eq!(raw, ["lib/aaa.dll", "icon.png", "zzz.txt"]);
    }

    #[test]
    fn test_sort_is_case_insensitive_and_idempotent() {
        let mut list = entries(&["lib/B.dll", "lib/a.dll", "LIB/c.dll"]);
        sort_for_display(&mut list);
        let once: Vec<String> = list.iter().map(|e| EntryPath::raw(e).to_string()).collect();
        assert_eq!(once, ["lib/a.dll", "lib/B.dll", "LIB/c.dll"]);

        sort_for_display(&mut list);
        let twice: Vec<String> = list.iter().map(|e| EntryPath::raw(e).to_string()).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_case_insensitive_folder_merge_keeps_first_seen_casing() {
        let list = visible(&["Lib/a.dll", "lib/b.dll"]);
        let tree = build_content_tree(&list);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name(), "Lib");
        let children = tree[0].children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name(), "a.dll");
        assert_eq!(children[1].name(), "b.dll");
    }

    #[test]
    fn test_typical_package_layout() {
        let known = KnownFolders::default();
        let all = entries(&[
            "package.nuspec",
            "[Content_Types].xml",
            "lib/net45/Foo.dll",
            "icon.png",
        ]);
        let internal: Vec<&str> = all
            .iter()
            .filter(|e| e.is_internal(&known))
            .map(EntryPath::raw)
            .collect();
        assert_eq!(internal, ["package.nuspec", "[Content_Types].xml"]);

        let list = visible(&[
            "package.nuspec",
            "[Content_Types].xml",
            "lib/net45/Foo.dll",
            "icon.png",
        ]);
        let tree = build_content_tree(&list);

        assert_eq!(tree.len(), 2);
        // Folder-rooted content is listed ahead of the root-level file.
        assert_eq!(tree[0].name(), "lib");
        let net45 = &tree[0].children()[0];
        assert_eq!(net45.name(), "net45");
        assert_eq!(net45.children()[0].name(), "Foo.dll");
        assert_eq!(net45.children()[0].path(), Some("lib/net45/Foo.dll"));

        assert_eq!(tree[1].name(), "icon.png");
        assert_eq!(tree[1].path(), Some("icon.png"));
    }

    #[test]
    fn test_leaves_order_by_full_path_within_folder() {
        let list = visible(&["tools/install.ps1", "TOOLS/uninstall.ps1"]);
        let tree = build_content_tree(&list);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name(), "tools");
        let names: Vec<&str> = tree[0].children().iter().map(ContentNode::name).collect();
        assert_eq!(names, ["install.ps1", "uninstall.ps1"]);
    }

    #[test]
    fn test_unknown_folder_filters_to_empty_tree() {
        let list = visible(&["random/readme.txt"]);
        assert!(list.is_empty());
        assert!(build_content_tree(&list).is_empty());
    }

    #[test]
    fn test_duplicate_paths_produce_duplicate_leaves() {
        let list = visible(&["lib/a.dll", "lib/a.dll"]);
        let tree = build_content_tree(&list);

        assert_eq!(tree.len(), 1);
        let names: Vec<&str> = tree[0].children().iter().map(ContentNode::name).collect();
        assert_eq!(names, ["a.dll", "a.dll"]);
    }

    #[test]
    fn test_directory_placeholder_contributes_nothing() {
        let list = visible(&["lib/", "lib/net45/Foo.dll"]);
        let tree = build_content_tree(&list);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name(), "lib");
        assert_eq!(tree[0].children().len(), 1);
        assert_eq!(tree[0].children()[0].name(), "net45");
    }

    #[test]
    fn test_file_and_folder_may_share_a_name() {
        // A root-level file named like a folder must not swallow the
        // folder's children, and vice versa.
        let list = visible(&["readme", "lib/readme"]);
        let tree = build_content_tree(&list);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].name(), "lib");
        assert_eq!(tree[0].children()[0].name(), "readme");
        assert_eq!(tree[1].name(), "readme");
        assert!(!tree[1].is_folder());
    }

    #[test]
    fn test_empty_input_builds_empty_tree() {
        assert!(build_content_tree(&[]).is_empty());
    }

    #[test]
    fn test_folder_nodes_are_reused_across_entries() {
        let list = visible(&["lib/net45/a.dll", "lib/net45/b.dll", "lib/net46/a.dll"]);
        let tree = build_content_tree(&list);

        assert_eq!(tree.len(), 1);
        let lib = &tree[0];
        assert_eq!(lib.children().len(), 2);
        assert_eq!(lib.children()[0].name(), "net45");
        assert_eq!(lib.children()[0].children().len(), 2);
        assert_eq!(lib.children()[1].name(), "net46");
        assert_eq!(lib.children()[1].children().len(), 1);
    }
}
