use nupkg::contents::ContentNode;
use nupkg::known_folders::KnownFolders;
use nupkg::package::Package;

use crate::debug_eprintln;
use crate::error::Result;

pub fn show(path: &str) -> Result<()> {
    let mut package = Package::open(path)?;
    let identity = package.identity()?;
    let known = KnownFolders::default();

    println!("Contents\n--------");
    println!("\nPackage: {} {}\n", identity.id, identity.version);

    let tree = package.content_tree(&known)?;
    if tree.is_empty() {
        println!("No content files.");
        return Ok(());
    }
    for node in &tree {
        render_node(node, 0);
    }
    Ok(())
}

fn render_node(node: &ContentNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        ContentNode::Folder(folder) => {
            println!("{}{}/", indent, folder.name);
            for child in &folder.children {
                render_node(child, depth + 1);
            }
        }
        ContentNode::File(file) => {
            println!("{}{}", indent, file.name);
            debug_eprintln!("entry: {}", file.path);
        }
    }
}
