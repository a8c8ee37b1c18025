//! Example of inspecting a NuGet package archive
//!
//! This example opens a `.nupkg` file, prints the manifest metadata and
//! dependency groups, and walks the visible content tree the same way a
//! package viewer would render it.

use nupkg::contents::ContentNode;
use nupkg::known_folders::KnownFolders;
use nupkg::package::Package;
use std::path::Path;

fn list_children(nodes: &[ContentNode], depth: usize) {
    let indent = "  ".repeat(depth + 1);
    for node in nodes {
        match node {
            ContentNode::File(file) => {
                println!("{}{}", indent, file.name);
            }
            ContentNode::Folder(folder) => {
                println!("{}{}/", indent, folder.name);
                list_children(&folder.children, depth + 1);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let package_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./tests/fixtures/Foo.Bar.1.2.3.nupkg".to_string());

    println!("🔍 Loading package from: {}", package_path);
    println!("{}", "=".repeat(60));

    if !Path::new(&package_path).exists() {
        println!("❌ Package file not found!");
        return Ok(());
    }

    let mut package = Package::open(&package_path)?;
    let nuspec = package.nuspec()?;

    println!("Id:      {}", nuspec.id());
    println!("Version: {}", nuspec.version_str());
    if let Some(description) = &nuspec.metadata.description {
        println!("About:   {}", description);
    }

    let groups = nuspec.dependency_groups();
    if !groups.is_empty() {
        println!("\nDependencies:");
        for group in &groups {
            if let Some(framework) = &group.target_framework {
                println!("  {}", framework);
            }
            for dependency in &group.dependencies {
                match dependency.version_range() {
                    Ok(range) => println!("    {} {}", dependency.id, range.to_pretty_string()),
                    Err(_) => println!("    {}", dependency.id),
                }
            }
        }
    }

    println!("\nContents:");
    let tree = package.content_tree(&KnownFolders::default())?;
    list_children(&tree, 0);

    Ok(())
}
