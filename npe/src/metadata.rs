use nupkg::manifest::Nuspec;
use nupkg::package::Package;

use crate::error::Result;

pub fn show(path: &str) -> Result<()> {
    let mut package = Package::open(path)?;
    let nuspec = package.nuspec()?;

    println!("Metadata\n--------\n");
    print_value("Id", Some(nuspec.id()));
    print_value("Version", Some(nuspec.version_str()));
    print_optional("Title", &nuspec.metadata.title);
    print_optional("Authors", &nuspec.metadata.authors);
    print_optional("Owners", &nuspec.metadata.owners);
    print_optional("Tags", &nuspec.metadata.tags);
    show_package_types(&nuspec);
    print_optional("Language", &nuspec.metadata.language);
    print_optional("Copyright", &nuspec.metadata.copyright);
    show_license(&nuspec);
    print_optional("Project Page", &nuspec.metadata.project_url);
    print_optional("Icon", &nuspec.metadata.icon_url);
    println!(
        "Require License Acceptance: {}",
        nuspec.require_license_acceptance()
    );
    println!("Development Dependency: {}", nuspec.development_dependency());
    if let Some(version) = nuspec.min_client_version()? {
        println!("Minimum Client Version: {}", version.to_normalized_string());
    }
    print_optional("Summary", &nuspec.metadata.summary);
    print_optional("Description", &nuspec.metadata.description);
    print_optional("Release Notes", &nuspec.metadata.release_notes);
    show_repository(&nuspec);

    println!("\nDependencies");
    show_dependency_groups(&nuspec)?;
    show_framework_references(&nuspec);
    show_filtered_references(&nuspec);
    Ok(())
}

pub fn show_dependencies(path: &str) -> Result<()> {
    let mut package = Package::open(path)?;
    let nuspec = package.nuspec()?;

    println!("Dependencies\n------------");
    println!("\nPackage: {} {}\n", nuspec.id(), nuspec.version_str());
    show_dependency_groups(&nuspec)
}

pub fn show_nuspec(path: &str) -> Result<()> {
    let mut package = Package::open(path)?;
    println!("{}", package.nuspec_xml()?);
    Ok(())
}

fn show_dependency_groups(nuspec: &Nuspec) -> Result<()> {
    let groups = nuspec.dependency_groups();
    if groups.is_empty() {
        println!("  No dependencies");
        return Ok(());
    }

    for group in &groups {
        let indent = match group.target_framework {
            Some(ref framework) => {
                println!("  {}", framework);
                "    "
            }
            None => "  ",
        };
        if group.dependencies.is_empty() {
            println!("{}No dependencies", indent);
            continue;
        }
        for dependency in &group.dependencies {
            let pretty = dependency.version_range()?.to_pretty_string();
            if pretty.is_empty() {
                println!("{}{}", indent, dependency.id);
            } else {
                println!("{}{} {}", indent, dependency.id, pretty);
            }
        }
    }
    Ok(())
}

fn show_framework_references(nuspec: &Nuspec) {
    let groups = nuspec.framework_assembly_groups();
    if groups.is_empty() {
        return;
    }

    println!("\nFramework Assembly References");
    for group in &groups {
        match group.target_framework {
            Some(ref framework) => {
                println!("  {}", framework);
                for assembly in &group.assemblies {
                    println!("    {}", assembly);
                }
            }
            None => {
                for assembly in &group.assemblies {
                    println!("  {}", assembly);
                }
            }
        }
    }
}

fn show_filtered_references(nuspec: &Nuspec) {
    let groups = nuspec.reference_groups();
    if groups.is_empty() {
        return;
    }

    println!("\nReferences");
    for group in &groups {
        match group.target_framework {
            Some(ref framework) => {
                println!("  {}", framework);
                for reference in &group.references {
                    println!("    {}", reference.file);
                }
            }
            None => {
                for reference in &group.references {
                    println!("  {}", reference.file);
                }
            }
        }
    }
}

fn show_package_types(nuspec: &Nuspec) {
    let types = nuspec.package_types();
    if types.is_empty() {
        return;
    }
    let items: Vec<String> = types
        .iter()
        .map(|t| match t.version {
            Some(ref version) if !version.is_empty() => format!("{} {}", t.name, version),
            _ => t.name.clone(),
        })
        .collect();
    println!("Package Type: {}", items.join(", "));
}

// License metadata wins over the legacy licenseUrl element.
fn show_license(nuspec: &Nuspec) {
    if let Some(license) = nuspec.license() {
        match license.value {
            Some(ref value) if !value.is_empty() => {
                println!("License: {} ({})", value, license.kind)
            }
            _ => println!("License: ({})", license.kind),
        }
        return;
    }
    print_optional("License", &nuspec.metadata.license_url);
}

fn show_repository(nuspec: &Nuspec) {
    let repository = match nuspec.repository() {
        Some(repository) => repository,
        None => return,
    };
    println!("Repository");
    print_optional("  Type", &repository.kind);
    print_optional("  Url", &repository.url);
    print_optional("  Branch", &repository.branch);
    print_optional("  Commit", &repository.commit);
}

fn print_value(name: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            println!("{}: {}", name, value);
        }
    }
}

fn print_optional(name: &str, value: &Option<String>) {
    print_value(name, value.as_deref());
}
