use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const NUSPEC_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd">
  <metadata>
    <id>Foo.Bar</id>
    <version>1.2.3</version>
    <authors>Jane Dev</authors>
    <description>A package used by the CLI tests.</description>
    <license type="expression">MIT</license>
    <dependencies>
      <group targetFramework=".NETStandard2.0">
        <dependency id="Newtonsoft.Json" version="[13.0.1, 14.0.0)" />
      </group>
    </dependencies>
  </metadata>
</package>"#;

fn npe() -> Command {
    Command::cargo_bin("npe").unwrap()
}

fn write_package(path: &Path, entries: &[(&str, &[u8])]) {
    let file = std::fs::File::create(path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, data) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap();
}

fn typical_package(dir: &Path) -> PathBuf {
    let path = dir.join("Foo.Bar.1.2.3.nupkg");
    write_package(
        &path,
        &[
            ("Foo.Bar.nuspec", NUSPEC_XML.as_bytes()),
            ("[Content_Types].xml", b"<Types/>"),
            ("_rels/.rels", b"<Relationships/>"),
            ("lib/net45/Foo.dll", b"MZ-not-really"),
            ("tools/install.ps1", b"Write-Host hi"),
            ("icon.png", b"\x89PNG"),
        ],
    );
    path
}

#[test]
fn test_show_contents() {
    let dir = tempfile::tempdir().unwrap();
    let package = typical_package(dir.path());

    npe()
        .arg("show")
        .arg("contents")
        .arg("-p")
        .arg(&package)
        .assert()
        .success()
        .stdout(predicate::str::contains("Contents"))
        .stdout(predicate::str::contains("Package: Foo.Bar 1.2.3"))
        .stdout(predicate::str::contains("lib/\n  net45/\n    Foo.dll"))
        .stdout(predicate::str::contains("tools/\n  install.ps1"))
        .stdout(predicate::str::contains("icon.png"))
        // Bookkeeping entries never show up.
        .stdout(predicate::str::contains(".nuspec").not())
        .stdout(predicate::str::contains("[Content_Types].xml").not())
        .stdout(predicate::str::contains("_rels").not());
}

#[test]
fn test_show_contents_empty_package() {
    let dir = tempfile::tempdir().unwrap();
    let package = dir.path().join("Foo.Bar.1.2.3.nupkg");
    write_package(
        &package,
        &[
            ("Foo.Bar.nuspec", NUSPEC_XML.as_bytes()),
            ("[Content_Types].xml", b"<Types/>"),
        ],
    );

    npe()
        .arg("show")
        .arg("contents")
        .arg("-p")
        .arg(&package)
        .assert()
        .success()
        .stdout(predicate::str::contains("No content files."));
}

#[test]
fn test_show_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let package = typical_package(dir.path());

    npe()
        .arg("show")
        .arg("metadata")
        .arg("-p")
        .arg(&package)
        .assert()
        .success()
        .stdout(predicate::str::contains("Id: Foo.Bar"))
        .stdout(predicate::str::contains("Version: 1.2.3"))
        .stdout(predicate::str::contains("Authors: Jane Dev"))
        .stdout(predicate::str::contains("License: MIT (expression)"))
        .stdout(predicate::str::contains("Require License Acceptance: false"))
        .stdout(predicate::str::contains("Dependencies"))
        .stdout(predicate::str::contains(".NETStandard2.0"))
        .stdout(predicate::str::contains(
            "Newtonsoft.Json (>= 13.0.1 && < 14.0.0)",
        ));
}

#[test]
fn test_show_dependencies() {
    let dir = tempfile::tempdir().unwrap();
    let package = typical_package(dir.path());

    npe()
        .arg("show")
        .arg("dependencies")
        .arg("-p")
        .arg(&package)
        .assert()
        .success()
        .stdout(predicate::str::contains("Package: Foo.Bar 1.2.3"))
        .stdout(predicate::str::contains(".NETStandard2.0"))
        .stdout(predicate::str::contains(
            "Newtonsoft.Json (>= 13.0.1 && < 14.0.0)",
        ));
}

#[test]
fn test_show_dependencies_none() {
    let dir = tempfile::tempdir().unwrap();
    let package = dir.path().join("Tiny.0.1.0.nupkg");
    write_package(
        &package,
        &[(
            "Tiny.nuspec",
            br#"<package><metadata>
                <id>Tiny</id><version>0.1.0</version>
                <authors>Someone</authors><description>Tiny.</description>
            </metadata></package>"#,
        )],
    );

    npe()
        .arg("show")
        .arg("dependencies")
        .arg("-p")
        .arg(&package)
        .assert()
        .success()
        .stdout(predicate::str::contains("No dependencies"));
}

#[test]
fn test_show_nuspec_prints_raw_xml() {
    let dir = tempfile::tempdir().unwrap();
    let package = typical_package(dir.path());

    npe()
        .arg("show")
        .arg("nuspec")
        .arg("-p")
        .arg(&package)
        .assert()
        .success()
        .stdout(predicate::str::contains("<id>Foo.Bar</id>"))
        .stdout(predicate::str::contains("<version>1.2.3</version>"));
}

#[test]
fn test_extract_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    let package = typical_package(dir.path());
    let out = tempfile::tempdir().unwrap();

    npe()
        .arg("extract")
        .arg("-p")
        .arg(&package)
        .arg("--file")
        .arg("lib/net45/Foo.dll")
        .arg("--destination")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted lib/net45/Foo.dll"));

    let written = out.path().join("Foo.dll");
    assert_eq!(std::fs::read(written).unwrap(), b"MZ-not-really");
}

#[test]
fn test_extract_to_explicit_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let package = typical_package(dir.path());
    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("renamed").join("install.ps1");

    npe()
        .arg("extract")
        .arg("-p")
        .arg(&package)
        .arg("--file")
        .arg("tools/install.ps1")
        .arg("--destination")
        .arg(&target)
        .assert()
        .success();

    assert_eq!(std::fs::read(target).unwrap(), b"Write-Host hi");
}

#[test]
fn test_extract_missing_entry_fails() {
    let dir = tempfile::tempdir().unwrap();
    let package = typical_package(dir.path());
    let out = tempfile::tempdir().unwrap();

    npe()
        .arg("extract")
        .arg("-p")
        .arg(&package)
        .arg("--file")
        .arg("lib/net45/Missing.dll")
        .arg("--destination")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("lib/net45/Missing.dll"));
}

#[test]
fn test_show_rejects_non_package_path() {
    npe()
        .arg("show")
        .arg("contents")
        .arg("-p")
        .arg("not-a-package.zip")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-package.zip"));
}

#[test]
fn test_show_requires_a_path() {
    npe()
        .arg("show")
        .arg("contents")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_locate_in_global_packages_folder() {
    let global = tempfile::tempdir().unwrap();
    let package_dir = global.path().join("foo.bar").join("1.2.3");
    std::fs::create_dir_all(&package_dir).unwrap();
    let archive = package_dir.join("foo.bar.1.2.3.nupkg");
    std::fs::write(&archive, b"").unwrap();

    npe()
        .env("NUGET_PACKAGES", global.path())
        .arg("locate")
        .arg("--id")
        .arg("Foo.Bar")
        .arg("--version")
        .arg("1.2.3")
        .assert()
        .success()
        .stdout(predicate::str::contains("foo.bar.1.2.3.nupkg"));
}

#[test]
fn test_locate_in_solution_packages_folder() {
    let empty_global = tempfile::tempdir().unwrap();
    let solution = tempfile::tempdir().unwrap();
    let package_dir = solution.path().join("Foo.Bar.1.2.3");
    std::fs::create_dir_all(&package_dir).unwrap();
    std::fs::write(package_dir.join("Foo.Bar.1.2.3.nupkg"), b"").unwrap();

    npe()
        .env("NUGET_PACKAGES", empty_global.path())
        .arg("locate")
        .arg("--id")
        .arg("Foo.Bar")
        .arg("--version")
        .arg("1.2.3")
        .arg("--packages-dir")
        .arg(solution.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Foo.Bar.1.2.3.nupkg"));
}

// A version range locates the version a package reference resolves to,
// its minimum bound.
#[test]
fn test_locate_with_version_range() {
    let global = tempfile::tempdir().unwrap();
    let package_dir = global.path().join("foo.bar").join("1.0.0");
    std::fs::create_dir_all(&package_dir).unwrap();
    std::fs::write(package_dir.join("foo.bar.1.0.0.nupkg"), b"").unwrap();

    npe()
        .env("NUGET_PACKAGES", global.path())
        .arg("locate")
        .arg("--id")
        .arg("Foo.Bar")
        .arg("--version")
        .arg("[1.0.0, 2.0.0)")
        .assert()
        .success()
        .stdout(predicate::str::contains("foo.bar.1.0.0.nupkg"));
}

#[test]
fn test_locate_miss_fails() {
    let empty_global = tempfile::tempdir().unwrap();

    npe()
        .env("NUGET_PACKAGES", empty_global.path())
        .arg("locate")
        .arg("--id")
        .arg("Foo.Bar")
        .arg("--version")
        .arg("9.9.9")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not installed"));
}

#[test]
fn test_locate_rejects_garbage_version() {
    npe()
        .arg("locate")
        .arg("--id")
        .arg("Foo.Bar")
        .arg("--version")
        .arg("not-a-version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid version or range"));
}
