//! The package manifest
//! --------------------
//!
//! Every package carries one root-level `<id>.nuspec` entry, an XML
//! document shaped like:
//!
//! ```xml
//! <package xmlns="http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd">
//!   <metadata minClientVersion="2.8">
//!     <id>Foo.Bar</id>
//!     <version>1.2.3-beta.1</version>
//!     <authors>Someone</authors>
//!     <description>...</description>
//!     <dependencies>
//!       <group targetFramework=".NETStandard2.0">
//!         <dependency id="Baz" version="[1.0.0, 2.0.0)" />
//!       </group>
//!     </dependencies>
//!   </metadata>
//! </package>
//! ```
//!
//! Older manifests list `<dependency>` elements directly under
//! `<dependencies>` (and `<reference>` directly under `<references>`)
//! with no framework groups; both forms parse here and normalize to
//! grouped form through the accessors. Field names follow the manifest
//! schema, hence the explicit renames.

use std::io::BufRead;

use crate::compare::eq_ignore_case;
use crate::error::Result;
use crate::identity::PackageIdentity;
use crate::version::{PackageVersion, VersionRange};

#[derive(Debug, Clone, Deserialize)]
pub struct Nuspec {
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    #[serde(rename = "@minClientVersion", default)]
    pub min_client_version: Option<String>,
    pub id: String,
    pub version: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub owners: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "releaseNotes", default)]
    pub release_notes: Option<String>,
    #[serde(rename = "projectUrl", default)]
    pub project_url: Option<String>,
    #[serde(rename = "iconUrl", default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(rename = "licenseUrl", default)]
    pub license_url: Option<String>,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(rename = "requireLicenseAcceptance", default)]
    pub require_license_acceptance: Option<bool>,
    #[serde(rename = "developmentDependency", default)]
    pub development_dependency: Option<bool>,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(rename = "packageTypes", default)]
    pub package_types: Option<PackageTypeList>,
    #[serde(default)]
    pub dependencies: Option<DependencyList>,
    #[serde(rename = "frameworkAssemblies", default)]
    pub framework_assemblies: Option<FrameworkAssemblyList>,
    #[serde(default)]
    pub references: Option<ReferenceList>,
}

/// `<license type="expression">MIT</license>` or
/// `<license type="file">LICENSE.txt</license>`.
#[derive(Debug, Clone, Deserialize)]
pub struct License {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Repository {
    #[serde(rename = "@type", default)]
    pub kind: Option<String>,
    #[serde(rename = "@url", default)]
    pub url: Option<String>,
    #[serde(rename = "@branch", default)]
    pub branch: Option<String>,
    #[serde(rename = "@commit", default)]
    pub commit: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageTypeList {
    #[serde(rename = "packageType", default)]
    pub items: Vec<PackageType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageType {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@version", default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependencyList {
    #[serde(rename = "group", default)]
    pub groups: Vec<DependencyGroup>,
    #[serde(rename = "dependency", default)]
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependencyGroup {
    #[serde(rename = "@targetFramework", default)]
    pub target_framework: Option<String>,
    #[serde(rename = "dependency", default)]
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Dependency {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@version", default)]
    pub version: Option<String>,
}

impl Dependency {
    /// The dependency's version range; a missing attribute means any
    /// version is acceptable.
    pub fn version_range(&self) -> Result<VersionRange> {
        match self.version {
            Some(ref version) => VersionRange::parse(version),
            None => Ok(VersionRange::all()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrameworkAssemblyList {
    #[serde(rename = "frameworkAssembly", default)]
    pub items: Vec<FrameworkAssembly>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrameworkAssembly {
    #[serde(rename = "@assemblyName")]
    pub assembly_name: String,
    /// Comma-separated list of frameworks, or absent for all frameworks.
    #[serde(rename = "@targetFramework", default)]
    pub target_framework: Option<String>,
}

/// Framework assembly references regrouped per framework for display.
#[derive(Debug, Clone)]
pub struct FrameworkAssemblyGroup {
    pub target_framework: Option<String>,
    pub assemblies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceList {
    #[serde(rename = "group", default)]
    pub groups: Vec<ReferenceGroup>,
    #[serde(rename = "reference", default)]
    pub references: Vec<Reference>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceGroup {
    #[serde(rename = "@targetFramework", default)]
    pub target_framework: Option<String>,
    #[serde(rename = "reference", default)]
    pub references: Vec<Reference>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    #[serde(rename = "@file")]
    pub file: String,
}

impl Nuspec {
    pub fn from_str(xml: &str) -> Result<Self> {
        Ok(quick_xml::de::from_str(xml)?)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(quick_xml::de::from_reader(reader)?)
    }

    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    /// The raw version string, as written in the manifest.
    pub fn version_str(&self) -> &str {
        &self.metadata.version
    }

    pub fn version(&self) -> Result<PackageVersion> {
        PackageVersion::parse(&self.metadata.version)
    }

    pub fn identity(&self) -> Result<PackageIdentity> {
        Ok(PackageIdentity::new(self.id(), self.version()?))
    }

    pub fn min_client_version(&self) -> Result<Option<PackageVersion>> {
        match self.metadata.min_client_version {
            Some(ref version) => Ok(Some(PackageVersion::parse(version)?)),
            None => Ok(None),
        }
    }

    pub fn development_dependency(&self) -> bool {
        self.metadata.development_dependency.unwrap_or(false)
    }

    pub fn require_license_acceptance(&self) -> bool {
        self.metadata.require_license_acceptance.unwrap_or(false)
    }

    /// Dependency groups in manifest order. A flat dependency list
    /// becomes a single group with no target framework; a manifest with
    /// no dependencies yields no groups.
    pub fn dependency_groups(&self) -> Vec<DependencyGroup> {
        let Some(ref list) = self.metadata.dependencies else {
            return Vec::new();
        };
        if !list.groups.is_empty() {
            return list.groups.clone();
        }
        if list.dependencies.is_empty() {
            return Vec::new();
        }
        vec![DependencyGroup {
            target_framework: None,
            dependencies: list.dependencies.clone(),
        }]
    }

    /// Framework assembly references grouped per target framework, in
    /// first-seen order. An assembly naming several frameworks (comma
    /// separated) lands in each of them.
    pub fn framework_assembly_groups(&self) -> Vec<FrameworkAssemblyGroup> {
        let Some(ref list) = self.metadata.framework_assemblies else {
            return Vec::new();
        };

        let mut groups: Vec<FrameworkAssemblyGroup> = Vec::new();
        for item in &list.items {
            let frameworks: Vec<Option<String>> = match item.target_framework {
                Some(ref frameworks) if !frameworks.trim().is_empty() => frameworks
                    .split(',')
                    .map(|f| Some(f.trim().to_string()))
                    .collect(),
                _ => vec![None],
            };
            for framework in frameworks {
                let group = groups.iter_mut().find(|g| {
                    match (&g.target_framework, &framework) {
                        (Some(a), Some(b)) => eq_ignore_case(a, b),
                        (None, None) => true,
                        _ => false,
                    }
                });
                match group {
                    Some(group) => group.assemblies.push(item.assembly_name.clone()),
                    None => groups.push(FrameworkAssemblyGroup {
                        target_framework: framework,
                        assemblies: vec![item.assembly_name.clone()],
                    }),
                }
            }
        }
        groups
    }

    /// Filtered assembly references, normalized to groups the same way as
    /// [`dependency_groups`](Self::dependency_groups).
    pub fn reference_groups(&self) -> Vec<ReferenceGroup> {
        let Some(ref list) = self.metadata.references else {
            return Vec::new();
        };
        if !list.groups.is_empty() {
            return list.groups.clone();
        }
        if list.references.is_empty() {
            return Vec::new();
        }
        vec![ReferenceGroup {
            target_framework: None,
            references: list.references.clone(),
        }]
    }

    pub fn package_types(&self) -> &[PackageType] {
        match self.metadata.package_types {
            Some(ref list) => &list.items,
            None => &[],
        }
    }

    /// Repository metadata, only when it actually names a type or url.
    pub fn repository(&self) -> Option<&Repository> {
        let repository = self.metadata.repository.as_ref()?;
        let has_kind = repository.kind.as_deref().is_some_and(|k| !k.is_empty());
        let has_url = repository.url.as_deref().is_some_and(|u| !u.is_empty());
        if has_kind || has_url {
            Some(repository)
        } else {
            None
        }
    }

    pub fn license(&self) -> Option<&License> {
        self.metadata.license.as_ref()
    }
}
