//! Reading NuGet packages
//! ----------------------
//!
//! A NuGet package (a `.nupkg` file) is a ZIP archive. Alongside the payload
//! it carries two kinds of bookkeeping entries: the manifest (a root-level
//! `.nuspec` XML document describing id, version, dependencies and the rest
//! of the package metadata) and the Open Packaging Conventions descriptor
//! `[Content_Types].xml`. Payload files live underneath a fixed vocabulary
//! of top-level folders (`lib`, `content`, `build`, `tools`, ...).
//!
//! This crate reads that layout:
//!
//! - [`package::Package`] wraps the archive and exposes its entry paths,
//!   manifest and raw entry bytes.
//! - [`entry_path::EntryPath`] splits one archive entry path and decides
//!   whether it is bookkeeping or user-visible content
//!   ([`entry_path::EntryPath::is_internal`]).
//! - [`contents`] orders the visible entries and folds them into a
//!   folder/file tree suitable for display.
//! - [`manifest::Nuspec`] is the parsed `.nuspec`, [`version`] the package
//!   version and version range handling, and [`locate`] finds an installed
//!   package on disk from its [`identity::PackageIdentity`].

#[macro_use]
extern crate serde_derive;

pub mod compare;
pub mod contents;
pub mod entry_path;
pub mod error;
pub mod identity;
pub mod known_folders;
pub mod locate;
pub mod manifest;
pub mod package;
pub mod version;
