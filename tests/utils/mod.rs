//! Shared fixtures: fake editor installs and project package caches in temp dirs.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use unitydoc::roots::find_project_root_from;
use unitydoc::{DocLookup, LookupConfig};

/// Editor version the fixture installs docs for.
pub const VERSION: &str = "2022.3.10f1";

/// A temp directory holding `Editor/<version>/Documentation/en` and a `Project/`.
pub struct Fixture {
	temp: TempDir,
}

impl Fixture {
	pub fn new() -> Self {
		let fixture = Self {
			temp: TempDir::new().expect("tempdir"),
		};
		fs::create_dir_all(fixture.reference_dir()).expect("create ScriptReference");
		fs::create_dir_all(fixture.project_dir()).expect("create project");
		fixture
	}

	pub fn editor_dir(&self) -> PathBuf {
		self.temp.path().join("Editor")
	}

	pub fn doc_root(&self) -> PathBuf {
		self.editor_dir().join(VERSION).join("Documentation").join("en")
	}

	pub fn reference_dir(&self) -> PathBuf {
		self.doc_root().join("ScriptReference")
	}

	pub fn project_dir(&self) -> PathBuf {
		self.temp.path().join("Project")
	}

	pub fn config(&self) -> LookupConfig {
		LookupConfig::default().with_editor_dir(self.editor_dir())
	}

	/// Write `ScriptReference/<stem>.html`.
	pub fn core_page(&self, stem: &str, html: &str) -> PathBuf {
		let path = self.reference_dir().join(format!("{stem}.html"));
		fs::write(&path, html).expect("write core page");
		path
	}

	/// Write `Library/PackageCache/<package>/Documentation~/<file>`.
	pub fn package_page(&self, package: &str, file: &str, markdown: &str) -> PathBuf {
		let docs = self
			.project_dir()
			.join("Library")
			.join("PackageCache")
			.join(package)
			.join("Documentation~");
		fs::create_dir_all(&docs).expect("create package docs");
		let path = docs.join(file);
		fs::write(&path, markdown).expect("write package page");
		path
	}

	/// A lookup over the fixture, with package docs when a package cache exists.
	pub fn lookup(&self) -> DocLookup {
		let config = self.config();
		let project_root = find_project_root_from(&self.project_dir(), &config);
		DocLookup::new(config, self.doc_root()).with_project_root(project_root)
	}

	pub fn path(&self) -> &Path {
		self.temp.path()
	}
}

/// A reference page with the usual description block.
pub fn class_html(description: &str, members: &[&str]) -> String {
	let rows: String = members
		.iter()
		.map(|member| {
			format!(r#"<tr><td class="lbl"><a href="Class-{member}.html">{member}</a></td><td class="desc">About {member}.</td></tr>"#)
		})
		.collect::<Vec<_>>()
		.join("\n");
	format!(
		"<html><body><div class=\"content\">\n<h3>Description</h3>\n<p>{description}</p>\n<table class=\"list\">\n{rows}\n</table>\n</div></body></html>"
	)
}

/// A package page with a title, intro paragraph and properties table.
pub fn package_md(title: &str, intro: &str) -> String {
	format!(
		"# {title}\n\n{intro}\n\n## Properties\n\n| Property | Description |\n|---|---|\n| **Damping** | How quickly the camera catches up. |\n| Offset | Position offset from the target. |\n"
	)
}
