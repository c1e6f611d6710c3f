//! End-to-end tests driving the `unitydoc` binary.
mod utils;

use assert_cmd::Command;
use predicates::prelude::*;
use unitydoc::EDITOR_DIR_ENV;
use utils::*;

fn unitydoc(fixture: &Fixture) -> Command {
	let mut cmd = Command::from(std::process::Command::new(env!("CARGO_BIN_EXE_unitydoc")));
	cmd.env(EDITOR_DIR_ENV, fixture.editor_dir())
		.env_remove("RUST_LOG")
		.env("NO_COLOR", "1")
		.current_dir(fixture.project_dir());
	cmd
}

#[test]
fn help_exits_zero() {
	let fixture = Fixture::new();
	unitydoc(&fixture)
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("--search"));
}

#[test]
fn no_arguments_prints_usage() {
	let fixture = Fixture::new();
	unitydoc(&fixture)
		.assert()
		.success()
		.stdout(predicate::str::contains("Usage"));
}

#[test]
fn class_lookup_prints_summary() {
	let fixture = Fixture::new();
	fixture.core_page("Transform", &class_html("Position, rotation and scale of an object.", &["position"]));

	unitydoc(&fixture)
		.arg("Transform")
		.assert()
		.success()
		.stdout(predicate::str::contains("=== Transform (Core Unity API) ==="))
		.stdout(predicate::str::contains("Description: Position, rotation and scale of an object."));
}

#[test]
fn unknown_class_exits_one() {
	let fixture = Fixture::new();
	unitydoc(&fixture)
		.arg("Nope")
		.assert()
		.code(1)
		.stdout(predicate::str::is_empty())
		.stderr(predicate::str::contains("Error: 'Nope' not found in Unity documentation or packages."))
		.stderr(predicate::str::contains("--search"));
}

#[test]
fn missing_doc_root_exits_one() {
	let fixture = Fixture::new();
	unitydoc(&fixture)
		.env(EDITOR_DIR_ENV, fixture.path().join("no-editors"))
		.arg("Transform")
		.assert()
		.code(1)
		.stderr(predicate::str::contains("Error: Unity documentation not found."))
		.stderr(predicate::str::contains("Expected at:"));
}

#[test]
fn search_without_term_exits_one() {
	let fixture = Fixture::new();
	unitydoc(&fixture)
		.arg("--search")
		.assert()
		.code(1)
		.stderr(predicate::str::contains("--search requires a term"));
}

#[test]
fn search_lists_core_and_package_matches() {
	let fixture = Fixture::new();
	for stem in ["Input", "InputField", "TouchInputModule", "30_InputLegacy"] {
		fixture.core_page(stem, "<html></html>");
	}
	fixture.package_page("com.unity.inputsystem@1.7.0", "InputActions.md", "# Input Actions\n");

	unitydoc(&fixture)
		.args(["--search", "Input"])
		.assert()
		.success()
		.stdout(predicate::str::contains("=== Core Unity API (3 matches) ==="))
		.stdout(predicate::str::contains("=== Package Documentation (1 matches) ==="))
		.stdout(predicate::str::contains("  InputActions (com.unity.inputsystem@1.7.0)"))
		.stdout(predicate::str::contains("30_InputLegacy").not());
}

#[test]
fn search_without_matches_is_not_an_error() {
	let fixture = Fixture::new();
	unitydoc(&fixture)
		.args(["--search", "Zzyzx"])
		.assert()
		.success()
		.stdout("No matches found for 'Zzyzx'\n");
}

#[test]
fn package_docs_found_from_nested_directory() {
	let fixture = Fixture::new();
	fixture.package_page(
		"com.unity.cinemachine@3.1.0",
		"CinemachineCamera.md",
		&package_md("Cinemachine Camera", "The main camera component."),
	);
	let nested = fixture.project_dir().join("Assets").join("Scripts");
	std::fs::create_dir_all(&nested).unwrap();

	unitydoc(&fixture)
		.current_dir(&nested)
		.arg("CinemachineCamera")
		.assert()
		.success()
		.stdout(predicate::str::contains("Found in package: com.unity.cinemachine@3.1.0"))
		.stdout(predicate::str::contains("The main camera component."));
}
