//! Runs the `vitae` binary against temporary preference files.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn store(&self) -> PathBuf {
        self.dir.path().join("preferences.json")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_vitae"))
            .arg("--store")
            .arg(self.store())
            .args(args)
            .env_remove("VITAE_STORE")
            .env_remove("VITAE_CONTENT")
            .env_remove("VITAE_TEMPLATES")
            .env_remove("VITAE_COLOR_SCHEME")
            .env_remove("CLICOLOR_FORCE")
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "vitae {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }
}

fn stored_theme(path: &Path) -> Option<String> {
    let raw = std::fs::read_to_string(path).ok()?;
    let json: serde_json::Value = serde_json::from_str(&raw).ok()?;
    json.get("theme")?.as_str().map(str::to_string)
}

#[test]
fn theme_show_follows_system_without_writing() {
    let fx = Fixture::new();
    let out = fx.stdout(&["--system", "dark", "theme"]);
    assert_eq!(out.trim(), "dark (from system)");
    assert!(!fx.store().exists());
}

#[test]
fn toggle_is_remembered_across_runs() {
    let fx = Fixture::new();
    let out = fx.stdout(&["--system", "light", "theme", "toggle"]);
    assert_eq!(out.trim(), "dark (saved)");
    assert_eq!(stored_theme(&fx.store()).as_deref(), Some("dark"));

    let out = fx.stdout(&["--system", "light", "theme", "show"]);
    assert_eq!(out.trim(), "dark (saved)");

    let out = fx.stdout(&["--system", "light", "theme", "toggle"]);
    assert_eq!(out.trim(), "light (saved)");
    assert_eq!(stored_theme(&fx.store()).as_deref(), Some("light"));
}

#[test]
fn reset_returns_to_system() {
    let fx = Fixture::new();
    fx.stdout(&["theme", "set", "dark", "--system", "light"]);
    let out = fx.stdout(&["theme", "reset", "--system", "light"]);
    assert_eq!(out.trim(), "light (from system)");
    assert_eq!(stored_theme(&fx.store()), None);
}

#[test]
fn show_text_lists_sections() {
    let fx = Fixture::new();
    let out = fx.stdout(&["--system", "dark", "show", "--output", "text"]);
    for heading in ["About Me", "Projects & Experience", "Skills", "Education", "Get In Touch"] {
        assert!(out.contains(heading), "missing {heading}");
    }
    assert!(out.contains("Gagan Veeravelly"));
    assert!(out.contains("All Rights Reserved."));
    assert!(!out.contains('\u{1b}'));
}

#[test]
fn show_json_reports_theme() {
    let fx = Fixture::new();
    fx.stdout(&["theme", "set", "dark", "--system", "light"]);
    let out = fx.stdout(&["show", "-o", "json", "--system", "light"]);
    assert!(out.contains(r#""mode": "dark""#));
    assert!(out.contains(r#""source": "persisted""#));
}

#[test]
fn export_writes_dark_page() {
    let fx = Fixture::new();
    fx.stdout(&["theme", "set", "dark", "--system", "light"]);
    let target = fx.path("site/index.html");
    fx.stdout(&["export", "--out", target.to_str().unwrap(), "--system", "light"]);

    let html = std::fs::read_to_string(target).unwrap();
    assert!(html.contains(r#"<html lang="en" class="dark">"#));
    assert!(html.contains("Download Resume"));
}

#[test]
fn custom_content_file_is_rendered() {
    let fx = Fixture::new();
    let content = fx.path("me.yaml");
    std::fs::write(
        &content,
        r#"
name: Ada Lovelace
tagline: Analyst
contactInfo:
  location: London
  email: ada@example.com
  linkedin: https://example.com/ada
careerObjective: Notes on the engine.
education:
  degree: Mathematics
  university: Private tutors
  graduation: "1835"
skills:
  - category: math
    skills: [analysis]
projects: []
achievements: []
interests: []
"#,
    )
    .unwrap();

    let out = fx.stdout(&["--content", content.to_str().unwrap(), "show", "-o", "text"]);
    assert!(out.contains("Ada Lovelace"));
    assert!(out.contains("Math"));
    assert!(!out.contains("Gagan"));
}

#[test]
fn missing_content_file_fails() {
    let fx = Fixture::new();
    let missing = fx.path("nope.json");
    let output = fx.run(&["--content", missing.to_str().unwrap(), "show"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load content"), "stderr: {stderr}");
}

#[test]
fn corrupt_store_is_not_fatal() {
    let fx = Fixture::new();
    std::fs::write(fx.store(), "{ broken").unwrap();
    let out = fx.stdout(&["--system", "dark", "theme", "toggle"]);
    assert_eq!(out.trim(), "light (saved)");
    assert_eq!(stored_theme(&fx.store()).as_deref(), Some("light"));
}
