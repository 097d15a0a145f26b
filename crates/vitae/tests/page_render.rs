//! End-to-end rendering: controller state flowing into every output mode.

use vitae::{
    ColorMode, FixedSignal, MemoryStore, OutputMode, PresentationRoot, Renderer, ResumeContent,
    ThemeController,
};

fn ready_controller(signal: FixedSignal) -> ThemeController<MemoryStore, FixedSignal, PresentationRoot> {
    let mut controller = ThemeController::new(MemoryStore::new(), signal, PresentationRoot::new());
    controller.initialize();
    controller
}

#[test]
fn html_class_matches_controller_after_toggle() {
    let mut controller = ready_controller(FixedSignal::dark());
    let renderer = Renderer::new(OutputMode::Html).unwrap();
    let content = ResumeContent::builtin();

    let dark = renderer
        .render_page(controller.state(), controller.root(), content)
        .unwrap();
    assert!(dark.contains(r#"class="dark""#));

    assert_eq!(controller.toggle().mode, ColorMode::Light);
    let light = renderer
        .render_page(controller.state(), controller.root(), content)
        .unwrap();
    assert!(!light.contains(r#"<html lang="en" class="dark">"#));
}

#[test]
fn html_page_lists_all_content() {
    let controller = ready_controller(FixedSignal::light());
    let content = ResumeContent::builtin();
    let page = Renderer::new(OutputMode::Html)
        .unwrap()
        .render_page(controller.state(), controller.root(), content)
        .unwrap();

    for project in &content.projects {
        // names carry ampersands and dashes, so compare escaped text
        let escaped = project.name.replace('&', "&amp;");
        assert!(page.contains(&escaped), "missing project {}", project.name);
    }
    for group in &content.skills {
        assert!(page.contains(&group.label()));
    }
    assert!(page.contains("Send Message"));
    assert!(page.contains(r#"localStorage.getItem("theme")"#));
}

#[test]
fn json_carries_preference_source() {
    let controller = ready_controller(FixedSignal::dark());
    let out = Renderer::new(OutputMode::Json)
        .unwrap()
        .render_page(controller.state(), controller.root(), ResumeContent::builtin())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["theme"]["source"], "system-default");
    assert_eq!(value["content"]["skills"][1]["category"], "coreCS");
}

#[test]
fn template_directory_overrides_builtin() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("page.term.tmpl"),
        "{{ content.name | style(\"name\") }} / {{ initials }}",
    )
    .unwrap();

    let controller = ready_controller(FixedSignal::light());
    let mut renderer = Renderer::new(OutputMode::Text).unwrap();
    renderer.registry_mut().add_directory(dir.path()).unwrap();

    let out = renderer
        .render_page(controller.state(), controller.root(), ResumeContent::builtin())
        .unwrap();
    assert_eq!(out, "Gagan Veeravelly / GV");
}
