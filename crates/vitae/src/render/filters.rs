//! MiniJinja filters used by the page templates.

use minijinja::{Environment, Value};

use crate::output::OutputMode;
use crate::theme::Theme;
use crate::util::{truncate_to_width, wrap_to_width};

/// Registers `style`, `nl`, `wrap` and `fit` on `env`.
///
/// - `{{ text | style("heading") }}` applies a theme style for `mode`
/// - `{{ text | nl }}` appends a newline
/// - `{{ text | wrap(4) }}` wraps to `width - 4` columns, continuation lines
///   indented by 4 spaces
/// - `{{ text | fit(2) }}` truncates to `width - 2` columns
pub(crate) fn register_filters(
    env: &mut Environment<'static>,
    theme: &Theme,
    mode: OutputMode,
    width: usize,
) {
    let styles = theme.styles.clone();
    let is_debug = mode.is_debug();
    let use_color = mode.should_use_color();

    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if is_debug {
            styles.apply_debug(&name, &text)
        } else {
            styles.apply_with_mode(&name, &text, use_color)
        }
    });

    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });

    env.add_filter("wrap", move |value: Value, indent: Option<usize>| -> String {
        let indent = indent.unwrap_or(0);
        let lines = wrap_to_width(&value.to_string(), width.saturating_sub(indent));
        lines.join(&format!("\n{}", " ".repeat(indent)))
    });

    env.add_filter("fit", move |value: Value, reserve: Option<usize>| -> String {
        let available = width.saturating_sub(reserve.unwrap_or(0)).max(1);
        truncate_to_width(&value.to_string(), available)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::Style;

    fn render(template: &str, mode: OutputMode, width: usize) -> String {
        let theme = Theme::new().add("heading", Style::new().bold());
        let mut env = Environment::new();
        register_filters(&mut env, &theme, mode, width);
        env.render_str(template, minijinja::context! {}).unwrap()
    }

    #[test]
    fn test_style_text_mode_is_plain() {
        assert_eq!(render(r#"{{ "Skills" | style("heading") }}"#, OutputMode::Text, 80), "Skills");
    }

    #[test]
    fn test_style_debug_mode_tags() {
        assert_eq!(
            render(r#"{{ "Skills" | style("heading") }}"#, OutputMode::TermDebug, 80),
            "[heading]Skills[/heading]"
        );
    }

    #[test]
    fn test_wrap_indents_continuation_lines() {
        let out = render(r#"{{ "one two three four" | wrap(2) }}"#, OutputMode::Text, 11);
        assert_eq!(out, "one two\n  three\n  four");
    }

    #[test]
    fn test_fit_truncates() {
        let out = render(r#"{{ "https://example.com/long" | fit(2) }}"#, OutputMode::Text, 12);
        assert_eq!(out, "https://e…");
    }

    #[test]
    fn test_nl_appends_newline() {
        assert_eq!(render(r#"{{ "x" | nl }}"#, OutputMode::Text, 80), "x\n");
    }
}
