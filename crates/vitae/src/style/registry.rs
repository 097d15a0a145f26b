//! Style registry with alias resolution.

use console::Style;
use std::collections::{HashMap, HashSet};

use super::error::StyleValidationError;
use super::value::StyleValue;

/// Prefix written in front of text whose style name is not registered.
///
/// Rendering never fails over a typo in a template; the marker makes the
/// mistake visible instead.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A registry of named styles.
#[derive(Debug, Clone, Default)]
pub struct Styles {
    entries: HashMap<String, StyleValue>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a named style, returning the registry for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Follows aliases until a concrete style is found.
    ///
    /// Returns `None` for unknown names, dangling aliases and cycles.
    pub fn resolve(&self, name: &str) -> Option<&Style> {
        let mut seen = HashSet::new();
        let mut current = name;
        loop {
            if !seen.insert(current) {
                return None;
            }
            match self.entries.get(current)? {
                StyleValue::Concrete(style) => return Some(style),
                StyleValue::Alias(target) => current = target,
            }
        }
    }

    /// Checks that every alias ends in a concrete style.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        let mut names: Vec<&String> = self.entries.keys().collect();
        names.sort();

        for name in names {
            let mut path = vec![name.clone()];
            let mut current = name;
            while let Some(StyleValue::Alias(target)) = self.entries.get(current) {
                if path.contains(target) {
                    path.push(target.clone());
                    return Err(StyleValidationError::CycleDetected { path });
                }
                if !self.entries.contains_key(target) {
                    return Err(StyleValidationError::UnresolvedAlias {
                        from: current.clone(),
                        to: target.clone(),
                    });
                }
                path.push(target.clone());
                current = target;
            }
        }
        Ok(())
    }

    /// Applies a style, emitting escape codes only when `use_color` is set.
    pub fn apply_with_mode(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.resolve(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", DEFAULT_MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Wraps text in bracket tags naming the style, for inspecting templates.
    pub fn apply_debug(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            format!("[{name}]{text}[/{name}]")
        } else {
            format!("[{name}?]{text}[/{name}?]")
        }
    }
}
