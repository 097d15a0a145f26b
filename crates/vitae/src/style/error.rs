/// A palette whose aliases cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValidationError {
    /// `from` names a style that is not registered.
    UnresolvedAlias { from: String, to: String },
    /// Following aliases led back to a name already visited.
    CycleDetected { path: Vec<String> },
}

impl std::fmt::Display for StyleValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValidationError::UnresolvedAlias { from, to } => {
                write!(f, "style '{}' points at unknown style '{}'", from, to)
            }
            StyleValidationError::CycleDetected { path } => {
                write!(f, "style aliases loop: {}", path.join(" -> "))
            }
        }
    }
}

impl std::error::Error for StyleValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_alias_display() {
        let err = StyleValidationError::UnresolvedAlias {
            from: "heading".to_string(),
            to: "bold".to_string(),
        };
        assert_eq!(err.to_string(), "style 'heading' points at unknown style 'bold'");
    }

    #[test]
    fn test_cycle_display() {
        let err = StyleValidationError::CycleDetected {
            path: vec!["link".to_string(), "accent".to_string(), "link".to_string()],
        };
        assert!(err.to_string().ends_with("link -> accent -> link"));
    }
}
