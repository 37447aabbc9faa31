//! Why a category cannot be picked right now.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cause of a category being disabled, or of a command being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisabledReason {
    /// Authoring form has no main category yet.
    NoMainGroup,
    /// Category is outside the active main category (or in none at all).
    OtherGroup,
    /// The sub-category limit is already used up.
    LimitReached,
    /// Primary categories only exist for authored content.
    FilterMode,
}

impl DisabledReason {
    /// Message shown to the editor.
    pub fn message(&self) -> &'static str {
        match self {
            DisabledReason::NoMainGroup => "Select a main category first",
            DisabledReason::OtherGroup => "Category belongs to a different main category",
            DisabledReason::LimitReached => "Maximum of 4 sub-categories already selected",
            DisabledReason::FilterMode => "Primary category applies only when editing",
        }
    }
}

impl fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let reasons = [
            DisabledReason::NoMainGroup,
            DisabledReason::OtherGroup,
            DisabledReason::LimitReached,
            DisabledReason::FilterMode,
        ];
        let messages: std::collections::HashSet<_> = reasons.iter().map(|r| r.message()).collect();
        assert_eq!(messages.len(), reasons.len());
    }

    #[test]
    fn test_limit_message() {
        assert_eq!(
            DisabledReason::LimitReached.to_string(),
            "Maximum of 4 sub-categories already selected"
        );
    }
}
