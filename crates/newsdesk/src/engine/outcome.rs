//! Results of engine commands.

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryId, MainGroup};
use crate::selection::Selection;

use super::reason::DisabledReason;

/// Outcome of toggling a sub-category or choosing a primary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Toggle {
    /// The command went through; persist `selection`.
    Applied { selection: Selection },
    /// Nothing changed; surface `reason` to the editor.
    Rejected { reason: DisabledReason },
}

impl Toggle {
    pub fn is_applied(&self) -> bool {
        matches!(self, Toggle::Applied { .. })
    }

    /// The new selection, if the command was applied.
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Toggle::Applied { selection } => Some(selection),
            Toggle::Rejected { .. } => None,
        }
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<DisabledReason> {
        match self {
            Toggle::Applied { .. } => None,
            Toggle::Rejected { reason } => Some(*reason),
        }
    }

    /// The selection the caller should hold afterwards.
    pub fn apply_to(self, current: Selection) -> Selection {
        match self {
            Toggle::Applied { selection } => selection,
            Toggle::Rejected { .. } => current,
        }
    }

    /// Flatten into the `{ success, newSelectedIds?, message? }` shape UI
    /// callers consume.
    pub fn into_result(self) -> CommandResult {
        match self {
            Toggle::Applied { selection } => CommandResult {
                success: true,
                new_selected_ids: Some(selection.ids().to_vec()),
                message: None,
            },
            Toggle::Rejected { reason } => CommandResult {
                success: false,
                new_selected_ids: None,
                message: Some(reason.message().to_string()),
            },
        }
    }
}

/// Outcome of switching the main category. Always succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupChange {
    /// Group that was active before the switch.
    pub previous: Option<MainGroup>,
    /// Sub-categories dropped by the switch.
    pub cleared: Vec<CategoryId>,
    /// The new, empty selection for the chosen group.
    pub selection: Selection,
}

impl GroupChange {
    pub fn into_result(self) -> CommandResult {
        CommandResult {
            success: true,
            new_selected_ids: Some(Vec::new()),
            message: None,
        }
    }
}

/// Flat command result for UI callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_selected_ids: Option<Vec<CategoryId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_result_shape() {
        let result = Toggle::Rejected {
            reason: DisabledReason::LimitReached,
        }
        .into_result();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Maximum of 4 sub-categories already selected");
        assert!(json.get("newSelectedIds").is_none());
    }

    #[test]
    fn test_applied_result_shape() {
        let result = Toggle::Applied {
            selection: Selection::edit_with(MainGroup::Politics, [10, 11]),
        }
        .into_result();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["newSelectedIds"], serde_json::json!([10, 11]));
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_apply_to_keeps_current_on_rejection() {
        let current = Selection::edit_with(MainGroup::Sports, [20]);
        let next = Toggle::Rejected {
            reason: DisabledReason::OtherGroup,
        }
        .apply_to(current.clone());
        assert_eq!(next, current);
    }
}
