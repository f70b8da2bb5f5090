use serde::{Deserialize, Serialize};

use super::form::FieldErrors;

/// What the invoice form is re-rendered with after a rejected submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
  #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
  pub errors: FieldErrors,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl FormState {
  pub fn invalid(errors: FieldErrors, message: &str) -> Self {
    Self {
      errors,
      message: Some(message.to_string()),
    }
  }

  pub fn failed(message: &str) -> Self {
    Self {
      errors: FieldErrors::new(),
      message: Some(message.to_string()),
    }
  }

  pub fn has_errors(&self) -> bool {
    !self.errors.is_empty() || self.message.is_some()
  }
}

/// Result of a create or update action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
  /// The write succeeded; navigate to this path
  Redirect(String),
  /// Nothing was written or the write failed; show the form again
  Rejected(FormState),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_state_serializes_to_empty_object() {
    let json = serde_json::to_value(FormState::default()).unwrap();
    assert_eq!(json, serde_json::json!({}));
    assert!(!FormState::default().has_errors());
  }

  #[test]
  fn test_invalid_state_shape() {
    let mut errors = FieldErrors::new();
    errors.insert("amount".to_string(), vec!["too small".to_string()]);

    let state = FormState::invalid(errors, "Missing Fields.");
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(
      json,
      serde_json::json!({
        "errors": { "amount": ["too small"] },
        "message": "Missing Fields."
      })
    );
    assert!(state.has_errors());
  }
}
