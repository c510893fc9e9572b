use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(i64);

impl ProjectId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = id.trim().parse::<i64>().map_err(|e| {
            ValidationError::new(format!("Invalid project ID: {e}"))
        })?;
        Ok(Self(parsed))
    }

    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl AsRef<i64> for ProjectId {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_valid_ids() {
    let parsed = ProjectId::parse("42").expect("42");
    assert_eq!(parsed, ProjectId::new(42));
}

#[test]
fn test_invalid_ids() {
    let test_cases = [
        ("", "Invalid project ID: cannot parse integer from empty string"),
        ("4.2", "Invalid project ID: invalid digit found in string"),
    ];
    for (invalid_id, expected_error) in test_cases {
        let error = ProjectId::parse(invalid_id).expect_err(invalid_id);
        assert_eq!(error.as_ref(), expected_error);
    }
}
