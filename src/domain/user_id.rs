use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = id.trim().parse::<i64>().map_err(|e| {
            ValidationError::new(format!("Invalid user ID: {e}"))
        })?;
        Ok(Self(parsed))
    }

    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl AsRef<i64> for UserId {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_valid_ids() {
    for (raw, expected) in [("1", 1), ("12", 12), (" 7 ", 7)] {
        let parsed = UserId::parse(raw).expect(raw);
        assert_eq!(
            parsed.as_ref(),
            &expected,
            "ID does not match expected value"
        );
    }
}

#[test]
fn test_invalid_ids() {
    let invalid_id = "abc";
    let result = UserId::parse(invalid_id);
    let error = result.expect_err(invalid_id);
    assert_eq!(
        error.as_ref(),
        "Invalid user ID: invalid digit found in string"
    );
}
