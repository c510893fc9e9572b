use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::UserId;

pub const MEMBER_ID_DELIMITER: char = ',';

/// The member list of a project, as stored in its single delimited text
/// column (`"5,7,12"`).
///
/// Tokens are kept as opaque strings: decoding never fails, so a malformed
/// fragment written by an older client survives a read/write cycle
/// unchanged. Order is insertion order, the most recent member is last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberIds(Vec<String>);

impl MemberIds {
    /// Splits a stored value into tokens. Empty input gives no members.
    pub fn decode(serialized: &str) -> Self {
        if serialized.is_empty() {
            return Self::default();
        }
        Self(
            serialized
                .split(MEMBER_ID_DELIMITER)
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Joins the tokens back into the stored form. No members encodes to
    /// the empty string.
    pub fn encode(&self) -> String {
        self.0.join(&MEMBER_ID_DELIMITER.to_string())
    }

    /// Exact token match, so `1` is not a member of `"12"`.
    pub fn contains(&self, user_id: &UserId) -> bool {
        let needle = user_id.to_string();
        self.0.iter().any(|token| token.trim() == needle)
    }

    /// Appends `user_id` unless it is already listed. Returns whether the
    /// list changed.
    pub fn push_unique(&mut self, user_id: &UserId) -> bool {
        if self.contains(user_id) {
            return false;
        }
        self.0.push(user_id.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Option<String>> for MemberIds {
    fn from(serialized: Option<String>) -> Self {
        serialized
            .as_deref()
            .map(Self::decode)
            .unwrap_or_default()
    }
}

impl FromIterator<UserId> for MemberIds {
    fn from_iter<T: IntoIterator<Item = UserId>>(iter: T) -> Self {
        Self(iter.into_iter().map(|id| id.to_string()).collect())
    }
}

impl Serialize for MemberIds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for MemberIds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<String>::deserialize(deserializer).map(Self::from)
    }
}
