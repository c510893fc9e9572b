use secrecy::{ExposeSecret, Secret};

/// Opaque account credential.
///
/// Kept in a [`Secret`] so it never shows up in logs or `Debug` output.
/// It is persisted and compared verbatim; there is no hashing step.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Password {
    pub fn new(s: Secret<String>) -> Self {
        Self(s)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
