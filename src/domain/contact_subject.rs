//! src/domain/contact_subject.rs

use crate::domain::utf16_len;

#[derive(Debug, Clone)]
pub struct ContactSubject(String);

impl ContactSubject {
    pub const MIN_LENGTH: usize = 5;

    pub fn parse(s: String) -> Result<ContactSubject, String> {
        if utf16_len(&s) < Self::MIN_LENGTH {
            return Err(format!(
                "Subject must be at least {} characters",
                Self::MIN_LENGTH
            ));
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for ContactSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
