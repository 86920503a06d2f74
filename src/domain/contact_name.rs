//! src/domain/contact_name.rs

use crate::domain::utf16_len;

#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    pub const MIN_LENGTH: usize = 2;

    pub fn parse(s: String) -> Result<ContactName, String> {
        if utf16_len(&s) < Self::MIN_LENGTH {
            return Err(format!(
                "Name must be at least {} characters",
                Self::MIN_LENGTH
            ));
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
