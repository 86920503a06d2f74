//! src/domain/contact_message.rs

use crate::domain::utf16_len;

/// Body of a contact submission.
#[derive(Debug, Clone)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub const MIN_LENGTH: usize = 10;

    pub fn parse(s: String) -> Result<ContactMessage, String> {
        if utf16_len(&s) < Self::MIN_LENGTH {
            return Err(format!(
                "Message must be at least {} characters",
                Self::MIN_LENGTH
            ));
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use claim::{assert_err, assert_ok};
    use fake::faker::lorem::en::Paragraph;
    use fake::Fake;

    use super::ContactMessage;

    #[test]
    fn a_ten_character_message_is_valid() {
        assert_ok!(ContactMessage::parse("0123456789".to_string()));
    }

    #[test]
    fn a_nine_character_message_is_rejected() {
        assert_err!(ContactMessage::parse("012345678".to_string()));
    }

    #[test]
    fn a_paragraph_is_valid() {
        let paragraph: String = Paragraph(3..6).fake();
        assert_ok!(ContactMessage::parse(paragraph));
    }
}
