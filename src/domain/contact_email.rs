//! src/domain/contact_email.rs

use validator::validate_email;

#[derive(Debug, Clone)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: String) -> Result<ContactEmail, String> {
        if validate_email(&s) && has_dotted_domain(&s) {
            Ok(Self(s))
        } else {
            Err("Invalid email address".to_string())
        }
    }
}

// `validate_email` lets through single-label hosts such as `localhost`;
// a contact address needs a domain with at least one dot.
fn has_dotted_domain(s: &str) -> bool {
    match s.rsplit_once('@') {
        Some((_, domain)) => {
            domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
