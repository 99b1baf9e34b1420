//! Contact form validation. Pure and deterministic; the view model owns the
//! signals and error lifecycle.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Field-keyed error messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

const MIN_MESSAGE_LEN: usize = 10;

pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some("Name is required".into());
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required".into());
    } else if !is_valid_email(email) {
        errors.email = Some("Please enter a valid email".into());
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.message = Some("Message is required".into());
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.message = Some("Message must be at least 10 characters".into());
    }

    errors
}

/// Shape check only: one `@` with non-empty sides, no whitespace, and a dot
/// inside the domain with at least one character on each side.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn missing_name_is_the_only_error() {
        let errors = validate(&form("", "a@b.com", "1234567890"));
        assert!(errors.name.is_some());
        assert!(errors.email.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn bad_email_and_short_message_are_reported_together() {
        let errors = validate(&form("Jo", "not-an-email", "short"));
        assert!(errors.name.is_none());
        assert_eq!(errors.email.as_deref(), Some("Please enter a valid email"));
        assert_eq!(
            errors.message.as_deref(),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let errors = validate(&form("   ", "  ", " \t "));
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.message.as_deref(), Some("Message is required"));
    }

    #[test]
    fn message_length_counts_trimmed_characters() {
        // 9 characters padded with spaces still fails
        let errors = validate(&form("Jo", "a@b.com", "  123456789  "));
        assert!(errors.message.is_some());
        let errors = validate(&form("Jo", "a@b.com", " 1234567890 "));
        assert!(errors.message.is_none());
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&form("Jo", "a@b.com", "hello there, nice site")).is_empty());
    }

    #[test]
    fn email_shape_accepts_and_rejects() {
        for ok in ["a@b.co", "first.last@sub.domain.org", "x@y.z", "a@b.c.d"] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "plain",
            "@b.com",
            "a@",
            "a@b",
            "a@.com",
            "a@b.",
            "a b@c.de",
            "a@b@c.de",
            "a@b c.de",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn email_is_validated_after_trimming() {
        let errors = validate(&form("Jo", "  a@b.com  ", "1234567890"));
        assert!(errors.email.is_none());
    }
}
