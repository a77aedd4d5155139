//! Field predicates for the payment form.
//!
//! Each field carries its own predicate so inline annotations can be shown
//! per field; [`is_valid`] combines them to gate submission.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{FormData, FormField};

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email shape pattern compiles"));

pub const INVALID_EMAIL: &str = "Enter a valid email address";
pub const REQUIRED: &str = "This field is required";

/// Loose email check: something, `@`, something, `.`, something.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

pub fn is_field_valid(form: &FormData, field: FormField) -> bool {
    match field {
        FormField::To => !form.to.is_empty() && is_email_shaped(&form.to),
        FormField::From => !form.from.is_empty(),
        FormField::Amount => !form.amount.is_empty(),
        FormField::Description => true,
    }
}

/// Inline annotation for a single field, `None` when the field is fine.
pub fn field_error(form: &FormData, field: FormField) -> Option<&'static str> {
    if is_field_valid(form, field) {
        return None;
    }
    match field {
        FormField::To => Some(INVALID_EMAIL),
        FormField::From | FormField::Amount => Some(REQUIRED),
        FormField::Description => None,
    }
}

pub fn is_valid(form: &FormData) -> bool {
    FormField::ALL
        .iter()
        .all(|field| is_field_valid(form, *field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_needs_at_and_dot_after_it() {
        assert!(is_email_shaped("a@b.com"));
        assert!(is_email_shaped("first.last@mail.example.org"));
        assert!(!is_email_shaped("a.b@com"));
        assert!(!is_email_shaped("ab.com"));
        assert!(!is_email_shaped("a@b"));
        assert!(!is_email_shaped("@b.com"));
        assert!(!is_email_shaped("a@ .com"));
        assert!(!is_email_shaped(""));
    }
}
