use bigdecimal::BigDecimal;
use std::fmt;

pub const PASSWORD_MIN_LEN: usize = 6;
pub const REJECTION_NOTE_MAX_LEN: usize = 500;
pub const ACCOUNT_FIELD_MAX_LEN: usize = 64;

/// Payment types company accounts may be created with. Transactions may still
/// carry retired values read-only.
pub const ALLOWED_PAYMENT_TYPES: &[&str] = &[
    "tum_bankalar",
    "bankpay",
    "othomatik",
    "banka_havalesi",
    "hizla_havalesi",
    "vip_havalesi",
    "fast_havele",
    "papara",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

pub fn sanitize_string(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !ch.is_control())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn validate_required(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }

    Ok(())
}

pub fn validate_max_len(field: &'static str, value: &str, max_len: usize) -> ValidationResult {
    if value.len() > max_len {
        return Err(ValidationError::new(
            field,
            format!("must be at most {} characters", max_len),
        ));
    }

    Ok(())
}

pub fn validate_enum(field: &'static str, value: &str, allowed: &[&str]) -> ValidationResult {
    if allowed.iter().all(|candidate| value != *candidate) {
        return Err(ValidationError::new(
            field,
            format!("must be one of: {}", allowed.join(", ")),
        ));
    }

    Ok(())
}

/// Checks the `local@domain.tld` shape: a local part, exactly one `@`, and a
/// domain with a dot separating two non-empty labels. No whitespace anywhere.
pub fn validate_email(email: &str) -> ValidationResult {
    let invalid = || ValidationError::new("email", "invalid email format");

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

pub fn validate_password(password: &str) -> ValidationResult {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(ValidationError::new(
            "password",
            format!("must be at least {} characters", PASSWORD_MIN_LEN),
        ));
    }

    Ok(())
}

/// A rejection must carry a justification the submitter can read.
pub fn validate_rejection_note(note: &str) -> ValidationResult {
    let note = sanitize_string(note);
    validate_required("rejection_note", &note)?;
    validate_max_len("rejection_note", &note, REJECTION_NOTE_MAX_LEN)?;

    Ok(())
}

pub fn validate_payment_type(payment_type: &str) -> ValidationResult {
    let payment_type = sanitize_string(payment_type);
    validate_required("payment_type", &payment_type)?;
    validate_enum("payment_type", &payment_type, ALLOWED_PAYMENT_TYPES)?;

    Ok(())
}

pub fn validate_positive_amount(amount: &BigDecimal) -> ValidationResult {
    if amount <= &BigDecimal::from(0) {
        return Err(ValidationError::new("amount", "must be greater than zero"));
    }

    Ok(())
}

/// Transaction bounds on a company account: non-negative and ordered.
pub fn validate_amount_bounds(min: &BigDecimal, max: &BigDecimal) -> ValidationResult {
    if min < &BigDecimal::from(0) {
        return Err(ValidationError::new("min", "must not be negative"));
    }

    if max < min {
        return Err(ValidationError::new("max", "must be greater than or equal to min"));
    }

    Ok(())
}
