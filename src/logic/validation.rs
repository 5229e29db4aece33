// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Field and form validation for registrations.
//!
//! Both the per-field blur check and the full submit check go through
//! [`validate_field`], so the rule table in [`crate::models::fields`] is the
//! single source of truth.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::models::fields::{FieldName, Rule};
use crate::models::form::FormState;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,15}$").expect("phone pattern is valid"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Why an input was rejected. `Display` is the message shown next to the input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required.", .field.label())]
    Required { field: FieldName },
    #[error("{} must be at least {min} characters long.", .field.subject())]
    TooShort { field: FieldName, min: usize },
    #[error("{} must be between {min}-{max} digits.", .field.label())]
    LengthOutOfRange {
        field: FieldName,
        min: usize,
        max: usize,
    },
    #[error("Please enter a valid {}.", .field.pattern_noun())]
    PatternMismatch { field: FieldName },
    #[error("You must be at least {min_age} years old to participate.")]
    Underage { min_age: u32 },
    #[error("Please select a registration type.")]
    MissingRegistrationType,
    #[error("You must accept the terms and conditions.")]
    TermsNotAccepted,
}

/// Validate one field value against its definition.
///
/// The value is trimmed first. Empty optional values pass without format
/// checks; empty required values fail with [`ValidationError::Required`].
/// `today` anchors the age computation.
pub fn validate_field(field: FieldName, raw: &str, today: NaiveDate) -> Result<(), ValidationError> {
    let def = field.definition();
    let value = raw.trim();

    if value.is_empty() {
        return if def.required {
            Err(ValidationError::Required { field })
        } else {
            Ok(())
        };
    }

    let len = value.chars().count();
    match def.rule {
        Rule::Any => Ok(()),
        Rule::MinLength(min) if len < min => Err(ValidationError::TooShort { field, min }),
        Rule::MinLength(_) => Ok(()),
        Rule::LengthRange { min, max } if !(min..=max).contains(&len) => {
            Err(ValidationError::LengthOutOfRange { field, min, max })
        }
        Rule::LengthRange { .. } => Ok(()),
        Rule::Phone if !PHONE_RE.is_match(value) => Err(ValidationError::PatternMismatch { field }),
        Rule::Email if !EMAIL_RE.is_match(value) => Err(ValidationError::PatternMismatch { field }),
        Rule::Phone | Rule::Email => Ok(()),
        Rule::MinAge(min_age) => match age_on(value, today) {
            Some(age) if age >= min_age => Ok(()),
            _ => Err(ValidationError::Underage { min_age }),
        },
    }
}

/// Whole years between an ISO `YYYY-MM-DD` birth date and `today`.
///
/// Returns `None` when the date cannot be parsed or lies in the future.
pub fn age_on(birth_date: &str, today: NaiveDate) -> Option<u32> {
    let birth = NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d").ok()?;
    today.years_since(birth)
}

/// Exactly one registration type must be chosen.
pub fn validate_registration_type(form: &FormState) -> Result<(), ValidationError> {
    form.registration_type
        .map(|_| ())
        .ok_or(ValidationError::MissingRegistrationType)
}

/// The terms checkbox must be ticked.
pub fn validate_terms(form: &FormState) -> Result<(), ValidationError> {
    if form.accept_terms {
        Ok(())
    } else {
        Err(ValidationError::TermsNotAccepted)
    }
}

/// Outcome of validating the whole form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Failing text/select fields and their messages.
    pub fields: BTreeMap<FieldName, ValidationError>,
    pub registration_type: Option<ValidationError>,
    pub terms: Option<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.fields.is_empty() && self.registration_type.is_none() && self.terms.is_none()
    }

    /// Number of failed checks, used for logging.
    pub fn error_count(&self) -> usize {
        self.fields.len()
            + usize::from(self.registration_type.is_some())
            + usize::from(self.terms.is_some())
    }
}

/// Run every field rule plus the registration type and terms checks.
pub fn validate_form(form: &FormState, today: NaiveDate) -> ValidationReport {
    let fields = FieldName::ALL
        .into_iter()
        .filter_map(|f| validate_field(f, form.value(f), today).err().map(|e| (f, e)))
        .collect();

    ValidationReport {
        fields,
        registration_type: validate_registration_type(form).err(),
        terms: validate_terms(form).err(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::form::RegistrationType;

    pub(crate) fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    /// A form that passes every check relative to [`today`].
    pub(crate) fn valid_form() -> FormState {
        let mut form = FormState::default()
            .with_value(FieldName::FullName, "Aarav Shrestha")
            .with_value(FieldName::InGameName, "AaravFF")
            .with_value(FieldName::FreeFireUid, "123456789")
            .with_value(FieldName::WhatsappNumber, "+977 9812345678")
            .with_value(FieldName::Email, "aarav@example.com")
            .with_value(FieldName::DateOfBirth, "2005-04-12")
            .with_value(FieldName::Province, "Gandaki")
            .with_value(FieldName::City, "Pokhara")
            .with_value(FieldName::TeamName, "Lakeside Legends")
            .with_value(FieldName::Server, "Nepal");
        form.registration_type = Some(RegistrationType::Squad);
        form.accept_terms = true;
        form
    }

    fn check(field: FieldName, value: &str) -> Result<(), ValidationError> {
        validate_field(field, value, today())
    }

    #[test]
    fn required_fields_reject_blank_values() {
        let err = check(FieldName::City, "   ").unwrap_err();
        assert_eq!(err, ValidationError::Required { field: FieldName::City });
        assert_eq!(err.to_string(), "City/Village is required.");
    }

    #[test]
    fn optional_blank_value_skips_format_checks() {
        assert!(check(FieldName::ReferCode, "").is_ok());
        assert!(check(FieldName::ReferCode, "  ").is_ok());
    }

    #[test]
    fn name_fields_need_two_characters() {
        for field in [FieldName::FullName, FieldName::InGameName, FieldName::TeamName] {
            let err = check(field, " x ").unwrap_err();
            assert!(matches!(err, ValidationError::TooShort { min: 2, .. }));
            assert!(check(field, "xy").is_ok());
        }
        assert_eq!(
            check(FieldName::FullName, "a").unwrap_err().to_string(),
            "Full name must be at least 2 characters long."
        );
        assert_eq!(
            check(FieldName::InGameName, "a").unwrap_err().to_string(),
            "In-game name must be at least 2 characters long."
        );
        assert_eq!(
            check(FieldName::TeamName, "a").unwrap_err().to_string(),
            "Team name must be at least 2 characters long."
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(check(FieldName::FullName, "é").is_err());
        assert!(check(FieldName::FullName, "éé").is_ok());
    }

    #[test]
    fn uid_length_bounds_are_inclusive() {
        assert!(check(FieldName::FreeFireUid, "1234567").is_err());
        assert!(check(FieldName::FreeFireUid, "12345678").is_ok());
        assert!(check(FieldName::FreeFireUid, "123456789012").is_ok());
        assert!(check(FieldName::FreeFireUid, "1234567890123").is_err());
        // content is not checked
        assert!(check(FieldName::FreeFireUid, "abcdefgh").is_ok());
        assert_eq!(
            check(FieldName::FreeFireUid, "1").unwrap_err().to_string(),
            "Free Fire UID must be between 8-12 digits."
        );
    }

    #[test]
    fn phone_pattern() {
        assert!(check(FieldName::WhatsappNumber, "+977-976-6115626").is_ok());
        assert!(check(FieldName::WhatsappNumber, "(977) 97661156").is_ok());
        assert!(check(FieldName::WhatsappNumber, "9766115626").is_ok());
        assert!(check(FieldName::WhatsappNumber, "123").is_err());
        assert!(check(FieldName::WhatsappNumber, "97661156ab").is_err());
        assert!(check(FieldName::WhatsappNumber, "++9766115626").is_err());
        // 16 characters after the plus sign
        assert!(check(FieldName::WhatsappNumber, "+977-97-6611-5626").is_err());
        assert_eq!(
            check(FieldName::WhatsappNumber, "123").unwrap_err().to_string(),
            "Please enter a valid WhatsApp number."
        );
    }

    #[test]
    fn email_pattern() {
        assert!(check(FieldName::Email, "a@b.c").is_ok());
        assert!(check(FieldName::Email, "a@b").is_err());
        assert!(check(FieldName::Email, "a.com").is_err());
        assert!(check(FieldName::Email, "a b@c.d").is_err());
        assert_eq!(
            check(FieldName::Email, "a.com").unwrap_err().to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn age_is_calendar_aware() {
        assert!(check(FieldName::DateOfBirth, "2013-10-16").is_ok());
        let err = check(FieldName::DateOfBirth, "2013-10-17").unwrap_err();
        assert_eq!(err, ValidationError::Underage { min_age: 13 });
        assert_eq!(
            err.to_string(),
            "You must be at least 13 years old to participate."
        );
        assert_eq!(age_on("2013-11-01", today()), Some(12));
        assert_eq!(age_on("2013-09-30", today()), Some(13));
    }

    #[test]
    fn unparseable_or_future_birth_dates_fail() {
        assert!(check(FieldName::DateOfBirth, "not a date").is_err());
        assert!(check(FieldName::DateOfBirth, "2030-01-01").is_err());
        assert_eq!(age_on("2030-01-01", today()), None);
    }

    #[test]
    fn valid_form_passes() {
        let report = validate_form(&valid_form(), today());
        assert!(report.is_valid(), "{report:?}");
        assert_eq!(report.error_count(), 0);
    }

    #[test]
    fn missing_registration_type_fails_whole_form() {
        let mut form = valid_form();
        form.registration_type = None;

        let report = validate_form(&form, today());
        assert!(!report.is_valid());
        assert!(report.fields.is_empty());
        assert_eq!(
            report.registration_type,
            Some(ValidationError::MissingRegistrationType)
        );
        assert_eq!(
            ValidationError::MissingRegistrationType.to_string(),
            "Please select a registration type."
        );
    }

    #[test]
    fn unchecked_terms_fail_whole_form() {
        let mut form = valid_form();
        form.accept_terms = false;

        let report = validate_form(&form, today());
        assert!(!report.is_valid());
        assert_eq!(report.terms, Some(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let report = validate_form(&FormState::default(), today());
        assert_eq!(report.fields.len(), FieldName::ALL.len() - 1);
        assert!(!report.fields.contains_key(&FieldName::ReferCode));
        assert_eq!(report.error_count(), FieldName::ALL.len() + 1);
    }
}
