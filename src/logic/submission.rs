// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Submit pipeline: collect -> validate -> compose -> link.

use anyhow::Result;
use chrono::{DateTime, TimeZone};
use url::Url;

use crate::logic::link::destination_link;
use crate::logic::message::{RegistrationMessage, compose};
use crate::logic::validation::{ValidationReport, validate_form};
use crate::models::form::{FormSnapshot, FormState};

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one check failed; nothing was composed.
    Rejected(ValidationReport),
    /// Every check passed and the destination link is ready to open.
    Accepted {
        message: RegistrationMessage,
        link: Url,
    },
}

/// Validate the form and, when valid, compose the message and its link.
///
/// Does not touch the environment: opening the link and resetting the form
/// are left to the caller.
pub fn submit<Tz>(form: &FormState, now: &DateTime<Tz>) -> Result<SubmitOutcome>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let report = validate_form(form, now.date_naive());
    if !report.is_valid() {
        return Ok(SubmitOutcome::Rejected(report));
    }

    let snapshot = FormSnapshot::capture(form);
    let message = compose(&snapshot, now);
    let link = destination_link(message.text())?;
    Ok(SubmitOutcome::Accepted { message, link })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::link::message_from_link;
    use crate::logic::validation::tests::valid_form;
    use crate::models::fields::FieldName;
    use chrono::Utc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn valid_form_is_accepted_with_matching_link() {
        match submit(&valid_form(), &now()).unwrap() {
            SubmitOutcome::Accepted { message, link } => {
                assert_eq!(message_from_link(&link).as_deref(), Some(message.text()));
                assert_eq!(link.host_str(), Some("wa.me"));
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn invalid_field_rejects_submission() {
        let form = valid_form().with_value(FieldName::Email, "a@b");
        match submit(&form, &now()).unwrap() {
            SubmitOutcome::Rejected(report) => {
                assert!(report.fields.contains_key(&FieldName::Email));
                assert_eq!(report.error_count(), 1);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn age_is_measured_against_submission_date() {
        let form = valid_form().with_value(FieldName::DateOfBirth, "2013-10-16");
        assert!(matches!(
            submit(&form, &now()).unwrap(),
            SubmitOutcome::Accepted { .. }
        ));

        let day_before = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        assert!(matches!(
            submit(&form, &day_before).unwrap(),
            SubmitOutcome::Rejected(_)
        ));
    }
}
