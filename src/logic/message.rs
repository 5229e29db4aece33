// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Registration message sent to the tournament desk.

use chrono::{DateTime, TimeZone};

use crate::config::ORGANIZER;
use crate::models::form::FormSnapshot;

/// Composed message text plus the identifier embedded in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationMessage {
    text: String,
    registration_id: i64,
}

impl RegistrationMessage {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Milliseconds since the Unix epoch at composition time.
    pub fn registration_id(&self) -> i64 {
        self.registration_id
    }
}

/// Fill the registration template from a snapshot.
///
/// Values are inserted verbatim; URL encoding is the link builder's job.
/// The refer code line appears whenever the raw code is non-empty, even if it
/// is only whitespace. `now` supplies both the printed date (`M/D/YYYY` in its
/// own time zone) and the registration id.
pub fn compose<Tz>(snapshot: &FormSnapshot, now: &DateTime<Tz>) -> RegistrationMessage
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let registration_id = now.timestamp_millis();
    let field = |key: &str, label: &str| format!("• {label}: {}", snapshot.get(key));

    let mut lines = vec![
        "🎮 *FREE FIRE TOURNAMENT REGISTRATION* 🎮".to_string(),
        String::new(),
        "👤 *Player Information:*".to_string(),
        field("fullName", "Full Name"),
        field("inGameName", "In-Game Name"),
        field("freeFireUID", "Free Fire UID"),
        field("whatsappNumber", "WhatsApp"),
        field("email", "Email"),
        field("dateOfBirth", "Date of Birth"),
        String::new(),
        "📍 *Location:*".to_string(),
        field("province", "Province"),
        field("city", "City/Village"),
        String::new(),
        "🏆 *Tournament Details:*".to_string(),
        field("teamName", "Team Name"),
        field("registrationType", "Registration Type"),
        field("server", "Server"),
    ];
    if !snapshot.get("referCode").is_empty() {
        lines.push(field("referCode", "Refer Code"));
    }
    lines.extend([
        String::new(),
        format!("📅 *Registration Date:* {}", now.format("%-m/%-d/%Y")),
        String::new(),
        "✅ Terms & Conditions: Accepted".to_string(),
        String::new(),
        "---".to_string(),
        format!("*{ORGANIZER}*"),
        format!("*Registration ID: {registration_id}*"),
    ]);

    RegistrationMessage {
        text: lines.join("\n").trim().to_string(),
        registration_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::validation::tests::valid_form;
    use crate::models::fields::FieldName;
    use chrono::Utc;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 7, 9, 30, 0).unwrap()
    }

    #[test]
    fn template_contains_every_section_and_value() {
        let snap = FormSnapshot::capture(&valid_form());
        let msg = compose(&snap, &fixed_now());
        let text = msg.text();

        assert!(text.starts_with("🎮 *FREE FIRE TOURNAMENT REGISTRATION* 🎮"));
        assert!(text.contains("👤 *Player Information:*\n• Full Name: Aarav Shrestha\n"));
        assert!(text.contains("• WhatsApp: +977 9812345678\n"));
        assert!(text.contains("📍 *Location:*\n• Province: Gandaki\n• City/Village: Pokhara\n"));
        assert!(text.contains("• Registration Type: Squad\n• Server: Nepal\n\n📅"));
        assert!(text.contains("📅 *Registration Date:* 3/7/2026\n"));
        assert!(text.contains("✅ Terms & Conditions: Accepted"));
        assert!(text.ends_with(&format!(
            "*Taigours E-Sports Tournament*\n*Registration ID: {}*",
            fixed_now().timestamp_millis()
        )));
        assert_eq!(msg.registration_id(), fixed_now().timestamp_millis());
    }

    #[test]
    fn refer_code_line_only_when_present() {
        let without = compose(&FormSnapshot::capture(&valid_form()), &fixed_now());
        assert!(!without.text().contains("Refer Code"));

        let form = valid_form().with_value(FieldName::ReferCode, "TG-2026 ");
        let with = compose(&FormSnapshot::capture(&form), &fixed_now());
        assert!(with.text().contains("• Server: Nepal\n• Refer Code: TG-2026 \n\n📅"));
    }

    #[test]
    fn whitespace_only_refer_code_is_still_listed() {
        let form = valid_form().with_value(FieldName::ReferCode, "  ");
        let msg = compose(&FormSnapshot::capture(&form), &fixed_now());
        assert!(msg.text().contains("• Server: Nepal\n• Refer Code:   \n\n📅"));
    }

    #[test]
    fn values_are_inserted_verbatim() {
        let form = valid_form().with_value(FieldName::TeamName, "R&D <Squad> 100%");
        let msg = compose(&FormSnapshot::capture(&form), &fixed_now());
        assert!(msg.text().contains("• Team Name: R&D <Squad> 100%\n"));
    }

    #[test]
    fn composition_is_deterministic_for_a_fixed_clock() {
        let snap = FormSnapshot::capture(&valid_form());
        assert_eq!(compose(&snap, &fixed_now()), compose(&snap, &fixed_now()));
    }
}
