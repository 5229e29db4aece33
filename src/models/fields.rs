// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Static field table for the registration form.
//! Every validator and view looks fields up here so rules are declared once.

use crate::config::MIN_PLAYER_AGE;

/// Named text/select inputs of the registration form.
///
/// The wire keys (`fullName`, `freeFireUID`, ...) are the contract with the
/// view layer and the outbound message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FullName,
    InGameName,
    FreeFireUid,
    WhatsappNumber,
    Email,
    DateOfBirth,
    Province,
    City,
    TeamName,
    Server,
    ReferCode,
}

impl FieldName {
    /// All fields in form order.
    pub const ALL: [FieldName; 11] = [
        FieldName::FullName,
        FieldName::InGameName,
        FieldName::FreeFireUid,
        FieldName::WhatsappNumber,
        FieldName::Email,
        FieldName::DateOfBirth,
        FieldName::Province,
        FieldName::City,
        FieldName::TeamName,
        FieldName::Server,
        FieldName::ReferCode,
    ];

    /// Wire key used by form markup and snapshots.
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::InGameName => "inGameName",
            Self::FreeFireUid => "freeFireUID",
            Self::WhatsappNumber => "whatsappNumber",
            Self::Email => "email",
            Self::DateOfBirth => "dateOfBirth",
            Self::Province => "province",
            Self::City => "city",
            Self::TeamName => "teamName",
            Self::Server => "server",
            Self::ReferCode => "referCode",
        }
    }

    /// Reverse lookup of [`FieldName::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Static definition backing this field.
    pub fn definition(self) -> &'static FieldDefinition {
        // FIELDS is declared in the same order as ALL.
        &FIELDS[self as usize]
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        self.definition().label
    }

    /// Lower-case subject used at the start of length messages ("Full name must ...").
    pub fn subject(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::InGameName => "In-game name",
            Self::TeamName => "Team name",
            other => other.label(),
        }
    }

    /// Noun used by pattern mismatch messages ("Please enter a valid ...").
    pub fn pattern_noun(self) -> &'static str {
        match self {
            Self::WhatsappNumber => "WhatsApp number",
            Self::Email => "email address",
            other => other.label(),
        }
    }
}

/// Label for a wire key, falling back to the key itself for unknown inputs.
pub fn label_for_key(key: &str) -> &str {
    FieldName::from_key(key).map(FieldName::label).unwrap_or(key)
}

/// Format rule applied to a trimmed, non-empty value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Only the required check applies.
    Any,
    /// At least `n` characters.
    MinLength(usize),
    /// Between `min` and `max` characters, inclusive.
    LengthRange { min: usize, max: usize },
    /// Optional `+`, then 10-15 digits, spaces, dashes or parentheses.
    Phone,
    /// `local@domain.tld` without whitespace.
    Email,
    /// ISO date whose calendar age is at least the given number of years.
    MinAge(u32),
}

/// Immutable description of one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: FieldName,
    pub label: &'static str,
    pub required: bool,
    pub rule: Rule,
}

const fn def(name: FieldName, label: &'static str, required: bool, rule: Rule) -> FieldDefinition {
    FieldDefinition {
        name,
        label,
        required,
        rule,
    }
}

/// Field table in form order.
pub static FIELDS: [FieldDefinition; 11] = [
    def(FieldName::FullName, "Full Name", true, Rule::MinLength(2)),
    def(FieldName::InGameName, "In-Game Name", true, Rule::MinLength(2)),
    def(
        FieldName::FreeFireUid,
        "Free Fire UID",
        true,
        Rule::LengthRange { min: 8, max: 12 },
    ),
    def(FieldName::WhatsappNumber, "WhatsApp Number", true, Rule::Phone),
    def(FieldName::Email, "Email", true, Rule::Email),
    def(
        FieldName::DateOfBirth,
        "Date of Birth",
        true,
        Rule::MinAge(MIN_PLAYER_AGE),
    ),
    def(FieldName::Province, "Province", true, Rule::Any),
    def(FieldName::City, "City/Village", true, Rule::Any),
    def(FieldName::TeamName, "Team Name", true, Rule::MinLength(2)),
    def(FieldName::Server, "Server", true, Rule::Any),
    def(FieldName::ReferCode, "Refer Code", false, Rule::Any),
];
