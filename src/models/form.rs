// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Live form values and the snapshot captured on submit.

use std::collections::BTreeMap;

use crate::models::fields::FieldName;

/// Province options offered by the `province` select.
pub const PROVINCES: &[&str] = &[
    "Koshi",
    "Madhesh",
    "Bagmati",
    "Gandaki",
    "Lumbini",
    "Karnali",
    "Sudurpashchim",
];

/// Game server options offered by the `server` select.
pub const SERVERS: &[&str] = &["Nepal", "India", "Bangladesh", "Singapore"];

/// Mutually exclusive registration types (the `registrationType` radio group).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationType {
    Solo,
    Duo,
    Squad,
}

impl RegistrationType {
    pub const ALL: [RegistrationType; 3] = [Self::Solo, Self::Duo, Self::Squad];

    /// Value submitted for the radio button.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solo => "Solo",
            Self::Duo => "Duo",
            Self::Squad => "Squad",
        }
    }
}

/// Current values of every input. Passed explicitly to validators and composer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<FieldName, String>,
    pub registration_type: Option<RegistrationType>,
    pub accept_terms: bool,
}

impl FormState {
    /// Raw (untrimmed) value of a field; empty when never edited.
    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Builder-style setter, mostly handy for tests and prefilled forms.
    pub fn with_value(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set_value(field, value);
        self
    }

    /// Clear every input back to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Key -> raw value mapping captured at submission time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: BTreeMap<&'static str, String>,
}

impl FormSnapshot {
    /// Capture all current values, keyed by their wire names.
    ///
    /// `acceptTerms` is present (as `on`) only when checked, mirroring how a
    /// browser serializes an unchecked checkbox.
    pub fn capture(form: &FormState) -> Self {
        let mut values: BTreeMap<&'static str, String> = FieldName::ALL
            .into_iter()
            .map(|f| (f.key(), form.value(f).to_string()))
            .collect();
        values.insert(
            "registrationType",
            form.registration_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
        );
        if form.accept_terms {
            values.insert("acceptTerms", "on".to_string());
        }
        Self { values }
    }

    /// Value for a wire key, empty when absent.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Wire keys present in the snapshot, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }
}
