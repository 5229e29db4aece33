// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Reusable egui components for the registration form.

pub mod field;
pub mod notices;

pub use field::FieldEvent;
