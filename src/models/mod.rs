// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Domain layer: the field table and form values shared between UI and logic.

pub mod fields;
pub mod form;
