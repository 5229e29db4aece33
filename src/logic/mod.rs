// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Pure registration logic, free of UI and environment access.

pub mod link;
pub mod message;
pub mod submission;
pub mod validation;
