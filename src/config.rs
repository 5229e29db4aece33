// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Compile-time settings for the registration desk.

/// Host of the messaging service that receives registrations.
pub const MESSAGING_HOST: &str = "wa.me";

/// Phone number (international format, digits only) of the tournament desk.
pub const DESTINATION_ID: &str = "9779766115626";

/// Youngest age allowed to register.
pub const MIN_PLAYER_AGE: u32 = 13;

/// Lifetime of a transient error notice, in seconds.
pub const ERROR_NOTICE_TTL_SECS: i64 = 5;

/// Organizer name printed in the footer of every registration message.
pub const ORGANIZER: &str = "Taigours E-Sports Tournament";

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initial and minimum window size in logical pixels.
pub const WINDOW_SIZE: [f32; 2] = [720.0, 860.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [480.0, 520.0];
