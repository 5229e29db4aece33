// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Tournament registration desk: validates player details and hands a
//! pre-filled registration message to WhatsApp.

pub mod app;
pub mod config;
pub mod logic;
pub mod models;
pub mod mvu;
pub mod ui;
