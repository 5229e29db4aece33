// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

fn main() -> eframe::Result<()> {
    regdesk::app::init_logging();
    regdesk::app::run()
}
