// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Taigours E-Sports

//! Root Model-View-Update kernel wiring form state, messages, and commands.

use chrono::{DateTime, Local, NaiveDate, TimeDelta};
use url::Url;

use crate::config::ERROR_NOTICE_TTL_SECS;
use crate::logic::link::LinkOpener;
use crate::logic::submission::{SubmitOutcome, submit};
use crate::logic::validation::{ValidationReport, validate_field};
use crate::models::fields::FieldName;
use crate::models::form::{FormState, RegistrationType};

/// Generic notice raised when a submit attempt fails validation.
pub const FIX_ERRORS_NOTICE: &str = "Please fix all errors before submitting.";

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Current input values.
    pub form: FormState,
    /// Messages attached to individual inputs.
    pub errors: ValidationReport,
    /// Transient error notices, oldest first.
    pub notices: Vec<Notice>,
    /// Whether the success acknowledgment is showing.
    pub success_open: bool,
    /// Latest status line.
    pub status: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Auto-dismissing error notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub raised_at: DateTime<Local>,
}

impl Notice {
    pub fn expires_at(&self) -> DateTime<Local> {
        self.raised_at + TimeDelta::seconds(ERROR_NOTICE_TTL_SECS)
    }
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    /// Input handler: store the value and clear the field's message.
    FieldChanged { field: FieldName, value: String },
    /// Blur handler: validate just this field.
    FieldBlurred { field: FieldName, today: NaiveDate },
    RegistrationTypeSelected(RegistrationType),
    TermsToggled(bool),
    SubmitRequested { now: DateTime<Local> },
    /// Clock tick used to expire notices.
    Tick(DateTime<Local>),
    DismissSuccess,
    LinkOpened(Result<(), String>),
}

/// Commands represent side-effects executed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    OpenLink(Url),
}

/// Update the application model and enqueue commands.
///
/// This is the only place the model changes:
/// - `FieldChanged` stores the raw value and clears that field's message.
/// - `FieldBlurred` re-runs the field's rule and attaches or clears its message.
/// - `SubmitRequested` validates everything. On failure it attaches every
///   message and raises one auto-expiring notice. On success it enqueues
///   [`Command::OpenLink`], resets the form and opens the success modal
///   without waiting for the link to open.
/// - `Tick` drops notices older than the notice lifetime.
///
/// # Examples
///
/// ```
/// use chrono::Local;
/// use regdesk::mvu::{self, AppModel, Msg};
///
/// let mut model = AppModel::default();
/// let mut cmds = Vec::new();
/// mvu::update(&mut model, Msg::SubmitRequested { now: Local::now() }, &mut cmds);
///
/// // An empty form is rejected: nothing to open, one notice raised.
/// assert!(cmds.is_empty());
/// assert_eq!(model.notices.len(), 1);
/// assert!(!model.errors.is_valid());
/// ```
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::FieldChanged { field, value } => {
            model.form.set_value(field, value);
            model.errors.fields.remove(&field);
        }
        Msg::FieldBlurred { field, today } => {
            match validate_field(field, model.form.value(field), today) {
                Ok(()) => {
                    model.errors.fields.remove(&field);
                }
                Err(err) => {
                    tracing::debug!(field = field.key(), %err, "field rejected");
                    model.errors.fields.insert(field, err);
                }
            }
        }
        Msg::RegistrationTypeSelected(kind) => {
            model.form.registration_type = Some(kind);
            model.errors.registration_type = None;
        }
        Msg::TermsToggled(accepted) => {
            model.form.accept_terms = accepted;
            model.errors.terms = None;
        }
        Msg::SubmitRequested { now } => handle_submit(model, now, cmds),
        Msg::Tick(now) => model.notices.retain(|n| now < n.expires_at()),
        Msg::DismissSuccess => model.success_open = false,
        Msg::LinkOpened(Ok(())) => tracing::debug!("messaging link handed to browser"),
        Msg::LinkOpened(Err(err)) => {
            tracing::warn!(%err, "could not open messaging link");
            model.status = Some(format!("Could not open WhatsApp: {err}"));
        }
    }
}

/// Validate, compose and dispatch. Success does not wait for the link to open.
fn handle_submit(model: &mut AppModel, now: DateTime<Local>, cmds: &mut Vec<Command>) {
    match submit(&model.form, &now) {
        Ok(SubmitOutcome::Rejected(report)) => {
            tracing::debug!(errors = report.error_count(), "registration rejected");
            model.errors = report;
            raise_notice(model, FIX_ERRORS_NOTICE.to_string(), now);
        }
        Ok(SubmitOutcome::Accepted { message, link }) => {
            tracing::info!(
                registration_id = message.registration_id(),
                "registration composed"
            );
            cmds.push(Command::OpenLink(link));
            model.form.reset();
            model.errors = ValidationReport::default();
            model.success_open = true;
            model.status = Some(format!(
                "Registration {} sent to WhatsApp.",
                message.registration_id()
            ));
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to build messaging link");
            raise_notice(model, format!("{err:#}"), now);
        }
    }
}

fn raise_notice(model: &mut AppModel, message: String, now: DateTime<Local>) {
    model.notices.push(Notice {
        message,
        raised_at: now,
    });
}

/// Execute a command and return a resulting message.
///
/// Runs on a worker thread in the app. Opening errors come back as
/// `Msg::LinkOpened(Err(..))` with the full error chain flattened to text.
///
/// # Examples
///
/// ```
/// use regdesk::logic::link::{LinkOpener, destination_link};
/// use regdesk::mvu::{Command, Msg, run_command};
///
/// struct Offline;
///
/// impl LinkOpener for Offline {
///     fn open_link(&self, _url: &url::Url) -> anyhow::Result<()> {
///         anyhow::bail!("no browser available")
///     }
/// }
///
/// let link = destination_link("hello").unwrap();
/// let msg = run_command(Command::OpenLink(link), &Offline);
/// assert_eq!(msg, Msg::LinkOpened(Err("no browser available".into())));
/// ```
pub fn run_command(cmd: Command, opener: &dyn LinkOpener) -> Msg {
    match cmd {
        Command::OpenLink(url) => {
            Msg::LinkOpened(opener.open_link(&url).map_err(|e| format!("{e:#}")))
        }
    }
}
