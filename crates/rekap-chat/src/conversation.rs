//! The report dialog state machine.
//!
//! [`Conversation::handle`] never blocks on I/O: the workbook arrives already
//! opened inside [`Inbound::Document`], and the engine runs synchronously on
//! the caller's thread against that session's own copy.

use crate::input::{sheet_payload, Input};
use crate::messages;
use crate::session::{Session, SessionId, Sessions, Stage};
use rekap_core::header::DEFAULT_SCAN_ROWS;
use rekap_sheets::Workbook;
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Something the user sent.
#[derive(Debug)]
pub enum Inbound {
    /// An uploaded workbook, already opened by the transport.
    Document(Workbook),
    Text(String),
    /// An inline button press carrying its callback payload.
    Button(String),
}

/// An inline button attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub payload: String,
}

/// Something to send back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub markdown: bool,
    pub buttons: Vec<Button>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: false,
            buttons: Vec::new(),
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            markdown: true,
            ..Self::plain(text)
        }
    }

    fn with_buttons(mut self, buttons: Vec<Button>) -> Self {
        self.buttons = buttons;
        self
    }
}

// ---------------------------------------------------------------------------
// Conversation
// ---------------------------------------------------------------------------

pub struct Conversation {
    sessions: Sessions,
    scan_rows: usize,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_ROWS)
    }
}

impl Conversation {
    pub fn new(scan_rows: usize) -> Self {
        Self {
            sessions: Sessions::new(),
            scan_rows,
        }
    }

    pub fn sessions(&self) -> &Sessions {
        &self.sessions
    }

    /// Drop sessions idle for longer than `max_idle`.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        self.sessions.evict_idle(max_idle)
    }

    /// Advance `id`'s dialog by one inbound event. An empty reply list means
    /// the event was ignored in the session's current stage.
    #[tracing::instrument(skip_all, fields(session = %id))]
    pub fn handle(&self, id: &SessionId, inbound: Inbound) -> Vec<Reply> {
        match inbound {
            Inbound::Document(workbook) => self.on_document(id, workbook),
            Inbound::Text(text) => match Input::parse(&text) {
                Input::Choice(choice) => self.on_choice(id, choice),
                input => self.on_text(id, input),
            },
            Inbound::Button(payload) => match Input::from_payload(&payload) {
                Some(Input::Choice(choice)) => self.on_choice(id, choice),
                _ => Vec::new(),
            },
        }
    }

    fn on_document(&self, id: &SessionId, workbook: Workbook) -> Vec<Reply> {
        tracing::info!(workbook = %workbook.name(), "workbook received");
        let workbook = Arc::new(workbook);
        self.sessions.with(id, |s| {
            s.clear();
            s.workbook = Some(workbook.clone());
        });
        vec![self.menu(id, &workbook)]
    }

    fn menu(&self, id: &SessionId, workbook: &Workbook) -> Reply {
        self.sessions.with(id, |s| s.stage = Stage::AwaitingSheet);
        let names = workbook.sheet_names();
        let buttons = names
            .iter()
            .enumerate()
            .map(|(i, name)| Button {
                label: name.to_string(),
                payload: sheet_payload(i + 1),
            })
            .collect();
        Reply::markdown(messages::sheet_menu(&names)).with_buttons(buttons)
    }

    fn on_choice(&self, id: &SessionId, choice: Option<usize>) -> Vec<Reply> {
        let Some(workbook) = self.awaiting(id, Stage::AwaitingSheet) else {
            return Vec::new();
        };
        let Some(sheet) = choice.and_then(|n| workbook.nth(n).ok()) else {
            return vec![Reply::plain(messages::INVALID_CHOICE)];
        };

        match rekap_core::recap(sheet, self.scan_rows) {
            Ok(recap) => {
                self.sessions
                    .with(id, |s| s.stage = Stage::AwaitingContinue);
                tracing::info!(sheet = %sheet.name, empty = recap.is_empty(), "report sent");
                vec![
                    Reply::markdown(messages::report(&sheet.name, &recap.text)),
                    Reply::markdown(messages::CONTINUE_PROMPT),
                ]
            }
            Err(err) => {
                tracing::info!(sheet = %sheet.name, error = %err, "sheet rejected");
                vec![Reply::plain(messages::report_error(&sheet.name, &err))]
            }
        }
    }

    fn on_text(&self, id: &SessionId, input: Input) -> Vec<Reply> {
        let Some(workbook) = self.awaiting(id, Stage::AwaitingContinue) else {
            return Vec::new();
        };
        match input {
            Input::Yes => vec![self.menu(id, &workbook)],
            Input::No => {
                self.sessions.with(id, Session::clear);
                vec![Reply::plain(messages::DONE)]
            }
            _ => vec![Reply::markdown(messages::YES_OR_NO)],
        }
    }

    /// The session's workbook, if the session is at `stage`.
    fn awaiting(&self, id: &SessionId, stage: Stage) -> Option<Arc<Workbook>> {
        self.sessions
            .with_existing(id, |s| {
                if s.stage == stage {
                    s.workbook.clone()
                } else {
                    None
                }
            })
            .flatten()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
