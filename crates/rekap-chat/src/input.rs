// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Callback payload prefix carried by sheet menu buttons.
pub const SHEET_PAYLOAD: &str = "sheet:";

/// A classified text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Digits only: a sheet number from the menu. `None` when the digits do
    /// not fit a `usize`, which is still an (invalid) choice.
    Choice(Option<usize>),
    Yes,
    No,
    Other(String),
}

impl Input {
    /// Classify a raw text message.
    ///
    /// Digits-only text is always a [`Input::Choice`], never free text, even
    /// when no menu is showing.
    pub fn parse(text: &str) -> Input {
        if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            return Input::Choice(text.parse().ok());
        }

        match text.trim().to_lowercase().as_str() {
            "ya" => Input::Yes,
            "tidak" => Input::No,
            other => Input::Other(other.to_string()),
        }
    }

    /// Decode a sheet button payload (`sheet:{n}`).
    pub fn from_payload(payload: &str) -> Option<Input> {
        let number = payload.strip_prefix(SHEET_PAYLOAD)?;
        Some(Input::Choice(number.parse().ok()))
    }
}

pub fn sheet_payload(number: usize) -> String {
    format!("{SHEET_PAYLOAD}{number}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
