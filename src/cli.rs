//! Command implementations behind the `rekap` binary.
//!
//! Each command writes to a caller-supplied writer so it can be exercised
//! without spawning the binary.

use anyhow::Context;
use rekap_chat::{Conversation, Inbound, SessionId, Stage};
use rekap_sheets::Workbook;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Session id used by the local `chat` command.
pub const LOCAL_SESSION: &str = "local";

/// `rekap sheets`: numbered list of sheet names.
pub fn sheets(workbook: &Workbook, out: &mut impl Write) -> anyhow::Result<()> {
    for (i, name) in workbook.sheet_names().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, name)?;
    }
    Ok(())
}

/// `rekap report`: render one sheet. Structural failures become errors;
/// an empty report is printed like any other.
pub fn report(
    workbook: &Workbook,
    choice: &str,
    scan_rows: usize,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let sheet = workbook
        .select(choice)
        .with_context(|| format!("cannot pick sheet from {}", workbook.name()))?;
    let recap = rekap_core::recap(sheet, scan_rows)
        .with_context(|| format!("cannot build report for sheet {}", sheet.name))?;

    writeln!(out, "Rekap {}\n", recap.sheet)?;
    write!(out, "{}", recap.text)?;
    if recap.is_empty() {
        writeln!(out)?;
    }
    Ok(())
}

/// `rekap chat`: replay the chat dialog over line-based I/O. The workbook
/// counts as the upload; each input line is one text message. Ends at EOF,
/// when the user answers `tidak`, or when the session sat idle past
/// `idle_timeout` and was evicted.
pub fn chat(
    workbook: Workbook,
    scan_rows: usize,
    idle_timeout: Duration,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let conversation = Conversation::new(scan_rows);
    let id = SessionId::from(LOCAL_SESSION);

    let replies = conversation.handle(&id, Inbound::Document(workbook));
    for reply in &replies {
        writeln!(out, "{}\n", reply.text)?;
    }

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if conversation.evict_idle(idle_timeout) > 0 {
            tracing::info!("local session expired");
        }
        for reply in conversation.handle(&id, Inbound::Text(line)) {
            writeln!(out, "{}\n", reply.text)?;
        }
        if conversation.sessions().stage(&id) == Stage::Idle {
            break;
        }
    }
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
