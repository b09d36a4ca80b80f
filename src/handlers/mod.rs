//! Command handlers
//!
//! Line-oriented front end: parses each input line into a [`Command`],
//! dispatches it against the [`ContestState`] and writes the resulting lines.

pub mod handler;
pub mod request;
pub mod response;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufWriter};

use crate::{models::RankingEntry, state::ContestState};

pub use handler::{handle, HandlerOutput};
pub use request::Command;

/// Process commands until END or end of input.
///
/// Returns the final standings if END was reached. Lines that fail to parse
/// are logged and skipped.
pub async fn process_commands<R, W>(
    state: &mut ContestState,
    reader: R,
    writer: W,
) -> anyhow::Result<Option<Vec<RankingEntry>>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut out = BufWriter::new(writer);
    let mut line_number = 0usize;
    let mut standings = None;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(line = line_number, "Skipping malformed command: {}", e);
                continue;
            }
        };

        let output = handle(state, command);
        for text in &output.lines {
            out.write_all(text.as_bytes()).await?;
            out.write_all(b"\n").await?;
        }

        if output.standings.is_some() {
            standings = output.standings;
            break;
        }
    }

    out.flush().await?;
    tracing::debug!(lines = line_number, "Input processed");
    Ok(standings)
}
