//! Companion process: polls the stats API and streams scoreboard messages to
//! the display over stdout, taking requests on stdin.

mod client;
pub mod clock;
pub mod plays;
pub mod schedule;
mod source;

pub use client::{FetchError, StatsClient};
pub use source::{ScoreSource, StatsSource};

use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::time::{interval, MissedTickBehavior};

use crate::config::CompanionConfig;
use crate::ipc::{decode_line, encode_line, CompanionMessage, CompanionRequest, ProtocolError};
use crate::shutdown::ShutdownHandle;
use crate::ui::scoreboard::GameId;

#[derive(Debug, Error)]
pub enum CompanionError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("Companion I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the companion on this process's stdin/stdout until the display hangs
/// up or `shutdown` fires.
pub async fn run(config: CompanionConfig, shutdown: ShutdownHandle) -> Result<(), CompanionError> {
    let source = StatsSource::new(StatsClient::new(&config)?);
    let poll = Duration::from_secs(config.poll_interval_seconds);
    tracing::info!(base_url = %config.base_url, poll_seconds = config.poll_interval_seconds, "companion started");
    serve(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        &source,
        poll,
        &shutdown,
    )
    .await
}

/// What the companion is currently showing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Watch {
    offset: i64,
    game: Option<GameId>,
}

/// Request/poll loop over arbitrary streams.
///
/// Each `fetch_games` re-targets the day, stops watching any game and
/// restarts the poll timer. Each `fetch_events` starts watching that game.
/// Every poll tick refreshes the day and the watched game. Fetch failures
/// are logged and the loop carries on; a closed `reader` or a failed write
/// ends it.
pub async fn serve<R, W, S>(
    reader: R,
    mut writer: W,
    source: &S,
    poll: Duration,
    shutdown: &ShutdownHandle,
) -> Result<(), CompanionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: ScoreSource,
{
    let mut lines = reader.lines();
    let mut ticker = interval(poll);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The display asks for the first schedule itself.
    ticker.reset();
    let mut watch = Watch::default();

    loop {
        tokio::select! {
            _ = shutdown.wait() => {
                tracing::info!("companion shutting down");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("display closed the request stream");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let request = match decode_line::<CompanionRequest>(&line) {
                    Ok(request) => request,
                    Err(err) => {
                        tracing::warn!(error = %err, %line, "rejected display request");
                        continue;
                    }
                };
                tracing::debug!(?request, "display request");
                match request {
                    CompanionRequest::FetchGames { offset } => {
                        watch = Watch { offset, game: None };
                        ticker.reset();
                        send_games(&mut writer, source, watch.offset).await?;
                    }
                    CompanionRequest::FetchEvents { game_id } => {
                        watch.game = Some(game_id);
                        send_events(&mut writer, source, game_id).await?;
                    }
                }
            }
            _ = ticker.tick() => {
                tracing::debug!(?watch, "poll tick");
                send_games(&mut writer, source, watch.offset).await?;
                if let Some(game_id) = watch.game {
                    send_events(&mut writer, source, game_id).await?;
                }
            }
        }
    }
    Ok(())
}

async fn send_games<W, S>(writer: &mut W, source: &S, offset: i64) -> Result<(), CompanionError>
where
    W: AsyncWrite + Unpin,
    S: ScoreSource,
{
    match source.games(offset).await {
        Ok(messages) => send_all(writer, &messages).await,
        Err(err) => {
            tracing::warn!(error = %err, offset, "schedule fetch failed");
            Ok(())
        }
    }
}

async fn send_events<W, S>(writer: &mut W, source: &S, game_id: GameId) -> Result<(), CompanionError>
where
    W: AsyncWrite + Unpin,
    S: ScoreSource,
{
    match source.events(game_id).await {
        Ok(messages) => send_all(writer, &messages).await,
        Err(err) => {
            tracing::warn!(error = %err, game_id, "live feed fetch failed");
            Ok(())
        }
    }
}

async fn send_all<W: AsyncWrite + Unpin>(
    writer: &mut W,
    messages: &[CompanionMessage],
) -> Result<(), CompanionError> {
    for message in messages {
        writer.write_all(encode_line(message)?.as_bytes()).await?;
    }
    writer.flush().await?;
    Ok(())
}
