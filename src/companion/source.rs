use std::future::Future;

use chrono::Local;

use crate::ipc::CompanionMessage;
use crate::ui::scoreboard::GameId;

use super::client::{FetchError, StatsClient};
use super::clock::{date_label, schedule_date, time_string};
use super::plays::event_messages;
use super::schedule::game_messages;

/// Where the companion gets its messages from.
pub trait ScoreSource {
    /// Messages for the schedule `offset` days from today.
    fn games(
        &self,
        offset: i64,
    ) -> impl Future<Output = Result<Vec<CompanionMessage>, FetchError>> + Send;

    /// Messages for the scoring plays of one game.
    fn events(
        &self,
        game_id: GameId,
    ) -> impl Future<Output = Result<Vec<CompanionMessage>, FetchError>> + Send;
}

/// Live stats API, with times in the machine's local zone.
pub struct StatsSource {
    client: StatsClient,
}

impl StatsSource {
    pub fn new(client: StatsClient) -> Self {
        Self { client }
    }
}

impl ScoreSource for StatsSource {
    async fn games(&self, offset: i64) -> Result<Vec<CompanionMessage>, FetchError> {
        let now = Local::now();
        let date = schedule_date(now.date_naive(), offset);
        let schedule = self.client.schedule(date).await?;
        Ok(game_messages(
            &schedule,
            offset,
            now.offset(),
            &time_string(&now),
            &date_label(date),
        ))
    }

    async fn events(&self, game_id: GameId) -> Result<Vec<CompanionMessage>, FetchError> {
        let feed = self.client.live_feed(game_id).await?;
        Ok(event_messages(game_id, &feed))
    }
}
