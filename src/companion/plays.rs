//! Live feed payload and its mapping onto `add_event` messages.

use serde::Deserialize;

use crate::ipc::CompanionMessage;
use crate::ui::scoreboard::GameId;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveFeed {
    #[serde(default)]
    pub live_data: LiveData,
}

#[derive(Debug, Default, Deserialize)]
pub struct LiveData {
    #[serde(default)]
    pub plays: Plays,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plays {
    #[serde(default)]
    pub all_plays: Vec<Play>,
    /// Indices into `all_plays`.
    #[serde(default)]
    pub scoring_plays: Vec<usize>,
}

#[derive(Debug, Deserialize)]
pub struct Play {
    #[serde(default)]
    pub players: Vec<Participant>,
    pub about: About,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub player: Person,
    pub player_type: String,
    #[serde(default)]
    pub season_total: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub event_idx: u64,
    #[serde(default)]
    pub period_time: String,
    #[serde(default)]
    pub ordinal_num: String,
    #[serde(default)]
    pub goals: Goals,
}

#[derive(Debug, Default, Deserialize)]
pub struct Goals {
    #[serde(default)]
    pub away: u32,
    #[serde(default)]
    pub home: u32,
}

const SCORER: &str = "Scorer";
const ASSIST: &str = "Assist";
const UNASSISTED: &str = "Unassisted";

/// One `add_event` per scoring play, in game order.
pub fn event_messages(game_id: GameId, feed: &LiveFeed) -> Vec<CompanionMessage> {
    let plays = &feed.live_data.plays;
    plays
        .scoring_plays
        .iter()
        .filter_map(|&index| {
            let play = plays.all_plays.get(index);
            if play.is_none() {
                tracing::debug!(game_id, index, "scoring play index out of range");
            }
            play
        })
        .map(|play| CompanionMessage::AddEvent {
            game_id,
            id: play.about.event_idx,
            scorer: scorer(play),
            assists: assists(play),
            game_state: format!("{} - {}", play.about.goals.away, play.about.goals.home),
            time: format!("{} {}", play.about.period_time, play.about.ordinal_num)
                .trim()
                .to_string(),
        })
        .collect()
}

fn scorer(play: &Play) -> String {
    play.players
        .iter()
        .find(|participant| participant.player_type == SCORER)
        .map(|participant| match participant.season_total {
            Some(total) => format!("{} ({total})", participant.player.full_name),
            None => participant.player.full_name.clone(),
        })
        .unwrap_or_default()
}

fn assists(play: &Play) -> String {
    let names: Vec<&str> = play
        .players
        .iter()
        .filter(|participant| participant.player_type == ASSIST)
        .map(|participant| participant.player.full_name.as_str())
        .collect();
    if names.is_empty() {
        UNASSISTED.to_string()
    } else {
        names.join(", ")
    }
}
