//! Live provider implementation backed by the NBA Stats API.
//!
//! The stats endpoints all answer in the same envelope shape: a list of named
//! result sets, each a header row plus positional value rows. Decoding is
//! kept in free functions so it can be exercised without a network.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::api::{PlayerId, PlayerInfo, SeasonId};
use crate::models::{ShotEvent, ZoneRange};

use super::error::{ProviderError, ProviderResult};
use super::{LeagueZoneAverage, SeasonShotChart, ShotDataProvider};

const BASE_URL: &str = "https://stats.nba.com/stats";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) shotcharts/0.1";
const REFERER: &str = "https://stats.nba.com/";
/// Season parameter required by the directory endpoint; the full historical
/// directory is returned regardless.
const DIRECTORY_SEASON: &str = "2024-25";

/// NBA Stats API client.
pub struct NbaStatsProvider {
    client: reqwest::Client,
    base_url: String,
}

impl NbaStatsProvider {
    pub fn new() -> ProviderResult<Self> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> ProviderResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ProviderError::upstream(format!("failed to build HTTP client: {e}")))?;
        Ok(NbaStatsProvider {
            client,
            base_url: base_url.into(),
        })
    }

    async fn fetch(&self, endpoint: &str, query: &[(&str, String)]) -> ProviderResult<StatsEnvelope> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .header("Referer", REFERER)
            .query(query)
            .send()
            .await
            .map_err(|e| ProviderError::upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::upstream(format!(
                "{endpoint} answered {status}"
            )));
        }

        response
            .json::<StatsEnvelope>()
            .await
            .map_err(|e| ProviderError::decode(e.to_string()))
    }

    /// Career rows for a player; the empty career of an unknown id maps to
    /// `PlayerNotFound`.
    async fn career_rows(&self, player: PlayerId) -> ProviderResult<Vec<(SeasonId, i64)>> {
        let envelope = self
            .fetch(
                "playercareerstats",
                &[
                    ("PlayerID", player.value().to_string()),
                    ("PerMode", "Totals".to_string()),
                ],
            )
            .await?;
        let rows = decode_career_rows(envelope.result_set("SeasonTotalsRegularSeason")?)?;
        if rows.is_empty() {
            return Err(ProviderError::PlayerNotFound { player_id: player });
        }
        Ok(rows)
    }
}

#[async_trait]
impl ShotDataProvider for NbaStatsProvider {
    async fn list_players(&self) -> ProviderResult<Vec<PlayerInfo>> {
        let envelope = self
            .fetch(
                "commonallplayers",
                &[
                    ("IsOnlyCurrentSeason", "0".to_string()),
                    ("LeagueID", "00".to_string()),
                    ("Season", DIRECTORY_SEASON.to_string()),
                ],
            )
            .await?;
        decode_player_rows(envelope.result_set("CommonAllPlayers")?)
    }

    async fn career_seasons(&self, player: PlayerId) -> ProviderResult<Vec<SeasonId>> {
        let rows = self.career_rows(player).await?;
        let mut seasons: Vec<SeasonId> = Vec::new();
        for (season, _team) in rows {
            if !seasons.contains(&season) {
                seasons.push(season);
            }
        }
        // Season ids sort lexicographically; most recent first.
        seasons.sort_by(|a, b| b.as_str().cmp(a.as_str()));
        Ok(seasons)
    }

    async fn season_shot_chart(
        &self,
        player: PlayerId,
        season: &SeasonId,
    ) -> ProviderResult<SeasonShotChart> {
        let rows = self.career_rows(player).await?;
        let team_id = rows
            .iter()
            .find(|(s, _)| s == season)
            .map(|(_, team)| *team)
            .ok_or_else(|| ProviderError::SeasonNotPlayed {
                player_id: player,
                season: season.clone(),
            })?;

        let envelope = self
            .fetch(
                "shotchartdetail",
                &[
                    ("ContextMeasure", "FGA".to_string()),
                    ("SeasonType", "Regular Season".to_string()),
                    ("LeagueID", "00".to_string()),
                    ("PlayerID", player.value().to_string()),
                    ("TeamID", team_id.to_string()),
                    ("Season", season.to_string()),
                ],
            )
            .await?;

        let shots = decode_shot_rows(envelope.result_set("Shot_Chart_Detail")?)?;
        let league = decode_league_rows(envelope.result_set("LeagueAverages")?)?;
        Ok(SeasonShotChart { shots, league })
    }
}

// =============================================================================
// Envelope decoding
// =============================================================================

#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    #[serde(rename = "resultSets")]
    result_sets: Vec<ResultSet>,
}

#[derive(Debug, Deserialize)]
struct ResultSet {
    name: String,
    headers: Vec<String>,
    #[serde(rename = "rowSet")]
    row_set: Vec<Vec<Value>>,
}

impl StatsEnvelope {
    fn result_set(&self, name: &str) -> ProviderResult<&ResultSet> {
        self.result_sets
            .iter()
            .find(|rs| rs.name == name)
            .ok_or_else(|| ProviderError::decode(format!("missing result set {name:?}")))
    }
}

impl ResultSet {
    fn column(&self, name: &str) -> ProviderResult<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ProviderError::decode(format!("missing column {name:?}")))
    }
}

fn cell_str(row: &[Value], idx: usize) -> ProviderResult<&str> {
    row.get(idx)
        .and_then(Value::as_str)
        .ok_or_else(|| ProviderError::decode(format!("expected string in column {idx}")))
}

fn cell_i64(row: &[Value], idx: usize) -> ProviderResult<i64> {
    row.get(idx)
        .and_then(Value::as_i64)
        .ok_or_else(|| ProviderError::decode(format!("expected integer in column {idx}")))
}

fn cell_f64(row: &[Value], idx: usize) -> ProviderResult<f64> {
    row.get(idx)
        .and_then(Value::as_f64)
        .ok_or_else(|| ProviderError::decode(format!("expected number in column {idx}")))
}

fn decode_player_rows(rs: &ResultSet) -> ProviderResult<Vec<PlayerInfo>> {
    let id_col = rs.column("PERSON_ID")?;
    let name_col = rs.column("DISPLAY_FIRST_LAST")?;
    rs.row_set
        .iter()
        .map(|row| {
            Ok(PlayerInfo {
                player_id: PlayerId::new(cell_i64(row, id_col)?),
                full_name: cell_str(row, name_col)?.to_string(),
            })
        })
        .collect()
}

fn decode_career_rows(rs: &ResultSet) -> ProviderResult<Vec<(SeasonId, i64)>> {
    let season_col = rs.column("SEASON_ID")?;
    let team_col = rs.column("TEAM_ID")?;
    rs.row_set
        .iter()
        .map(|row| {
            Ok((
                SeasonId::new(cell_str(row, season_col)?),
                cell_i64(row, team_col)?,
            ))
        })
        .collect()
}

fn decode_shot_rows(rs: &ResultSet) -> ProviderResult<Vec<ShotEvent>> {
    let x_col = rs.column("LOC_X")?;
    let y_col = rs.column("LOC_Y")?;
    let dist_col = rs.column("SHOT_DISTANCE")?;
    let made_col = rs.column("SHOT_MADE_FLAG")?;
    let action_col = rs.column("ACTION_TYPE")?;
    let zone_col = rs.column("SHOT_ZONE_RANGE")?;
    rs.row_set
        .iter()
        .map(|row| {
            let zone = ZoneRange::from_label(cell_str(row, zone_col)?)?;
            Ok(ShotEvent {
                x: cell_f64(row, x_col)?,
                y: cell_f64(row, y_col)?,
                distance_ft: cell_i64(row, dist_col)?.max(0) as u32,
                made: cell_i64(row, made_col)? != 0,
                action_type: cell_str(row, action_col)?.to_string(),
                zone,
            })
        })
        .collect()
}

/// League rows arrive split by finer zone areas; sum them per distance zone.
fn decode_league_rows(rs: &ResultSet) -> ProviderResult<Vec<LeagueZoneAverage>> {
    let zone_col = rs.column("SHOT_ZONE_RANGE")?;
    let fgm_col = rs.column("FGM")?;
    let fga_col = rs.column("FGA")?;

    let mut made = [0u32; 5];
    let mut attempted = [0u32; 5];
    for row in &rs.row_set {
        let zone = ZoneRange::from_label(cell_str(row, zone_col)?)?;
        made[zone.index()] += cell_i64(row, fgm_col)?.max(0) as u32;
        attempted[zone.index()] += cell_i64(row, fga_col)?.max(0) as u32;
    }

    Ok(ZoneRange::ALL
        .iter()
        .map(|&zone| LeagueZoneAverage {
            zone,
            made: made[zone.index()],
            attempted: attempted[zone.index()],
        })
        .collect())
}
