//! Narrative generation collaborator.
//!
//! The narrator is an injected capability: structured statistics in, freeform
//! text out. Failures are always masked with a fixed fallback string — a
//! missing narrative never fails the request that produced the chart.

use async_trait::async_trait;

use crate::models::{PlayerShotProfile, ZoneSlice};
use crate::routes::comparison::{HeadToHeadRow, LeagueComparisonData};

/// Substituted whenever the narrator fails.
pub const NARRATIVE_UNAVAILABLE: &str =
    "AI analysis is currently unavailable. Please try again later.";

/// Error type for narrative generation
#[derive(Debug, thiserror::Error)]
#[error("narrative generation failed: {message}")]
pub struct NarrativeError {
    pub message: String,
}

impl NarrativeError {
    pub fn new(message: impl Into<String>) -> Self {
        NarrativeError {
            message: message.into(),
        }
    }
}

/// Trait for the narrative-generation collaborator.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait Narrator: Send + Sync {
    /// Describe one player-season, optionally against the league baseline.
    async fn season_narrative(
        &self,
        profile: &PlayerShotProfile,
        comparison: &LeagueComparisonData,
    ) -> Result<String, NarrativeError>;

    /// Deliver a verdict on a two-player matchup.
    async fn matchup_narrative(
        &self,
        first: &PlayerShotProfile,
        second: &PlayerShotProfile,
        zones: &[HeadToHeadRow],
    ) -> Result<String, NarrativeError>;
}

/// Run the season narrator, masking any failure with the fallback string.
pub async fn season_or_fallback(
    narrator: &dyn Narrator,
    profile: &PlayerShotProfile,
    comparison: &LeagueComparisonData,
) -> String {
    match narrator.season_narrative(profile, comparison).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, player = %profile.player_name, "narrative generation failed");
            NARRATIVE_UNAVAILABLE.to_string()
        }
    }
}

/// Run the matchup narrator, masking any failure with the fallback string.
pub async fn matchup_or_fallback(
    narrator: &dyn Narrator,
    first: &PlayerShotProfile,
    second: &PlayerShotProfile,
    zones: &[HeadToHeadRow],
) -> String {
    match narrator.matchup_narrative(first, second, zones).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "comparison narrative generation failed");
            NARRATIVE_UNAVAILABLE.to_string()
        }
    }
}

// =============================================================================
// Prompt construction
// =============================================================================

fn pct(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn zone_line(slice: &ZoneSlice) -> String {
    format!(
        "{}: {}/{} ({})",
        slice.zone,
        slice.tally.made,
        slice.tally.attempted,
        pct(slice.tally.fg_pct)
    )
}

/// Build the season-analysis prompt.
///
/// Deterministic in its inputs; only zones with attempts are listed.
pub fn build_season_prompt(
    profile: &PlayerShotProfile,
    comparison: &LeagueComparisonData,
) -> String {
    let zone_summary: Vec<String> = profile
        .zones
        .iter()
        .filter(|s| s.tally.attempted > 0)
        .map(zone_line)
        .collect();

    let comparison_summary = if comparison.is_available() {
        comparison
            .rows
            .iter()
            .map(|row| {
                format!(
                    "{}: Player {} vs League {} ({}{})",
                    row.zone,
                    pct(row.player_pct),
                    pct(row.league_pct),
                    if row.diff_pct >= 0.0 { "+" } else { "" },
                    pct(row.diff_pct)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        "League comparison data not available".to_string()
    };

    format!(
        "You are an expert NBA analyst. Analyze the following shooting performance for {name} during the {season} season.\n\
         \n\
         **Overall Statistics:**\n\
         - Total Shots Attempted: {attempted}\n\
         - Shots Made: {made}\n\
         - Field Goal Percentage: {fg}\n\
         \n\
         **Zone-by-Zone Performance:**\n\
         {zones}\n\
         \n\
         **Comparison to League Average:**\n\
         {comparison}\n\
         \n\
         Please provide a CONCISE analysis (100-150 words maximum) covering:\n\
         \n\
         1. Overall shooting efficiency assessment (above/below league average)\n\
         2. Top 2 strengths (best performing zones)\n\
         3. Main weakness (lowest performing zone)\n\
         4. One key insight about their playing style\n\
         \n\
         Be direct and analytical. Focus only on the most important findings.",
        name = profile.player_name,
        season = profile.season,
        attempted = profile.overall.attempted,
        made = profile.overall.made,
        fg = pct(profile.overall.fg_pct),
        zones = zone_summary.join("\n"),
        comparison = comparison_summary,
    )
}

/// Build the matchup-verdict prompt.
pub fn build_matchup_prompt(
    first: &PlayerShotProfile,
    second: &PlayerShotProfile,
    zones: &[HeadToHeadRow],
) -> String {
    let zone_comparisons: Vec<String> = zones
        .iter()
        .map(|row| {
            format!(
                "{}: {} {} ({}/{}) vs {} {} ({}/{})",
                row.zone,
                first.player_name,
                pct(row.first.fg_pct),
                row.first.made,
                row.first.attempted,
                second.player_name,
                pct(row.second.fg_pct),
                row.second.made,
                row.second.attempted,
            )
        })
        .collect();

    format!(
        "You are an expert NBA analyst making a definitive judgment call. Compare these two players:\n\
         \n\
         **{name1} ({season1})**\n\
         - Total Shots: {attempted1}\n\
         - Made Shots: {made1}\n\
         - FG%: {fg1}\n\
         \n\
         **{name2} ({season2})**\n\
         - Total Shots: {attempted2}\n\
         - Made Shots: {made2}\n\
         - FG%: {fg2}\n\
         \n\
         **Zone-by-Zone Comparison:**\n\
         {zones}\n\
         \n\
         Provide a CONCISE, DEFINITIVE analysis (100-150 words maximum):\n\
         \n\
         1. **THE VERDICT**: Start with \"**{name1} is the better player**\" OR \"**{name2} is the better player**\". Make a clear choice based on their shooting performance.\n\
         2. **WHY THEY'RE BETTER**: Give 2-3 concrete reasons with percentages.\n\
         3. **THE KEY DIFFERENCE**: One sentence on what separates the winner from the loser.\n\
         \n\
         Be bold and decisive. Pick a winner and defend it. No hedging. CHOOSE ONE.",
        name1 = first.player_name,
        season1 = first.season,
        attempted1 = first.overall.attempted,
        made1 = first.overall.made,
        fg1 = pct(first.overall.fg_pct),
        name2 = second.player_name,
        season2 = second.season,
        attempted2 = second.overall.attempted,
        made2 = second.overall.made,
        fg2 = pct(second.overall.fg_pct),
        zones = zone_comparisons.join("\n"),
    )
}

// =============================================================================
// Local narrator
// =============================================================================

/// Deterministic narrator for local development and tests.
///
/// Produces a short factual summary from the same structured payload the live
/// narrator would see.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalNarrator;

#[async_trait]
impl Narrator for LocalNarrator {
    async fn season_narrative(
        &self,
        profile: &PlayerShotProfile,
        comparison: &LeagueComparisonData,
    ) -> Result<String, NarrativeError> {
        let attempted: Vec<&ZoneSlice> = profile
            .zones
            .iter()
            .filter(|s| s.tally.attempted > 0)
            .collect();
        let best = attempted
            .iter()
            .max_by(|a, b| a.tally.fg_pct.total_cmp(&b.tally.fg_pct));
        let worst = attempted
            .iter()
            .min_by(|a, b| a.tally.fg_pct.total_cmp(&b.tally.fg_pct));

        let mut text = format!(
            "{} shot {} ({}/{}) over the {} season.",
            profile.player_name,
            pct(profile.overall.fg_pct),
            profile.overall.made,
            profile.overall.attempted,
            profile.season,
        );
        if let (Some(best), Some(worst)) = (best, worst) {
            text.push_str(&format!(
                " Most efficient from {} ({}), least from {} ({}).",
                best.zone,
                pct(best.tally.fg_pct),
                worst.zone,
                pct(worst.tally.fg_pct),
            ));
        }
        if let Some(edge) = comparison
            .rows
            .iter()
            .max_by(|a, b| a.diff_pct.total_cmp(&b.diff_pct))
        {
            text.push_str(&format!(
                " Largest edge over the league: {} at {} vs {}.",
                edge.zone,
                pct(edge.player_pct),
                pct(edge.league_pct),
            ));
        }
        Ok(text)
    }

    async fn matchup_narrative(
        &self,
        first: &PlayerShotProfile,
        second: &PlayerShotProfile,
        _zones: &[HeadToHeadRow],
    ) -> Result<String, NarrativeError> {
        let (winner, loser) = if first.overall.fg_pct >= second.overall.fg_pct {
            (first, second)
        } else {
            (second, first)
        };
        Ok(format!(
            "{} is the better player: {} ({}/{}) against {}'s {} ({}/{}).",
            winner.player_name,
            pct(winner.overall.fg_pct),
            winner.overall.made,
            winner.overall.attempted,
            loser.player_name,
            pct(loser.overall.fg_pct),
            loser.overall.made,
            loser.overall.attempted,
        ))
    }
}

// =============================================================================
// Gemini narrator
// =============================================================================

#[cfg(feature = "gemini-narrator")]
pub use gemini::{GeminiConfig, GeminiNarrator};

#[cfg(feature = "gemini-narrator")]
mod gemini {
    use super::*;

    const GENERATE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
    const DEFAULT_MODEL: &str = "gemini-2.5-flash";

    /// Configuration for the Gemini narrator.
    #[derive(Debug, Clone)]
    pub struct GeminiConfig {
        pub api_key: String,
        pub model: String,
    }

    impl GeminiConfig {
        /// Read `GEMINI_API_KEY` (required) and `GEMINI_MODEL` (optional).
        pub fn from_env() -> Result<Self, NarrativeError> {
            let api_key = std::env::var("GEMINI_API_KEY")
                .map_err(|_| NarrativeError::new("GEMINI_API_KEY is not set"))?;
            let model =
                std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
            Ok(GeminiConfig { api_key, model })
        }
    }

    /// Narrator backed by the Gemini generateContent endpoint.
    pub struct GeminiNarrator {
        client: reqwest::Client,
        config: GeminiConfig,
    }

    impl GeminiNarrator {
        pub fn new(config: GeminiConfig) -> Result<Self, NarrativeError> {
            let client = reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .map_err(|e| NarrativeError::new(e.to_string()))?;
            Ok(GeminiNarrator { client, config })
        }

        pub fn from_env() -> Result<Self, NarrativeError> {
            Self::new(GeminiConfig::from_env()?)
        }

        async fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
            let url = format!(
                "{}/{}:generateContent?key={}",
                GENERATE_URL, self.config.model, self.config.api_key
            );
            let body = serde_json::json!({
                "contents": [{ "parts": [{ "text": prompt }] }]
            });

            let response = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| NarrativeError::new(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(NarrativeError::new(format!("Gemini answered {status}")));
            }

            let payload: serde_json::Value = response
                .json()
                .await
                .map_err(|e| NarrativeError::new(e.to_string()))?;
            payload["candidates"][0]["content"]["parts"][0]["text"]
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| NarrativeError::new("response carried no candidate text"))
        }
    }

    #[async_trait]
    impl Narrator for GeminiNarrator {
        async fn season_narrative(
            &self,
            profile: &PlayerShotProfile,
            comparison: &LeagueComparisonData,
        ) -> Result<String, NarrativeError> {
            self.generate(&build_season_prompt(profile, comparison)).await
        }

        async fn matchup_narrative(
            &self,
            first: &PlayerShotProfile,
            second: &PlayerShotProfile,
            zones: &[HeadToHeadRow],
        ) -> Result<String, NarrativeError> {
            self.generate(&build_matchup_prompt(first, second, zones)).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{PlayerId, PlayerInfo, SeasonId};
    use crate::models::{ShotEvent, ZoneRange};
    use crate::routes::comparison::LeagueComparisonRow;
    use crate::services::aggregate::aggregate_profile;

    fn create_test_profile(name: &str, shots: &[(ZoneRange, bool)]) -> PlayerShotProfile {
        let events: Vec<ShotEvent> = shots
            .iter()
            .map(|&(zone, made)| ShotEvent {
                x: 0.0,
                y: 50.0,
                distance_ft: 5,
                made,
                action_type: "Jump Shot".to_string(),
                zone,
            })
            .collect();
        let player = PlayerInfo {
            player_id: PlayerId::new(7),
            full_name: name.to_string(),
        };
        aggregate_profile(&player, &SeasonId::new("2020-21"), &events)
    }

    #[test]
    fn test_season_prompt_is_deterministic() {
        let profile = create_test_profile(
            "Avery Brooks",
            &[(ZoneRange::UnderEight, true), (ZoneRange::UnderEight, false)],
        );
        let comparison = LeagueComparisonData {
            rows: vec![LeagueComparisonRow {
                zone: ZoneRange::UnderEight,
                player_pct: 0.5,
                league_pct: 0.6,
                diff_pct: -0.1,
            }],
        };
        let a = build_season_prompt(&profile, &comparison);
        let b = build_season_prompt(&profile, &comparison);
        assert_eq!(a, b);
        assert!(a.contains("Avery Brooks"));
        assert!(a.contains("Less Than 8 ft.: 1/2 (50.0%)"));
        assert!(a.contains("Player 50.0% vs League 60.0% (-10.0%)"));
    }

    #[test]
    fn test_season_prompt_notes_missing_comparison() {
        let profile = create_test_profile("Avery Brooks", &[(ZoneRange::UnderEight, true)]);
        let prompt = build_season_prompt(&profile, &LeagueComparisonData::default());
        assert!(prompt.contains("League comparison data not available"));
    }

    #[test]
    fn test_matchup_prompt_lists_both_sides() {
        let first = create_test_profile("Avery Brooks", &[(ZoneRange::TwentyFourPlus, true)]);
        let second = create_test_profile("Dana Whitfield", &[(ZoneRange::UnderEight, false)]);
        let zones: Vec<HeadToHeadRow> = ZoneRange::ALL
            .iter()
            .map(|&zone| HeadToHeadRow {
                zone,
                first: first.zone(zone),
                second: second.zone(zone),
            })
            .collect();
        let prompt = build_matchup_prompt(&first, &second, &zones);
        assert!(prompt.contains("Avery Brooks"));
        assert!(prompt.contains("Dana Whitfield"));
        assert!(prompt.contains("is the better player"));
    }

    #[tokio::test]
    async fn test_local_narrator_mentions_best_and_worst_zones() {
        let profile = create_test_profile(
            "Avery Brooks",
            &[
                (ZoneRange::UnderEight, true),
                (ZoneRange::UnderEight, true),
                (ZoneRange::TwentyFourPlus, false),
            ],
        );
        let text = LocalNarrator
            .season_narrative(&profile, &LeagueComparisonData::default())
            .await
            .unwrap();
        assert!(text.contains("Less Than 8 ft."));
        assert!(text.contains("24+ ft."));
    }

    struct FailingNarrator;

    #[async_trait]
    impl Narrator for FailingNarrator {
        async fn season_narrative(
            &self,
            _profile: &PlayerShotProfile,
            _comparison: &LeagueComparisonData,
        ) -> Result<String, NarrativeError> {
            Err(NarrativeError::new("model offline"))
        }

        async fn matchup_narrative(
            &self,
            _first: &PlayerShotProfile,
            _second: &PlayerShotProfile,
            _zones: &[HeadToHeadRow],
        ) -> Result<String, NarrativeError> {
            Err(NarrativeError::new("model offline"))
        }
    }

    #[tokio::test]
    async fn test_failures_mask_to_fallback_string() {
        let profile = create_test_profile("Avery Brooks", &[(ZoneRange::UnderEight, true)]);
        let text =
            season_or_fallback(&FailingNarrator, &profile, &LeagueComparisonData::default())
                .await;
        assert_eq!(text, NARRATIVE_UNAVAILABLE);
    }
}
