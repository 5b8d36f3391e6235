use serde::{Deserialize, Serialize};

use crate::api::PlayerId;

/// Directory entry for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub player_id: PlayerId,
    pub full_name: String,
}

/// Route function name constants
pub const LIST_PLAYERS: &str = "list_players";
pub const GET_PLAYER_SEASONS: &str = "get_player_seasons";
