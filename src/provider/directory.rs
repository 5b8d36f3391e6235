//! Read-only player lookup built once at process startup.

use std::collections::HashMap;

use crate::api::{PlayerId, PlayerInfo};

use super::error::ProviderResult;
use super::ShotDataProvider;

/// Case-insensitive player lookup over the full league directory.
///
/// Built once from the provider when the process starts and shared by
/// reference into every request handler; never mutated afterward, so
/// unsynchronized concurrent reads are safe.
#[derive(Debug, Clone)]
pub struct PlayerDirectory {
    players: Vec<PlayerInfo>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<PlayerId, usize>,
}

impl PlayerDirectory {
    pub fn new(players: Vec<PlayerInfo>) -> Self {
        let mut by_name = HashMap::with_capacity(players.len());
        let mut by_id = HashMap::with_capacity(players.len());
        for (idx, player) in players.iter().enumerate() {
            by_name.insert(player.full_name.to_lowercase(), idx);
            by_id.insert(player.player_id, idx);
        }
        PlayerDirectory {
            players,
            by_name,
            by_id,
        }
    }

    /// Fetch the full directory from the provider.
    pub async fn fetch(provider: &dyn ShotDataProvider) -> ProviderResult<Self> {
        let players = provider.list_players().await?;
        Ok(Self::new(players))
    }

    /// Find a player by full name, ignoring case and surrounding whitespace.
    pub fn find(&self, full_name: &str) -> Option<&PlayerInfo> {
        let key = full_name.trim().to_lowercase();
        self.by_name.get(&key).map(|&idx| &self.players[idx])
    }

    pub fn find_by_id(&self, player_id: PlayerId) -> Option<&PlayerInfo> {
        self.by_id.get(&player_id).map(|&idx| &self.players[idx])
    }

    pub fn players(&self) -> &[PlayerInfo] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_directory() -> PlayerDirectory {
        PlayerDirectory::new(vec![
            PlayerInfo {
                player_id: PlayerId::new(1),
                full_name: "Avery Brooks".to_string(),
            },
            PlayerInfo {
                player_id: PlayerId::new(2),
                full_name: "Dana Whitfield".to_string(),
            },
        ])
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let directory = create_test_directory();
        let hit = directory.find("avery brooks").unwrap();
        assert_eq!(hit.player_id.value(), 1);
        assert!(directory.find("  DANA WHITFIELD ").is_some());
    }

    #[test]
    fn test_find_misses_unknown_name() {
        let directory = create_test_directory();
        assert!(directory.find("Nobody Inparticular").is_none());
    }

    #[test]
    fn test_find_by_id() {
        let directory = create_test_directory();
        assert_eq!(
            directory.find_by_id(PlayerId::new(2)).unwrap().full_name,
            "Dana Whitfield"
        );
        assert!(directory.find_by_id(PlayerId::new(99)).is_none());
    }

    #[test]
    fn test_len() {
        let directory = create_test_directory();
        assert_eq!(directory.len(), 2);
        assert!(!directory.is_empty());
    }
}
