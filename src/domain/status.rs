//! Server status derivation.
//!
//! Pure translation of a raw directory entry into what the display
//! shows: the player-count line with the overflow queue, and the
//! reordered map label. No I/O here.

use serde::{Deserialize, Serialize};

/// Text shown when a poll yields no usable status, whether the server
/// is really absent or the lookup failed in transit.
pub const NOT_FOUND_TEXT: &str = "Server not found or invalid response.";

/// Raw fields of one directory entry, before derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSnapshot {
    /// Server name as reported by the directory.
    pub name: String,
    /// Connected players, including any overflow beyond capacity.
    pub players: u32,
    /// Reported capacity.
    pub max_players: u32,
    /// Raw map identifier, e.g. `de_dust_2`.
    pub map: String,
}

/// Display-ready status for one tracked address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerStatus {
    /// The directory returned at least one match.
    Online(OnlineStatus),
    /// Well-formed response, zero matches.
    NotFound,
}

/// Derived status fields for an online server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineStatus {
    /// Server name.
    pub name: String,
    /// Connected players.
    pub players: u32,
    /// Reported capacity.
    pub max_players: u32,
    /// Players beyond capacity: `max(0, players - max_players)`.
    pub queued: u32,
    /// Formatted map label, e.g. `Map: de 2 dust`.
    pub map_label: String,
}

impl OnlineStatus {
    /// Derive the display fields from a raw directory entry.
    pub fn from_snapshot(snapshot: &ServerSnapshot) -> Self {
        Self {
            name: snapshot.name.clone(),
            players: snapshot.players,
            max_players: snapshot.max_players,
            queued: snapshot.players.saturating_sub(snapshot.max_players),
            map_label: format_map_label(&snapshot.map),
        }
    }

    /// The `Players:` line body.
    ///
    /// With a queue the server is full, so capacity is shown twice:
    /// `"{max}/{max} +{queued} in queue"`. Without one it is the plain
    /// `"{players}/{max_players}"`.
    pub fn player_count_line(&self) -> String {
        if self.queued > 0 {
            format!(
                "{}/{} +{} in queue",
                self.max_players, self.max_players, self.queued
            )
        } else {
            format!("{}/{}", self.players, self.max_players)
        }
    }
}

/// Reorder an underscore-delimited map id for display.
///
/// `de_dust_2` renders as `Map: de 2 dust` (first, third, second
/// segment). Ids with fewer than three segments fall back to the raw
/// id; segments beyond the third are ignored.
pub fn format_map_label(raw: &str) -> String {
    let parts: Vec<&str> = raw.split('_').collect();
    if parts.len() >= 3 {
        format!("Map: {} {} {}", parts[0], parts[2], parts[1])
    } else {
        format!("Map: {raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(players: u32, max_players: u32) -> ServerSnapshot {
        ServerSnapshot {
            name: "Alpha".to_string(),
            players,
            max_players,
            map: "de_dust_2".to_string(),
        }
    }

    #[test]
    fn test_queued_players_overflow() {
        let status = OnlineStatus::from_snapshot(&snapshot(12, 10));
        assert_eq!(status.queued, 2);
        assert_eq!(status.player_count_line(), "10/10 +2 in queue");
    }

    #[test]
    fn test_queued_players_under_capacity() {
        let status = OnlineStatus::from_snapshot(&snapshot(7, 10));
        assert_eq!(status.queued, 0);
        assert_eq!(status.player_count_line(), "7/10");
    }

    #[test]
    fn test_queued_players_exactly_full() {
        let status = OnlineStatus::from_snapshot(&snapshot(10, 10));
        assert_eq!(status.queued, 0);
        assert_eq!(status.player_count_line(), "10/10");
    }

    #[test]
    fn test_map_label_three_segments() {
        assert_eq!(format_map_label("de_dust_2"), "Map: de 2 dust");
        assert_eq!(format_map_label("a_b_c"), "Map: a c b");
    }

    #[test]
    fn test_map_label_extra_segments_ignored() {
        assert_eq!(format_map_label("cp_dust_2_final"), "Map: cp 2 dust");
    }

    #[test]
    fn test_map_label_short_id_falls_back_to_raw() {
        assert_eq!(format_map_label("lobby"), "Map: lobby");
        assert_eq!(format_map_label("de_inferno"), "Map: de_inferno");
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let snap = snapshot(12, 10);
        assert_eq!(
            OnlineStatus::from_snapshot(&snap),
            OnlineStatus::from_snapshot(&snap)
        );
    }
}
