//! Rendered poll results.
//!
//! A report is one refresh tick's worth of statuses in render order.
//! `render` produces the same block-per-address text the original
//! listbox showed, so any display surface can print it verbatim.

use chrono::{DateTime, Utc};

use super::status::{NOT_FOUND_TEXT, ServerStatus};

/// Statuses gathered in one refresh tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// When the tick completed.
    pub polled_at: DateTime<Utc>,
    /// (address, status) pairs in render order.
    pub entries: Vec<(String, ServerStatus)>,
}

impl StatusReport {
    pub fn new(entries: Vec<(String, ServerStatus)>) -> Self {
        Self {
            polled_at: Utc::now(),
            entries,
        }
    }

    /// Render one block per address: the address line, then the three
    /// status lines or the not-found line, then a blank separator.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (address, status) in &self.entries {
            out.push_str(&format!("Server IP: {address}\n"));
            match status {
                ServerStatus::Online(s) => {
                    out.push_str(&format!("Server Name: {}\n", s.name));
                    out.push_str(&format!("Players: {}\n", s.player_count_line()));
                    out.push_str(&s.map_label);
                    out.push('\n');
                }
                ServerStatus::NotFound => {
                    out.push_str(NOT_FOUND_TEXT);
                    out.push('\n');
                }
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::{OnlineStatus, ServerSnapshot};

    #[test]
    fn test_render_online_block() {
        let snapshot = ServerSnapshot {
            name: "Alpha".to_string(),
            players: 12,
            max_players: 10,
            map: "de_dust_2".to_string(),
        };
        let report = StatusReport::new(vec![(
            "1.2.3.4:27015".to_string(),
            ServerStatus::Online(OnlineStatus::from_snapshot(&snapshot)),
        )]);

        assert_eq!(
            report.render(),
            "Server IP: 1.2.3.4:27015\n\
             Server Name: Alpha\n\
             Players: 10/10 +2 in queue\n\
             Map: de 2 dust\n\n"
        );
    }

    #[test]
    fn test_render_not_found_block() {
        let report = StatusReport::new(vec![(
            "5.6.7.8:27015".to_string(),
            ServerStatus::NotFound,
        )]);

        assert_eq!(
            report.render(),
            "Server IP: 5.6.7.8:27015\nServer not found or invalid response.\n\n"
        );
    }

    #[test]
    fn test_render_empty_report() {
        assert_eq!(StatusReport::new(Vec::new()).render(), "");
    }
}
