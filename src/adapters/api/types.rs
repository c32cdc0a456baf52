//! GetServerList Response Types
//!
//! Serde shapes for the directory's JSON envelope:
//! `{"response": {"servers": [{name, players, max_players, map}, ...]}}`.
//! Unknown fields (addr, appid, steamid, ...) are ignored.

use serde::Deserialize;

/// Top-level envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GetServerListResponse {
    pub response: ServerListBody,
}

/// The `response` object.
///
/// The directory omits `servers` entirely when nothing matches the
/// filter, so the field defaults to empty rather than failing to
/// parse.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerListBody {
    #[serde(default)]
    pub servers: Vec<ServerEntry>,
}

/// One matched server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerEntry {
    /// Server name.
    pub name: String,
    /// Connected players, queue included.
    pub players: u32,
    /// Reported capacity.
    pub max_players: u32,
    /// Raw map identifier.
    pub map: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"response":{"servers":[
            {"name":"Alpha","players":12,"max_players":10,"map":"de_dust_2"}
        ]}}"#;
        let resp: GetServerListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response.servers.len(), 1);
        assert_eq!(resp.response.servers[0].name, "Alpha");
        assert_eq!(resp.response.servers[0].players, 12);
    }

    #[test]
    fn test_missing_servers_key_is_empty() {
        let resp: GetServerListResponse =
            serde_json::from_str(r#"{"response":{}}"#).unwrap();
        assert!(resp.response.servers.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"response":{"servers":[
            {"name":"A","players":1,"max_players":2,"map":"m_a_p",
             "addr":"1.2.3.4:27015","appid":440,"secure":true}
        ]}}"#;
        let resp: GetServerListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response.servers[0].map, "m_a_p");
    }

    #[test]
    fn test_missing_expected_entry_field_is_an_error() {
        let json = r#"{"response":{"servers":[{"name":"A","players":1}]}}"#;
        assert!(serde_json::from_str::<GetServerListResponse>(json).is_err());
    }
}
