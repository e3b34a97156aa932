//! Connection lookup on the management surface.

use crate::client::ProjectClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A pre-registered named connection on the project.
///
/// Connections bind credentials and endpoints to a name at project setup
/// time. Callers resolve a name to the opaque `id`, which is what tool
/// descriptors reference on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    /// Opaque connection identifier.
    pub id: String,
    /// Connection name as registered on the project.
    pub name: String,
    /// Connection kind (e.g., `"ApiKey"`), when the platform reports one.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
    /// Target the connection points at, when the platform reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Connection operations, scoped to a [`ProjectClient`].
pub struct Connections<'a> {
    pub(crate) client: &'a ProjectClient,
}

impl Connections<'_> {
    /// Resolve a named connection.
    ///
    /// Fails with an API error if no connection with that name exists on the
    /// project.
    pub async fn get(&self, name: &str) -> Result<Connection> {
        tracing::debug!(connection.name = name, "resolving connection");
        let url = self.client.management_url(&format!("connections/{name}"));
        self.client.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_deserialize() {
        let connection: Connection = serde_json::from_str(
            r#"{"id": "conn-123", "name": "bing-conn", "type": "ApiKey", "target": "https://api.bing.microsoft.com"}"#,
        )
        .unwrap();
        assert_eq!(connection.id, "conn-123");
        assert_eq!(connection.name, "bing-conn");
        assert_eq!(connection.connection_type.as_deref(), Some("ApiKey"));
    }

    #[test]
    fn test_connection_deserialize_minimal() {
        let connection: Connection =
            serde_json::from_str(r#"{"id": "conn-1", "name": "db"}"#).unwrap();
        assert!(connection.connection_type.is_none());
        assert!(connection.target.is_none());
    }
}
