//! Shared wire format for the portfolio sync helper.
//!
//! The admin view POSTs the full image list to the helper; the helper
//! rewrites the `assets.js` source module and answers with a
//! [`SyncResponse`]. When the helper is unreachable the admin view shows the
//! [`assets_module_source`] output for manual pasting instead.

use serde::{Deserialize, Serialize};

use crate::asset::ImageRecord;

/// Default local port the sync helper listens on.
pub const DEFAULT_SYNC_PORT: u16 = 3001;

/// Path of the single sync endpoint.
pub const SYNC_PATH: &str = "/sync";

/// URL the browser uses to reach a helper running on the default port.
pub fn local_endpoint() -> String {
    format!("http://localhost:{DEFAULT_SYNC_PORT}{SYNC_PATH}")
}

/// Body of every `/sync` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SyncResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

/// Render the image list as the `assets.js` ES module source.
///
/// This exact text is what the helper writes to disk and what the admin
/// view offers for manual copy when the helper is offline.
pub fn assets_module_source(images: &[ImageRecord]) -> Result<String, serde_json::Error> {
    Ok(format!(
        "export const portfolioAssets = {};\n",
        serde_json::to_string_pretty(images)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Category;

    #[test]
    fn module_source_is_an_es_export() {
        let images = vec![
            ImageRecord::new("1", "a.png", Category::Portrait),
            ImageRecord::new("2", "b.png", Category::Event),
        ];
        let source = assets_module_source(&images).unwrap();
        assert!(source.starts_with("export const portfolioAssets = ["));
        assert!(source.ends_with("];\n"));
        assert!(source.contains("\"url\": \"a.png\""));
        assert!(source.contains("\"category\": \"event\""));
    }

    #[test]
    fn empty_list_renders_an_empty_array() {
        let source = assets_module_source(&[]).unwrap();
        assert_eq!(source, "export const portfolioAssets = [];\n");
    }

    #[test]
    fn local_endpoint_targets_the_default_port() {
        assert_eq!(local_endpoint(), "http://localhost:3001/sync");
    }

    #[test]
    fn responses_round_trip() {
        let ok = serde_json::to_string(&SyncResponse::ok()).unwrap();
        assert_eq!(ok, r#"{"success":true}"#);

        let failed: SyncResponse =
            serde_json::from_str(r#"{"success":false,"error":"git push failed"}"#).unwrap();
        assert_eq!(failed, SyncResponse::failure("git push failed"));
    }
}
