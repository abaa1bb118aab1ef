use serde::{Deserialize, Serialize};

use crate::error::BrendaError;

/// Options for a single `get_data` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractOptions {
    /// Drop rows (and organisms) that carry no protein identifier. When off,
    /// such rows are grouped under the `unknown` identifier instead.
    #[serde(default = "default_filter_unidentified")]
    pub filter_unidentified: bool,
    /// Reduce organism names to `Genus species`. Off by default so page
    /// placeholders such as entry-count markers pass through verbatim.
    #[serde(default)]
    pub normalize_organisms: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            filter_unidentified: default_filter_unidentified(),
            normalize_organisms: false,
        }
    }
}

impl ExtractOptions {
    pub fn filtered(filter_unidentified: bool) -> Self {
        Self {
            filter_unidentified,
            ..Self::default()
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, BrendaError> {
        serde_json::from_str(raw).map_err(|err| BrendaError::ConfigParse(err.to_string()))
    }
}

fn default_filter_unidentified() -> bool {
    true
}
