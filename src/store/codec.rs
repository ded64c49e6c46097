use crate::domain::idea::Idea;

use super::error::{Result, StoreError};

pub(crate) fn encode(ideas: &[Idea]) -> Result<String> {
    serde_json::to_string(ideas).map_err(StoreError::Encode)
}

pub(crate) fn decode(value: &str) -> Result<Vec<Idea>> {
    serde_json::from_str(value).map_err(StoreError::Decode)
}
