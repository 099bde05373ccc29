use serde::{Deserialize, Serialize};

/// Default "from" identity stamped on shipping labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderProfile {
    pub name: String,
    pub phone: String,
    pub addr: String,
}

impl Default for SenderProfile {
    /// The farm's own identity, used until the user saves their own.
    fn default() -> Self {
        Self {
            name: "제주감귤농장".to_string(),
            phone: "010-0000-0000".to_string(),
            addr: "제주도".to_string(),
        }
    }
}
