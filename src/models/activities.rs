use serde::{Deserialize, Serialize};

/// One extracurricular activity as exposed over the API.
///
/// `schedule` stays a free-text label and `participants` are plain email
/// strings; neither is parsed or validated beyond being present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}
