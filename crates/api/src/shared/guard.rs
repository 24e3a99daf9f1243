use crate::error::NudgeError;
use nudge_domain::ID;

pub struct Guard {}

impl Guard {
    pub fn against_malformed_id(val: &str) -> Result<ID, NudgeError> {
        val.trim()
            .parse()
            .map_err(|e| NudgeError::BadClientData(format!("{}", e)))
    }

    /// Treats a missing or blank value as absent. Other values are kept as given.
    pub fn against_blank(val: Option<String>) -> Option<String> {
        val.filter(|v| !v.trim().is_empty())
    }
}
