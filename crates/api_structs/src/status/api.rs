use serde::{Deserialize, Serialize};

pub mod get_service_health {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        /// The calendar reminder days and times are matched in, e.g. "Europe/Oslo"
        pub timezone: String,
    }
}
