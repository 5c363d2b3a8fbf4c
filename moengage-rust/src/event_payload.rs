use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

pub const EVENT_REQUEST_TYPE: &str = "event";

/// Timezone offset reported with every action, in seconds east of UTC.
/// 19800 is UTC+05:30 (India Standard Time).
pub const DEFAULT_USER_TIMEZONE_OFFSET: i64 = 19_800;

#[derive(Serialize, Debug, Clone)]
pub struct EventAction {
    pub action: String,
    pub attributes: HashMap<String, Value>,
    pub user_timezone_offset: i64,
}

/// Body for `POST /v1/event/{app_id}`. The endpoint accepts a list of
/// actions, but this client always sends exactly one per call.
#[derive(Serialize, Debug, Clone)]
pub struct EventPayload {
    #[serde(rename = "type")]
    pub request_type: &'static str,
    pub customer_id: String,
    pub actions: Vec<EventAction>,
}

impl EventPayload {
    #[must_use]
    pub fn single_action(
        customer_id: &str,
        event_name: &str,
        attributes: HashMap<String, Value>,
        user_timezone_offset: i64,
    ) -> Self {
        EventPayload {
            request_type: EVENT_REQUEST_TYPE,
            customer_id: customer_id.to_string(),
            actions: vec![EventAction {
                action: event_name.to_string(),
                attributes,
                user_timezone_offset,
            }],
        }
    }
}
