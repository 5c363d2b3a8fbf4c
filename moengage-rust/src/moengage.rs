use std::collections::HashMap;

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use percent_encoding::percent_encode;
use serde::Serialize;
use serde_json::Value;

use crate::api_response::{ApiResponse, GENERIC_FAILURE_MESSAGE};
use crate::customer_payload::CustomerPayload;
use crate::event_payload::{EventPayload, DEFAULT_USER_TIMEZONE_OFFSET};
use crate::moengage_options::MoengageOptions;
use crate::networking::{NetworkClient, RequestArgs};
use crate::output_logger::initialize_output_logger;
use crate::{log_d, log_w, MoengageErr};

const TAG: &str = stringify!(Moengage);

/// Client for the MoEngage data APIs. One instance holds the credentials
/// and connection pool for a single MoEngage app and can be shared across
/// tasks.
pub struct Moengage {
    app_id: String,
    base_url: String,
    user_timezone_offset: i64,
    network: NetworkClient,
}

impl Moengage {
    #[must_use]
    pub fn new(
        base_url: &str,
        app_id: &str,
        api_key: &str,
        options: Option<MoengageOptions>,
    ) -> Self {
        let options = options.unwrap_or_default();
        initialize_output_logger(
            &options.output_log_level,
            options.output_logger_provider.clone(),
        );

        let headers = constant_request_headers(app_id, api_key);

        Self {
            app_id: app_id.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_timezone_offset: options
                .user_timezone_offset
                .unwrap_or(DEFAULT_USER_TIMEZONE_OFFSET),
            network: NetworkClient::new(Some(headers), options.network_timeout_ms),
        }
    }

    /// Create the user identified by `auth_id`, or update them in place if
    /// they already exist. `name`, `phone_number` and `email` are merged
    /// into `attributes` when non-empty.
    pub async fn create_or_update_user(
        &self,
        auth_id: &str,
        name: &str,
        phone_number: &str,
        email: &str,
        attributes: HashMap<String, Value>,
    ) -> Result<(), MoengageErr> {
        let payload = CustomerPayload::new(auth_id, attributes)
            .with_profile_fields(name, phone_number, email);
        let url = construct_customer_url(&self.base_url, &self.app_id);

        log_d!(TAG, "Upserting user {}", auth_id);

        self.post_payload(url, &payload).await
    }

    /// Record a single occurrence of `event_name` for the user identified
    /// by `auth_id`.
    pub async fn publish_event(
        &self,
        auth_id: &str,
        event_name: &str,
        attributes: HashMap<String, Value>,
    ) -> Result<(), MoengageErr> {
        let payload = EventPayload::single_action(
            auth_id,
            event_name,
            attributes,
            self.user_timezone_offset,
        );
        let url = construct_event_url(&self.base_url, &self.app_id);

        log_d!(TAG, "Publishing event {} for user {}", event_name, auth_id);

        self.post_payload(url, &payload).await
    }

    async fn post_payload<T: Serialize>(
        &self,
        url: String,
        payload: &T,
    ) -> Result<(), MoengageErr> {
        let body = serde_json::to_vec(payload)
            .map_err(|e| MoengageErr::SerializationError(e.to_string()))?;

        let response = self
            .network
            .post(RequestArgs {
                url,
                body: Some(body),
                ..RequestArgs::new()
            })
            .await
            .map_err(MoengageErr::NetworkError)?;

        let status = response.status_code;
        let decoded = ApiResponse::from_slice(&response.data);

        if !(200..300).contains(&status) {
            // Prefer the reason the API gives over the canned status text,
            // but a rejection body is not required to be valid JSON.
            let message = decoded
                .ok()
                .and_then(|r| r.error_message().map(str::to_string))
                .unwrap_or_else(|| get_error_message_for_status(status));

            log_w!(TAG, "Request rejected with status {}: {}", status, message);
            return Err(MoengageErr::ApiError(Some(status), message));
        }

        let api_response = decoded.map_err(|e| {
            MoengageErr::JsonParseError(stringify!(ApiResponse).to_string(), e.to_string())
        })?;

        if api_response.is_failure() {
            let message = api_response
                .error_message()
                .unwrap_or(GENERIC_FAILURE_MESSAGE)
                .to_string();

            log_w!(TAG, "API reported failure: {}", message);
            return Err(MoengageErr::ApiError(None, message));
        }

        Ok(())
    }
}

fn constant_request_headers(app_id: &str, api_key: &str) -> HashMap<String, String> {
    let credentials = BASE64_STANDARD.encode(format!("{app_id}:{api_key}"));

    HashMap::from([
        ("Authorization".to_string(), format!("Basic {credentials}")),
        ("MOE-APPKEY".to_string(), app_id.to_string()),
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ])
}

fn construct_customer_url(base_url: &str, app_id: &str) -> String {
    format!("{base_url}/v1/customer/{}", encode_path_segment(app_id))
}

fn construct_event_url(base_url: &str, app_id: &str) -> String {
    format!("{base_url}/v1/event/{}", encode_path_segment(app_id))
}

fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), percent_encoding::NON_ALPHANUMERIC).to_string()
}

fn get_error_message_for_status(status: u16) -> String {
    if (200..300).contains(&status) {
        return String::new();
    }

    match status {
        400 => "Bad Request".to_string(),
        401 => "Unauthorized".to_string(),
        403 => "Forbidden".to_string(),
        404 => "Not Found".to_string(),
        405 => "Method Not Allowed".to_string(),
        406 => "Not Acceptable".to_string(),
        408 => "Request Timeout".to_string(),
        500 => "Internal Server Error".to_string(),
        502 => "Bad Gateway".to_string(),
        503 => "Service Unavailable".to_string(),
        504 => "Gateway Timeout".to_string(),
        0 => "Unknown Error".to_string(),
        _ => format!("HTTP Error {status}"),
    }
}
