use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;

use crate::{log_d, log_e, log_w};

use super::{NetworkError, RequestArgs, Response};

const TAG: &str = stringify!(NetworkClient);

pub struct NetworkClient {
    client: Client,
    headers: HashMap<String, String>,
}

impl NetworkClient {
    #[must_use]
    pub fn new(headers: Option<HashMap<String, String>>, timeout_ms: Option<u64>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout_ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        let client = match builder.build() {
            Ok(client) => client,
            Err(e) => {
                log_e!(
                    TAG,
                    "Failed to create custom HTTP client, using default: {}",
                    e
                );
                Client::new()
            }
        };

        NetworkClient {
            client,
            headers: headers.unwrap_or_default(),
        }
    }

    pub async fn post(&self, mut request_args: RequestArgs) -> Result<Response, NetworkError> {
        request_args.populate_headers(self.headers.clone());

        log_d!(TAG, "POST {}", request_args.url);

        let mut request = self.client.post(&request_args.url);

        if let Some(headers) = &request_args.headers {
            for (key, value) in headers {
                request = request.header(key.as_str(), value.as_str());
            }
        }

        if let Some(body) = request_args.body.take() {
            request = request.body(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if e.is_builder() => {
                let message = get_error_message(e);
                log_w!(TAG, "Failed to construct request: {}", message);
                return Err(NetworkError::RequestNotConstructed(
                    request_args.url,
                    message,
                ));
            }
            Err(e) => {
                let message = get_error_message(e);
                log_w!(TAG, "Request failed: {}", message);
                return Err(NetworkError::RequestFailed(request_args.url, message));
            }
        };

        let status_code = response.status().as_u16();

        let data = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                let message = get_error_message(e);
                log_w!(TAG, "Failed to read response body: {}", message);
                return Err(NetworkError::RequestFailed(request_args.url, message));
            }
        };

        log_d!(
            TAG,
            "Response ({}): {} bytes from {}",
            status_code,
            data.len(),
            request_args.url
        );

        Ok(Response { status_code, data })
    }
}

fn get_error_message(error: reqwest::Error) -> String {
    let mut error_message = error.to_string();

    if let Some(url_error) = error.url() {
        error_message.push_str(&format!(". URL: {url_error}"));
    }

    if let Some(status_error) = error.status() {
        error_message.push_str(&format!(". Status: {status_error}"));
    }

    error_message
}
