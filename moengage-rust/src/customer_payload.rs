use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

pub const CUSTOMER_REQUEST_TYPE: &str = "customer";

pub const ATTR_NAME: &str = "name";
pub const ATTR_MOBILE: &str = "mobile";
pub const ATTR_EMAIL: &str = "email";

/// Body for `POST /v1/customer/{app_id}`.
#[derive(Serialize, Debug, Clone)]
pub struct CustomerPayload {
    #[serde(rename = "type")]
    pub request_type: &'static str,
    pub customer_id: String,
    pub attributes: HashMap<String, Value>,
}

impl CustomerPayload {
    #[must_use]
    pub fn new(customer_id: &str, attributes: HashMap<String, Value>) -> Self {
        CustomerPayload {
            request_type: CUSTOMER_REQUEST_TYPE,
            customer_id: customer_id.to_string(),
            attributes,
        }
    }

    /// Merge the well-known profile fields into the attributes. An empty
    /// string means "not provided" and leaves the attributes untouched.
    #[must_use]
    pub fn with_profile_fields(mut self, name: &str, phone_number: &str, email: &str) -> Self {
        insert_if_present(&mut self.attributes, ATTR_NAME, name);
        insert_if_present(&mut self.attributes, ATTR_MOBILE, phone_number);
        insert_if_present(&mut self.attributes, ATTR_EMAIL, email);
        self
    }
}

fn insert_if_present(attributes: &mut HashMap<String, Value>, key: &str, value: &str) {
    if value.is_empty() {
        return;
    }

    attributes.insert(key.to_string(), Value::String(value.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_fields_are_merged() {
        let payload = CustomerPayload::new(
            "u1",
            HashMap::from([("plan".to_string(), json!("pro"))]),
        )
        .with_profile_fields("Jane", "555-0100", "jane@example.com");

        assert_eq!(payload.attributes.get(ATTR_NAME), Some(&json!("Jane")));
        assert_eq!(payload.attributes.get(ATTR_MOBILE), Some(&json!("555-0100")));
        assert_eq!(
            payload.attributes.get(ATTR_EMAIL),
            Some(&json!("jane@example.com"))
        );
        assert_eq!(payload.attributes.get("plan"), Some(&json!("pro")));
    }

    #[test]
    fn test_empty_profile_fields_are_skipped() {
        let payload =
            CustomerPayload::new("u1", HashMap::new()).with_profile_fields("", "", "");

        assert!(payload.attributes.is_empty());
    }

    #[test]
    fn test_profile_fields_overwrite_caller_attributes() {
        let payload = CustomerPayload::new(
            "u1",
            HashMap::from([("name".to_string(), json!("Old Name"))]),
        )
        .with_profile_fields("Jane", "", "");

        assert_eq!(payload.attributes.get(ATTR_NAME), Some(&json!("Jane")));
    }

    #[test]
    fn test_serializes_with_type_field() {
        let payload = CustomerPayload::new("u1", HashMap::new());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value.get("type"), Some(&json!("customer")));
        assert_eq!(value.get("customer_id"), Some(&json!("u1")));
        assert_eq!(value.get("attributes"), Some(&json!({})));
    }
}
