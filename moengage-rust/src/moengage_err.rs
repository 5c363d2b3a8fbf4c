use crate::networking::network_error::NetworkError;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum MoengageErr {
    // Data Format / Serialization / Parsing
    SerializationError(String),
    JsonParseError(String, String),

    // Network
    NetworkError(NetworkError),

    // API
    ApiError(Option<u16>, String),
}

impl Display for MoengageErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MoengageErr::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            MoengageErr::JsonParseError(type_name, err_msg) => {
                write!(f, "Failed to parse JSON {type_name} - {err_msg}")
            }

            MoengageErr::NetworkError(error) => write!(f, "NetworkError|{error}"),

            MoengageErr::ApiError(Some(status), msg) => {
                write!(f, "MoEngage API error ({status}): {msg}")
            }
            MoengageErr::ApiError(None, msg) => write!(f, "MoEngage API error: {msg}"),
        }
    }
}

impl MoengageErr {
    pub fn name(&self) -> &'static str {
        match self {
            MoengageErr::SerializationError(_) => "SerializationError",
            MoengageErr::JsonParseError(_, _) => "JsonParseError",

            MoengageErr::NetworkError(e) => e.name(),

            MoengageErr::ApiError(_, _) => "ApiError",
        }
    }
}
