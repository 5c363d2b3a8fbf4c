use std::fmt;

type RequestUrl = String;

#[derive(PartialEq, Debug, Clone)]
pub enum NetworkError {
    /// The request never left the process, e.g. an invalid URL or header.
    RequestNotConstructed(RequestUrl, String),
    /// The request was sent but no usable response came back.
    RequestFailed(RequestUrl, String),
}

impl NetworkError {
    pub fn name(&self) -> &'static str {
        match self {
            NetworkError::RequestNotConstructed(_, _) => "RequestNotConstructed",
            NetworkError::RequestFailed(_, _) => "RequestFailed",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::RequestNotConstructed(url, message) => {
                write!(f, "RequestNotConstructed: {url} {message}")
            }
            NetworkError::RequestFailed(url, message) => {
                write!(f, "RequestFailed: {url} {message}")
            }
        }
    }
}
