use std::collections::HashMap;

#[derive(Clone, Default)]
pub struct RequestArgs {
    pub url: String,
    pub body: Option<Vec<u8>>,
    pub headers: Option<HashMap<String, String>>,
}

impl RequestArgs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `extra_headers` into the request headers. Entries in
    /// `extra_headers` win over any header already set on the request.
    pub fn populate_headers(&mut self, extra_headers: HashMap<String, String>) {
        if let Some(my_headers) = &mut self.headers {
            my_headers.extend(extra_headers);
        } else {
            self.headers = Some(extra_headers);
        }
    }
}

pub struct Response {
    pub status_code: u16,
    pub data: Vec<u8>,
}
