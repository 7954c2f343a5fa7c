use std::fmt::Formatter;

#[derive(Debug)]
pub enum LookupError {
    /// Request could not be sent or the body transfer failed
    Network(Box<reqwest::Error>),
    /// Body was not a JSON object of the expected shape
    Decode(Box<serde_json::Error>),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let msg = match self {
            LookupError::Network(inner) => {
                format!("Network: {}", inner)
            },
            LookupError::Decode(inner) => {
                format!("Invalid address data: {}", inner)
            },
        };
        write!(f, "Lookup error: {}", msg)
    }
}

impl std::error::Error for LookupError {}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        LookupError::Network(Box::new(error))
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(error: serde_json::Error) -> Self {
        LookupError::Decode(Box::new(error))
    }
}
