//! Network messages - communication between App and Network layers

use crate::models::Country;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch the country list from the remote API
    FetchCountries {
        id: u64,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// Country list fetched and decoded
    Countries {
        id: u64,
        countries: Vec<Country>,
        time_ms: u64,
    },
    /// Fetch failed (connect, timeout, non-2xx or decode)
    Error {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Countries { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }
}
