use serde::{Deserialize, Serialize};

/// A single country as shown in the list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub capital: String,
    pub code: String,
    pub region: String,
}

impl Country {
    pub fn new(
        name: impl Into<String>,
        capital: impl Into<String>,
        code: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Country {
            name: name.into(),
            capital: capital.into(),
            code: code.into(),
            region: region.into(),
        }
    }
}

/// Fetch lifecycle of the country list
///
/// Starts at `Start`, moves to `Loading` when a request is issued, and ends
/// at `Success` (carrying the fetched list) or `Failure` (carrying the error
/// message) once the request resolves.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Start,
    Loading,
    Success(Vec<Country>),
    Failure(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}
