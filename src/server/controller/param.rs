use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters accepted by every list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring matched against the resource's name or title.
    /// Blank terms are ignored.
    pub search_term: Option<String>,
}

/// Builds the `Location` value for a newly created row.
pub fn location(collection: &str, id: impl std::fmt::Display) -> String {
    format!("/{}/{}", collection, id)
}
