//! Series model.

use serde::{Deserialize, Serialize};

/// A named grouping of posts intended to be read in sequence.
///
/// The series id is unique; posts reference a series by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub name: String,
    #[serde(default)]
    pub og_image: String,
}

/// One series in a replace-all save request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesUpsert {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub og_image: String,
}

/// Request body for saving the full series list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAllSeriesRequest {
    pub series: Vec<SeriesUpsert>,
}
