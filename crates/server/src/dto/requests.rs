use routeboard::store::Side;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RowsQuery {
    #[serde(default)]
    pub hide_ignored: bool,
}

#[derive(Debug, Deserialize)]
pub struct SideQuery {
    pub side: Option<Side>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub rows: Vec<usize>,
}

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub index: usize,
    pub driver: Option<String>,
    pub origin_index: Option<usize>,
}
