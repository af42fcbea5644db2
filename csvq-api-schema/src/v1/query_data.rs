use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V1QueryDataRequest {
    pub sql: String,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V1QueryDataResponse {
    pub data: Vec<serde_json::Value>,
    pub meta: V1QueryDataMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V1QueryDataMeta {
    pub pagination: V1Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V1Pagination {
    pub current_page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u64,
}
