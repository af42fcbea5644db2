use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V1ExportDataRequest {
    pub sql: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V1ExportDataResponse {
    pub success: bool,
    pub download_url: String,
    pub total: u64,
}
