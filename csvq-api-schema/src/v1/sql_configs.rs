use serde::{Deserialize, Serialize};

/// A stored SQL template as the backend keeps it in its config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V1SqlConfig {
    pub name: String,
    pub filename_prefix: String,
    #[serde(default)]
    pub codes: Vec<String>,
    pub sql_template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V1AddSqlConfigResponse {
    pub success: bool,
    pub data: V1SqlConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V1UpdateSqlConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V1DeleteSqlConfigResponse {
    pub success: bool,
}
