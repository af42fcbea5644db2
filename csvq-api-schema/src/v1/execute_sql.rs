use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V1ExecuteSqlRequest {
    pub sql_name: String,
}
