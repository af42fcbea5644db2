use std::time::Duration;

use csvq_api_schema::v1::{
    execute_sql::V1ExecuteSqlRequest,
    export_data::{V1ExportDataRequest, V1ExportDataResponse},
    query_data::{V1QueryDataRequest, V1QueryDataResponse},
    sql_configs::{
        V1AddSqlConfigResponse, V1DeleteSqlConfigResponse, V1SqlConfig, V1UpdateSqlConfigRequest,
    },
    upload::V1UploadFile,
};
use reqwest::multipart::{Form, Part};

const REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// HTTP client for the csvq backend. Built once at application start and
/// passed by reference to whichever module issues requests.
#[derive(Debug, Clone)]
pub struct CsvqApiClient {
    pub base_url: String,
    http: reqwest::Client,
}

#[derive(Debug)]
pub enum CsvqApiClientError {
    Http(Box<reqwest::Error>),
}

impl std::fmt::Display for CsvqApiClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvqApiClientError::Http(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CsvqApiClientError {}

impl From<reqwest::Error> for CsvqApiClientError {
    fn from(e: reqwest::Error) -> Self {
        CsvqApiClientError::Http(Box::new(e))
    }
}

impl CsvqApiClient {
    pub fn new(base_url: String) -> Self {
        let mut base_url = base_url;
        if base_url.ends_with('/') {
            base_url.pop();
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();
        Self { base_url, http }
    }

    /// POST /upload with the file as a single multipart `file` part.
    /// No validation of file type or size happens here.
    pub async fn upload_csv(
        &self,
        file: V1UploadFile,
    ) -> Result<serde_json::Value, CsvqApiClientError> {
        let url = format!("{}/upload", self.base_url);
        let part = Part::bytes(file.bytes).file_name(file.file_name);
        let form = Form::new().part("file", part);
        let res = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(res)
    }

    /// GET /sql-configs. The list shape belongs to the backend and is
    /// passed through untouched.
    pub async fn get_sql_configs(&self) -> Result<serde_json::Value, CsvqApiClientError> {
        let url = format!("{}/sql-configs", self.base_url);
        let res = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(res)
    }

    /// POST /execute-sql with `{ "sql_name": name }`.
    pub async fn execute_sql(&self, name: &str) -> Result<serde_json::Value, CsvqApiClientError> {
        let url = format!("{}/execute-sql", self.base_url);
        let request = V1ExecuteSqlRequest {
            sql_name: name.to_string(),
        };
        let res = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(res)
    }

    pub async fn add_sql_config(
        &self,
        request: V1SqlConfig,
    ) -> Result<V1AddSqlConfigResponse, CsvqApiClientError> {
        let url = format!("{}/sql-configs", self.base_url);
        let res = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(res)
    }

    pub async fn update_sql_config(
        &self,
        name: &str,
        request: V1UpdateSqlConfigRequest,
    ) -> Result<V1SqlConfig, CsvqApiClientError> {
        let url = format!("{}/sql-configs/{}", self.base_url, name);
        let res = self
            .http
            .put(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(res)
    }

    pub async fn delete_sql_config(
        &self,
        name: &str,
    ) -> Result<V1DeleteSqlConfigResponse, CsvqApiClientError> {
        let url = format!("{}/sql-configs/{}", self.base_url, name);
        let res = self
            .http
            .delete(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(res)
    }

    pub async fn query_data(
        &self,
        request: V1QueryDataRequest,
    ) -> Result<V1QueryDataResponse, CsvqApiClientError> {
        let url = format!("{}/query-data", self.base_url);
        let res = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(res)
    }

    pub async fn export_data(
        &self,
        request: V1ExportDataRequest,
    ) -> Result<V1ExportDataResponse, CsvqApiClientError> {
        let url = format!("{}/export-data", self.base_url);
        let res = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(res)
    }

    pub async fn download(&self, filename: &str) -> Result<Vec<u8>, CsvqApiClientError> {
        let url = format!("{}/download/{}", self.base_url, filename);
        let res = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(res.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = CsvqApiClient::new("http://127.0.0.1:5000/".to_string());
        assert_eq!(client.base_url, "http://127.0.0.1:5000");
    }
}
