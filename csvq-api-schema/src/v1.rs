pub mod execute_sql;
pub mod export_data;
pub mod query_data;
pub mod sql_configs;
pub mod upload;
