use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeedResponse {
    pub message: String,
    /// 本次写入的记录数
    pub inserted: u64,
}
