use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 失败响应体：400 只有 `error`，500 附带 `details`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// 只需要月份的统计类接口查询参数
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MonthQuery {
    /// 英文月份全称，区分大小写，例如 `March`
    pub month: Option<String>,
}
