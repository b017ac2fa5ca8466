//! 把原始请求参数转换为 [`TransactionFilter`] 与分页窗口

use crate::database::{SearchTerm, TransactionFilter};
use crate::error::{AppError, AppResult};
use crate::models::TransactionQuery;
use crate::utils::{PaginationParams, parse_month_name};

/// 所有接口共用的月份过滤条件
pub fn month_filter(month: Option<&str>) -> AppResult<TransactionFilter> {
    let month = month
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::ValidationError("Month parameter is required".into()))?;
    let month = parse_month_name(month)
        .ok_or_else(|| AppError::ValidationError("Invalid month format".into()))?;
    Ok(TransactionFilter::for_month(month))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filter: TransactionFilter,
    pub pagination: PaginationParams,
}

impl ListQuery {
    pub fn from_request(query: &TransactionQuery) -> AppResult<Self> {
        let filter = month_filter(query.month.as_deref())?
            .with_search(query.search.as_deref().and_then(SearchTerm::parse));
        let pagination =
            PaginationParams::parse(query.page.as_deref(), query.per_page.as_deref())?;
        Ok(Self { filter, pagination })
    }

    pub fn offset(&self) -> u64 {
        self.pagination.get_offset()
    }

    pub fn limit(&self) -> u64 {
        self.pagination.get_limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    fn query(
        month: Option<&str>,
        search: Option<&str>,
        page: Option<&str>,
        per_page: Option<&str>,
    ) -> TransactionQuery {
        TransactionQuery {
            month: month.map(String::from),
            search: search.map(String::from),
            page: page.map(String::from),
            per_page: per_page.map(String::from),
        }
    }

    fn validation_message(err: AppError) -> String {
        match err {
            AppError::ValidationError(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_month() {
        let err = month_filter(None).unwrap_err();
        assert_eq!(validation_message(err), "Month parameter is required");
        let err = month_filter(Some("")).unwrap_err();
        assert_eq!(validation_message(err), "Month parameter is required");
    }

    #[test]
    fn test_invalid_month() {
        let err = month_filter(Some("Marchember")).unwrap_err();
        assert_eq!(validation_message(err), "Invalid month format");
        assert!(month_filter(Some("march")).is_err());
    }

    #[test]
    fn test_defaults() {
        let q = ListQuery::from_request(&query(Some("March"), None, None, None)).unwrap();
        assert_eq!(q.filter, TransactionFilter::for_month(Month::March));
        assert_eq!(q.offset(), 0);
        assert_eq!(q.limit(), 4);
    }

    #[test]
    fn test_search_and_pagination() {
        let q = ListQuery::from_request(&query(Some("July"), Some(" 150 "), Some("3"), Some("10")))
            .unwrap();
        let search = q.filter.search.as_ref().unwrap();
        assert_eq!(search.text(), "150");
        assert_eq!(search.price(), Some(150.0));
        assert_eq!(q.offset(), 20);
        assert_eq!(q.limit(), 10);
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let q = ListQuery::from_request(&query(Some("July"), Some("  "), None, None)).unwrap();
        assert!(q.filter.search.is_none());
    }

    #[test]
    fn test_month_is_checked_before_pagination() {
        let err = ListQuery::from_request(&query(None, None, Some("zero"), None)).unwrap_err();
        assert_eq!(validation_message(err), "Month parameter is required");
    }
}
