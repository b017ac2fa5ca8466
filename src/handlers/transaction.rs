use actix_web::{HttpResponse, Result, web};

use crate::models::*;
use crate::services::TransactionService;

#[utoipa::path(
    get,
    path = "/transactions",
    tag = "transaction",
    params(
        ("month" = String, Query, description = "月份英文全称，区分大小写，例如 March"),
        ("search" = Option<String>, Query, description = "按标题/描述模糊匹配，数字时同时按价格精确匹配"),
        ("page" = Option<u32>, Query, description = "页码 (默认1)"),
        ("perPage" = Option<u32>, Query, description = "每页数量 (默认4，最大100)")
    ),
    responses(
        (status = 200, description = "获取交易列表成功", body = [Transaction]),
        (status = 400, description = "缺少或非法的参数", body = ErrorResponse),
        (status = 500, description = "查询失败", body = ErrorResponse)
    )
)]
pub async fn get_transactions(
    transaction_service: web::Data<TransactionService>,
    query: web::Query<TransactionQuery>,
) -> Result<HttpResponse> {
    match transaction_service.list_transactions(&query).await {
        Ok(list) => Ok(HttpResponse::Ok().json(list)),
        Err(e) => Ok(e.response_with_context("Error fetching transactions")),
    }
}

pub fn transaction_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/transactions", web::get().to(get_transactions));
}
