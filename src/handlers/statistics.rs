use actix_web::{HttpResponse, Result, web};

use crate::models::*;
use crate::services::StatisticsService;

#[utoipa::path(
    get,
    path = "/statistics",
    tag = "statistics",
    params(
        ("month" = String, Query, description = "月份英文全称，区分大小写")
    ),
    responses(
        (status = 200, description = "获取月度汇总成功", body = StatisticsResponse),
        (status = 400, description = "缺少或非法的月份", body = ErrorResponse),
        (status = 500, description = "统计失败", body = ErrorResponse)
    )
)]
pub async fn get_statistics(
    statistics_service: web::Data<StatisticsService>,
    query: web::Query<MonthQuery>,
) -> Result<HttpResponse> {
    match statistics_service.get_statistics(&query).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(stats)),
        Err(e) => Ok(e.response_with_context("Error fetching statistics")),
    }
}

#[utoipa::path(
    get,
    path = "/bar-chart",
    tag = "statistics",
    params(
        ("month" = String, Query, description = "月份英文全称，区分大小写")
    ),
    responses(
        (status = 200, description = "按价格区间统计成功", body = [PriceRangeCount]),
        (status = 400, description = "缺少或非法的月份", body = ErrorResponse),
        (status = 500, description = "统计失败", body = ErrorResponse)
    )
)]
pub async fn get_bar_chart(
    statistics_service: web::Data<StatisticsService>,
    query: web::Query<MonthQuery>,
) -> Result<HttpResponse> {
    match statistics_service.get_bar_chart(&query).await {
        Ok(bars) => Ok(HttpResponse::Ok().json(bars)),
        Err(e) => Ok(e.response_with_context("Error fetching bar chart data")),
    }
}

#[utoipa::path(
    get,
    path = "/pie-chart",
    tag = "statistics",
    params(
        ("month" = String, Query, description = "月份英文全称，区分大小写")
    ),
    responses(
        (status = 200, description = "按分类统计成功", body = [CategoryCount]),
        (status = 400, description = "缺少或非法的月份", body = ErrorResponse),
        (status = 500, description = "统计失败", body = ErrorResponse)
    )
)]
pub async fn get_pie_chart(
    statistics_service: web::Data<StatisticsService>,
    query: web::Query<MonthQuery>,
) -> Result<HttpResponse> {
    match statistics_service.get_pie_chart(&query).await {
        Ok(categories) => Ok(HttpResponse::Ok().json(categories)),
        Err(e) => Ok(e.response_with_context("Error fetching pie chart data")),
    }
}

#[utoipa::path(
    get,
    path = "/combined-statistics",
    tag = "statistics",
    params(
        ("month" = String, Query, description = "月份英文全称，区分大小写")
    ),
    responses(
        (status = 200, description = "汇总、柱状图与饼图数据", body = CombinedStatisticsResponse),
        (status = 400, description = "缺少或非法的月份", body = ErrorResponse),
        (status = 500, description = "统计失败", body = ErrorResponse)
    )
)]
/// 一次返回三项统计，供仪表盘首屏使用
pub async fn get_combined_statistics(
    statistics_service: web::Data<StatisticsService>,
    query: web::Query<MonthQuery>,
) -> Result<HttpResponse> {
    match statistics_service.get_combined(&query).await {
        Ok(combined) => Ok(HttpResponse::Ok().json(combined)),
        Err(e) => Ok(e.response_with_context("Error fetching combined data")),
    }
}

pub fn statistics_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/statistics", web::get().to(get_statistics))
        .route("/bar-chart", web::get().to(get_bar_chart))
        .route("/pie-chart", web::get().to(get_pie_chart))
        .route(
            "/combined-statistics",
            web::get().to(get_combined_statistics),
        );
}
