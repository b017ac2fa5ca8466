use actix_web::{HttpResponse, Result, web};

use crate::services::SeedService;

#[utoipa::path(
    post,
    path = "/initialize-database",
    tag = "seed",
    responses(
        (status = 200, description = "清空并重新导入交易数据", body = crate::models::SeedResponse),
        (status = 500, description = "数据源为空/不可用或写入失败", body = crate::models::ErrorResponse)
    )
)]
/// 从第三方数据源整批导入（会先清空现有数据）
pub async fn initialize_database(seed_service: web::Data<SeedService>) -> Result<HttpResponse> {
    match seed_service.reseed().await {
        Ok(resp) => Ok(HttpResponse::Ok().json(resp)),
        Err(e) => Ok(e.response_with_context("Error initializing database")),
    }
}

pub fn seed_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/initialize-database", web::post().to(initialize_database));
}
