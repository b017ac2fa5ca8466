use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::transaction::get_transactions,
        handlers::statistics::get_statistics,
        handlers::statistics::get_bar_chart,
        handlers::statistics::get_pie_chart,
        handlers::statistics::get_combined_statistics,
        handlers::seed::initialize_database,
    ),
    components(
        schemas(
            Transaction,
            TransactionQuery,
            MonthQuery,
            StatisticsResponse,
            PriceRangeCount,
            CategoryCount,
            CombinedStatisticsResponse,
            SeedResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "transaction", description = "Transaction listing API"),
        (name = "statistics", description = "Monthly statistics API"),
        (name = "seed", description = "Bulk data import API"),
    ),
    info(
        title = "Sales Statistics API",
        version = "0.1.0",
        description = "Monthly sales statistics REST API documentation"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_endpoints() {
        let doc = ApiDoc::openapi();
        for path in [
            "/transactions",
            "/statistics",
            "/bar-chart",
            "/pie-chart",
            "/combined-statistics",
            "/initialize-database",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
