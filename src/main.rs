use actix_web::{App, HttpServer, middleware::Logger, web};
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use chrono::Local;  // timestamp in log lines
use std::sync::Arc;

use sales_stats_backend::{
    config::Config,
    database::create_store,
    external::{ProductFeedClient, TransactionFeed},
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration");

    // 创建记录存储（数据库连接 + 迁移）
    let store = create_store(&config.database)
        .await
        .expect("Failed to initialise transaction store");

    // 第三方数据源
    let feed: Arc<dyn TransactionFeed> = Arc::new(
        ProductFeedClient::new(config.feed.clone()).expect("Failed to build feed HTTP client"),
    );

    // 创建服务
    let transaction_service = TransactionService::new(store.clone());
    let statistics_service = StatisticsService::new(store.clone());
    let seed_service = SeedService::new(store, feed);

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(transaction_service.clone()))
            .app_data(web::Data::new(statistics_service.clone()))
            .app_data(web::Data::new(seed_service.clone()))
            .configure(swagger_config)
            .service(web::scope("/api").configure(handlers::api_config))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
