pub mod seed;
pub mod statistics;
pub mod transaction;

pub use seed::seed_config;
pub use statistics::statistics_config;
pub use transaction::transaction_config;

use actix_web::web;

/// 挂载在 `/api` 下的全部路由
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(transaction_config)
        .configure(statistics_config)
        .configure(seed_config);
}
