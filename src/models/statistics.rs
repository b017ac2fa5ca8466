use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 月度汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    /// 当月所有记录的价格之和
    pub total_sale_amount: f64,
    /// sold == true 的记录数
    pub sold_items: u64,
    /// sold == false 的记录数
    pub not_sold_items: u64,
}

/// 柱状图的一个价格区间
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeCount {
    /// 区间标签，例如 `101-200`、`901-above`
    pub price_range: String,
    pub count: u64,
}

/// 饼图的一个分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CombinedStatisticsResponse {
    pub statistics: StatisticsResponse,
    pub bar_chart_data: Vec<PriceRangeCount>,
    pub pie_chart_data: Vec<CategoryCount>,
}
