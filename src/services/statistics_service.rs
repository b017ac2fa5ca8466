use std::ops::Bound;

use futures_util::future::try_join_all;

use crate::database::{PriceRange, SharedStore, TransactionFilter};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::month_filter;

/// 柱状图价格区间，`max` 为 None 表示无上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBand {
    pub min: u32,
    pub max: Option<u32>,
}

pub const PRICE_BANDS: [PriceBand; 10] = [
    PriceBand::bounded(0, 100),
    PriceBand::bounded(101, 200),
    PriceBand::bounded(201, 300),
    PriceBand::bounded(301, 400),
    PriceBand::bounded(401, 500),
    PriceBand::bounded(501, 600),
    PriceBand::bounded(601, 700),
    PriceBand::bounded(701, 800),
    PriceBand::bounded(801, 900),
    PriceBand::open_ended(901),
];

impl PriceBand {
    pub const fn bounded(min: u32, max: u32) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub const fn open_ended(min: u32) -> Self {
        Self { min, max: None }
    }

    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!("{}-above", self.min),
        }
    }

    /// 价格是连续值：除第一个区间外下界都取开区间（上一档的上限），
    /// 这样 100.5 之类的价格落在 101-200，且每个价格只计数一次。
    pub fn range(&self) -> PriceRange {
        let min = if self.min == 0 {
            Bound::Included(0.0)
        } else {
            Bound::Excluded(f64::from(self.min - 1))
        };
        let max = self
            .max
            .map_or(Bound::Unbounded, |m| Bound::Included(f64::from(m)));
        PriceRange::new(min, max)
    }
}

#[derive(Clone)]
pub struct StatisticsService {
    store: SharedStore,
}

impl StatisticsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// 月度销售总额、已售与未售数量
    pub async fn get_statistics(&self, query: &MonthQuery) -> AppResult<StatisticsResponse> {
        let filter = month_filter(query.month.as_deref())?;
        self.summary(&filter).await
    }

    /// 按价格区间统计数量
    pub async fn get_bar_chart(&self, query: &MonthQuery) -> AppResult<Vec<PriceRangeCount>> {
        let filter = month_filter(query.month.as_deref())?;
        self.histogram(&filter).await
    }

    /// 按分类统计数量
    pub async fn get_pie_chart(&self, query: &MonthQuery) -> AppResult<Vec<CategoryCount>> {
        let filter = month_filter(query.month.as_deref())?;
        self.categories(&filter).await
    }

    /// 三项统计并发计算，共用同一个月份过滤条件
    pub async fn get_combined(&self, query: &MonthQuery) -> AppResult<CombinedStatisticsResponse> {
        let filter = month_filter(query.month.as_deref())?;
        let (statistics, bar_chart_data, pie_chart_data) = tokio::try_join!(
            self.summary(&filter),
            self.histogram(&filter),
            self.categories(&filter),
        )?;
        Ok(CombinedStatisticsResponse {
            statistics,
            bar_chart_data,
            pie_chart_data,
        })
    }

    async fn summary(&self, filter: &TransactionFilter) -> AppResult<StatisticsResponse> {
        let sold = filter.clone().with_sold(true);
        let not_sold = filter.clone().with_sold(false);
        let (total_sale_amount, sold_items, not_sold_items) = tokio::try_join!(
            self.store.sum_price(filter),
            self.store.count(&sold),
            self.store.count(&not_sold),
        )?;
        Ok(StatisticsResponse {
            total_sale_amount,
            sold_items,
            not_sold_items,
        })
    }

    async fn histogram(&self, filter: &TransactionFilter) -> AppResult<Vec<PriceRangeCount>> {
        try_join_all(PRICE_BANDS.iter().map(|band| {
            let band_filter = filter.clone().with_price(band.range());
            async move {
                let count = self.store.count(&band_filter).await?;
                Ok::<_, AppError>(PriceRangeCount {
                    price_range: band.label(),
                    count,
                })
            }
        }))
        .await
    }

    async fn categories(&self, filter: &TransactionFilter) -> AppResult<Vec<CategoryCount>> {
        self.store.count_by_category(filter).await
    }
}
