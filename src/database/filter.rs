//! 与存储实现无关的查询条件

use std::ops::{Bound, RangeBounds};

use chrono::{Datelike, Month};

use crate::models::Transaction;

/// 搜索词。
///
/// 标题或描述按字面子串匹配（忽略大小写）；搜索词本身是有限数字时，
/// 同时按价格精确匹配。
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
    text: String,
    price: Option<f64>,
}

impl SearchTerm {
    /// 空串或全空白返回 `None`
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let price = text.parse::<f64>().ok().filter(|p| p.is_finite());
        Some(Self {
            text: text.to_string(),
            price,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        let needle = self.text.to_lowercase();
        tx.title.to_lowercase().contains(&needle)
            || tx.description.to_lowercase().contains(&needle)
            || self.price == Some(tx.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: Bound<f64>,
    pub max: Bound<f64>,
}

impl PriceRange {
    pub fn new(min: Bound<f64>, max: Bound<f64>) -> Self {
        Self { min, max }
    }
}

impl RangeBounds<f64> for PriceRange {
    fn start_bound(&self) -> Bound<&f64> {
        self.min.as_ref()
    }

    fn end_bound(&self) -> Bound<&f64> {
        self.max.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFilter {
    /// `dateOfSale` 在 UTC 下的月份，不区分年份
    pub month: Month,
    pub search: Option<SearchTerm>,
    pub price: Option<PriceRange>,
    pub sold: Option<bool>,
}

impl TransactionFilter {
    pub fn for_month(month: Month) -> Self {
        Self {
            month,
            search: None,
            price: None,
            sold: None,
        }
    }

    pub fn with_search(mut self, search: Option<SearchTerm>) -> Self {
        self.search = search;
        self
    }

    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_sold(mut self, sold: bool) -> Self {
        self.sold = Some(sold);
        self
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if tx.date_of_sale.month() != self.month.number_from_month() {
            return false;
        }
        if let Some(search) = &self.search
            && !search.matches(tx)
        {
            return false;
        }
        if let Some(range) = &self.price
            && !range.contains(&tx.price)
        {
            return false;
        }
        self.sold.is_none_or(|sold| tx.sold == sold)
    }
}
