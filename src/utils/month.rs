use chrono::Month;

/// 前端下拉框使用的月份名称，按自然月顺序排列
pub const MONTHS: [(&str, Month); 12] = [
    ("January", Month::January),
    ("February", Month::February),
    ("March", Month::March),
    ("April", Month::April),
    ("May", Month::May),
    ("June", Month::June),
    ("July", Month::July),
    ("August", Month::August),
    ("September", Month::September),
    ("October", Month::October),
    ("November", Month::November),
    ("December", Month::December),
];

/// 按英文月份全称精确匹配（区分大小写）
pub fn parse_month_name(name: &str) -> Option<Month> {
    MONTHS
        .iter()
        .find(|(label, _)| *label == name)
        .map(|(_, month)| *month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_name() {
        assert_eq!(parse_month_name("January"), Some(Month::January));
        assert_eq!(parse_month_name("March"), Some(Month::March));
        assert_eq!(parse_month_name("December"), Some(Month::December));
    }

    #[test]
    fn test_parse_month_name_is_case_sensitive() {
        assert_eq!(parse_month_name("march"), None);
        assert_eq!(parse_month_name("MARCH"), None);
        assert_eq!(parse_month_name("Mar"), None);
        assert_eq!(parse_month_name(" March"), None);
        assert_eq!(parse_month_name(""), None);
    }

    #[test]
    fn test_months_are_in_calendar_order() {
        for (i, (_, month)) in MONTHS.iter().enumerate() {
            assert_eq!(month.number_from_month() as usize, i + 1);
        }
    }
}
