//! 日期类型模块
//!
//! `KudoDate` 以 ISO 8601 日期（`2025-03-15`）传输，
//! 展示时格式化为 `Mar 15, 2025`。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 展示格式
const DISPLAY_FORMAT: &str = "%b %d, %Y";

/// 表扬日期（无时区的日历日期）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KudoDate(NaiveDate);

impl KudoDate {
    /// 从年月日创建
    ///
    /// 返回 None 如果日期不存在
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl fmt::Display for KudoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_short_month_name() {
        let date = KudoDate::from_ymd(2025, 3, 15).unwrap();
        assert_eq!(date.to_string(), "Mar 15, 2025");
    }

    #[test]
    fn single_digit_day_is_zero_padded() {
        let date = KudoDate::from_ymd(2025, 3, 5).unwrap();
        assert_eq!(date.to_string(), "Mar 05, 2025");
    }

    #[test]
    fn invalid_date_is_rejected() {
        assert!(KudoDate::from_ymd(2025, 2, 30).is_none());
    }

    #[test]
    fn orders_chronologically() {
        let earlier = KudoDate::from_ymd(2025, 3, 13).unwrap();
        let later = KudoDate::from_ymd(2025, 3, 15).unwrap();
        assert!(earlier < later);
    }
}
