//! 月份过滤条件

use std::{fmt, str::FromStr};

use crate::core::error::CoreError;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// 日历月份（1-12），与年份无关
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month(u32);

impl Month {
    pub fn new(number: u32) -> Result<Self, CoreError> {
        if (1..=12).contains(&number) {
            Ok(Self(number))
        } else {
            Err(CoreError::InvalidQuery(format!("月份超出范围: {number}")))
        }
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// 解析可选的查询参数，空字符串视为未过滤
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, CoreError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

impl FromStr for Month {
    type Err = CoreError;

    /// 支持 `3`、`03`、`March`、`mar`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if let Ok(number) = value.parse::<u32>() {
            return Self::new(number);
        }

        let lower = value.to_ascii_lowercase();
        MONTH_NAMES
            .iter()
            .position(|name| *name == lower || (lower.len() == 3 && name.starts_with(&lower)))
            .map(|index| Self(index as u32 + 1))
            .ok_or_else(|| CoreError::InvalidQuery(format!("无法识别的月份: {value}")))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_months() {
        assert_eq!("3".parse::<Month>().unwrap().number(), 3);
        assert_eq!("03".parse::<Month>().unwrap().number(), 3);
        assert_eq!("12".parse::<Month>().unwrap().number(), 12);
    }

    #[test]
    fn test_month_names() {
        assert_eq!("March".parse::<Month>().unwrap().number(), 3);
        assert_eq!("sep".parse::<Month>().unwrap().number(), 9);
        assert_eq!("DECEMBER".parse::<Month>().unwrap().number(), 12);
    }

    #[test]
    fn test_invalid_months() {
        assert!("0".parse::<Month>().is_err());
        assert!("13".parse::<Month>().is_err());
        assert!("ma".parse::<Month>().is_err());
        assert!("-1".parse::<Month>().is_err());
    }

    #[test]
    fn test_empty_means_no_filter() {
        assert_eq!(Month::parse_optional(None).unwrap(), None);
        assert_eq!(Month::parse_optional(Some("  ")).unwrap(), None);
        assert_eq!(
            Month::parse_optional(Some("7")).unwrap(),
            Some(Month::new(7).unwrap())
        );
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(Month::new(4).unwrap().to_string(), "04");
    }
}
