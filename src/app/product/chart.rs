//! 价格区间柱状图
//!
//! 固定区间 `[0,100)`, `[100,200)` ... `[800,900)`, `[900,+∞)`，负价格归入 `Other`。

use serde::{Deserialize, Serialize};

/// 区间宽度
pub const BUCKET_WIDTH: f64 = 100.0;
/// 固定区间数量，最后一个区间无上界
pub const BUCKET_COUNT: usize = 10;

/// 价格所在区间的下标，负价格返回 `None`
pub fn bucket_index(price: f64) -> Option<usize> {
    if price >= 0.0 {
        Some(((price / BUCKET_WIDTH).floor() as usize).min(BUCKET_COUNT - 1))
    } else {
        None
    }
}

/// 各区间的计数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceHistogram {
    buckets: [u64; BUCKET_COUNT],
    other: u64,
}

impl PriceHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, price: f64) {
        match bucket_index(price) {
            Some(index) => self.buckets[index] += 1,
            None => self.other += 1,
        }
    }

    /// 累加聚合查询的结果；越界下标计入 `Other`
    pub fn add(&mut self, index: i32, count: u64) {
        match usize::try_from(index) {
            Ok(index) if index < BUCKET_COUNT => self.buckets[index] += count,
            _ => self.other += count,
        }
    }

    pub fn total(&self) -> u64 {
        self.buckets.iter().sum::<u64>() + self.other
    }

    /// 十个固定区间总是输出；`Other` 仅在非零时输出
    pub fn into_ranges(self) -> Vec<PriceRangeCount> {
        let mut ranges: Vec<PriceRangeCount> = self
            .buckets
            .iter()
            .enumerate()
            .map(|(index, &count)| {
                let min = index as f64 * BUCKET_WIDTH;
                let last = index == BUCKET_COUNT - 1;
                PriceRangeCount {
                    range: if last {
                        format!("{min}+")
                    } else {
                        format!("{min}-{}", min + BUCKET_WIDTH)
                    },
                    min: Some(min),
                    max: if last { None } else { Some(min + BUCKET_WIDTH) },
                    count,
                }
            })
            .collect();

        if self.other > 0 {
            ranges.push(PriceRangeCount {
                range: "Other".to_string(),
                min: None,
                max: None,
                count: self.other,
            });
        }

        ranges
    }
}

impl FromIterator<f64> for PriceHistogram {
    fn from_iter<I: IntoIterator<Item = f64>>(prices: I) -> Self {
        let mut histogram = Self::new();
        for price in prices {
            histogram.record(price);
        }
        histogram
    }
}

/// `/bar-chart` 中的一个区间
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRangeCount {
    pub range: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket_index(0.0), Some(0));
        assert_eq!(bucket_index(99.99), Some(0));
        assert_eq!(bucket_index(100.0), Some(1));
        assert_eq!(bucket_index(899.99), Some(8));
        assert_eq!(bucket_index(900.0), Some(9));
        assert_eq!(bucket_index(12_000.0), Some(9));
        assert_eq!(bucket_index(-0.01), None);
    }

    #[test]
    fn test_ranges_are_fixed_and_labelled() {
        let ranges = PriceHistogram::new().into_ranges();

        assert_eq!(ranges.len(), BUCKET_COUNT);
        assert_eq!(ranges[0].range, "0-100");
        assert_eq!(ranges[8].range, "800-900");
        assert_eq!(ranges[9].range, "900+");
        assert_eq!(ranges[9].max, None);
        assert!(ranges.iter().all(|r| r.count == 0));
    }

    #[test]
    fn test_counts_sum_to_total() {
        let histogram: PriceHistogram = [5.0, 150.0, 155.0, 950.0, -3.0].into_iter().collect();
        assert_eq!(histogram.total(), 5);

        let ranges = histogram.into_ranges();
        assert_eq!(ranges.len(), BUCKET_COUNT + 1);
        assert_eq!(ranges[1].count, 2);
        assert_eq!(ranges.last().unwrap().range, "Other");
        assert_eq!(ranges.iter().map(|r| r.count).sum::<u64>(), 5);
    }

    #[test]
    fn test_add_from_aggregate_rows() {
        let mut histogram = PriceHistogram::new();
        histogram.add(0, 3);
        histogram.add(9, 2);
        histogram.add(-1, 1);

        assert_eq!(histogram.total(), 6);
        let ranges = histogram.into_ranges();
        assert_eq!(ranges[0].count, 3);
        assert_eq!(ranges[9].count, 2);
        assert_eq!(ranges[10].count, 1);
    }
}
