// ==========================================
// 饼干库存管理系统 - 汇总统计引擎
// ==========================================
// 职责: 结果集的只读聚合视图
// 输出: 状态计数/占比 + 超储/缺货 Top-N
// 排名并列时按输入顺序（稳定排序）
// ==========================================

use crate::domain::analysis::{AnalysisResult, StockStatus, SummaryStatistics};
use std::cmp::Reverse;

/// Top-N 默认条数
pub const DEFAULT_TOP_N: usize = 5;

// ==========================================
// SummaryEngine - 汇总统计引擎
// ==========================================
// 红线: 无状态引擎，所有方法都是纯函数
pub struct SummaryEngine;

impl SummaryEngine {
    pub fn new() -> Self {
        Self
    }

    /// 生成汇总统计
    pub fn summarize(&self, results: &[AnalysisResult]) -> SummaryStatistics {
        let total_items = results.len();
        let shortage_items = self.count_status(results, StockStatus::Shortage);
        let excess_items = self.count_status(results, StockStatus::Excess);
        let balanced_items = self.count_status(results, StockStatus::Balanced);

        // 差值合计按幅值报告
        let total_shortage_pieces: i64 = results
            .iter()
            .filter(|r| r.status == StockStatus::Shortage)
            .map(|r| r.difference_pieces)
            .sum();
        let total_excess_pieces: i64 = results
            .iter()
            .filter(|r| r.status == StockStatus::Excess)
            .map(|r| r.difference_pieces)
            .sum::<i64>()
            .abs();

        SummaryStatistics {
            total_items,
            shortage_items,
            excess_items,
            balanced_items,
            shortage_percentage: Self::ratio_percentage(shortage_items, total_items),
            excess_percentage: Self::ratio_percentage(excess_items, total_items),
            balanced_percentage: Self::ratio_percentage(balanced_items, total_items),
            total_shortage_pieces,
            total_excess_pieces,
        }
    }

    /// 超储 Top-N：差值最负优先，并列按输入顺序
    pub fn top_excess<'a>(
        &self,
        results: &'a [AnalysisResult],
        top_n: usize,
    ) -> Vec<&'a AnalysisResult> {
        let mut excess: Vec<&AnalysisResult> = results
            .iter()
            .filter(|r| r.status == StockStatus::Excess)
            .collect();
        excess.sort_by_key(|r| r.difference_pieces);
        excess.truncate(top_n);
        excess
    }

    /// 缺货 Top-N：差值最正优先，并列按输入顺序
    pub fn top_shortage<'a>(
        &self,
        results: &'a [AnalysisResult],
        top_n: usize,
    ) -> Vec<&'a AnalysisResult> {
        let mut shortage: Vec<&AnalysisResult> = results
            .iter()
            .filter(|r| r.status == StockStatus::Shortage)
            .collect();
        shortage.sort_by_key(|r| Reverse(r.difference_pieces));
        shortage.truncate(top_n);
        shortage
    }

    fn count_status(&self, results: &[AnalysisResult], status: StockStatus) -> usize {
        results.iter().filter(|r| r.status == status).count()
    }

    /// 占比百分数（两位小数）；无记录时为 0
    fn ratio_percentage(count: usize, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        let raw = count as f64 / total as f64 * 100.0;
        (raw * 100.0).round() / 100.0
    }
}

impl Default for SummaryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(item_id: &str, difference_pieces: i64) -> AnalysisResult {
        let status = if difference_pieces > 0 {
            StockStatus::Shortage
        } else if difference_pieces < 0 {
            StockStatus::Excess
        } else {
            StockStatus::Balanced
        };
        AnalysisResult {
            item_id: item_id.to_string(),
            description: format!("Item {}", item_id),
            stock_boxes: 0,
            stock_pieces: 0,
            target_boxes: 0,
            target_pieces: 0,
            pieces_per_box: 24,
            total_current_pieces: 0,
            total_target_pieces: 0,
            difference_pieces,
            difference_boxes: difference_pieces.div_euclid(24),
            difference_remaining_pieces: difference_pieces.rem_euclid(24),
            status,
            percentage_difference: None,
        }
    }

    #[test]
    fn test_summarize_counts_and_percentages() {
        let results = vec![
            result("1", 10),
            result("2", -20),
            result("3", 0),
            result("4", 5),
        ];
        let summary = SummaryEngine.summarize(&results);

        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.shortage_items, 2);
        assert_eq!(summary.excess_items, 1);
        assert_eq!(summary.balanced_items, 1);
        assert_eq!(summary.shortage_percentage, 50.0);
        assert_eq!(summary.excess_percentage, 25.0);
        assert_eq!(summary.balanced_percentage, 25.0);
        assert_eq!(summary.total_shortage_pieces, 15);
        assert_eq!(summary.total_excess_pieces, 20);
    }

    #[test]
    fn test_summarize_empty_result_set() {
        let summary = SummaryEngine.summarize(&[]);
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.shortage_percentage, 0.0);
        assert_eq!(summary.total_excess_pieces, 0);
    }

    #[test]
    fn test_top_excess_ranks_most_negative_first() {
        let results = vec![
            result("1", -10),
            result("2", 30),
            result("3", -50),
            result("4", -20),
        ];
        let top = SummaryEngine.top_excess(&results, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].item_id, "3");
        assert_eq!(top[1].item_id, "4");
    }

    #[test]
    fn test_top_shortage_ranks_most_positive_first() {
        let results = vec![
            result("1", 10),
            result("2", 45),
            result("3", -5),
            result("4", 45),
            result("5", 3),
        ];
        let top = SummaryEngine.top_shortage(&results, 3);
        assert_eq!(top.len(), 3);
        // 并列 45：按输入顺序，"2" 在前
        assert_eq!(top[0].item_id, "2");
        assert_eq!(top[1].item_id, "4");
        assert_eq!(top[2].item_id, "1");
    }

    #[test]
    fn test_top_n_larger_than_result_set() {
        let results = vec![result("1", -10)];
        let top = SummaryEngine.top_excess(&results, DEFAULT_TOP_N);
        assert_eq!(top.len(), 1);
    }
}
