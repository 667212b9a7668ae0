// ==========================================
// 饼干库存管理系统 - 数据清洗器实现
// ==========================================
// 职责: 物料号数值归一 / 剔行 / 去重 / 整数截断 / TRIM
// 约定: 清洗永不失败；清洗后为空也是合法输出
// ==========================================

use crate::domain::stock::{CleanOutcome, InventoryRecord, RawStockRow};
use std::collections::HashSet;
use tracing::debug;

/// 物料号数值归一
///
/// 先按数值解析再转为字符串，消除浮点尾巴
/// （如 "9000579.0" → "9000579"）；不可解析返回 None
pub fn coerce_item_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some((value.trunc() as i64).to_string())
}

// ==========================================
// DataCleaner - 数据清洗器
// ==========================================
// 红线: 无状态，纯函数
pub struct DataCleaner;

impl DataCleaner {
    pub fn new() -> Self {
        Self
    }

    /// 清洗原始行，产出规范记录集
    ///
    /// # 规则（按序应用）
    /// 1. 物料号数值归一，不可解析剔行
    /// 2. 描述 TRIM 后为空剔行
    /// 3. 物料号去重，保留首次出现（按输入顺序）
    /// 4. 三个数值列截断为整数（不做四舍五入）
    pub fn clean(&self, rows: &[RawStockRow]) -> CleanOutcome {
        let mut records = Vec::new();
        let mut seen_ids = HashSet::new();
        let mut dropped_missing_id = 0usize;
        let mut dropped_empty_description = 0usize;
        let mut dropped_duplicate = 0usize;

        for row in rows {
            let Some(item_id) = row.item_id.as_deref().and_then(coerce_item_id) else {
                debug!(row = row.row_number, "物料号不可解析，剔行");
                dropped_missing_id += 1;
                continue;
            };

            let Some(description) = row.description.as_deref().map(str::trim) else {
                debug!(row = row.row_number, %item_id, "描述为空，剔行");
                dropped_empty_description += 1;
                continue;
            };
            if description.is_empty() {
                dropped_empty_description += 1;
                continue;
            }

            if seen_ids.contains(&item_id) {
                debug!(row = row.row_number, %item_id, "物料号重复，保留首条");
                dropped_duplicate += 1;
                continue;
            }

            // 数值列缺失在校验阶段已整表阻断，此处只做兜底跳过
            let (Some(boxes), Some(pieces), Some(per_box)) =
                (row.stock_boxes, row.stock_pieces, row.pieces_per_box)
            else {
                debug!(row = row.row_number, %item_id, "数值列缺失，剔行");
                continue;
            };

            seen_ids.insert(item_id.clone());
            records.push(InventoryRecord {
                item_id,
                description: description.to_string(),
                stock_boxes: boxes.trunc() as i64,
                stock_pieces: pieces.trunc() as i64,
                pieces_per_box: per_box.trunc() as i64,
            });
        }

        CleanOutcome {
            records,
            dropped_missing_id,
            dropped_empty_description,
            dropped_duplicate,
        }
    }
}

impl Default for DataCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row(item_id: &str, description: &str, row_number: usize) -> RawStockRow {
        RawStockRow {
            item_id: if item_id.is_empty() {
                None
            } else {
                Some(item_id.to_string())
            },
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            stock_boxes: Some(50.0),
            stock_pieces: Some(120.0),
            pieces_per_box: Some(24.0),
            row_number,
        }
    }

    #[test]
    fn test_coerce_item_id_strips_float_artifact() {
        assert_eq!(coerce_item_id("9000579.0"), Some("9000579".to_string()));
        assert_eq!(coerce_item_id(" 9000579 "), Some("9000579".to_string()));
        assert_eq!(coerce_item_id("MAT-001"), None);
        assert_eq!(coerce_item_id(""), None);
    }

    #[test]
    fn test_clean_normalizes_item_id() {
        let outcome = DataCleaner.clean(&[raw_row("9000579.0", "Marie Biscuit", 1)]);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].item_id, "9000579");
        assert_eq!(outcome.records[0].stock_boxes, 50);
    }

    #[test]
    fn test_clean_drops_unparseable_id() {
        let outcome = DataCleaner.clean(&[
            raw_row("ABC", "Marie Biscuit", 1),
            raw_row("9000580", "Cream Cracker", 2),
        ]);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.dropped_missing_id, 1);
        assert_eq!(outcome.records[0].item_id, "9000580");
    }

    #[test]
    fn test_clean_drops_empty_description() {
        let outcome = DataCleaner.clean(&[
            raw_row("100", "", 1),
            raw_row("200", "Cream Cracker", 2),
        ]);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.dropped_empty_description, 1);
    }

    #[test]
    fn test_clean_deduplicates_keeping_first() {
        let mut first = raw_row("100", "First Occurrence", 1);
        first.stock_boxes = Some(10.0);
        let mut second = raw_row("100", "Second Occurrence", 2);
        second.stock_boxes = Some(99.0);

        let outcome = DataCleaner.clean(&[first, second]);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.dropped_duplicate, 1);
        assert_eq!(outcome.records[0].description, "First Occurrence");
        assert_eq!(outcome.records[0].stock_boxes, 10);
    }

    #[test]
    fn test_clean_truncates_numeric_columns() {
        let mut row = raw_row("100", "Marie", 1);
        row.stock_boxes = Some(10.9);
        row.stock_pieces = Some(3.5);
        let outcome = DataCleaner.clean(&[row]);
        assert_eq!(outcome.records[0].stock_boxes, 10);
        assert_eq!(outcome.records[0].stock_pieces, 3);
    }

    #[test]
    fn test_clean_empty_input_is_valid() {
        let outcome = DataCleaner.clean(&[]);
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.dropped_total(), 0);
    }

    #[test]
    fn test_clean_is_idempotent() {
        let rows = vec![
            raw_row("9000579.0", " Marie Biscuit ", 1),
            raw_row("9000579", "Duplicate", 2),
            raw_row("9000580", "Cream Cracker", 3),
        ];
        let first_pass = DataCleaner.clean(&rows);

        // 对已清洗的结果再跑一遍清洗，应得到相同记录集
        let reclean_input: Vec<RawStockRow> = first_pass
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| RawStockRow {
                item_id: Some(r.item_id.clone()),
                description: Some(r.description.clone()),
                stock_boxes: Some(r.stock_boxes as f64),
                stock_pieces: Some(r.stock_pieces as f64),
                pieces_per_box: Some(r.pieces_per_box as f64),
                row_number: i + 1,
            })
            .collect();
        let second_pass = DataCleaner.clean(&reclean_input);

        assert_eq!(first_pass.records, second_pass.records);
        assert_eq!(second_pass.dropped_total(), 0);
    }
}
