// ==========================================
// 饼干库存管理系统 - 表格校验器实现
// ==========================================
// 职责: 域校验（列粒度阻断）+ 行级软告警收集
// 两阶段策略: 校验断言表格结构可用；清洗决定行存留
// ==========================================

use crate::domain::stock::{RawStockRow, ValidationReport, ValidationWarning};
use crate::importer::cleaner::coerce_item_id;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{
    COL_DESCRIPTION, COL_MATERIAL_NO, COL_PIECES_PER_BOX, COL_STOCK_BOXES, COL_STOCK_PIECES,
};

// ==========================================
// TableValidator - 表格校验器
// ==========================================
// 红线: 无状态，纯函数
pub struct TableValidator;

impl TableValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验整表
    ///
    /// # 阻断规则（表级，列粒度）
    /// - 三个数值列任一含非数值 → NonNumericValue
    /// - 三个数值列任一含负值 → NegativeValue
    /// - 装箱系数含 0 → ZeroConversionFactor（独立于负值检查）
    ///
    /// # 软告警（不阻断）
    /// - 物料号缺失或无法按数值解析
    /// - 描述为空
    pub fn validate(&self, rows: &[RawStockRow]) -> ImportResult<ValidationReport> {
        // 域校验：按列扫描，命中即整表阻断
        let numeric_columns: [(&str, fn(&RawStockRow) -> Option<f64>); 3] = [
            (COL_STOCK_BOXES, |r| r.stock_boxes),
            (COL_STOCK_PIECES, |r| r.stock_pieces),
            (COL_PIECES_PER_BOX, |r| r.pieces_per_box),
        ];

        for (column, extract) in numeric_columns {
            if rows.iter().any(|r| extract(r).is_none()) {
                return Err(ImportError::NonNumericValue {
                    column: column.to_string(),
                });
            }
            if rows.iter().any(|r| extract(r).is_some_and(|v| v < 0.0)) {
                return Err(ImportError::NegativeValue {
                    column: column.to_string(),
                });
            }
        }

        // 装箱系数为 0：单位换算无定义，硬性阻断
        if rows
            .iter()
            .any(|r| r.pieces_per_box.is_some_and(|v| v == 0.0))
        {
            return Err(ImportError::ZeroConversionFactor {
                column: COL_PIECES_PER_BOX.to_string(),
            });
        }

        // 行级软告警
        let mut report = ValidationReport {
            total_rows: rows.len(),
            ..Default::default()
        };

        for row in rows {
            let id_parseable = row
                .item_id
                .as_deref()
                .and_then(coerce_item_id)
                .is_some();
            if !id_parseable {
                report.rows_missing_item_id += 1;
                report.warnings.push(ValidationWarning {
                    row_number: row.row_number,
                    item_id: row.item_id.clone(),
                    field: COL_MATERIAL_NO.to_string(),
                    message: "物料号缺失或不可解析，该行将在清洗阶段剔除".to_string(),
                });
            }

            if row.description.is_none() {
                report.rows_empty_description += 1;
                report.warnings.push(ValidationWarning {
                    row_number: row.row_number,
                    item_id: row.item_id.clone(),
                    field: COL_DESCRIPTION.to_string(),
                    message: "物料描述为空，该行将在清洗阶段剔除".to_string(),
                });
            }
        }

        Ok(report)
    }
}

impl Default for TableValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row(row_number: usize) -> RawStockRow {
        RawStockRow {
            item_id: Some("9000579".to_string()),
            description: Some("Marie Biscuit".to_string()),
            stock_boxes: Some(50.0),
            stock_pieces: Some(120.0),
            pieces_per_box: Some(24.0),
            row_number,
        }
    }

    #[test]
    fn test_validate_clean_table() {
        let rows = vec![raw_row(1), raw_row(2)];
        let report = TableValidator.validate(&rows).unwrap();
        assert_eq!(report.total_rows, 2);
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_non_numeric_column_blocks_table() {
        let mut bad = raw_row(2);
        bad.stock_pieces = None;
        let result = TableValidator.validate(&[raw_row(1), bad]);
        match result {
            Err(ImportError::NonNumericValue { column }) => {
                assert_eq!(column, COL_STOCK_PIECES);
            }
            other => panic!("期望 NonNumericValue, 实际 {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_negative_value_blocks_table() {
        let mut bad = raw_row(1);
        bad.stock_boxes = Some(-3.0);
        let result = TableValidator.validate(&[bad]);
        assert!(matches!(
            result,
            Err(ImportError::NegativeValue { column }) if column == COL_STOCK_BOXES
        ));
    }

    #[test]
    fn test_zero_conversion_factor_blocks_table() {
        let mut bad = raw_row(3);
        bad.pieces_per_box = Some(0.0);
        let result = TableValidator.validate(&[raw_row(1), raw_row(2), bad]);
        assert!(matches!(
            result,
            Err(ImportError::ZeroConversionFactor { column }) if column == COL_PIECES_PER_BOX
        ));
    }

    #[test]
    fn test_missing_item_id_is_warning_not_error() {
        let mut bad = raw_row(2);
        bad.item_id = None;
        let report = TableValidator.validate(&[raw_row(1), bad]).unwrap();
        assert_eq!(report.rows_missing_item_id, 1);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].row_number, 2);
    }

    #[test]
    fn test_non_numeric_item_id_is_warning() {
        let mut bad = raw_row(1);
        bad.item_id = Some("MAT-001".to_string());
        let report = TableValidator.validate(&[bad]).unwrap();
        assert_eq!(report.rows_missing_item_id, 1);
    }

    #[test]
    fn test_empty_description_is_warning() {
        let mut bad = raw_row(4);
        bad.description = None;
        let report = TableValidator.validate(&[raw_row(1), bad]).unwrap();
        assert_eq!(report.rows_empty_description, 1);
    }
}
