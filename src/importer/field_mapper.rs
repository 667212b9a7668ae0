// ==========================================
// 饼干库存管理系统 - 字段映射器实现
// ==========================================
// 职责: 源表头 → 标准字段解析 + 类型转换
// 约定: 表头匹配对大小写与空白不敏感；多余列忽略
// ==========================================

use crate::domain::stock::RawStockRow;
use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;

// ===== 标准列名（输入边界约定）=====
pub const COL_MATERIAL_NO: &str = "Material No";
pub const COL_DESCRIPTION: &str = "Material Description";
pub const COL_STOCK_BOXES: &str = "Stock in CBB";
pub const COL_STOCK_PIECES: &str = "Stock in PKT";
pub const COL_PIECES_PER_BOX: &str = "Alt UOM1 Num";

/// 必需列清单（缺一即 SchemaError）
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_MATERIAL_NO,
    COL_DESCRIPTION,
    COL_STOCK_BOXES,
    COL_STOCK_PIECES,
    COL_PIECES_PER_BOX,
];

// ==========================================
// FieldMapper - 字段映射器
// ==========================================
// 持有 标准列名 → 文件实际表头 的解析结果
pub struct FieldMapper {
    resolved: HashMap<&'static str, String>,
}

impl FieldMapper {
    /// 依据文件表头解析必需列
    ///
    /// # 返回
    /// - Ok(FieldMapper): 五个必需列全部命中
    /// - Err(SchemaError): 列出全部缺失列，不做部分处理
    pub fn resolve(headers: &[String]) -> ImportResult<Self> {
        let mut resolved = HashMap::new();
        let mut missing = Vec::new();

        for canonical in REQUIRED_COLUMNS {
            match find_column(headers, canonical) {
                Some(actual) => {
                    resolved.insert(canonical, actual);
                }
                None => missing.push(canonical.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(ImportError::SchemaError {
                missing_columns: missing,
            });
        }

        Ok(FieldMapper { resolved })
    }

    /// 单行映射为原始库存行
    ///
    /// 数值无法解析时置 None，由校验器按列粒度阻断
    pub fn map_row(&self, row: &HashMap<String, String>, row_number: usize) -> RawStockRow {
        RawStockRow {
            item_id: self.get_string(row, COL_MATERIAL_NO),
            description: self.get_string(row, COL_DESCRIPTION),
            stock_boxes: self.parse_f64(row, COL_STOCK_BOXES),
            stock_pieces: self.parse_f64(row, COL_STOCK_PIECES),
            pieces_per_box: self.parse_f64(row, COL_PIECES_PER_BOX),
            row_number,
        }
    }

    /// 提取字符串字段（TRIM，空串归一为 None）
    fn get_string(&self, row: &HashMap<String, String>, canonical: &str) -> Option<String> {
        let actual = self.resolved.get(canonical)?;
        let value = row.get(actual)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// 解析浮点数（缺失或非数值均为 None）
    fn parse_f64(&self, row: &HashMap<String, String>, canonical: &str) -> Option<f64> {
        self.get_string(row, canonical)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }
}

/// 在表头中查找标准列，返回文件内实际表头
///
/// 匹配规则: TRIM + 小写 + 压缩连续空白
pub fn find_column(headers: &[String], canonical: &str) -> Option<String> {
    let wanted = normalize_header(canonical);
    headers
        .iter()
        .find(|h| normalize_header(h) == wanted)
        .cloned()
}

fn normalize_header(header: &str) -> String {
    header
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn required_mapper() -> FieldMapper {
        FieldMapper::resolve(&headers(&REQUIRED_COLUMNS)).unwrap()
    }

    #[test]
    fn test_resolve_exact_headers() {
        let mapper = FieldMapper::resolve(&headers(&[
            "Material No",
            "Material Description",
            "Stock in CBB",
            "Stock in PKT",
            "Alt UOM1 Num",
        ]));
        assert!(mapper.is_ok());
    }

    #[test]
    fn test_resolve_case_and_whitespace_insensitive() {
        let mapper = FieldMapper::resolve(&headers(&[
            "material no",
            "MATERIAL  DESCRIPTION",
            " stock in cbb ",
            "Stock In PKT",
            "alt uom1 num",
        ]));
        assert!(mapper.is_ok());
    }

    #[test]
    fn test_resolve_reports_all_missing_columns() {
        let result = FieldMapper::resolve(&headers(&["Material No", "Stock in CBB"]));
        match result {
            Err(ImportError::SchemaError { missing_columns }) => {
                assert_eq!(
                    missing_columns,
                    vec![
                        "Material Description".to_string(),
                        "Stock in PKT".to_string(),
                        "Alt UOM1 Num".to_string()
                    ]
                );
            }
            other => panic!("期望 SchemaError, 实际 {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_map_row_parses_numeric_fields() {
        let mapper = required_mapper();
        let mut row = HashMap::new();
        row.insert("Material No".to_string(), "9000579.0".to_string());
        row.insert("Material Description".to_string(), " Marie Biscuit ".to_string());
        row.insert("Stock in CBB".to_string(), "50".to_string());
        row.insert("Stock in PKT".to_string(), "120".to_string());
        row.insert("Alt UOM1 Num".to_string(), "24".to_string());

        let raw = mapper.map_row(&row, 1);
        assert_eq!(raw.item_id.as_deref(), Some("9000579.0"));
        assert_eq!(raw.description.as_deref(), Some("Marie Biscuit"));
        assert_eq!(raw.stock_boxes, Some(50.0));
        assert_eq!(raw.pieces_per_box, Some(24.0));
    }

    #[test]
    fn test_map_row_non_numeric_becomes_none() {
        let mapper = required_mapper();
        let mut row = HashMap::new();
        row.insert("Material No".to_string(), "9000579".to_string());
        row.insert("Material Description".to_string(), "Marie".to_string());
        row.insert("Stock in CBB".to_string(), "abc".to_string());
        row.insert("Stock in PKT".to_string(), "".to_string());
        row.insert("Alt UOM1 Num".to_string(), "NaN".to_string());

        let raw = mapper.map_row(&row, 3);
        assert_eq!(raw.stock_boxes, None);
        assert_eq!(raw.stock_pieces, None);
        // NaN 非有限值，一律视为不可解析
        assert_eq!(raw.pieces_per_box, None);
        assert_eq!(raw.row_number, 3);
    }
}
