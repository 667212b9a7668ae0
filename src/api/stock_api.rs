// ==========================================
// 饼干库存管理系统 - 库存分析 API
// ==========================================
// 职责: 编排 解析 → 校验 → 清洗 → 分析 全流程
// 数据流单向: 文件 → 规范记录 → (+目标量) → 分析报告
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::analysis::{AnalysisReport, ResultRow};
use crate::domain::stock::{ImportOutcome, InventoryRecord, TargetSpec};
use crate::engine::{StockAnalyzer, SummaryEngine};
use crate::importer::field_mapper::{find_column, COL_MATERIAL_NO};
use crate::importer::{
    coerce_item_id, DataCleaner, FieldMapper, ImportError, TableValidator, UniversalFileParser,
};
use chrono::Utc;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

// ===== 目标量文件列名 =====
pub const COL_TARGET_BOXES: &str = "Target Stock (Boxes)";
pub const COL_TARGET_PIECES: &str = "Target Stock (Pieces)";

// ==========================================
// StockAnalysisApi - 库存分析接口
// ==========================================
pub struct StockAnalysisApi {
    analyzer: StockAnalyzer,
    summary: SummaryEngine,
}

impl StockAnalysisApi {
    pub fn new() -> Self {
        Self {
            analyzer: StockAnalyzer::new(),
            summary: SummaryEngine::new(),
        }
    }

    /// 导入库存文件（CSV/Excel）
    ///
    /// # 流程
    /// 1. 文件解析（全空白行剔除）
    /// 2. 表头解析（缺列即 SchemaError）
    /// 3. 域校验（列粒度阻断）+ 软告警收集
    /// 4. 清洗（剔行/去重/归一，永不失败）
    pub fn load_inventory(&self, path: &Path) -> ApiResult<ImportOutcome> {
        let started = Instant::now();
        info!(file = %path.display(), "开始导入库存文件");

        let table = UniversalFileParser.parse(path)?;
        let mapper = FieldMapper::resolve(&table.headers)?;

        let raw_rows: Vec<_> = table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| mapper.map_row(row, idx + 1))
            .collect();

        let report = TableValidator.validate(&raw_rows)?;
        for warning in &report.warnings {
            warn!(
                row = warning.row_number,
                field = %warning.field,
                "{}",
                warning.message
            );
        }

        let clean = DataCleaner.clean(&raw_rows);
        info!(
            total = report.total_rows,
            kept = clean.records.len(),
            dropped = clean.dropped_total(),
            "库存文件导入完成"
        );

        Ok(ImportOutcome {
            batch_id: Uuid::new_v4().to_string(),
            clean,
            report,
            elapsed_time: started.elapsed(),
        })
    }

    /// 读取目标量文件（CSV/Excel）
    ///
    /// 必需列: Material No / Target Stock (Boxes) / Target Stock (Pieces)
    /// 目标量与库存列同等强度校验：非数值或负值整表阻断
    /// 物料号不可解析的行跳过；重复物料号保留首条
    pub fn load_targets(&self, path: &Path) -> ApiResult<HashMap<String, TargetSpec>> {
        info!(file = %path.display(), "开始读取目标量文件");

        let table = UniversalFileParser.parse(path)?;

        let id_col = find_column(&table.headers, COL_MATERIAL_NO);
        let boxes_col = find_column(&table.headers, COL_TARGET_BOXES);
        let pieces_col = find_column(&table.headers, COL_TARGET_PIECES);

        let mut missing = Vec::new();
        if id_col.is_none() {
            missing.push(COL_MATERIAL_NO.to_string());
        }
        if boxes_col.is_none() {
            missing.push(COL_TARGET_BOXES.to_string());
        }
        if pieces_col.is_none() {
            missing.push(COL_TARGET_PIECES.to_string());
        }

        let (Some(id_col), Some(boxes_col), Some(pieces_col)) = (id_col, boxes_col, pieces_col)
        else {
            return Err(ImportError::SchemaError {
                missing_columns: missing,
            }
            .into());
        };

        let mut targets = HashMap::new();
        for (idx, row) in table.rows.iter().enumerate() {
            let Some(item_id) = row.get(&id_col).and_then(|v| coerce_item_id(v)) else {
                warn!(row = idx + 1, "目标量行物料号不可解析，跳过");
                continue;
            };

            let target_boxes = parse_target_value(row.get(&boxes_col), COL_TARGET_BOXES)?;
            let target_pieces = parse_target_value(row.get(&pieces_col), COL_TARGET_PIECES)?;

            // 重复物料号保留首条，与清洗的去重口径一致
            targets.entry(item_id).or_insert(TargetSpec {
                target_boxes,
                target_pieces,
            });
        }

        info!(count = targets.len(), "目标量读取完成");
        Ok(targets)
    }

    /// 执行差异分析，产出完整分析报告
    ///
    /// # 前置条件
    /// 每条记录在 targets 中有条目，否则整体失败
    pub fn analyze(
        &self,
        records: &[InventoryRecord],
        targets: &HashMap<String, TargetSpec>,
        top_n: usize,
    ) -> ApiResult<AnalysisReport> {
        let results = self.analyzer.analyze(records, targets)?;
        let summary = self.summary.summarize(&results);

        let rows: Vec<ResultRow> = results.iter().map(ResultRow::from).collect();
        let top_excess: Vec<ResultRow> = self
            .summary
            .top_excess(&results, top_n)
            .into_iter()
            .map(ResultRow::from)
            .collect();
        let top_shortage: Vec<ResultRow> = self
            .summary
            .top_shortage(&results, top_n)
            .into_iter()
            .map(ResultRow::from)
            .collect();

        info!(
            items = summary.total_items,
            shortage = summary.shortage_items,
            excess = summary.excess_items,
            balanced = summary.balanced_items,
            "差异分析完成"
        );

        Ok(AnalysisReport {
            generated_at: Utc::now(),
            rows,
            summary,
            top_excess,
            top_shortage,
        })
    }
}

impl Default for StockAnalysisApi {
    fn default() -> Self {
        Self::new()
    }
}

/// 解析单个目标量单元格（非数值/负值为硬性错误）
fn parse_target_value(cell: Option<&String>, column: &str) -> Result<i64, ImportError> {
    let value = cell
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| ImportError::NonNumericValue {
            column: column.to_string(),
        })?;

    if value < 0.0 {
        return Err(ImportError::NegativeValue {
            column: column.to_string(),
        });
    }
    Ok(value.trunc() as i64)
}
