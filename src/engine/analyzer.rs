// ==========================================
// 饼干库存管理系统 - 差异分析引擎
// ==========================================
// 职责: 规范记录 + 目标量 → 差异分析结果
// 输入: InventoryRecord + TargetSpec 映射
// 输出: AnalysisResult（保持输入顺序）
// ==========================================
// 红线: 无状态引擎，所有方法都是纯函数
// 符号约定: 差值 = 目标 - 现有；正 = 缺货，负 = 超储
// ==========================================

use crate::domain::analysis::{AnalysisResult, StockStatus};
use crate::domain::stock::{InventoryRecord, TargetSpec};
use std::collections::HashMap;
use thiserror::Error;

/// 分析引擎错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    // 每条规范记录必须有目标量条目（前置条件，由调用方保证）
    #[error("缺少目标量: item_id={0}")]
    MissingTarget(String),

    // 目标量与现有库存列执行同等强度校验
    #[error("目标量为负: item_id={item_id}, 字段 {field}")]
    NegativeTarget { item_id: String, field: String },
}

// ==========================================
// StockAnalyzer - 差异分析引擎
// ==========================================
pub struct StockAnalyzer;

impl StockAnalyzer {
    /// 创建新的差异分析引擎
    pub fn new() -> Self {
        Self
    }

    /// 批量分析
    ///
    /// # 参数
    /// - `records`: 规范库存记录（清洗产物）
    /// - `targets`: 物料号 → 目标量 映射
    ///
    /// # 返回
    /// 按输入顺序的分析结果；任一记录缺少目标量或目标量为负时整体失败
    pub fn analyze(
        &self,
        records: &[InventoryRecord],
        targets: &HashMap<String, TargetSpec>,
    ) -> Result<Vec<AnalysisResult>, AnalysisError> {
        let mut results = Vec::with_capacity(records.len());
        for record in records {
            let target = targets
                .get(&record.item_id)
                .copied()
                .ok_or_else(|| AnalysisError::MissingTarget(record.item_id.clone()))?;
            results.push(self.analyze_record(record, target)?);
        }
        Ok(results)
    }

    /// 单条分析
    pub fn analyze_record(
        &self,
        record: &InventoryRecord,
        target: TargetSpec,
    ) -> Result<AnalysisResult, AnalysisError> {
        if target.target_boxes < 0 {
            return Err(AnalysisError::NegativeTarget {
                item_id: record.item_id.clone(),
                field: "target_boxes".to_string(),
            });
        }
        if target.target_pieces < 0 {
            return Err(AnalysisError::NegativeTarget {
                item_id: record.item_id.clone(),
                field: "target_pieces".to_string(),
            });
        }

        let total_current_pieces = record.total_current_pieces();
        let total_target_pieces = target.total_pieces(record.pieces_per_box);
        let difference_pieces = total_target_pieces - total_current_pieces;

        // 地板除/地板模分解：余数恒在 [0, pieces_per_box) 区间
        // （负差值的箱分量比截断除更负，余数为补数）
        let difference_boxes = difference_pieces.div_euclid(record.pieces_per_box);
        let difference_remaining_pieces = difference_pieces.rem_euclid(record.pieces_per_box);

        Ok(AnalysisResult {
            item_id: record.item_id.clone(),
            description: record.description.clone(),
            stock_boxes: record.stock_boxes,
            stock_pieces: record.stock_pieces,
            target_boxes: target.target_boxes,
            target_pieces: target.target_pieces,
            pieces_per_box: record.pieces_per_box,
            total_current_pieces,
            total_target_pieces,
            difference_pieces,
            difference_boxes,
            difference_remaining_pieces,
            status: Self::determine_status(difference_pieces),
            percentage_difference: Self::percentage_difference(
                difference_pieces,
                total_target_pieces,
            ),
        })
    }

    /// 状态判定：差值符号的纯函数
    fn determine_status(difference_pieces: i64) -> StockStatus {
        if difference_pieces > 0 {
            StockStatus::Shortage
        } else if difference_pieces < 0 {
            StockStatus::Excess
        } else {
            StockStatus::Balanced
        }
    }

    /// 百分比差异（两位小数）
    ///
    /// 目标总量为 0 时除法无定义，返回 None
    fn percentage_difference(difference_pieces: i64, total_target_pieces: i64) -> Option<f64> {
        if total_target_pieces == 0 {
            return None;
        }
        let raw = difference_pieces as f64 / total_target_pieces as f64 * 100.0;
        Some((raw * 100.0).round() / 100.0)
    }
}

impl Default for StockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
