// ==========================================
// 饼干库存管理系统 - 分析结果定义
// ==========================================
// 职责: 差异分析结果 / 结果表行 / 汇总统计 / 分析报告
// 符号约定: 差值 = 目标 - 现有；正 = 缺货，负 = 超储
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// StockStatus - 库存状态
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    Shortage, // 缺货（需补足）
    Excess,   // 超储（高于目标）
    Balanced, // 平衡（恰好等于目标）
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Shortage => "Shortage",
            StockStatus::Excess => "Excess",
            StockStatus::Balanced => "Balanced",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// AnalysisResult - 单条差异分析结果
// ==========================================
// 红线: 每次分析全量重算，结果不可变，无独立身份（挂靠 item_id）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub item_id: String,
    pub description: String,

    // ===== 输入快照 =====
    pub stock_boxes: i64,
    pub stock_pieces: i64,
    pub target_boxes: i64,
    pub target_pieces: i64,
    pub pieces_per_box: i64,

    // ===== 折算与差值 =====
    pub total_current_pieces: i64,
    pub total_target_pieces: i64,
    pub difference_pieces: i64, // 目标 - 现有（带符号）

    // ===== 差值分解（地板除/地板模，余数恒 >= 0）=====
    pub difference_boxes: i64,
    pub difference_remaining_pieces: i64,

    // ===== 判定 =====
    pub status: StockStatus,
    // 目标总量为 0 时无定义，置 None（不产生 inf/NaN）
    pub percentage_difference: Option<f64>,
}

impl AnalysisResult {
    /// 箱差值的展示文本
    ///
    /// 缺货: `+N boxes needed`；超储: `-N boxes extra`；平衡: `0 boxes`
    /// N 为分解后箱分量的绝对值
    pub fn format_box_difference(&self) -> String {
        let boxes = self.difference_boxes.abs();
        match self.status {
            StockStatus::Balanced => "0 boxes".to_string(),
            StockStatus::Shortage => format!("+{} boxes needed", boxes),
            StockStatus::Excess => format!("-{} boxes extra", boxes),
        }
    }

    /// 散件差值的展示文本
    pub fn format_piece_difference(&self) -> String {
        let pieces = self.difference_remaining_pieces.abs();
        match self.status {
            StockStatus::Balanced => "0 pieces".to_string(),
            StockStatus::Shortage => format!("+{} pieces needed", pieces),
            StockStatus::Excess => format!("-{} pieces extra", pieces),
        }
    }
}

// ==========================================
// ResultRow - 结果表行（输出边界）
// ==========================================
// 列顺序与展示/导出约定一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub item_id: String,
    pub description: String,
    pub current_boxes: i64,
    pub current_pieces: i64,
    pub target_boxes: i64,
    pub target_pieces: i64,
    pub total_current_pieces: i64,
    pub total_target_pieces: i64,
    pub status: StockStatus,
    pub excess_shortage_boxes: String,  // 已格式化，如 "+5 boxes needed"
    pub excess_shortage_pieces: String, // 已格式化，如 "-19 pieces extra"
    pub percentage_difference: Option<f64>,
}

impl ResultRow {
    /// 结果表表头（与字段顺序一致）
    pub const HEADERS: [&'static str; 12] = [
        "Material No",
        "Material Description",
        "Current Stock (Boxes)",
        "Current Stock (Pieces)",
        "Target Stock (Boxes)",
        "Target Stock (Pieces)",
        "Total Current Pieces",
        "Total Target Pieces",
        "Status",
        "Excess/Shortage (Boxes)",
        "Excess/Shortage (Pieces)",
        "Percentage Difference",
    ];

    /// 转为 CSV 记录；百分比无定义时输出空单元格
    pub fn as_csv_record(&self) -> Vec<String> {
        vec![
            self.item_id.clone(),
            self.description.clone(),
            self.current_boxes.to_string(),
            self.current_pieces.to_string(),
            self.target_boxes.to_string(),
            self.target_pieces.to_string(),
            self.total_current_pieces.to_string(),
            self.total_target_pieces.to_string(),
            self.status.to_string(),
            self.excess_shortage_boxes.clone(),
            self.excess_shortage_pieces.clone(),
            self.percentage_difference
                .map(|p| format!("{:.2}", p))
                .unwrap_or_default(),
        ]
    }
}

impl From<&AnalysisResult> for ResultRow {
    fn from(result: &AnalysisResult) -> Self {
        ResultRow {
            item_id: result.item_id.clone(),
            description: result.description.clone(),
            current_boxes: result.stock_boxes,
            current_pieces: result.stock_pieces,
            target_boxes: result.target_boxes,
            target_pieces: result.target_pieces,
            total_current_pieces: result.total_current_pieces,
            total_target_pieces: result.total_target_pieces,
            status: result.status,
            excess_shortage_boxes: result.format_box_difference(),
            excess_shortage_pieces: result.format_piece_difference(),
            percentage_difference: result.percentage_difference,
        }
    }
}

// ==========================================
// SummaryStatistics - 汇总统计
// ==========================================
// 辅助表（导出为附加 sheet）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub total_items: usize,
    pub shortage_items: usize,
    pub excess_items: usize,
    pub balanced_items: usize,
    pub shortage_percentage: f64, // 两位小数；无记录时为 0
    pub excess_percentage: f64,
    pub balanced_percentage: f64,
    pub total_shortage_pieces: i64, // 缺货差值合计（取幅值）
    pub total_excess_pieces: i64,   // 超储差值合计（取幅值）
}

// ==========================================
// AnalysisReport - 分析报告
// ==========================================
// 用途: 分析接口返回值，供展示/导出消费
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,  // 生成时间
    pub rows: Vec<ResultRow>,         // 结果表（保持输入顺序）
    pub summary: SummaryStatistics,   // 汇总统计
    pub top_excess: Vec<ResultRow>,   // 超储 Top-N（差值最负优先）
    pub top_shortage: Vec<ResultRow>, // 缺货 Top-N（差值最正优先）
}
