// ==========================================
// 饼干库存管理系统 - 库存实体定义
// ==========================================
// 职责: 原始行 / 规范记录 / 目标量 / 导入结果
// 约定: 两级单位体系 (箱 CBB / 散件 PKT)
// ==========================================

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ==========================================
// RawStockRow - 原始库存行（解析后、校验前）
// ==========================================
// 用途: 文件解析 + 字段映射的产物
// None 表示缺失或无法解析
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStockRow {
    pub item_id: Option<String>,       // 物料号原始值（已 TRIM，空串归一为 None）
    pub description: Option<String>,   // 物料描述（已 TRIM）
    pub stock_boxes: Option<f64>,      // 现有箱数 (Stock in CBB)
    pub stock_pieces: Option<f64>,     // 现有散件数 (Stock in PKT)
    pub pieces_per_box: Option<f64>,   // 装箱系数 (Alt UOM1 Num)

    // 元信息
    pub row_number: usize, // 原始文件数据行号（1 起），用于告警报告
}

// ==========================================
// InventoryRecord - 规范库存记录
// ==========================================
// 红线: 只由清洗产生，产生后不可变；引擎不做二次转换
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub item_id: String,     // 物料号，非空，记录集内唯一
    pub description: String, // 物料描述，TRIM 后非空
    pub stock_boxes: i64,    // 现有箱数 >= 0
    pub stock_pieces: i64,   // 现有散件数 >= 0
    pub pieces_per_box: i64, // 装箱系数 > 0
}

impl InventoryRecord {
    /// 现有库存折算为散件总数
    pub fn total_current_pieces(&self) -> i64 {
        self.stock_boxes * self.pieces_per_box + self.stock_pieces
    }
}

// ==========================================
// TargetSpec - 目标库存量
// ==========================================
// 来源: 调用方按物料号提供；每条规范记录必须有对应条目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub target_boxes: i64,  // 目标箱数 >= 0
    pub target_pieces: i64, // 目标散件数 >= 0
}

impl TargetSpec {
    /// 目标库存折算为散件总数
    pub fn total_pieces(&self, pieces_per_box: i64) -> i64 {
        self.target_boxes * pieces_per_box + self.target_pieces
    }
}

// ==========================================
// ValidationWarning - 行级校验告警
// ==========================================
// 级别: 仅警告（不阻断导入），对应行在清洗阶段剔除
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub row_number: usize,       // 原始文件数据行号
    pub item_id: Option<String>, // 物料号（如可读取）
    pub field: String,           // 告警字段
    pub message: String,         // 告警描述
}

// ==========================================
// ValidationReport - 校验报告
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total_rows: usize,              // 数据总行数
    pub rows_missing_item_id: usize,    // 物料号缺失/不可解析的行数
    pub rows_empty_description: usize,  // 描述为空的行数
    pub warnings: Vec<ValidationWarning>, // 告警明细
}

impl ValidationReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// ==========================================
// CleanOutcome - 清洗结果
// ==========================================
// 约定: 清洗永不失败，只过滤与归一化；records 为空也是合法输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanOutcome {
    pub records: Vec<InventoryRecord>,  // 规范记录（保持输入顺序）
    pub dropped_missing_id: usize,      // 因物料号不可解析剔除
    pub dropped_empty_description: usize, // 因描述为空剔除
    pub dropped_duplicate: usize,       // 因物料号重复剔除（保留首条）
}

impl CleanOutcome {
    /// 剔除总行数
    pub fn dropped_total(&self) -> usize {
        self.dropped_missing_id + self.dropped_empty_description + self.dropped_duplicate
    }
}

// ==========================================
// ImportOutcome - 导入结果
// ==========================================
// 用途: 导入接口返回值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub batch_id: String,          // 批次 ID (UUID v4)
    pub clean: CleanOutcome,       // 清洗结果
    pub report: ValidationReport,  // 校验报告
    pub elapsed_time: Duration,    // 导入耗时
}
