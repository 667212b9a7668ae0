// ==========================================
// 饼干库存管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、派生结果与报告结构
// 红线: 不含文件解析逻辑,不含引擎逻辑
// ==========================================

pub mod analysis;
pub mod stock;

// 重导出核心类型
pub use analysis::{AnalysisReport, AnalysisResult, ResultRow, StockStatus, SummaryStatistics};
pub use stock::{
    CleanOutcome, ImportOutcome, InventoryRecord, RawStockRow, TargetSpec, ValidationReport,
    ValidationWarning,
};
