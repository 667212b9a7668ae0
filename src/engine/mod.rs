// ==========================================
// 饼干库存管理系统 - 引擎层
// ==========================================
// 职责: 差异分析与汇总统计
// 红线: 无状态引擎，全部为纯函数；不做 I/O
// ==========================================

pub mod analyzer;
pub mod summary;

// 重导出核心类型
pub use analyzer::{AnalysisError, StockAnalyzer};
pub use summary::{SummaryEngine, DEFAULT_TOP_N};
