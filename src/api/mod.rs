// ==========================================
// 饼干库存管理系统 - API 层
// ==========================================
// 职责: 面向展示层的业务接口（导入 / 目标量 / 分析）
// 红线: 不持跨调用状态；目标量以显式映射传入
// ==========================================

pub mod error;
pub mod stock_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use stock_api::{StockAnalysisApi, COL_TARGET_BOXES, COL_TARGET_PIECES};
