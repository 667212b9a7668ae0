// ==========================================
// 饼干库存管理系统 - 核心库
// ==========================================
// 技术栈: Rust + calamine/csv
// 系统定位: 库存差异决策支持 (人工设定目标量)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 业务规则
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 导出层 - 结果表输出
pub mod exporter;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::analysis::{
    AnalysisReport, AnalysisResult, ResultRow, StockStatus, SummaryStatistics,
};
pub use domain::stock::{
    CleanOutcome, ImportOutcome, InventoryRecord, RawStockRow, TargetSpec, ValidationReport,
    ValidationWarning,
};

// 导入层
pub use importer::{
    DataCleaner, FieldMapper, ImportError, ImportResult, TableValidator, UniversalFileParser,
};

// 引擎
pub use engine::{AnalysisError, StockAnalyzer, SummaryEngine, DEFAULT_TOP_N};

// API
pub use api::{ApiError, ApiResult, StockAnalysisApi};

// 导出层
pub use exporter::{CsvExporter, ExportError};

/// 系统版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
