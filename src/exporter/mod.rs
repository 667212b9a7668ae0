// ==========================================
// 饼干库存管理系统 - 导出层
// ==========================================
// 职责: 结果表 / 汇总表 的文件输出
// 红线: 只做输出结构的薄封装，不含计算逻辑
// ==========================================

pub mod csv_exporter;

// 重导出核心类型
pub use csv_exporter::{CsvExporter, ExportError};
