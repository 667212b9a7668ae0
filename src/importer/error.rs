// ==========================================
// 饼干库存管理系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 粒度: 结构/域错误为表级阻断；行级缺陷走告警通道
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 结构错误（SchemaError）=====
    #[error("缺少必需列: {}", .missing_columns.join(", "))]
    SchemaError { missing_columns: Vec<String> },

    // ===== 域错误（DomainError，列粒度）=====
    #[error("列 {column} 含非数值内容")]
    NonNumericValue { column: String },

    #[error("列 {column} 含负数值")]
    NegativeValue { column: String },

    #[error("列 {column} 含为 0 的装箱系数，单位换算无定义")]
    ZeroConversionFactor { column: String },

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// 导入模块结果类型别名
pub type ImportResult<T> = Result<T, ImportError>;
