// ==========================================
// 饼干库存管理系统 - API 层错误类型
// ==========================================
// 职责: 统一导入/分析/导出错误，保持显式原因
// ==========================================

use crate::engine::AnalysisError;
use crate::exporter::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("分析失败: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("导出失败: {0}")]
    Export(#[from] ExportError),

    #[error("无效输入: {0}")]
    InvalidInput(String),
}

/// API 层结果类型别名
pub type ApiResult<T> = Result<T, ApiError>;
