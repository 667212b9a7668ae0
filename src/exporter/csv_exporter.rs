// ==========================================
// 饼干库存管理系统 - CSV 导出器实现
// ==========================================
// 职责: 分析报告 → 结果表 CSV + 汇总表 CSV
// 列顺序: 与 ResultRow::HEADERS 约定一致
// ==========================================

use crate::domain::analysis::{AnalysisReport, ResultRow, SummaryStatistics};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("导出文件写入失败: {0}")]
    WriteError(String),

    #[error("CSV 序列化失败: {0}")]
    CsvError(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::WriteError(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvError(err.to_string())
    }
}

// ==========================================
// CsvExporter - CSV 导出器
// ==========================================
pub struct CsvExporter;

impl CsvExporter {
    /// 导出结果表
    pub fn export_results(&self, report: &AnalysisReport, path: &Path) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record(ResultRow::HEADERS)?;
        for row in &report.rows {
            writer.write_record(row.as_csv_record())?;
        }
        writer.flush()?;

        info!(file = %path.display(), rows = report.rows.len(), "结果表导出完成");
        Ok(())
    }

    /// 导出汇总表（辅助 sheet：状态计数与占比）
    pub fn export_summary(
        &self,
        summary: &SummaryStatistics,
        path: &Path,
    ) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record(["Metric", "Value"])?;
        writer.write_record(["Total Items", summary.total_items.to_string().as_str()])?;
        writer.write_record(["Shortage Items", summary.shortage_items.to_string().as_str()])?;
        writer.write_record(["Excess Items", summary.excess_items.to_string().as_str()])?;
        writer.write_record(["Balanced Items", summary.balanced_items.to_string().as_str()])?;
        writer.write_record([
            "Shortage Percentage",
            format!("{:.2}", summary.shortage_percentage).as_str(),
        ])?;
        writer.write_record([
            "Excess Percentage",
            format!("{:.2}", summary.excess_percentage).as_str(),
        ])?;
        writer.write_record([
            "Balanced Percentage",
            format!("{:.2}", summary.balanced_percentage).as_str(),
        ])?;
        writer.write_record([
            "Total Shortage Pieces",
            summary.total_shortage_pieces.to_string().as_str(),
        ])?;
        writer.write_record([
            "Total Excess Pieces",
            summary.total_excess_pieces.to_string().as_str(),
        ])?;
        writer.flush()?;

        info!(file = %path.display(), "汇总表导出完成");
        Ok(())
    }
}
