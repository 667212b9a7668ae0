// ==========================================
// 饼干库存管理系统 - 命令行入口
// ==========================================
// 用法: biscuit-stock <库存文件> <目标量文件> [输出.csv]
// 给定输出路径时写结果表 + 汇总表，否则打印 JSON 报告
// ==========================================

use anyhow::{bail, Context, Result};
use biscuit_stock::{CsvExporter, StockAnalysisApi, DEFAULT_TOP_N, VERSION};
use std::path::Path;

fn main() -> Result<()> {
    biscuit_stock::logging::init();

    tracing::info!("==================================================");
    tracing::info!("饼干库存管理系统 - 库存差异决策支持");
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "用法: {} <库存文件.csv|.xlsx> <目标量文件.csv|.xlsx> [输出.csv]",
            args.first().map(String::as_str).unwrap_or("biscuit-stock")
        );
        bail!("参数不足");
    }

    let inventory_path = Path::new(&args[1]);
    let targets_path = Path::new(&args[2]);

    let api = StockAnalysisApi::new();

    let import = api
        .load_inventory(inventory_path)
        .with_context(|| format!("库存文件导入失败: {}", inventory_path.display()))?;
    tracing::info!(
        batch = %import.batch_id,
        records = import.clean.records.len(),
        warnings = import.report.warnings.len(),
        elapsed = ?import.elapsed_time,
        "导入批次就绪"
    );

    if import.clean.records.is_empty() {
        tracing::warn!("清洗后无可分析记录，流程结束");
        return Ok(());
    }

    let targets = api
        .load_targets(targets_path)
        .with_context(|| format!("目标量文件读取失败: {}", targets_path.display()))?;

    let report = api.analyze(&import.clean.records, &targets, DEFAULT_TOP_N)?;

    match args.get(3) {
        Some(output) => {
            let output_path = Path::new(output);
            let summary_path = output_path.with_extension("summary.csv");
            CsvExporter.export_results(&report, output_path)?;
            CsvExporter.export_summary(&report.summary, &summary_path)?;
            tracing::info!(
                results = %output_path.display(),
                summary = %summary_path.display(),
                "导出完成"
            );
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
