// ==========================================
// 饼干库存管理系统 - 导入层
// ==========================================
// 职责: 外部表格数据导入,生成规范库存记录
// 支持: Excel (.xlsx/.xls), CSV
// 流程: 文件解析 → 字段映射 → 结构/域校验 → 清洗
// ==========================================

// 模块声明
pub mod cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod validator;

// 重导出核心类型
pub use cleaner::{coerce_item_id, DataCleaner};
pub use error::{ImportError, ImportResult};
pub use field_mapper::{
    FieldMapper, COL_DESCRIPTION, COL_MATERIAL_NO, COL_PIECES_PER_BOX, COL_STOCK_BOXES,
    COL_STOCK_PIECES, REQUIRED_COLUMNS,
};
pub use file_parser::{CsvParser, ExcelParser, ParsedTable, UniversalFileParser};
pub use validator::TableValidator;
