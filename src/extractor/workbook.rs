// ==========================================
// EDGAR 温室气体数据管道 - 工作簿读取实现
// ==========================================
// 依据: EDGAR_2025_GHG_booklet 工作表布局（首行表头）
// 职责: 工作表 → DataTable（保留表头顺序与单元格类型）
// ==========================================

use crate::domain::table::{CellValue, DataTable};
use crate::extractor::error::{ExtractError, ExtractResult};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// ==========================================
// SheetSource Trait
// ==========================================
// 用途: 工作簿读取接口（抽取层对外唯一缝合点）
// 实现者: ExcelWorkbook；测试中以内存固件实现
pub trait SheetSource {
    /// 列出工作簿内全部工作表名
    fn list_sheets(&self) -> Vec<String>;

    /// 按名读取工作表为宽表
    ///
    /// # 参数
    /// - name: 工作表名
    ///
    /// # 返回
    /// - Ok(DataTable): 首行为表头，其余为数据行（整行空白已剔除）
    /// - Err: 工作表缺失或读取失败
    fn read_sheet(&mut self, name: &str) -> ExtractResult<DataTable>;
}

// ==========================================
// ExcelWorkbook - calamine 实现
// ==========================================
pub struct ExcelWorkbook {
    workbook: Xlsx<BufReader<File>>,
    path: PathBuf,
}

impl ExcelWorkbook {
    /// 打开 Excel 工作簿
    ///
    /// # 参数
    /// - path: 工作簿路径（.xlsx/.xls）
    pub fn open<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let path = path.as_ref();

        // 检查文件存在
        if !path.exists() {
            return Err(ExtractError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "xlsx" && ext != "xls" {
            return Err(ExtractError::UnsupportedFormat(ext.to_string()));
        }

        let workbook: Xlsx<_> =
            open_workbook(path).map_err(|e: calamine::XlsxError| ExtractError::WorkbookOpen {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            workbook,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetSource for ExcelWorkbook {
    fn list_sheets(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    fn read_sheet(&mut self, name: &str) -> ExtractResult<DataTable> {
        if !self.workbook.sheet_names().iter().any(|s| s == name) {
            return Err(ExtractError::SheetNotFound(name.to_string()));
        }

        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|e| ExtractError::SheetRead {
                sheet: name.to_string(),
                message: e.to_string(),
            })?;

        // 提取表头（第一行）
        let mut rows = range.rows();
        let Some(header_row) = rows.next() else {
            return Ok(DataTable::default());
        };

        let columns: Vec<String> = header_row.iter().map(header_string).collect();
        let mut table = DataTable::new(columns);

        // 读取数据行，跳过整行空白
        for data_row in rows {
            let row: Vec<CellValue> = data_row.iter().map(cell_value).collect();
            if row.iter().all(CellValue::is_null) {
                continue;
            }
            table.push_row(row);
        }

        Ok(table)
    }
}

/// 表头单元格 → 列名
///
/// 整数年份表头在 Excel 中常以浮点存储（2020.0），
/// 此处还原为纯数字串，保证年份列识别可用。
fn header_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}

/// 数据单元格 → CellValue
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Null,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Null
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Int(*b as i64),
        other => {
            let s = other.to_string();
            if s.is_empty() {
                CellValue::Null
            } else {
                CellValue::Text(s)
            }
        }
    }
}
