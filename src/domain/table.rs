// ==========================================
// EDGAR 温室气体数据管道 - 内存表格结构
// ==========================================
// 职责: 有序列名 + 类型化单元格的二维表
// 用途: 抽取层输出（宽表）与引擎层中间产物（长表）共用
// ==========================================

/// 单元格值
///
/// 列头顺序与单元格类型都由抽取层保留，
/// 年份列识别（纯数字表头）依赖此处不丢失信息。
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 空值（源表空白单元格 / 连接未命中）
    Null,
    /// 文本
    Text(String),
    /// 浮点数
    Number(f64),
    /// 整数（年份等）
    Int(i64),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// 取文本表示（Null → None）
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Int(i) => Some(i.to_string()),
        }
    }

    /// 取数值表示（文本尝试解析，失败视为空）
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Null => None,
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Number(n) => Some(*n),
            CellValue::Int(i) => Some(*i as f64),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Null => None,
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Number(n) if n.fract() == 0.0 => Some(*n as i64),
            CellValue::Number(_) => None,
            CellValue::Int(i) => Some(*i),
        }
    }
}

// ==========================================
// DataTable - 有序列二维表
// ==========================================
// 约定: 每行宽度与列数一致（push_row 负责补齐/截断）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    /// 列名（保留源表头顺序）
    pub columns: Vec<String>,
    /// 数据行
    pub rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// 按列名查找列下标（同名列取首个）
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// 追加一行，宽度对齐到列数
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Null);
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_first_match() {
        let table = DataTable::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(table.column_index("b"), Some(1));
        assert_eq!(table.column_index("c"), None);
    }

    #[test]
    fn test_push_row_pads_and_truncates() {
        let mut table = DataTable::new(vec!["a".to_string(), "b".to_string()]);
        table.push_row(vec![CellValue::Int(1)]);
        table.push_row(vec![
            CellValue::Int(1),
            CellValue::Int(2),
            CellValue::Int(3),
        ]);
        assert_eq!(table.rows[0].len(), 2);
        assert!(table.rows[0][1].is_null());
        assert_eq!(table.rows[1].len(), 2);
    }

    #[test]
    fn test_as_f64_parses_text() {
        assert_eq!(CellValue::Text(" 45.2 ".to_string()).as_f64(), Some(45.2));
        assert_eq!(CellValue::Text("n/a".to_string()).as_f64(), None);
        assert_eq!(CellValue::Int(7).as_f64(), Some(7.0));
        assert_eq!(CellValue::Null.as_f64(), None);
    }

    #[test]
    fn test_as_i64_rejects_fractional() {
        assert_eq!(CellValue::Number(2020.0).as_i64(), Some(2020));
        assert_eq!(CellValue::Number(2020.5).as_i64(), None);
    }
}
