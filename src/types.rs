//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。
//! セル値の小さな多相型と、calamineのレンジから構築する絶対座標の
//! シートグリッドを提供し、コアの検証・レンダリングをcalamineの
//! API形状から切り離す。

use calamine::{Data, Range};

/// セルの値を表す列挙型
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CellValue {
    /// 文字列
    Text(String),

    /// 数値（f64）
    Number(f64),

    /// 日付・時刻（Excelシリアル値）
    DateTime(f64),

    /// 論理値
    Bool(bool),

    /// 空セル
    Blank,
}

impl CellValue {
    /// calamineのセルデータから変換する
    pub fn from_data(data: &Data) -> Self {
        match data {
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
            Data::DateTimeIso(s) => CellValue::Text(s.clone()),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(e.to_string()),
            Data::Empty => CellValue::Blank,
        }
    }

    /// 値が空かどうかを判定
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }

    /// 値を文字列として取得（書式適用前）
    ///
    /// ヘッダー行のキーやオプショントークンの読み取りに使用する。
    /// 表示用の書式適用は`CellFormatter`が行う。
    pub fn raw_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::DateTime(serial) => serial.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Blank => String::new(),
        }
    }
}

static BLANK: CellValue = CellValue::Blank;

/// シート1枚分のセルグリッド（絶対座標、0始まり）
///
/// calamineの`Range`は最初の占有セルを原点とするため、先頭の空行・空列を
/// 補って絶対座標に正規化する。検証メッセージの行番号はこの絶対座標に
/// 基づく。
#[derive(Debug, Clone)]
pub(crate) struct SheetGrid {
    rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    /// calamineのレンジからグリッドを構築する
    pub fn from_range(range: &Range<Data>) -> Self {
        let mut rows = Vec::new();
        if let Some((start_row, start_col)) = range.start() {
            for _ in 0..start_row {
                rows.push(Vec::new());
            }
            for row in range.rows() {
                let mut cells = Vec::with_capacity(start_col as usize + row.len());
                cells.resize(start_col as usize, CellValue::Blank);
                cells.extend(row.iter().map(CellValue::from_data));
                rows.push(cells);
            }
        }
        Self { rows }
    }

    /// 行数（末尾の占有行までの絶対行数）
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// 指定行のセル列を取得（範囲外は空スライス）
    pub fn row(&self, index: usize) -> &[CellValue] {
        self.rows.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 指定座標のセルを取得（範囲外は空セル）
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&BLANK)
    }

    /// 行全体が空かどうかを判定
    pub fn row_is_blank(&self, index: usize) -> bool {
        self.row(index).iter().all(CellValue::is_blank)
    }
}

#[cfg(test)]
impl SheetGrid {
    /// テスト用: セル列から直接グリッドを構築する
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }
}
