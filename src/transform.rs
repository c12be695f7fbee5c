//! Transform Module
//!
//! データシート（2枚目のシート）の検証と行レンダリングを提供するモジュール。
//! 各フェーズはフェーズ内のすべての問題を収集してから一括で失敗し、
//! 部分的な出力は決して返さない。

use std::collections::HashMap;

use crate::error::{Diagnostics, XlsxFlatError};
use crate::formatter::CellFormatter;
use crate::options::ExportOptions;
use crate::output::LineRenderer;
use crate::types::SheetGrid;

/// データシートの最小行数（行0=ヘッダー、行1以降=データ行）
const MIN_DATA_ROWS: usize = 2;

/// 列ヘッダーが置かれる行
const HEADER_ROW: usize = 0;

/// プラットフォーム標準の行終端文字
#[cfg(windows)]
pub(crate) const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub(crate) const LINE_SEPARATOR: &str = "\n";

/// データシートの形状を検証する
pub(crate) fn validate_data_sheet(grid: &SheetGrid) -> Result<(), XlsxFlatError> {
    if grid.height() < MIN_DATA_ROWS {
        return Err(XlsxFlatError::format_error(format!(
            "Data sheet should have at least {} rows.",
            MIN_DATA_ROWS
        )));
    }
    Ok(())
}

/// ヘッダー行から列名→列インデックス（0始まり）のマップを構築する
///
/// 同名ヘッダーが重複した場合は後の出現が勝つ。
pub(crate) fn build_column_map(grid: &SheetGrid) -> HashMap<String, usize> {
    let mut column_map = HashMap::new();
    for (index, cell) in grid.row(HEADER_ROW).iter().enumerate() {
        if !cell.is_blank() {
            column_map.insert(cell.raw_text(), index);
        }
    }
    column_map
}

/// フィールドリストとデータシートの列を突き合わせる
///
/// フィールド数と列数の一致、および各フィールド名の列存在を両方とも
/// 検査し、違反をまとめて報告する。
pub(crate) fn validate_columns(
    options: &ExportOptions,
    column_map: &HashMap<String, usize>,
) -> Result<(), XlsxFlatError> {
    let mut errors = Diagnostics::new();

    if options.fields().len() != column_map.len() {
        errors.push(format!(
            "There should be 1 data column for every format field: {} data columns, {} format fields.",
            column_map.len(),
            options.fields().len()
        ));
    }

    for field in options.fields() {
        if !column_map.contains_key(field.name()) {
            errors.push(format!(
                "There is no data column for field '{}'",
                field.name()
            ));
        }
    }

    errors.into_result()
}

/// データ行を出力テキストにレンダリングする
///
/// 行1以降の各行について、フィールド順にセルの表示テキストを解決し、
/// モードに応じた1行を組み立てて行終端文字を付与する。セル単位の失敗は
/// `"Data row N, exception: …"`として記録し、そのセルを飛ばして処理を
/// 続行する。記録が1件でもあればフェーズ全体が失敗し、出力は返さない。
///
/// # 戻り値
///
/// * `Ok(Vec<u8>)` - 出力テキストのバイト列（UTF-8）
/// * `Err(XlsxFlatError::Format)` - 行レンダリング中に記録された診断リスト
pub(crate) fn render(
    grid: &SheetGrid,
    options: &ExportOptions,
    column_map: &HashMap<String, usize>,
    formatter: &CellFormatter,
) -> Result<Vec<u8>, XlsxFlatError> {
    let renderer = LineRenderer::for_options(options);
    let mut output = String::new();
    let mut errors = Diagnostics::new();

    for row_index in (HEADER_ROW + 1)..grid.height() {
        let mut values = Vec::with_capacity(options.fields().len());

        for field in options.fields() {
            // 列の存在は事前のクロス検証で保証済み
            let Some(&column) = column_map.get(field.name()) else {
                continue;
            };

            match formatter.format(grid.cell(row_index, column)) {
                Ok(text) => values.push(text),
                Err(e) => errors.push(format!("Data row {}, exception: {}", row_index, e)),
            }
        }

        output.push_str(&renderer.render_line(options.fields(), &values));
        output.push_str(LINE_SEPARATOR);
    }

    errors.into_result()?;
    Ok(output.into_bytes())
}
