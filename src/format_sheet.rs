//! Format Sheet Module
//!
//! フォーマットシート（1枚目のシート）から出力設定を抽出するモジュール。
//! シートの形状、エクスポートタイプ、区切り文字、フィールド行をすべて
//! 検証し、発見した問題を`Diagnostics`にまとめてから一括で失敗する。

use crate::error::{Diagnostics, XlsxFlatError};
use crate::options::{ExportMode, ExportOptions, Field, EXPORT_TYPE_DELIMITED, EXPORT_TYPE_FIXED};
use crate::types::{CellValue, SheetGrid};

/// フォーマットシートの最小行数
/// （行0=オプションヘッダー、行1=オプション値、行2=空行、
/// 行3=フィールドリストヘッダー、行4以降=フィールド行）
const MIN_FORMAT_ROWS: usize = 5;

/// オプション値が置かれる行
const OPTION_VALUE_ROW: usize = 1;

/// フィールド行の開始行
const FIELD_START_ROW: usize = 4;

/// フォーマットシートから出力設定を抽出する
///
/// # 戻り値
///
/// * `Ok(ExportOptions)` - 検証済みのモード・区切り文字・フィールドリスト
/// * `Err(XlsxFlatError::Format)` - 検証エラー（このフェーズで発見された
///   すべての診断を発見順に保持する）
pub(crate) fn extract_export_options(grid: &SheetGrid) -> Result<ExportOptions, XlsxFlatError> {
    if grid.height() < MIN_FORMAT_ROWS {
        return Err(XlsxFlatError::format_error(format!(
            "Format sheet should have at least {} rows.",
            MIN_FORMAT_ROWS
        )));
    }

    let mut errors = Diagnostics::new();

    let export_token = grid.cell(OPTION_VALUE_ROW, 0).raw_text();
    let mode = ExportMode::from_token(&export_token);
    if mode.is_none() {
        errors.push(format!(
            "Export type must be one of \"{}\", \"{}\".",
            EXPORT_TYPE_FIXED, EXPORT_TYPE_DELIMITED
        ));
    }

    let delimiter_token = grid.cell(OPTION_VALUE_ROW, 1).raw_text();
    if mode == Some(ExportMode::Delimited) && delimiter_token.trim().is_empty() {
        errors.push("Must choose delimiter for Delimited export type.");
    }

    // モードが不明でもフィールド行を走査し、1回の呼び出しで
    // すべての診断を報告する
    let fields = parse_fields(grid, mode, &mut errors);

    errors.into_result()?;
    let mode = mode.ok_or_else(|| {
        XlsxFlatError::Config("Export mode unresolved after validation".to_string())
    })?;

    let mut options = ExportOptions::new(mode, &delimiter_token);
    options.add_fields(fields);
    Ok(options)
}

/// フィールド行を1行ずつ解析する
///
/// 固定長モードは名前と数値幅の2セル、区切りモードは名前1セルを要求する。
/// 行単位のエラーは行番号（絶対0始まり）を添えて収集する。
fn parse_fields(
    grid: &SheetGrid,
    mode: Option<ExportMode>,
    errors: &mut Diagnostics,
) -> Vec<Field> {
    let mut fields = Vec::new();

    for row_index in FIELD_START_ROW..grid.height() {
        // 未記入の行は解析対象外
        if grid.row_is_blank(row_index) {
            continue;
        }

        let name_cell = grid.cell(row_index, 0);
        let width_cell = grid.cell(row_index, 1);

        match mode {
            Some(ExportMode::FixedWidth) => {
                if name_cell.is_blank() || width_cell.is_blank() {
                    errors.push(format!(
                        "Format sheet, row {}: should have 2 cells.",
                        row_index
                    ));
                } else if let CellValue::Number(width) = width_cell {
                    fields.push(Field::with_width(name_cell.raw_text(), truncate_width(*width)));
                } else {
                    errors.push(format!(
                        "Format sheet, row {}: length cell is not numeric.",
                        row_index
                    ));
                }
            }
            Some(ExportMode::Delimited) | None => {
                if name_cell.is_blank() {
                    errors.push(format!(
                        "Format sheet, row {}: should have at least 1 cell.",
                        row_index
                    ));
                } else {
                    fields.push(Field::new(name_cell.raw_text()));
                }
            }
        }
    }

    fields
}

/// 数値セルの幅を0方向に切り捨てる。負値は幅0として扱う。
fn truncate_width(width: f64) -> usize {
    width.trunc().max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    fn number(value: f64) -> CellValue {
        CellValue::Number(value)
    }

    /// フォーマットシートの定型部分（行0〜3）を組み立てる
    fn format_sheet_head(export_type: &str, delimiter: &str) -> Vec<Vec<CellValue>> {
        let delimiter_cell = if delimiter.is_empty() {
            CellValue::Blank
        } else {
            text(delimiter)
        };
        vec![
            vec![text("Export Type"), text("Delimiter")],
            vec![text(export_type), delimiter_cell],
            vec![],
            vec![text("Field Name"), text("Length")],
        ]
    }

    fn errors_of(result: Result<ExportOptions, XlsxFlatError>) -> Vec<String> {
        match result {
            Err(XlsxFlatError::Format { errors }) => errors,
            other => panic!("Expected Format error, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_fixed_width_options() {
        let mut rows = format_sheet_head("Fixed Length", "");
        rows.push(vec![text("id"), number(5.0)]);
        rows.push(vec![text("name"), number(10.0)]);

        let options = extract_export_options(&SheetGrid::from_rows(rows)).unwrap();
        assert_eq!(options.mode(), ExportMode::FixedWidth);
        assert_eq!(options.fields().len(), 2);
        assert_eq!(options.fields()[0].name(), "id");
        assert_eq!(options.fields()[0].width(), 5);
        assert_eq!(options.fields()[1].width(), 10);
    }

    #[test]
    fn test_extract_delimited_options_normalizes_tab() {
        let mut rows = format_sheet_head("Delimited", "TAB");
        rows.push(vec![text("id")]);
        rows.push(vec![text("name")]);

        let options = extract_export_options(&SheetGrid::from_rows(rows)).unwrap();
        assert_eq!(options.mode(), ExportMode::Delimited);
        assert_eq!(options.delimiter(), "\t");
        assert_eq!(options.fields().len(), 2);
    }

    #[test]
    fn test_short_sheet_is_a_single_error() {
        let rows = format_sheet_head("Fixed Length", "");
        let errors = errors_of(extract_export_options(&SheetGrid::from_rows(rows)));
        assert_eq!(errors, ["Format sheet should have at least 5 rows."]);
    }

    #[test]
    fn test_unknown_export_type_lists_valid_set() {
        let mut rows = format_sheet_head("Csv", ",");
        rows.push(vec![text("id")]);

        let errors = errors_of(extract_export_options(&SheetGrid::from_rows(rows)));
        assert_eq!(
            errors,
            ["Export type must be one of \"Fixed Length\", \"Delimited\"."]
        );
    }

    #[test]
    fn test_delimited_without_delimiter() {
        let mut rows = format_sheet_head("Delimited", "");
        rows.push(vec![text("id")]);

        let errors = errors_of(extract_export_options(&SheetGrid::from_rows(rows)));
        assert_eq!(errors, ["Must choose delimiter for Delimited export type."]);
    }

    #[test]
    fn test_fixed_length_ignores_missing_delimiter() {
        let mut rows = format_sheet_head("Fixed Length", "");
        rows.push(vec![text("id"), number(5.0)]);

        assert!(extract_export_options(&SheetGrid::from_rows(rows)).is_ok());
    }

    #[test]
    fn test_non_numeric_width_cites_row_and_is_additive() {
        let mut rows = format_sheet_head("Fixed Length", "");
        rows.push(vec![text("id"), text("five")]); // 行4
        rows.push(vec![text("name"), number(10.0)]); // 行5
        rows.push(vec![text("city")]); // 行6: 幅セルなし

        let errors = errors_of(extract_export_options(&SheetGrid::from_rows(rows)));
        assert_eq!(
            errors,
            [
                "Format sheet, row 4: length cell is not numeric.",
                "Format sheet, row 6: should have 2 cells.",
            ]
        );
    }

    #[test]
    fn test_delimited_row_without_name() {
        let mut rows = format_sheet_head("Delimited", ",");
        rows.push(vec![text("id")]);
        rows.push(vec![CellValue::Blank, number(3.0)]); // 行5: 名前なし

        let errors = errors_of(extract_export_options(&SheetGrid::from_rows(rows)));
        assert_eq!(errors, ["Format sheet, row 5: should have at least 1 cell."]);
    }

    #[test]
    fn test_option_and_row_errors_aggregate_in_one_call() {
        let mut rows = format_sheet_head("Csv", "");
        rows.push(vec![CellValue::Blank, number(3.0)]);

        let errors = errors_of(extract_export_options(&SheetGrid::from_rows(rows)));
        assert_eq!(
            errors,
            [
                "Export type must be one of \"Fixed Length\", \"Delimited\".",
                "Format sheet, row 4: should have at least 1 cell.",
            ]
        );
    }

    #[test]
    fn test_blank_field_rows_are_skipped() {
        let mut rows = format_sheet_head("Fixed Length", "");
        rows.push(vec![text("id"), number(5.0)]);
        rows.push(vec![]);
        rows.push(vec![text("name"), number(10.0)]);

        let options = extract_export_options(&SheetGrid::from_rows(rows)).unwrap();
        assert_eq!(options.fields().len(), 2);
    }

    #[test]
    fn test_width_truncates_toward_zero() {
        let mut rows = format_sheet_head("Fixed Length", "");
        rows.push(vec![text("id"), number(5.9)]);

        let options = extract_export_options(&SheetGrid::from_rows(rows)).unwrap();
        assert_eq!(options.fields()[0].width(), 5);
    }
}
