//! Formatter Module
//!
//! セル値の表示用フォーマット処理を提供するモジュール。
//! スプレッドシートを人間が読んだときに見える文字列を生成する。

use chrono::{Duration, NaiveDate};
use std::fmt::Write;

use crate::api::DateFormat;
use crate::error::XlsxFlatError;
use crate::types::CellValue;

/// セルフォーマッター
///
/// セル値の表示テキスト化のファサードとして機能します。
#[derive(Debug)]
pub(crate) struct CellFormatter {
    date_formatter: DateFormatter,
    number_formatter: NumberFormatter,
    date_format: DateFormat,
}

impl CellFormatter {
    pub fn new(date_format: DateFormat) -> Self {
        Self {
            date_formatter: DateFormatter,
            number_formatter: NumberFormatter,
            date_format,
        }
    }

    /// セル値を表示テキストに変換する
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - フォーマット済み文字列（空セルは空文字列）
    /// * `Err(XlsxFlatError)` - 日付変換に失敗した場合
    pub fn format(&self, value: &CellValue) -> Result<String, XlsxFlatError> {
        match value {
            CellValue::Text(s) => Ok(s.clone()),
            CellValue::Number(n) => Ok(self.number_formatter.format(*n)),
            CellValue::DateTime(serial) => self.date_formatter.format(*serial, &self.date_format),
            CellValue::Bool(b) => Ok(if *b { "TRUE" } else { "FALSE" }.to_string()),
            CellValue::Blank => Ok(String::new()),
        }
    }
}

/// 日付フォーマッター
///
/// Excelのシリアル日付値を文字列に変換します。1900年エポックシステムで
/// 処理します。
#[derive(Debug)]
struct DateFormatter;

impl DateFormatter {
    /// 日付値をフォーマット
    ///
    /// # エポックシステム
    ///
    /// 1900年システム: 1899年12月30日起算。Excelは1900年を誤ってうるう年と
    /// 扱うため、シリアル値60以降はこの起算日との加算で正しい日付になる。
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - フォーマット済み日付文字列
    /// * `Err(XlsxFlatError)` - 日付計算がオーバーフローした場合
    fn format(&self, serial_value: f64, date_format: &DateFormat) -> Result<String, XlsxFlatError> {
        let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
            .ok_or_else(|| XlsxFlatError::Config("Invalid epoch date".to_string()))?;

        let days = serial_value.floor() as i64;
        let date = Duration::try_days(days)
            .and_then(|duration| epoch.checked_add_signed(duration))
            .ok_or_else(|| {
                XlsxFlatError::Config(format!(
                    "Date calculation overflow: serial_value={}",
                    serial_value
                ))
            })?;

        // DelayedFormatのDisplayは日付で表現できない指定子でエラーを返す。
        // to_string()はそのエラーでパニックするため、write!で受け取る。
        let mut formatted = String::new();
        let written = match date_format {
            DateFormat::Iso8601 => write!(formatted, "{}", date.format("%Y-%m-%d")),
            DateFormat::Custom(format_str) => write!(formatted, "{}", date.format(format_str)),
        };
        written.map_err(|_| {
            XlsxFlatError::Config("Invalid date format string for date cells".to_string())
        })?;

        Ok(formatted)
    }
}

/// 数値フォーマッター
///
/// 数値を表示文字列に変換します。整数値は小数点以下なしで出力されます。
#[derive(Debug)]
struct NumberFormatter;

impl NumberFormatter {
    fn format(&self, value: f64) -> String {
        value.to_string()
    }
}
