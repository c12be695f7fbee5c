//! Builder Module
//!
//! Fluent Builder APIを提供し、`Transformer`インスタンスを段階的に構築する。

use chrono::NaiveDate;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Read, Seek, Write};

use crate::api::DateFormat;
use crate::error::XlsxFlatError;
use crate::format_sheet;
use crate::formatter::CellFormatter;
use crate::parser::WorkbookParser;
use crate::security::SecurityConfig;
use crate::transform;

/// ワークブックが含むべきシート数（フォーマットシート＋データシート）
const EXPECTED_SHEET_COUNT: usize = 2;

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct TransformConfig {
    /// 日付セルの出力形式
    pub date_format: DateFormat,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            date_format: DateFormat::Iso8601,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Transformer`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxflat::{DateFormat, TransformerBuilder};
///
/// # fn main() -> Result<(), xlsxflat::XlsxFlatError> {
/// let transformer = TransformerBuilder::new()
///     .with_date_format(DateFormat::Custom("%d/%m/%Y".to_string()))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TransformerBuilder {
    config: TransformConfig,
}

impl Default for TransformerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformerBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 日付形式: ISO 8601 (YYYY-MM-DD)
    pub fn new() -> Self {
        Self {
            config: TransformConfig::default(),
        }
    }

    /// 日付セルの出力形式を指定する
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// 設定を検証し、`Transformer`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Transformer)` - 設定が有効な場合
    /// * `Err(XlsxFlatError::Config)` - カスタム日付形式が不正な場合
    pub fn build(self) -> Result<Transformer, XlsxFlatError> {
        // カスタム日付形式の検証（テスト用の日付でフォーマット試行）
        // DelayedFormatのDisplayは日付で表現できない指定子（%Hなど）で
        // エラーを返すため、to_string()ではなくwrite!で受け取る
        if let DateFormat::Custom(ref format_str) = self.config.date_format {
            let sample_date = NaiveDate::from_ymd_opt(2025, 1, 1)
                .ok_or_else(|| XlsxFlatError::Config("Failed to create sample date".to_string()))?;
            let mut formatted = String::new();
            let written = write!(formatted, "{}", sample_date.format(format_str));
            if written.is_err() || formatted.is_empty() {
                return Err(XlsxFlatError::Config(format!(
                    "Invalid date format string: '{}'",
                    format_str
                )));
            }
        }

        Ok(Transformer::new(self.config))
    }
}

/// 変換処理のファサード
///
/// 2シート構成のワークブックをフラットテキストに変換するメイン
/// エントリーポイントです。呼び出しごとに独立した1パスの同期処理で、
/// 呼び出し間で共有される可変状態はありません。
///
/// # 処理フロー
///
/// 1. 入力をメモリに読み込み、サイズ制限を検査
/// 2. ワークブックを開き、シート数が2であることを検証
/// 3. フォーマットシート（シート0）から出力設定を抽出
/// 4. データシート（シート1）の形状を検証し、列マップを構築
/// 5. フィールドと列をクロス検証
/// 6. データ行を1行ずつレンダリングして出力
///
/// いずれかの検証フェーズが失敗した時点で後続フェーズは実行されない。
#[derive(Debug)]
pub struct Transformer {
    formatter: CellFormatter,
}

impl Transformer {
    pub(crate) fn new(config: TransformConfig) -> Self {
        Self {
            formatter: CellFormatter::new(config.date_format),
        }
    }

    /// ワークブックをフラットテキストに変換して書き出す
    ///
    /// # 引数
    ///
    /// * `input` - ワークブックを読み込むためのリーダー（Read + Seek）
    /// * `output` - 変換結果の書き込み先（Write）
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 変換に成功した場合
    /// * `Err(XlsxFlatError)` - 検証または解析に失敗した場合
    pub fn transform<R: Read + Seek, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<(), XlsxFlatError> {
        let security_config = SecurityConfig::default();
        let mut buffer = Vec::new();
        let bytes_read = input.read_to_end(&mut buffer)?;

        if bytes_read as u64 > security_config.max_input_file_size {
            return Err(XlsxFlatError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes_read, security_config.max_input_file_size
            )));
        }

        let mut parser = WorkbookParser::open(Cursor::new(buffer))?;

        if parser.sheet_count() != EXPECTED_SHEET_COUNT {
            return Err(XlsxFlatError::format_error(
                "There should be exactly 2 worksheets.",
            ));
        }

        let format_grid = parser.sheet_grid(0)?;
        let options = format_sheet::extract_export_options(&format_grid)?;

        let data_grid = parser.sheet_grid(1)?;
        transform::validate_data_sheet(&data_grid)?;

        let column_map = transform::build_column_map(&data_grid);
        transform::validate_columns(&options, &column_map)?;

        let rendered = transform::render(&data_grid, &options, &column_map, &self.formatter)?;
        output.write_all(&rendered)?;
        Ok(())
    }

    /// ワークブックのバイト列を出力バイト列に変換する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsxflat::TransformerBuilder;
    ///
    /// # fn main() -> Result<(), xlsxflat::XlsxFlatError> {
    /// let transformer = TransformerBuilder::new().build()?;
    /// let workbook_bytes: Vec<u8> = vec![]; // ワークブックのバイト列
    /// let output = transformer.transform_bytes(&workbook_bytes)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn transform_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>, XlsxFlatError> {
        let mut output = Vec::new();
        self.transform(Cursor::new(bytes), &mut output)?;
        Ok(output)
    }
}
