//! Public API Types
//!
//! 公開APIで使用する設定列挙型を定義するモジュール。

/// 日付セルの出力形式
///
/// データシートの日付セルをテキストに変換する際の出力形式を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateFormat {
    /// ISO 8601形式（YYYY-MM-DD、デフォルト）
    ///
    /// 例: `2026-08-28`
    Iso8601,

    /// カスタム形式（chrono互換フォーマット文字列）
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
    Custom(String),
}
