//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型と、フェーズ単位のエラー収集器を
//! 定義するモジュール。`thiserror`を使用して、エラーの自動変換と
//! メッセージフォーマットを実現する。

use thiserror::Error;

/// xlsxflatクレート全体で使用するエラー型
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（入力の読み込み失敗など）
/// - `Parse`: 入力をExcelワークブックとして解析できなかったエラー（calamine由来）
/// - `Format`: ワークブックの形状・内容の検証エラー。1回の呼び出しで発見された
///   すべての診断メッセージを順序付きリストとして保持する
/// - `Config`: ビルダー設定の検証に失敗したエラー
/// - `SecurityViolation`: 入力サイズ制限に違反したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxflat::{TransformerBuilder, XlsxFlatError};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let transformer = TransformerBuilder::new().build()?;
/// match transformer.transform_bytes(&[]) {
///     Err(XlsxFlatError::Format { errors }) => {
///         // 入力を修正して再送できるよう、診断をまとめて提示する
///         for error in errors {
///             eprintln!("{}", error);
///         }
///     }
///     Err(other) => eprintln!("{}", other),
///     Ok(_) => {}
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Error, Debug)]
pub enum XlsxFlatError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Excelファイルの解析中に発生したエラー
    ///
    /// calamineクレートがワークブックを解析する際に発生したエラーです。
    /// ファイル形式が不正、破損したファイルなどが原因となります。
    #[error("Failed to parse Excel file: {0}")]
    Parse(#[from] calamine::Error),

    /// ワークブックの検証・変換エラー
    ///
    /// 発見されたすべての診断メッセージを発見順に保持します。各検証フェーズは
    /// 最初のエラーで打ち切らず、フェーズ内のすべての問題を収集してから
    /// 一括で失敗します。
    #[error("Format error: {}", .errors.join("; "))]
    Format {
        /// 人間可読な診断メッセージ（発見順）
        errors: Vec<String>,
    },

    /// 設定の検証に失敗したエラー
    ///
    /// `TransformerBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}

impl XlsxFlatError {
    /// 単一の診断メッセージからFormatエラーを生成する
    pub(crate) fn format_error(message: impl Into<String>) -> Self {
        XlsxFlatError::Format {
            errors: vec![message.into()],
        }
    }

    /// Formatエラーが保持する診断リストを取得する
    ///
    /// Formatエラー以外では空スライスを返します。
    pub fn errors(&self) -> &[String] {
        match self {
            XlsxFlatError::Format { errors } => errors,
            _ => &[],
        }
    }
}

/// フェーズ単位のエラー収集器
///
/// 各検証・レンダリングフェーズの開始時に空で生成し、問題を発見するたびに
/// 追記し、フェーズ終了時に`into_result`で判定する。リストが空でなければ
/// フェーズ全体が`XlsxFlatError::Format`として失敗し、部分的な成功は
/// 返さない。
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    errors: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// 診断メッセージを追記する
    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// 収集結果を判定する
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 診断が1件もない場合
    /// * `Err(XlsxFlatError::Format)` - 診断が1件以上ある場合（発見順を保持）
    pub fn into_result(self) -> Result<(), XlsxFlatError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(XlsxFlatError::Format {
                errors: self.errors,
            })
        }
    }
}
