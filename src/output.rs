//! Output Module
//!
//! 出力モードごとの行レンダリング戦略を提供するモジュール。

use crate::options::{ExportMode, ExportOptions, Field};

/// 行レンダラー（Strategy Pattern）
///
/// 各出力モード（固定長、区切り）をenumとして表現します。
#[derive(Debug, Clone)]
pub(crate) enum LineRenderer {
    /// 各フィールドを宣言幅までスペースで右詰めする
    FixedWidth,

    /// 区切り文字でフィールド値を結合する（末尾には付けない）
    Delimited(String),
}

impl LineRenderer {
    /// 出力設定からレンダラーを生成
    pub fn for_options(options: &ExportOptions) -> Self {
        match options.mode() {
            ExportMode::FixedWidth => LineRenderer::FixedWidth,
            ExportMode::Delimited => LineRenderer::Delimited(options.delimiter().to_string()),
        }
    }

    /// フォーマット済みフィールド値の列を1行のテキストにする
    ///
    /// 行終端文字は呼び出し側が付与する。
    pub fn render_line(&self, fields: &[Field], values: &[String]) -> String {
        match self {
            LineRenderer::FixedWidth => {
                let mut line = String::new();
                for (field, value) in fields.iter().zip(values) {
                    line.push_str(&pad_end(value, field.width()));
                }
                line
            }
            LineRenderer::Delimited(delimiter) => values.join(delimiter),
        }
    }
}

/// 宣言幅までASCIIスペースで右詰めする
///
/// 幅を超える値は切り詰めずそのまま保持する。
fn pad_end(value: &str, width: usize) -> String {
    let length = value.chars().count();
    let mut padded = String::with_capacity(value.len() + width.saturating_sub(length));
    padded.push_str(value);
    for _ in length..width {
        padded.push(' ');
    }
    padded
}
