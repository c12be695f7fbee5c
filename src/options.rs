//! Export Options Module
//!
//! フォーマットシートから抽出される出力設定を表す値型を定義するモジュール。
//! フィールドの同値性は名前のみで判定する（大文字小文字を区別）。

use std::hash::{Hash, Hasher};

/// フォーマットシートが受け付ける固定長エクスポートのトークン
pub(crate) const EXPORT_TYPE_FIXED: &str = "Fixed Length";

/// フォーマットシートが受け付ける区切りエクスポートのトークン
pub(crate) const EXPORT_TYPE_DELIMITED: &str = "Delimited";

/// 区切り文字トークン`TAB`が正規化されるタブ文字
const TAB_TOKEN: &str = "TAB";

/// 出力モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// 区切り文字でフィールドを結合する
    Delimited,

    /// 各フィールドを宣言幅までスペースで右詰めする
    FixedWidth,
}

impl ExportMode {
    /// フォーマットシートのトークンからモードを解決する
    ///
    /// トークンは完全一致（大文字小文字を区別）。未知のトークンは`None`。
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        match token {
            EXPORT_TYPE_DELIMITED => Some(ExportMode::Delimited),
            EXPORT_TYPE_FIXED => Some(ExportMode::FixedWidth),
            _ => None,
        }
    }
}

/// 出力フィールド
///
/// 名前と固定長モード用の幅を保持する不変の値型。幅は区切りモードでは
/// 意味を持たない。
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    width: usize,
}

impl Field {
    /// 幅0（区切りモード用）のフィールドを生成する
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: 0,
        }
    }

    /// 固定幅付きのフィールドを生成する
    pub fn with_width(name: impl Into<String>, width: usize) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

// 同値性は名前のみで判定する
impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// フォーマットシートから抽出された出力設定
///
/// モードと区切り文字を先に構築し、フィールドを後から追加する二段階構築。
/// 検証は行わない。検証はトランスフォーマーの責務であり、構築前に完了
/// している。
#[derive(Debug, Clone)]
pub struct ExportOptions {
    mode: ExportMode,
    delimiter: String,
    fields: Vec<Field>,
}

impl ExportOptions {
    /// モードと生の区切り文字トークンから生成する
    ///
    /// トークン`"TAB"`はタブ文字に正規化し、それ以外はそのまま使用する。
    pub fn new(mode: ExportMode, raw_delimiter: &str) -> Self {
        let delimiter = if raw_delimiter == TAB_TOKEN {
            "\t".to_string()
        } else {
            raw_delimiter.to_string()
        };
        Self {
            mode,
            delimiter,
            fields: Vec::new(),
        }
    }

    /// フィールドを挿入順を保って追記する
    pub fn add_fields(&mut self, fields: Vec<Field>) {
        self.fields.extend(fields);
    }

    pub fn mode(&self) -> ExportMode {
        self.mode
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// 出力列順のフィールドリスト
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
