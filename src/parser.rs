//! Parser Module
//!
//! calamineを使用したExcelファイル解析の薄いラッパー。
//! ワークブックレベルの操作（シート数の取得、インデックス指定の
//! グリッド抽出）を提供する。

use calamine::{open_workbook_auto_from_rs, Reader, Sheets, Xlsx};
use std::io::{Read, Seek};

use crate::error::XlsxFlatError;
use crate::types::SheetGrid;

/// ワークブックパーサー
///
/// calamineのラッパーとして、ワークブックレベルの操作を提供します。
/// XLSX形式のみサポートします。
pub(crate) struct WorkbookParser<R: Read + Seek + Clone> {
    workbook: Xlsx<R>,
}

// open_workbook_auto_from_rsは形式判定のためにリーダーを複製するので、
// Read + Seekに加えてCloneが必要です。
impl<R: Read + Seek + Clone> WorkbookParser<R> {
    /// ワークブックを開く
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - ワークブックの読み込みに成功した場合
    /// * `Err(XlsxFlatError::Parse)` - 入力をワークブックとして解析できない場合
    /// * `Err(XlsxFlatError::Config)` - XLSX以外の形式だった場合
    pub fn open(reader: R) -> Result<Self, XlsxFlatError> {
        let sheets = open_workbook_auto_from_rs(reader).map_err(XlsxFlatError::Parse)?;
        match sheets {
            Sheets::Xlsx(workbook) => Ok(Self { workbook }),
            _ => Err(XlsxFlatError::Config(
                "Only XLSX format is supported".to_string(),
            )),
        }
    }

    /// ワークブックに含まれるシート数
    pub fn sheet_count(&self) -> usize {
        self.workbook.sheet_names().len()
    }

    /// 指定インデックスのシートをグリッドとして抽出する
    ///
    /// # 引数
    ///
    /// * `index` - シートインデックス（0始まり）
    pub fn sheet_grid(&mut self, index: usize) -> Result<SheetGrid, XlsxFlatError> {
        let names = self.workbook.sheet_names().to_vec();
        let name = names.get(index).cloned().ok_or_else(|| {
            XlsxFlatError::Config(format!(
                "Sheet index {} is out of range (total: {})",
                index,
                names.len()
            ))
        })?;

        let range = self
            .workbook
            .worksheet_range(&name)
            .map_err(|e| XlsxFlatError::Parse(e.into()))?;

        Ok(SheetGrid::from_range(&range))
    }
}

// テストは統合テスト（tests/）で実装します。
// 実際のXLSXファイルが必要なため、単体テストではなく統合テストとして実装します。
