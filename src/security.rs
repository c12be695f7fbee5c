//! Security Module
//!
//! 入力処理時のセキュリティ制限を定義するモジュール。

/// セキュリティ設定
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 2GB (2_147_483_648 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 2_147_483_648, // 2GB
        }
    }
}
