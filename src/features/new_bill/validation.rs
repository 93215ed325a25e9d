// 領収書ファイルの受け入れ判定

use crate::shared::errors::{AppError, AppResult};
use std::path::Path;

/// デフォルトで受け入れる拡張子
const DEFAULT_ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// 領収書ファイルの受け入れポリシー
///
/// 判定はファイル名の末尾の拡張子のみで行い、大文字小文字は区別しない。
/// 受け入れリストは環境変数で差し替え可能だが、デフォルトは
/// jpg / jpeg / png のみ。
#[derive(Debug, Clone)]
pub struct ReceiptPolicy {
    allowed_extensions: Vec<String>,
}

impl Default for ReceiptPolicy {
    fn default() -> Self {
        Self {
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl ReceiptPolicy {
    /// 環境変数から受け入れポリシーを読み込む
    ///
    /// # 戻り値
    /// `RECEIPT_ALLOWED_EXTENSIONS`（カンマ区切り）があればその内容、
    /// なければデフォルトのポリシー
    pub fn from_env() -> Self {
        match std::env::var("RECEIPT_ALLOWED_EXTENSIONS") {
            Ok(value) => {
                let allowed_extensions: Vec<String> = value
                    .split(',')
                    .map(|ext| ext.trim().to_lowercase())
                    .filter(|ext| !ext.is_empty())
                    .collect();

                if allowed_extensions.is_empty() {
                    log::warn!("RECEIPT_ALLOWED_EXTENSIONSが空のためデフォルトを使用します");
                    Self::default()
                } else {
                    Self { allowed_extensions }
                }
            }
            Err(_) => Self::default(),
        }
    }

    /// 受け入れ可能な拡張子の一覧を取得する
    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    /// ファイル名が受け入れ可能かを検証する
    ///
    /// # 引数
    /// * `file_name` - 選択されたファイルの名前
    ///
    /// # 戻り値
    /// 受け入れ不可の場合はバリデーションエラー（メッセージはそのまま
    /// ユーザーへのアラートに使われる）
    pub fn validate_file_name(&self, file_name: &str) -> AppResult<()> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension {
            Some(ext) if self.allowed_extensions.iter().any(|allowed| *allowed == ext) => Ok(()),
            _ => Err(AppError::validation(format!(
                "Seuls les fichiers {} sont acceptés : {file_name}",
                self.allowed_extensions.join(", ")
            ))),
        }
    }
}
