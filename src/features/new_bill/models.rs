use crate::features::bills::models::is_known_expense_type;
use crate::shared::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Deserialize;

/// 再請求率（pct）が未入力の場合のデフォルト値
pub const DEFAULT_PCT: u32 = 20;

/// 新規請求書フォームの入力値
///
/// 画面のフォームから読み取った値。領収書は含まない（添付は
/// `attach_receipt`による2段階コミットの1段目で完了している前提）。
#[derive(Debug, Clone, Deserialize)]
pub struct BillForm {
    /// 経費種別（固定リストのいずれか）
    pub expense_type: String,
    /// 経費の名称
    pub name: String,
    /// 金額（通貨単位の整数）
    pub amount: i64,
    /// 経費の発生日（ISO-8601の暦日）
    pub date: String,
    /// TVA額（文字列、空欄可）
    pub vat: String,
    /// 再請求率（%）。未入力時は20
    pub pct: Option<u32>,
    /// コメント（自由記述）
    pub commentary: String,
}

impl BillForm {
    /// フォーム入力を検証する
    ///
    /// # 戻り値
    /// 不正な入力の場合はバリデーションエラー（ユーザー表示用の
    /// フランス語メッセージ）
    pub fn validate(&self) -> AppResult<()> {
        if !is_known_expense_type(&self.expense_type) {
            return Err(AppError::validation(format!(
                "Type de dépense inconnu : {}",
                self.expense_type
            )));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::validation(
                "Le nom de la dépense est obligatoire.".to_string(),
            ));
        }
        if self.amount <= 0 {
            return Err(AppError::validation(
                "Le montant doit être strictement positif.".to_string(),
            ));
        }
        if NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_err() {
            return Err(AppError::validation(format!(
                "La date est invalide : {}",
                self.date
            )));
        }
        if let Some(pct) = self.pct {
            if pct > 100 {
                return Err(AppError::validation(
                    "Le pourcentage doit être compris entre 0 et 100.".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// アップロード済み領収書（2段階コミットの1段目の成果）
///
/// ファイル選択時のアップロード成功で作られ、送信時にレコードへ
/// 取り込まれる。これが無い限り送信は失敗する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptAttachment {
    /// `create_receipt`が返したレコードキー
    pub key: String,
    /// 保存先URL
    pub file_url: String,
    /// 元のファイル名
    pub file_name: String,
}

/// 送信フローの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// 入力中（初期状態）
    Editing,
    /// 永続化呼び出しが進行中
    Submitting,
    /// 送信完了（終端。一覧画面へ遷移済み）
    Submitted,
}
