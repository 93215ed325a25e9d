/// リモートストア境界
///
/// 請求書コレクションに対する list / create（領収書アップロード）/
/// update（レコード永続化）の3操作を定義します。トランスポートの詳細
/// （HTTPメソッドやエンドポイント）は実装側の責務です。
pub mod api;
#[cfg(test)]
pub mod mock;

pub use api::ApiBillStore;

use crate::features::bills::models::{Bill, BillPayload};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// アップロードする領収書ファイル
#[derive(Debug, Clone)]
pub struct ReceiptUpload {
    /// 元のファイル名
    pub file_name: String,
    /// ファイルの内容
    pub data: Vec<u8>,
    /// 申請者の識別子（メールアドレス）
    pub email: String,
}

/// 領収書アップロードの結果（保存先URLとレコードキー）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptHandle {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    pub key: String,
}

/// 請求書ストアの操作境界
///
/// 各操作は一回限りの非同期呼び出しで、失敗はそのまま`AppError`として
/// 呼び出し元へ返る。リトライ・キャンセル・タイムアウト制御は持たない
/// （HTTP実装のリクエストタイムアウトを除く）。
#[async_trait]
pub trait BillStore: Send + Sync {
    /// セッションにひもづく請求書レコードの一覧を取得する
    async fn list(&self) -> AppResult<Vec<Bill>>;

    /// 領収書ファイルをアップロードし、保存先URLとキーを得る
    ///
    /// # 引数
    /// * `upload` - ファイル内容と申請者の識別子
    async fn create_receipt(&self, upload: ReceiptUpload) -> AppResult<ReceiptHandle>;

    /// 請求書レコードを永続化する
    ///
    /// # 引数
    /// * `key` - `create_receipt`で得たレコードキー
    /// * `payload` - 永続化する請求書ペイロード
    async fn update(&self, key: &str, payload: &BillPayload) -> AppResult<Bill>;
}
