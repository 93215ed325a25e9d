use serde::{Deserialize, Serialize};

/// 請求書（経費申請）の承認ステータス
///
/// ワイヤ形式は小文字の英語（"pending" など）。未知の値はストア境界の
/// デシリアライズで弾かれる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// 承認待ち
    Pending,
    /// 承認済み
    Accepted,
    /// 却下
    Refused,
}

/// 経費種別の一覧（業務上の固定リスト）
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// 経費種別が固定リストに含まれるかを判定する
///
/// # 引数
/// * `expense_type` - 経費種別の表示名
pub fn is_known_expense_type(expense_type: &str) -> bool {
    EXPENSE_TYPES.contains(&expense_type)
}

/// 請求書レコード（ストア境界のワイヤ形式）
///
/// フィールド名はAPIサーバーのJSONに合わせてcamelCase。`date`は
/// ISO-8601の暦日文字列のまま保持し、表示整形は取得時に行う。
/// `file_url`/`file_name`はアップロード成功後にのみ設定される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: i64,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    #[serde(rename = "fileUrl", default)]
    pub file_url: Option<String>,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    pub status: BillStatus,
    #[serde(rename = "commentAdmin", default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

/// 永続化する請求書ペイロード
///
/// `id`はサーバー側で管理されるため持たない。送信時のキーは
/// 領収書アップロードで得たキーを使う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillPayload {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: i64,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub status: BillStatus,
}

/// 表示用の請求書レコード
///
/// 元レコードのうち`date`と`status`だけを表示用文字列に置き換えたもの。
/// それ以外のフィールドは元の値をそのまま保持する。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayBill {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: i64,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    pub status: String,
    #[serde(rename = "commentAdmin", skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

/// 領収書プレビュー（モーダル表示用）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptPreview {
    /// 保存済み領収書のURL
    pub url: String,
    /// アップロード時のファイル名
    pub file_name: Option<String>,
}
