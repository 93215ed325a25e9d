/// 請求書一覧機能モジュール
///
/// このモジュールは請求書（経費申請）の一覧表示に関連する機能を提供します：
/// - 請求書レコードのデータモデル
/// - ストアからの一覧取得と表示用整形（日付・ステータス）
/// - 領収書プレビューと新規作成画面への遷移
// サブモジュールの宣言
pub mod format;
pub mod models;
pub mod service;


// 公開インターフェース

// モデル
pub use models::{Bill, BillPayload, BillStatus, DisplayBill, ReceiptPreview, EXPENSE_TYPES};

// 整形関数
pub use format::{format_date, format_status};

// 一覧サービス
pub use service::BillsService;
