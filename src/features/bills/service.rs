// 請求書一覧サービス

use crate::features::bills::format::{format_date, format_status};
use crate::features::bills::models::{Bill, DisplayBill, ReceiptPreview};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::routes::{Navigator, RoutePath};
use crate::store::BillStore;
use log::{info, warn};
use std::sync::Arc;

/// 請求書一覧サービス
///
/// ストアから請求書レコードを取得し、表示用に整形して返す。
/// セッションのスコープはストア側で適用済みのため、ここでは
/// ユーザー情報を持たない。
pub struct BillsService {
    store: Arc<dyn BillStore>,
    navigator: Arc<dyn Navigator>,
}

impl BillsService {
    /// 新しい一覧サービスを作成する
    ///
    /// # 引数
    /// * `store` - リモートストアクライアント
    /// * `navigator` - 画面遷移コールバック
    pub fn new(store: Arc<dyn BillStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// 請求書一覧を取得し、表示用に整形して返す
    ///
    /// # 戻り値
    /// 新しい日付順（降順）の表示用レコード一覧。ストアの取得失敗は
    /// そのまま呼び出し元に伝播する（エラー画面の描画は描画層の責務）。
    ///
    /// 個々のレコードの日付が解析できない場合は警告ログを出し、元の
    /// 文字列をそのまま表示に使う。整形の失敗で一覧全体が失敗することはない。
    pub async fn fetch_bills(&self) -> AppResult<Vec<DisplayBill>> {
        let mut bills = self.store.list().await?;
        info!("請求書一覧を取得しました: count={}", bills.len());

        // ISO暦日文字列の辞書順は時系列順と一致するため、生の文字列で降順ソートする
        bills.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(bills.into_iter().map(Self::to_display).collect())
    }

    /// 1件のレコードを表示用に整形する
    fn to_display(bill: Bill) -> DisplayBill {
        let date = match format_date(&bill.date) {
            Ok(formatted) => formatted,
            Err(e) => {
                warn!(
                    "日付の整形に失敗したため元の値を表示します: id={}, date={}, error={e}",
                    bill.id, bill.date
                );
                bill.date.clone()
            }
        };

        DisplayBill {
            id: bill.id,
            email: bill.email,
            expense_type: bill.expense_type,
            name: bill.name,
            amount: bill.amount,
            date,
            vat: bill.vat,
            pct: bill.pct,
            commentary: bill.commentary,
            file_url: bill.file_url,
            file_name: bill.file_name,
            status: format_status(bill.status).to_string(),
            comment_admin: bill.comment_admin,
        }
    }

    /// 新規請求書作成画面への遷移を依頼する
    pub fn open_new_bill(&self) {
        self.navigator.navigate(RoutePath::NewBill);
    }

    /// 領収書プレビューを取得する
    ///
    /// # 引数
    /// * `bill` - 対象の請求書レコード
    ///
    /// # 戻り値
    /// プレビュー用のURLとファイル名。領収書が未添付のレコードは
    /// リソース未発見エラー。
    pub fn receipt_preview(&self, bill: &Bill) -> AppResult<ReceiptPreview> {
        match &bill.file_url {
            Some(url) if !url.is_empty() => Ok(ReceiptPreview {
                url: url.clone(),
                file_name: bill.file_name.clone(),
            }),
            _ => Err(AppError::not_found(
                "Aucun justificatif n'est associé à cette note de frais.".to_string(),
            )),
        }
    }
}
