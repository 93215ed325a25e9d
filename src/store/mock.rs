// テスト用のモック実装（ストアとナビゲーター）

use crate::features::bills::models::{Bill, BillPayload, BillStatus};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::routes::{Navigator, RoutePath};
use crate::store::{BillStore, ReceiptHandle, ReceiptUpload};
use async_trait::async_trait;
use std::sync::Mutex;

/// 請求書ストアのモック
///
/// 呼び出しを記録し、固定データまたは指定されたエラーを返す。
pub struct MockBillStore {
    bills: Mutex<Vec<Bill>>,
    /// create_receiptの呼び出し記録（ファイル名, メールアドレス）
    pub upload_calls: Mutex<Vec<(String, String)>>,
    /// updateの呼び出し記録（キー, ペイロード）
    pub update_calls: Mutex<Vec<(String, BillPayload)>>,
    fail_list: Option<String>,
    fail_create: Option<String>,
    fail_update: Option<String>,
}

impl MockBillStore {
    /// 固定データを返すモックを作成する
    pub fn new(bills: Vec<Bill>) -> Self {
        Self {
            bills: Mutex::new(bills),
            upload_calls: Mutex::new(Vec::new()),
            update_calls: Mutex::new(Vec::new()),
            fail_list: None,
            fail_create: None,
            fail_update: None,
        }
    }

    /// listを指定メッセージで失敗させる
    pub fn failing_list(message: &str) -> Self {
        Self {
            fail_list: Some(message.to_string()),
            ..Self::new(Vec::new())
        }
    }

    /// create_receiptを指定メッセージで失敗させる
    pub fn failing_create(message: &str) -> Self {
        Self {
            fail_create: Some(message.to_string()),
            ..Self::new(Vec::new())
        }
    }

    /// updateを指定メッセージで失敗させる
    pub fn failing_update(message: &str) -> Self {
        Self {
            fail_update: Some(message.to_string()),
            ..Self::new(Vec::new())
        }
    }

    /// アップロード呼び出しの回数を取得する
    pub fn upload_call_count(&self) -> usize {
        self.upload_calls.lock().unwrap().len()
    }

    /// 更新呼び出しの回数を取得する
    pub fn update_call_count(&self) -> usize {
        self.update_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BillStore for MockBillStore {
    async fn list(&self) -> AppResult<Vec<Bill>> {
        if let Some(message) = &self.fail_list {
            return Err(AppError::external_service(message.clone()));
        }
        Ok(self.bills.lock().unwrap().clone())
    }

    async fn create_receipt(&self, upload: ReceiptUpload) -> AppResult<ReceiptHandle> {
        if let Some(message) = &self.fail_create {
            return Err(AppError::external_service(message.clone()));
        }

        self.upload_calls
            .lock()
            .unwrap()
            .push((upload.file_name.clone(), upload.email.clone()));

        let key = uuid::Uuid::new_v4().to_string();
        Ok(ReceiptHandle {
            file_url: format!("https://storage.example.com/receipts/{key}/{}", upload.file_name),
            key,
        })
    }

    async fn update(&self, key: &str, payload: &BillPayload) -> AppResult<Bill> {
        if let Some(message) = &self.fail_update {
            return Err(AppError::external_service(message.clone()));
        }

        self.update_calls
            .lock()
            .unwrap()
            .push((key.to_string(), payload.clone()));

        // 永続化後のレコード：サーバーがキーをidとして採番した想定で返す
        Ok(Bill {
            id: key.to_string(),
            email: payload.email.clone(),
            expense_type: payload.expense_type.clone(),
            name: payload.name.clone(),
            amount: payload.amount,
            date: payload.date.clone(),
            vat: payload.vat.clone(),
            pct: payload.pct,
            commentary: payload.commentary.clone(),
            file_url: Some(payload.file_url.clone()),
            file_name: Some(payload.file_name.clone()),
            status: payload.status,
            comment_admin: None,
        })
    }
}

/// 画面遷移の呼び出しを記録するナビゲーター
#[derive(Default)]
pub struct RecordingNavigator {
    pub calls: Mutex<Vec<RoutePath>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録された遷移先の一覧を取得する
    pub fn recorded(&self) -> Vec<RoutePath> {
        self.calls.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: RoutePath) {
        self.calls.lock().unwrap().push(path);
    }
}

/// 一覧画面テスト用の固定レコード
pub fn fixture_bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
            email: "a@a".to_string(),
            expense_type: "Hôtel et logement".to_string(),
            name: "encore".to_string(),
            amount: 400,
            date: "2004-04-04".to_string(),
            vat: "80".to_string(),
            pct: 20,
            commentary: "séminaire billed".to_string(),
            file_url: Some("https://storage.example.com/receipts/facture-1.jpg".to_string()),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".to_string()),
            status: BillStatus::Pending,
            comment_admin: Some("ok".to_string()),
        },
        Bill {
            id: "BeKy5Mo4jkmdfPGYpTxZ".to_string(),
            email: "a@a".to_string(),
            expense_type: "Transports".to_string(),
            name: "test1".to_string(),
            amount: 100,
            date: "2001-01-01".to_string(),
            vat: "".to_string(),
            pct: 20,
            commentary: "plop".to_string(),
            file_url: Some("https://storage.example.com/receipts/facture-2.jpg".to_string()),
            file_name: Some("billet-train.jpg".to_string()),
            status: BillStatus::Refused,
            comment_admin: Some("en fait non".to_string()),
        },
        Bill {
            id: "UIUZtnPQvnbFnB0ozvJh".to_string(),
            email: "a@a".to_string(),
            expense_type: "Services en ligne".to_string(),
            name: "test3".to_string(),
            amount: 300,
            date: "2003-03-03".to_string(),
            vat: "60".to_string(),
            pct: 20,
            commentary: "".to_string(),
            file_url: Some("https://storage.example.com/receipts/facture-3.jpg".to_string()),
            file_name: Some("facture-client-php.jpg".to_string()),
            status: BillStatus::Accepted,
            comment_admin: None,
        },
        Bill {
            id: "qcCK3SzECmaZAGRrHjaC".to_string(),
            email: "a@a".to_string(),
            expense_type: "Restaurants et bars".to_string(),
            name: "test2".to_string(),
            amount: 200,
            date: "2002-02-02".to_string(),
            vat: "40".to_string(),
            pct: 20,
            commentary: "test2".to_string(),
            file_url: None,
            file_name: None,
            status: BillStatus::Refused,
            comment_admin: Some("à valider".to_string()),
        },
    ]
}
