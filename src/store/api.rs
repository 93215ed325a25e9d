// APIサーバー経由のストア実装

use crate::features::bills::models::{Bill, BillPayload};
use crate::shared::api_client::ApiClient;
use crate::shared::config::environment::ApiConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::store::{BillStore, ReceiptHandle, ReceiptUpload};
use async_trait::async_trait;
use log::info;
use reqwest::multipart;
use serde::{Deserialize, Serialize};

/// APIサーバーからの請求書一覧取得レスポンス
#[derive(Debug, Serialize, Deserialize)]
struct ListBillsResponse {
    success: bool,
    bills: Vec<Bill>,
    count: usize,
    timestamp: String,
}

/// APIサーバーからの領収書アップロードレスポンス
#[derive(Debug, Serialize, Deserialize)]
struct UploadReceiptResponse {
    success: bool,
    #[serde(rename = "fileUrl")]
    file_url: String,
    key: String,
    timestamp: String,
}

/// APIサーバーからの請求書更新レスポンス
#[derive(Debug, Serialize, Deserialize)]
struct UpdateBillResponse {
    success: bool,
    bill: Bill,
    timestamp: String,
}

/// APIサーバー経由の請求書ストア
///
/// レスポンスは型付きモデルへのデシリアライズで検証する。必須フィールドの
/// 欠落や未知のステータス値はこの境界でエラーになり、上位には渡らない。
pub struct ApiBillStore {
    client: ApiClient,
    auth_token: Option<String>,
}

impl ApiBillStore {
    /// 設定を指定してストアを作成する
    ///
    /// # 引数
    /// * `config` - API接続設定
    /// * `auth_token` - セッショントークン（任意）
    pub fn new(config: ApiConfig, auth_token: Option<String>) -> AppResult<Self> {
        Ok(Self {
            client: ApiClient::new(config)?,
            auth_token,
        })
    }

    /// 環境変数の設定でストアを作成する
    pub fn from_env(auth_token: Option<String>) -> AppResult<Self> {
        Self::new(ApiConfig::from_env(), auth_token)
    }

    /// ファイル名からマルチパート送信用のContent-Typeを決める
    fn content_type_for(file_name: &str) -> &'static str {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "pdf" => "application/pdf",
            _ => "application/octet-stream",
        }
    }
}

#[async_trait]
impl BillStore for ApiBillStore {
    async fn list(&self) -> AppResult<Vec<Bill>> {
        let response: ListBillsResponse = self
            .client
            .get("/api/v1/bills", self.auth_token.as_deref())
            .await?;

        info!("請求書一覧取得成功: count={}", response.count);
        Ok(response.bills)
    }

    async fn create_receipt(&self, upload: ReceiptUpload) -> AppResult<ReceiptHandle> {
        let content_type = Self::content_type_for(&upload.file_name);
        let form = multipart::Form::new()
            .part(
                "file",
                multipart::Part::bytes(upload.data)
                    .file_name(upload.file_name.clone())
                    .mime_str(content_type)
                    .map_err(|e| AppError::validation(format!("Type de fichier invalide : {e}")))?,
            )
            .text("email", upload.email);

        let response: UploadReceiptResponse = self
            .client
            .post_multipart("/api/v1/bills", form, self.auth_token.as_deref())
            .await?;

        info!(
            "領収書アップロード成功: key={}, file_name={}",
            response.key, upload.file_name
        );
        Ok(ReceiptHandle {
            file_url: response.file_url,
            key: response.key,
        })
    }

    async fn update(&self, key: &str, payload: &BillPayload) -> AppResult<Bill> {
        let endpoint = format!("/api/v1/bills/{key}");
        let response: UpdateBillResponse = self
            .client
            .patch(&endpoint, payload, self.auth_token.as_deref())
            .await?;

        info!("請求書更新成功: id={}", response.bill.id);
        Ok(response.bill)
    }
}
