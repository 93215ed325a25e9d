/// 汎用APIクライアント
///
/// APIサーバー（リモートストア）との通信を行うクライアント。
/// 各リクエストは一回限りで、リトライやバックオフは行わない。
/// 失敗はそのまま呼び出し元へ返す。
use crate::shared::config::environment::ApiConfig;
use crate::shared::errors::{AppError, AppResult};
use log::{debug, info, warn};
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

/// APIサーバーからのエラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
    pub timestamp: String,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

/// 汎用APIクライアント
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// 設定を指定してAPIクライアントを作成
    ///
    /// # 引数
    /// * `config` - API接続設定
    ///
    /// # 戻り値
    /// APIクライアント、または初期化に失敗した場合はエラー
    pub fn new(config: ApiConfig) -> AppResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        Ok(Self { client, config })
    }

    /// 環境変数の設定でAPIクライアントを作成
    pub fn from_env() -> AppResult<Self> {
        Self::new(ApiConfig::from_env())
    }

    /// GETリクエストを送信
    ///
    /// # 引数
    /// * `endpoint` - エンドポイントパス
    /// * `auth_token` - セッショントークン（任意）
    pub async fn get<T>(&self, endpoint: &str, auth_token: Option<&str>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        debug!("GETリクエスト送信: endpoint={endpoint}");

        let url = format!("{}{endpoint}", self.config.base_url);
        let request = self.with_auth(self.client.get(&url), auth_token);

        self.send_once(request, "GET", endpoint).await
    }

    /// PATCHリクエストを送信
    ///
    /// # 引数
    /// * `endpoint` - エンドポイントパス
    /// * `body` - JSONボディ
    /// * `auth_token` - セッショントークン（任意）
    pub async fn patch<B, T>(
        &self,
        endpoint: &str,
        body: &B,
        auth_token: Option<&str>,
    ) -> AppResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        debug!("PATCHリクエスト送信: endpoint={endpoint}");

        let url = format!("{}{endpoint}", self.config.base_url);
        let request = self.with_auth(self.client.patch(&url).json(body), auth_token);

        self.send_once(request, "PATCH", endpoint).await
    }

    /// マルチパートフォームのPOSTリクエストを送信（ファイルアップロード用）
    ///
    /// # 引数
    /// * `endpoint` - エンドポイントパス
    /// * `form` - マルチパートフォームデータ
    /// * `auth_token` - セッショントークン（任意）
    pub async fn post_multipart<T>(
        &self,
        endpoint: &str,
        form: multipart::Form,
        auth_token: Option<&str>,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        debug!("マルチパートPOSTリクエスト送信: endpoint={endpoint}");

        let url = format!("{}{endpoint}", self.config.base_url);
        let request = self.with_auth(self.client.post(&url).multipart(form), auth_token);

        self.send_once(request, "POST", endpoint).await
    }

    /// 認証トークンがある場合はAuthorizationヘッダーを付与する
    fn with_auth(&self, request: RequestBuilder, auth_token: Option<&str>) -> RequestBuilder {
        match auth_token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// リクエストを一回だけ送信し、レスポンスを型に解析する
    async fn send_once<T>(&self, request: RequestBuilder, method: &str, endpoint: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await.map_err(|e| {
            AppError::external_service(format!("APIサーバーへの接続に失敗しました: {e}"))
        })?;

        if response.status().is_success() {
            let result: T = response
                .json()
                .await
                .map_err(|e| AppError::external_service(format!("レスポンス解析エラー: {e}")))?;

            info!("{method}リクエスト成功: endpoint={endpoint}");
            return Ok(result);
        }

        let error_response = self.parse_error_response(response).await;
        Err(AppError::external_service(format!(
            "APIサーバーエラー: {} - {}",
            error_response.error.code, error_response.error.message
        )))
    }

    /// エラーレスポンスを解析し、詳細なエラー情報を取り出す
    async fn parse_error_response(&self, response: Response) -> ErrorResponse {
        let status_code = response.status().as_u16();

        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let response_text = response
            .text()
            .await
            .unwrap_or_else(|_| "レスポンス読み取り失敗".to_string());

        // JSONエラーレスポンスの解析を試行
        if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&response_text) {
            debug!(
                "APIサーバーから構造化エラーレスポンスを受信: code={}, message={}",
                error_response.error.code, error_response.error.message
            );
            return error_response;
        }

        // JSONでない場合はHTTPステータスから汎用エラーレスポンスを作成
        let (error_code, message) = match status_code {
            400 => ("BAD_REQUEST", "リクエストの形式が正しくありません"),
            401 => ("UNAUTHORIZED", "認証に失敗しました"),
            403 => ("FORBIDDEN", "この操作を実行する権限がありません"),
            404 => ("NOT_FOUND", "指定されたリソースが見つかりません"),
            413 => ("PAYLOAD_TOO_LARGE", "データサイズが制限を超えています"),
            500 => ("INTERNAL_SERVER_ERROR", "サーバー内部エラーが発生しました"),
            503 => ("SERVICE_UNAVAILABLE", "APIサーバーが一時的に利用できません"),
            _ => ("UNKNOWN_ERROR", "不明なエラーが発生しました"),
        };

        warn!("APIサーバーから非構造化エラーレスポンス: status={status_code}, body={response_text}");

        ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message: message.to_string(),
                details: Some(serde_json::json!({
                    "http_status": status_code,
                    "raw_response": response_text,
                })),
                timestamp: chrono::Utc::now().to_rfc3339(),
                request_id,
            },
        }
    }
}
