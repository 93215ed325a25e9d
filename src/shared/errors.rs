use thiserror::Error;

/// アプリケーション全体で使用される統一エラー型
///
/// 表示用メッセージ（`Display`）は運用ログ向け。ユーザーに見せる文言は
/// `user_message()` から取得する（プロダクトの表示言語はフランス語）。
#[derive(Debug, Error)]
pub enum AppError {
    /// バリデーション関連のエラー（メッセージはそのままユーザーに表示される）
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 領収書が未添付のまま送信された場合のエラー
    #[error("領収書が添付されていません")]
    MissingAttachment,

    /// リソースが見つからない場合のエラー
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 外部サービス連携でのエラー
    #[error("外部サービスエラー: {0}")]
    ExternalService(String),

    /// 設定関連のエラー
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// I/O関連のエラー
    #[error("I/Oエラー: {0}")]
    Io(#[from] std::io::Error),

    /// JSON解析エラー
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
}

/// エラーの重要度を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// 低重要度（ユーザー入力エラーなど）
    Low,
    /// 中重要度（外部サービス一時的エラーなど）
    Medium,
    /// 高重要度（設定不備など）
    High,
}

impl AppError {
    /// ユーザーに表示するためのメッセージを取得
    ///
    /// # 戻り値
    /// ユーザーに表示可能なエラーメッセージ（フランス語）
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Validation(msg) => msg,
            AppError::MissingAttachment => {
                "Veuillez joindre un justificatif (jpg, jpeg ou png) avant d'envoyer."
            }
            AppError::NotFound(msg) => msg,
            AppError::ExternalService(_) => {
                "Une erreur est survenue lors de la communication avec le serveur."
            }
            AppError::Configuration(_) => "Erreur de configuration de l'application.",
            AppError::Io(_) => "Erreur d'accès au fichier.",
            AppError::Json(_) => "Erreur lors de la lecture des données.",
        }
    }

    /// エラーの重要度を取得
    ///
    /// # 戻り値
    /// エラーの重要度レベル
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::MissingAttachment => ErrorSeverity::Low,
            AppError::NotFound(_) => ErrorSeverity::Low,
            AppError::ExternalService(_) => ErrorSeverity::Medium,
            AppError::Io(_) => ErrorSeverity::Medium,
            AppError::Json(_) => ErrorSeverity::Medium,
            AppError::Configuration(_) => ErrorSeverity::High,
        }
    }

    /// バリデーションエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - ユーザーに表示するバリデーションメッセージ
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// リソース未発見エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - ユーザーに表示するメッセージ
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        AppError::NotFound(message.into())
    }

    /// 外部サービスエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - エラーメッセージ（運用ログ向け）
    pub fn external_service<S: Into<String>>(message: S) -> Self {
        AppError::ExternalService(message.into())
    }

    /// 設定エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - エラーメッセージ（運用ログ向け）
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        // 各エラータイプの重要度をテスト
        assert_eq!(
            AppError::validation("montant invalide").severity(),
            ErrorSeverity::Low
        );
        assert_eq!(AppError::MissingAttachment.severity(), ErrorSeverity::Low);
        assert_eq!(
            AppError::external_service("接続失敗").severity(),
            ErrorSeverity::Medium
        );
        assert_eq!(
            AppError::configuration("環境変数が不正").severity(),
            ErrorSeverity::High
        );
    }

    #[test]
    fn test_user_message_passthrough() {
        // バリデーションとNotFoundはメッセージをそのまま表示する
        let validation_error = AppError::validation("Le montant est invalide.");
        assert_eq!(validation_error.user_message(), "Le montant est invalide.");

        let not_found_error = AppError::not_found("Aucun justificatif.");
        assert_eq!(not_found_error.user_message(), "Aucun justificatif.");
    }

    #[test]
    fn test_user_message_masks_internal_details() {
        // 外部サービスエラーの内部詳細はユーザーに漏らさない
        let error = AppError::external_service("APIサーバーエラー: 500");
        assert!(!error.user_message().contains("500"));
    }

    #[test]
    fn test_display_keeps_details() {
        // 運用ログ向けの表示には詳細が残る
        let error = AppError::external_service("接続がタイムアウトしました");
        assert!(format!("{error}").contains("接続がタイムアウトしました"));
    }

    #[test]
    fn test_io_error_conversion() {
        // std::io::ErrorからAppErrorへの変換
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: AppError = io_error.into();
        assert!(matches!(error, AppError::Io(_)));
    }
}
