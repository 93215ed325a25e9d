// 環境設定とログシステムの初期化

use crate::shared::errors::{AppError, AppResult};

/// アプリケーションの実行環境を表す列挙型
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 開発環境
    Development,
    /// プロダクション環境
    Production,
}

/// 現在の実行環境を判定する
///
/// # 戻り値
/// 現在の実行環境（Development または Production）
///
/// # 判定ロジック
/// 1. 実行時環境変数 ENVIRONMENT を確認
/// 2. デバッグビルドの場合は Development
/// 3. リリースビルドの場合は Production
pub fn get_environment() -> Environment {
    if let Ok(env_var) = std::env::var("ENVIRONMENT") {
        let env = match env_var.as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        };
        log::debug!("環境判定: 実行時環境変数を使用 -> {env_var} -> {env:?}");
        return env;
    }

    // フォールバック: ビルド設定に基づく判定
    if cfg!(debug_assertions) {
        Environment::Development
    } else {
        Environment::Production
    }
}

/// 環境設定を管理する構造体
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// 実行環境
    pub environment: Environment,
    /// デバッグモードの有効/無効
    pub debug_mode: bool,
    /// ログレベル
    pub log_level: String,
}

impl EnvironmentConfig {
    /// 環境変数から設定を読み込む
    ///
    /// # 戻り値
    /// 環境設定
    pub fn from_env() -> Self {
        let environment = get_environment();
        let debug_mode = environment == Environment::Development;
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| {
            if debug_mode {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

        Self {
            environment,
            debug_mode,
            log_level,
        }
    }
}

/// APIサーバー（ストア）への接続設定
///
/// リトライ回数は持たない。ストア呼び出しは一回限りで、失敗は
/// そのまま呼び出し元に返す方針のため。
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// APIサーバーのベースURL
    pub base_url: String,
    /// リクエストタイムアウト（秒）
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5678".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl ApiConfig {
    /// 環境変数からAPIクライアント設定を読み込む
    ///
    /// # 戻り値
    /// API接続設定（未設定の項目はデフォルト値）
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("API_SERVER_URL").unwrap_or(defaults.base_url),
            timeout_seconds: std::env::var("API_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_seconds),
        }
    }

    /// 設定内容を検証する
    ///
    /// # 戻り値
    /// 不正な場合は設定エラー
    pub fn validate(&self) -> AppResult<()> {
        if self.base_url.is_empty() {
            return Err(AppError::configuration("API_SERVER_URLが空です"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AppError::configuration(format!(
                "API_SERVER_URLの形式が不正です: {}",
                self.base_url
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(AppError::configuration("API_TIMEOUT_SECONDSは1以上が必要です"));
        }
        Ok(())
    }
}

/// 環境変数の読み込みを確認する
///
/// # 処理内容
/// 開発環境（デバッグビルド）の場合のみ.envファイルを読み込む。
/// 本番ビルドでは環境変数は実行時に設定されることを前提とする。
pub fn load_environment_variables() {
    if cfg!(debug_assertions) {
        match dotenv::dotenv() {
            Ok(path) => {
                eprintln!("環境ファイルを読み込みました: {}", path.display());
            }
            Err(e) => {
                eprintln!("環境ファイルの読み込みに失敗: {e}");
                eprintln!("環境変数が設定されていることを確認してください");
            }
        }
    }
}

/// ログシステムを初期化する
///
/// # 処理内容
/// 1. 環境設定を取得
/// 2. ログレベルを設定
/// 3. env_loggerを初期化
pub fn initialize_logging_system() {
    let env_config = EnvironmentConfig::from_env();

    let log_level = match env_config.log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .init();

    log::info!(
        "ログシステムを初期化しました: level={}, environment={:?}",
        env_config.log_level,
        env_config.environment
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5678");
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_config_validate_rejects_bad_url() {
        let config = ApiConfig {
            base_url: "localhost:5678".to_string(),
            timeout_seconds: 30,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_config_validate_rejects_zero_timeout() {
        let config = ApiConfig {
            base_url: "http://localhost:5678".to_string(),
            timeout_seconds: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_environment_config_has_log_level() {
        // 環境変数未設定でもログレベルのデフォルトが入る
        let config = EnvironmentConfig::from_env();
        assert!(!config.log_level.is_empty());
    }
}
