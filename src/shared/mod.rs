/// 共有モジュール
///
/// 機能モジュール間で共有される横断的な部品を提供します：
/// - 統一エラー型（errors）
/// - 画面ルート表とナビゲーション境界（routes）
/// - APIサーバーとの通信クライアント（api_client）
/// - 環境設定とログ初期化（config）
pub mod api_client;
pub mod config;
pub mod errors;
pub mod routes;
