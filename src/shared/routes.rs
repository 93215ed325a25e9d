// 画面ルート定義とナビゲーション境界

use serde::{Deserialize, Serialize};

/// アプリケーションの画面ルート
///
/// ルーター本体（パス変更の監視と画面描画）はこのクレートの範囲外。
/// ここではルート表と、画面遷移コールバックの境界だけを定義する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutePath {
    /// ログイン画面
    Login,
    /// 請求書一覧画面（従業員）
    Bills,
    /// 新規請求書作成画面（従業員）
    NewBill,
    /// 管理者ダッシュボード
    Dashboard,
}

impl RoutePath {
    /// ルートに対応するパス文字列を取得
    ///
    /// # 戻り値
    /// ルーターが解釈するパス文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutePath::Login => "/",
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
            RoutePath::Dashboard => "#admin/dashboard",
        }
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 画面遷移コールバックの境界
///
/// 実装はルーター側（クレート外）が提供する。サービスは送信成功時や
/// 新規作成ボタン押下時にこの境界を通じて遷移を依頼する。
pub trait Navigator: Send + Sync {
    /// 指定ルートへの画面遷移を依頼する
    ///
    /// # 引数
    /// * `path` - 遷移先ルート
    fn navigate(&self, path: RoutePath);
}
