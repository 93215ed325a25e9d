/// セッション識別機能モジュール
///
/// ログイン済みユーザーの識別情報（種別とメールアドレス）の
/// モデルと、その永続化を提供します。認証フロー自体（ログイン画面、
/// トークン発行）はこのクレートの範囲外です。
// サブモジュールの宣言
pub mod models;
pub mod session;

// 公開インターフェース

// モデル
pub use models::{SessionUser, UserKind};

// セッションの永続化
pub use session::SessionStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        // モジュールが正しくエクスポートされていることを確認
        let _user: Option<SessionUser> = None;
        let _kind: Option<UserKind> = None;
        let _store: Option<SessionStore> = None;

        // この時点でコンパイルが通れば、エクスポートは正しく機能している
    }
}
