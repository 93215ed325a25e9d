use serde::{Deserialize, Serialize};

/// セッションユーザーの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserKind {
    /// 従業員（請求書の申請者）
    Employee,
    /// 管理者（承認ワークフロー側、本クレートの範囲外）
    Admin,
}

/// セッションの利用者識別情報
///
/// 永続化形式は `{"type": "Employee", "email": "..."}`。サービスには
/// この値を明示的に渡す。サービス側が保存領域を直接読むことはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "type")]
    pub kind: UserKind,
    pub email: String,
}

impl SessionUser {
    /// 従業員セッションを作成する
    ///
    /// # 引数
    /// * `email` - 申請者のメールアドレス
    pub fn employee<S: Into<String>>(email: S) -> Self {
        Self {
            kind: UserKind::Employee,
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_wire_format() {
        // 永続化形式のキー名（type / email）を確認
        let user = SessionUser::employee("employee@test.tld");
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"type\":\"Employee\""));
        assert!(json.contains("\"email\":\"employee@test.tld\""));
    }

    #[test]
    fn test_session_user_deserialization() {
        let json = r#"{"type": "Employee", "email": "a@a"}"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.kind, UserKind::Employee);
        assert_eq!(user.email, "a@a");
    }

    #[test]
    fn test_session_user_rejects_unknown_kind() {
        let json = r#"{"type": "Guest", "email": "a@a"}"#;
        let result: Result<SessionUser, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_session_user_rejects_missing_email() {
        // メールアドレスのないセッションは不正として弾く
        let json = r#"{"type": "Employee"}"#;
        let result: Result<SessionUser, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
