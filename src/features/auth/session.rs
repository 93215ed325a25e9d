// セッション識別情報の永続化

use crate::features::auth::models::SessionUser;
use crate::shared::errors::{AppError, AppResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// セッションファイルの内容
///
/// `user`キーの下に利用者識別情報を保持する。
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    user: Option<SessionUser>,
}

/// セッション識別情報の保存領域
///
/// プラットフォームのデータディレクトリ配下のJSONファイルに保存する。
/// 本クレートのサービスからは読み取り専用：起動時に読み込んだ
/// `SessionUser`値をコンストラクタへ渡す。
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// 保存先ファイルを指定してセッションストアを作成する
    ///
    /// # 引数
    /// * `path` - セッションファイルのパス
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// デフォルトの保存先でセッションストアを作成する
    ///
    /// # 戻り値
    /// データディレクトリが特定できない環境では設定エラー
    pub fn open_default() -> AppResult<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| AppError::configuration("データディレクトリが特定できません"))?;
        Ok(Self::new(data_dir.join("bill-claims").join("session.json")))
    }

    /// 保存されているセッションユーザーを読み込む
    ///
    /// # 戻り値
    /// 保存済みのユーザー、ファイルが存在しない場合はNone。
    /// ファイルが壊れている場合はエラー（不正なセッションを黙って
    /// 使い続けないため）。
    pub fn load_user(&self) -> AppResult<Option<SessionUser>> {
        if !self.path.exists() {
            debug!("セッションファイルが存在しません: {}", self.path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let file: SessionFile = serde_json::from_str(&contents)?;
        Ok(file.user)
    }

    /// セッションユーザーを保存する
    ///
    /// # 引数
    /// * `user` - 保存する利用者識別情報
    pub fn save_user(&self, user: &SessionUser) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = SessionFile {
            user: Some(user.clone()),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;

        info!("セッションを保存しました: email={}", user.email);
        Ok(())
    }

    /// 保存されているセッションを破棄する（ログアウト）
    pub fn clear(&self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!("セッションを破棄しました");
        }
        Ok(())
    }
}
