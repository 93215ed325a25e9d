// 新規請求書の作成サービス（2段階コミット）

use crate::features::auth::models::SessionUser;
use crate::features::bills::models::{BillPayload, BillStatus};
use crate::features::new_bill::models::{BillForm, ReceiptAttachment, SubmitState, DEFAULT_PCT};
use crate::features::new_bill::validation::ReceiptPolicy;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::routes::{Navigator, RoutePath};
use crate::store::{BillStore, ReceiptUpload};
use log::{error, info};
use std::sync::Arc;

/// 新規請求書の作成サービス
///
/// フローは2段階コミット：
/// 1. `attach_receipt` — ファイル選択時に検証とアップロードを行い、
///    添付ハンドルを保持する
/// 2. `submit` — フォーム送信時に添付ハンドルを要求し、レコードを
///    永続化して一覧画面へ遷移する
///
/// 利用者識別はコンストラクタで明示的に受け取る。送信は`SubmitState`で
/// 多重実行を防ぐ。
pub struct NewBillService {
    store: Arc<dyn BillStore>,
    navigator: Arc<dyn Navigator>,
    user: SessionUser,
    policy: ReceiptPolicy,
    attachment: Option<ReceiptAttachment>,
    state: SubmitState,
}

impl NewBillService {
    /// 新しい作成サービスを作成する（デフォルトの受け入れポリシー）
    ///
    /// # 引数
    /// * `store` - リモートストアクライアント
    /// * `navigator` - 画面遷移コールバック
    /// * `user` - セッションの利用者識別情報
    pub fn new(
        store: Arc<dyn BillStore>,
        navigator: Arc<dyn Navigator>,
        user: SessionUser,
    ) -> Self {
        Self::with_policy(store, navigator, user, ReceiptPolicy::default())
    }

    /// 受け入れポリシーを指定して作成サービスを作成する
    pub fn with_policy(
        store: Arc<dyn BillStore>,
        navigator: Arc<dyn Navigator>,
        user: SessionUser,
        policy: ReceiptPolicy,
    ) -> Self {
        Self {
            store,
            navigator,
            user,
            policy,
            attachment: None,
            state: SubmitState::Editing,
        }
    }

    /// 現在の送信状態を取得する
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// 現在の添付ハンドルを取得する
    pub fn attachment(&self) -> Option<&ReceiptAttachment> {
        self.attachment.as_ref()
    }

    /// 領収書ファイルを検証し、アップロードして添付する
    ///
    /// ファイル選択時に呼ばれる。アップロードは送信を待たずこの時点で
    /// 行う（添付を先に確定し、メタデータは後から入力する設計）。
    ///
    /// # 引数
    /// * `file_name` - 選択されたファイルの名前
    /// * `data` - ファイルの内容
    ///
    /// # 戻り値
    /// 添付ハンドル。拡張子が不正な場合はアップロードせずに
    /// バリデーションエラー。アップロード失敗時は添付状態を変えずに
    /// エラーを返す。
    pub async fn attach_receipt(
        &mut self,
        file_name: &str,
        data: Vec<u8>,
    ) -> AppResult<ReceiptAttachment> {
        self.policy.validate_file_name(file_name)?;

        info!("領収書アップロードを開始します: file_name={file_name}");

        let handle = self
            .store
            .create_receipt(ReceiptUpload {
                file_name: file_name.to_string(),
                data,
                email: self.user.email.clone(),
            })
            .await
            .map_err(|e| {
                error!("領収書アップロードに失敗しました: file_name={file_name}, error={e}");
                e
            })?;

        info!("領収書アップロード成功: key={}", handle.key);

        let attachment = ReceiptAttachment {
            key: handle.key,
            file_url: handle.file_url,
            file_name: file_name.to_string(),
        };
        self.attachment = Some(attachment.clone());
        Ok(attachment)
    }

    /// フォームを検証し、請求書レコードを永続化して一覧画面へ遷移する
    ///
    /// # 引数
    /// * `form` - フォームの入力値
    ///
    /// # 戻り値
    /// 成功時は`Submitted`へ遷移し、一覧画面への遷移を一度だけ依頼する。
    /// 添付が未完了の場合は`MissingAttachment`で即時失敗。永続化の失敗は
    /// ログに記録して返し、状態は`Editing`に戻る（自動リトライはしない）。
    pub async fn submit(&mut self, form: BillForm) -> AppResult<()> {
        match self.state {
            SubmitState::Submitting => {
                return Err(AppError::validation(
                    "L'envoi est déjà en cours.".to_string(),
                ));
            }
            SubmitState::Submitted => {
                return Err(AppError::validation(
                    "Cette note de frais a déjà été envoyée.".to_string(),
                ));
            }
            SubmitState::Editing => {}
        }

        let attachment = self
            .attachment
            .clone()
            .ok_or(AppError::MissingAttachment)?;

        form.validate()?;

        let payload = BillPayload {
            email: self.user.email.clone(),
            expense_type: form.expense_type,
            name: form.name,
            amount: form.amount,
            date: form.date,
            vat: form.vat,
            pct: form.pct.unwrap_or(DEFAULT_PCT),
            commentary: form.commentary,
            file_url: attachment.file_url,
            file_name: attachment.file_name,
            status: BillStatus::Pending,
        };

        self.state = SubmitState::Submitting;

        match self.store.update(&attachment.key, &payload).await {
            Ok(bill) => {
                info!("請求書を送信しました: id={}", bill.id);
                self.state = SubmitState::Submitted;
                self.navigator.navigate(RoutePath::Bills);
                Ok(())
            }
            Err(e) => {
                error!("請求書の送信に失敗しました: {e}");
                self.state = SubmitState::Editing;
                Err(e)
            }
        }
    }
}
