// 表示用の整形関数（日付・ステータス）

use crate::features::bills::models::BillStatus;
use crate::shared::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// フランス語の月略称（表示はProductの言語に合わせる）
const FRENCH_MONTH_ABBREV: [&str; 12] = [
    "Janv.", "Févr.", "Mars", "Avr.", "Mai", "Juin", "Juil.", "Août", "Sept.", "Oct.", "Nov.",
    "Déc.",
];

/// ISO-8601の暦日文字列を表示用に整形する
///
/// # 引数
/// * `iso_date` - `YYYY-MM-DD`形式の日付文字列
///
/// # 戻り値
/// `"4 Avr. 04"`形式の表示文字列（日はゼロ埋めなし、年は下2桁）。
/// 解析できない場合はバリデーションエラー。呼び出し側はレコード単位で
/// 回復し、元の文字列を表示に使う。
pub fn format_date(iso_date: &str) -> AppResult<String> {
    let date = NaiveDate::parse_from_str(iso_date.trim(), "%Y-%m-%d").map_err(|e| {
        AppError::validation(format!("Date illisible : {iso_date} ({e})"))
    })?;

    let month = FRENCH_MONTH_ABBREV[date.month0() as usize];
    Ok(format!("{} {} {}", date.day(), month, date.format("%y")))
}

/// 承認ステータスを表示用ラベルに変換する
///
/// # 引数
/// * `status` - 承認ステータス
///
/// # 戻り値
/// フランス語の表示ラベル（全ステータスで定義される全域関数）
pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refusé",
    }
}
