// 機能モジュール構造
pub mod features;
pub mod shared;
pub mod store;

// よく使う型の再エクスポート
pub use features::auth::{SessionStore, SessionUser, UserKind};
pub use features::bills::{Bill, BillStatus, BillsService, DisplayBill};
pub use features::new_bill::{BillForm, NewBillService, ReceiptPolicy};
pub use shared::config::{initialize_logging_system, load_environment_variables, ApiConfig};
pub use shared::errors::{AppError, AppResult};
pub use shared::routes::{Navigator, RoutePath};
pub use store::{ApiBillStore, BillStore, ReceiptHandle, ReceiptUpload};
