//! Bias Audit Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態遷移・表示モデル

pub mod error;
pub mod observer;
pub mod parser;
pub mod request;
pub mod state;
pub mod types;
pub mod view;

pub use error::{AuditError, Error, ErrorKind, Result};
pub use observer::{AuditObserver, NoopObserver};
pub use parser::{parse_audit_response, parse_audit_value};
pub use request::{is_image_mime, ACCEPT_FILTER, DEFAULT_ENDPOINT, FILE_FIELD};
pub use state::{AuditEvent, AuditState, Command, Phase};
pub use types::{format_score, AuditResult, GroupScore, Score};
pub use view::{AuditView, ResultSummary, ScoreLine};
