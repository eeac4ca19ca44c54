pub mod audit_result;
pub mod header;
pub mod upload_audit_view;
