//! One use case per scan flow.

mod claim_label;
mod create_from_scan;
mod handle_scan;
mod item_form;
mod reuse_label;

pub use claim_label::ClaimLabel;
pub use create_from_scan::CreateFromScan;
pub use handle_scan::HandleScan;
pub use item_form::ItemForm;
pub use reuse_label::ReuseLabel;
