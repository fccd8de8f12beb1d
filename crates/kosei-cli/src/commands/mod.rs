pub mod check;
pub mod dispatch;
pub mod draft_input;
pub mod review;
pub mod show;
