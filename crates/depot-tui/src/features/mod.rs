pub mod dashboard;
pub mod toast;
