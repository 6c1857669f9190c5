pub mod dropdown_menu;
pub mod review_modal;
pub mod review_triggers;
pub mod reviews_list;
pub mod toast;
