pub mod file_list;
pub mod header;
pub mod progress_bar;
pub mod results_panel;
pub mod settings_panel;
pub mod toast_stack;
pub mod upload_area;
