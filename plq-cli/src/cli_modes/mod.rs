mod check_mode;
mod cli_mode;
mod config_mode;
mod fill_form;
mod submit_mode;

pub use check_mode::check_mode;
pub use cli_mode::CliModeResult;
pub use config_mode::config_path_mode;
pub use fill_form::fill_form;
pub use submit_mode::submit_mode;
