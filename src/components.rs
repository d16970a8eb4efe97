mod create_user_form;
pub use create_user_form::*;

mod settings_form;
pub use settings_form::*;

mod user_list;
pub use user_list::*;
