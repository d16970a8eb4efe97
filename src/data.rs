mod settings;
pub use settings::*;

mod user;
pub use user::*;
