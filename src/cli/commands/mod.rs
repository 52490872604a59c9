mod create_user;
mod import;
mod show;

pub use create_user::cmd_create_user;
pub use import::cmd_import;
pub use show::cmd_show;
