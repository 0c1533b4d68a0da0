mod add;
mod demo;
mod init;
mod list;
mod remove;
mod rename;
mod show;

pub use add::cmd_add_user;
pub use demo::cmd_demo;
pub use init::cmd_init;
pub use list::cmd_list_users;
pub use remove::cmd_remove_user;
pub use rename::cmd_rename_user;
pub use show::cmd_show_user;
