// handlers/pages/mod.rs - Navigation pages behind the access gate
//
// Each page answers with a JSON descriptor of what the client should render.
// Layout and styling are left to the client.

pub mod editor;
pub mod login;
pub mod shell;

pub use editor::{copyright_page, editor_page};
pub use login::login_page;
pub use shell::dashboard_page;
