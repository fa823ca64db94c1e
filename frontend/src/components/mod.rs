pub mod create_account_page;
pub mod password_input;

pub use create_account_page::CreateAccountPage;
pub use password_input::PasswordInput;
