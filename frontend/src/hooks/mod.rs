pub mod use_create_account_form;

pub use use_create_account_form::use_create_account_form;
