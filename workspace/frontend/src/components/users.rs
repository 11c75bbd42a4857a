mod accounts_dropdown;
mod search_bar;
mod table;
mod view;

pub use view::UsersAdmin;
