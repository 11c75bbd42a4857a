//! Domain model and view logic for the users admin page.
//!
//! Nothing in here touches the DOM or the network directly, so the
//! behaviour of the page (search, dropdown selection, load lifecycle) can be
//! exercised with plain `cargo test`. The `frontend` crate renders it.

pub mod api;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod fetch_state;
pub mod filter;
pub mod model;
pub mod view;

pub use api::{ALL_USERS_PATH, UsersApi, load_users};
pub use dropdown::{DropdownState, ESCAPE_KEY, PointerTarget};
pub use error::ApiError;
pub use fetch_state::FetchState;
pub use filter::{SearchQuery, filter_users};
pub use model::{Account, User, UserId, UsersPage};
pub use view::{UsersAction, UsersView};
