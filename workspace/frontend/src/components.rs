pub mod feedback;
pub mod page;
pub mod users;
