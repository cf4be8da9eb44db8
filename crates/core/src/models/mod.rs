pub mod expense;
pub mod summary;
pub mod trip;
