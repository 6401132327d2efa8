pub mod filter;
pub mod store;
pub mod task;

pub use filter::TaskFilter;
pub use store::{TaskCounts, TaskStore};
pub use task::{Task, TaskId};
