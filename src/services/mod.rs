pub mod assignments;

pub use assignments::AssignmentStore;
