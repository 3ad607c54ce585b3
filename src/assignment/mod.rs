//! Concrete scoring environments for worker/task assignment.

mod matrix;

pub use matrix::AssignmentMatrix;
