// Draft tracking: positions, the assignment board, and state snapshots.

pub mod board;
pub mod position;
pub mod state;
