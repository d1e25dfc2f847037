pub mod card;
pub mod scene;

/// Columns in every scene row and in the interior of the greeting box.
pub const WIDTH: usize = 60;
/// Rows in the scene below the greeting box.
pub const HEIGHT: usize = 18;
