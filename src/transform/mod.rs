pub mod perspective;
pub mod rotation;
pub mod translation;

pub use perspective::{apply_perspective, perspective_matrix};
pub use rotation::{apply_rotation, apply_rotation_point, rotation_matrix};
pub use translation::{apply_translation_point, translation_matrix};
