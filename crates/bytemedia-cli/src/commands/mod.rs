pub mod audio;
pub mod image;
pub mod restore;
