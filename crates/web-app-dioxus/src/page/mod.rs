pub mod equipment;
pub mod feedback;
pub mod home;
pub mod index;
pub mod info;
pub mod not_found;
