#![warn(clippy::pedantic)]

mod catalog;
mod equipment;
mod feedback;
mod info;
mod section;

pub use equipment::{
    CatalogFilter, Category, CategorySelection, Equipment, EquipmentID, Property, equipment,
    equipment_list,
};
pub use feedback::{Acknowledgment, FeedbackField, FeedbackForm};
pub use info::{InfoContent, InfoTab};
pub use section::Section;
