pub mod component;
pub mod laptop;
pub mod motorbike;
pub mod tuition;

use entity::enums::ItemStatus;
use uuid::Uuid;

/// Listing filter shared by the physical inventory tables.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub status: Option<ItemStatus>,
    pub donor_id: Option<Uuid>,
    pub student_id: Option<Uuid>,
}

/// Picks the image for row `index` out of a donor's uploaded photos.
///
/// Photos are distributed round-robin across the rows of a batch, so a
/// single photo covers every unit and extra photos cycle.
pub(crate) fn image_for_row(images: &[String], index: usize) -> Option<String> {
    if images.is_empty() {
        return None;
    }

    Some(images[index % images.len()].clone())
}
