use std::collections::HashSet;
use uuid::Uuid;

/// Credits charged per enhanced image.
pub const CREDITS_PER_IMAGE: i64 = 1;

/// A batch must name at least one image and no image twice.
pub fn check_image_ids(image_ids: &[Uuid]) -> Result<(), String> {
    if image_ids.is_empty() {
        return Err("imageIds must not be empty".to_string());
    }

    let mut seen = HashSet::with_capacity(image_ids.len());
    if let Some(dup) = image_ids.iter().find(|id| !seen.insert(**id)) {
        return Err(format!("image {} is listed more than once", dup));
    }

    Ok(())
}

pub fn credits_required(image_count: usize) -> i64 {
    image_count as i64 * CREDITS_PER_IMAGE
}

/// True when every requested id was found and nothing else was.
pub fn same_id_set(requested: &[Uuid], found: &[Uuid]) -> bool {
    let requested: HashSet<&Uuid> = requested.iter().collect();
    let found: HashSet<&Uuid> = found.iter().collect();
    requested == found
}
