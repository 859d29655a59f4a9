use std::collections::HashSet;
use uuid::Uuid;

/// Position of one image version in a listing gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaSlot {
    pub image_version_id: Uuid,
    pub sort_order: i32,
    pub is_hero: bool,
}

/// Lays out a gallery in request order.
///
/// The hero is `hero` when it is one of `version_ids`, otherwise the first id.
pub fn plan_media(version_ids: &[Uuid], hero: Option<Uuid>) -> Result<Vec<MediaSlot>, String> {
    if version_ids.is_empty() {
        return Err("imageVersionIds must not be empty".to_string());
    }

    let mut seen = HashSet::with_capacity(version_ids.len());
    if let Some(dup) = version_ids.iter().find(|id| !seen.insert(**id)) {
        return Err(format!("image version {} is listed more than once", dup));
    }

    let hero = hero
        .filter(|h| version_ids.contains(h))
        .unwrap_or(version_ids[0]);

    Ok(version_ids
        .iter()
        .enumerate()
        .map(|(index, id)| MediaSlot {
            image_version_id: *id,
            sort_order: index as i32,
            is_hero: *id == hero,
        })
        .collect())
}

/// True when the store resolved exactly the planned versions.
pub fn all_resolved(slots: &[MediaSlot], found: &[Uuid]) -> bool {
    let found: HashSet<&Uuid> = found.iter().collect();
    found.len() == slots.len() && slots.iter().all(|s| found.contains(&s.image_version_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_order_and_requested_hero() {
        let ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];

        let slots = plan_media(&ids, Some(ids[2])).unwrap();

        assert_eq!(slots.iter().map(|s| s.sort_order).collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(slots.iter().filter(|s| s.is_hero).count(), 1);
        assert!(slots[2].is_hero);
    }

    #[test]
    fn test_hero_outside_set_falls_back_to_first() {
        let ids = [Uuid::new_v4(), Uuid::new_v4()];

        let slots = plan_media(&ids, Some(Uuid::new_v4())).unwrap();

        assert!(slots[0].is_hero);
        assert!(!slots[1].is_hero);
    }

    #[test]
    fn test_empty_and_duplicate_rejected() {
        let id = Uuid::new_v4();
        assert!(plan_media(&[], None).is_err());
        assert!(plan_media(&[id, id], None).is_err());
    }

    #[test]
    fn test_all_resolved() {
        let ids = [Uuid::new_v4(), Uuid::new_v4()];
        let slots = plan_media(&ids, None).unwrap();

        assert!(all_resolved(&slots, &[ids[1], ids[0]]));
        assert!(!all_resolved(&slots, &[ids[0]]));
        assert!(!all_resolved(&slots, &[ids[0], Uuid::new_v4()]));
    }
}
