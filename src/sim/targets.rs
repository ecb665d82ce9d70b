//! Receptacles (bins) and drop-target resolution
//!
//! Only a bin's mouth accepts drops. The mouth is the top third of the bin,
//! narrowed on both sides, so a release over the bin body is a miss.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{PlayArea, Rect};
use crate::catalog::{CATALOG, Material};
use crate::consts::{BIN_HEIGHT_FRACTION, MOUTH_HEIGHT_FRACTION, MOUTH_INSET_FRACTION};

/// A bin that accepts one material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receptacle {
    pub material: Material,
    /// Full visual bounds (absolute coordinates)
    pub bounds: Rect,
}

impl Receptacle {
    pub fn new(material: Material, bounds: Rect) -> Self {
        Self { material, bounds }
    }

    /// Region that counts as a valid drop (absolute coordinates).
    ///
    /// Derived from the current bounds on every call; layouts can reflow.
    pub fn acceptance_zone(&self) -> Rect {
        let inset = self.bounds.width() * MOUTH_INSET_FRACTION;
        let mouth_height = self.bounds.height() * MOUTH_HEIGHT_FRACTION;
        Rect::new(
            Vec2::new(self.bounds.min.x + inset, self.bounds.min.y),
            Vec2::new(self.bounds.max.x - inset, self.bounds.min.y + mouth_height),
        )
    }
}

/// First bin whose mouth contains `point` (absolute coordinates)
pub fn find_target_at(receptacles: &[Receptacle], point: Vec2) -> Option<&Receptacle> {
    receptacles
        .iter()
        .find(|r| r.acceptance_zone().contains_point(point))
}

/// Mouth center in play-area-local coordinates (aim point for the success animation)
pub fn acceptance_zone_center(receptacle: &Receptacle, play_area: &PlayArea) -> Vec2 {
    play_area.to_local(receptacle.acceptance_zone().center())
}

/// Default layout: one bin per material, side by side on the floor of the play area
pub fn layout_row(play_area: &PlayArea) -> Vec<Receptacle> {
    let count = CATALOG.len() as f32;
    let bin_width = play_area.width() / count;
    let bin_height = play_area.height() * BIN_HEIGHT_FRACTION;
    let top = play_area.height() - bin_height;

    CATALOG
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let local = Rect::from_xywh(i as f32 * bin_width, top, bin_width, bin_height);
            Receptacle::new(category.material, local.translate(play_area.origin))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin() -> Receptacle {
        Receptacle::new(Material::Glass, Rect::from_xywh(100.0, 300.0, 100.0, 90.0))
    }

    #[test]
    fn test_acceptance_zone_strictly_inside_bounds() {
        let r = bin();
        let zone = r.acceptance_zone();
        assert!(r.bounds.contains_rect(&zone));
        assert!(zone.width() < r.bounds.width());
        assert!(zone.height() < r.bounds.height());
        assert!((zone.height() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_near_miss_on_bin_body_is_no_target() {
        let bins = vec![bin()];
        // Mouth
        assert!(find_target_at(&bins, Vec2::new(150.0, 310.0)).is_some());
        // Inside the bin but below the mouth
        assert!(find_target_at(&bins, Vec2::new(150.0, 370.0)).is_none());
        // Inside the bin but in the side inset
        assert!(find_target_at(&bins, Vec2::new(103.0, 310.0)).is_none());
        // Outside entirely
        assert!(find_target_at(&bins, Vec2::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn test_zone_follows_reflowed_bounds() {
        let mut r = bin();
        let before = r.acceptance_zone();
        r.bounds = r.bounds.translate(Vec2::new(50.0, 0.0));
        let after = r.acceptance_zone();
        assert_eq!(after.min.x - before.min.x, 50.0);
    }

    #[test]
    fn test_zone_center_is_local() {
        let area = PlayArea::new(Vec2::new(100.0, 0.0), Vec2::new(500.0, 400.0));
        let center = acceptance_zone_center(&bin(), &area);
        assert_eq!(center, Vec2::new(50.0, 315.0));
    }

    #[test]
    fn test_layout_row_covers_catalog_on_floor() {
        let area = PlayArea::new(Vec2::new(20.0, 10.0), Vec2::new(500.0, 600.0));
        let bins = layout_row(&area);
        assert_eq!(bins.len(), CATALOG.len());
        for (bin, category) in bins.iter().zip(CATALOG.iter()) {
            assert_eq!(bin.material, category.material);
            assert!(area.bounds().contains_rect(&bin.bounds));
            assert!((bin.bounds.max.y - area.bounds().max.y).abs() < 1e-3);
        }
    }
}
