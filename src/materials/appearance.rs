use bevy::color::{Mix, Srgba};
use bevy::prelude::*;
use crate::core::fractal_settings::AppearancePalette;

pub const APPEARANCE_VARIANTS: usize = 2;

/// Per-depth colors of a tree, `max_depth + 1` rows of two variants.
///
/// Rows fade from the base color toward each accent as depth grows. The leaf
/// row always holds the terminal colors. With `max_depth == 0` the only row is
/// the leaf row.
pub fn appearance_colors(max_depth: u32, palette: &AppearancePalette) -> Vec<[Color; APPEARANCE_VARIANTS]> {
    let base = Srgba::from(palette.base);
    let mut rows: Vec<[Color; APPEARANCE_VARIANTS]> = (0..max_depth)
        .map(|depth| {
            let t = depth as f32 / max_depth as f32;
            palette.accents.map(|accent| Color::from(base.mix(&Srgba::from(accent), t)))
        })
        .collect();

    rows.push(palette.terminals);
    rows
}

#[derive(Debug, Clone)]
pub struct AppearanceTable {
    colors: Vec<[Color; APPEARANCE_VARIANTS]>,
    materials: Vec<[Handle<StandardMaterial>; APPEARANCE_VARIANTS]>,
}

impl AppearanceTable {
    /// Creates one material per entry, each a copy of `base` recolored.
    pub fn build(
        max_depth: u32,
        palette: &AppearancePalette,
        base: &StandardMaterial,
        materials: &mut Assets<StandardMaterial>,
    ) -> Self {
        debug!("Initializing appearance table with {} rows", max_depth + 1);

        let colors = appearance_colors(max_depth, palette);
        let handles = colors
            .iter()
            .map(|row| {
                row.map(|color| {
                    materials.add(StandardMaterial {
                        base_color: color,
                        ..base.clone()
                    })
                })
            })
            .collect();

        Self::from_parts(colors, handles)
    }

    pub(crate) fn from_parts(
        colors: Vec<[Color; APPEARANCE_VARIANTS]>,
        materials: Vec<[Handle<StandardMaterial>; APPEARANCE_VARIANTS]>,
    ) -> Self {
        debug_assert_eq!(colors.len(), materials.len());
        AppearanceTable { colors, materials }
    }

    pub fn depth_count(&self) -> usize {
        self.colors.len()
    }

    pub fn material(&self, depth: u32, variant: usize) -> Option<&Handle<StandardMaterial>> {
        self.materials.get(depth as usize)?.get(variant)
    }

    pub fn color(&self, depth: u32, variant: usize) -> Option<Color> {
        self.colors.get(depth as usize)?.get(variant).copied()
    }

    pub fn colors(&self) -> &[[Color; APPEARANCE_VARIANTS]] {
        &self.colors
    }
}
