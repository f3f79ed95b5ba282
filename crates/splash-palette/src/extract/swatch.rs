//! Swatch kinds and the per-image swatch set.

use std::fmt;

use crate::color::Srgb;

/// Perceptual class of an extracted swatch: vibrant or muted, crossed with
/// three lightness bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwatchKind {
    Vibrant,
    DarkVibrant,
    LightVibrant,
    Muted,
    DarkMuted,
    LightMuted,
}

impl SwatchKind {
    /// All kinds in extraction order.
    pub const ALL: [SwatchKind; 6] = [
        SwatchKind::Vibrant,
        SwatchKind::DarkVibrant,
        SwatchKind::LightVibrant,
        SwatchKind::Muted,
        SwatchKind::DarkMuted,
        SwatchKind::LightMuted,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SwatchKind::Vibrant => "Vibrant",
            SwatchKind::DarkVibrant => "DarkVibrant",
            SwatchKind::LightVibrant => "LightVibrant",
            SwatchKind::Muted => "Muted",
            SwatchKind::DarkMuted => "DarkMuted",
            SwatchKind::LightMuted => "LightMuted",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            SwatchKind::Vibrant => 0,
            SwatchKind::DarkVibrant => 1,
            SwatchKind::LightVibrant => 2,
            SwatchKind::Muted => 3,
            SwatchKind::DarkMuted => 4,
            SwatchKind::LightMuted => 5,
        }
    }
}

impl fmt::Display for SwatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One extracted dominant color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSwatch {
    pub kind: SwatchKind,
    /// Cluster centroid, quantized to 8 bits.
    pub color: Srgb,
    /// Number of sampled pixels in the cluster.
    pub population: u32,
}

/// Zero to six swatches, at most one per [`SwatchKind`].
///
/// Iteration always follows [`SwatchKind::ALL`], which is the order the
/// slot-assignment fallbacks rely on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Swatches {
    slots: [Option<RawSwatch>; 6],
}

impl Swatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `swatch` under its own kind, replacing any previous one.
    pub fn insert(&mut self, swatch: RawSwatch) {
        self.slots[swatch.kind.index()] = Some(swatch);
    }

    /// Builder-style [`Swatches::insert`] taking a kind and a color.
    pub fn with(mut self, kind: SwatchKind, color: Srgb, population: u32) -> Self {
        self.insert(RawSwatch {
            kind,
            color: color.quantize(),
            population,
        });
        self
    }

    #[inline]
    pub fn get(&self, kind: SwatchKind) -> Option<&RawSwatch> {
        self.slots[kind.index()].as_ref()
    }

    /// Color of the swatch of `kind`, if present.
    #[inline]
    pub fn color(&self, kind: SwatchKind) -> Option<Srgb> {
        self.get(kind).map(|s| s.color)
    }

    /// Present swatches in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = &RawSwatch> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_extraction_order() {
        let swatches = Swatches::new()
            .with(SwatchKind::LightMuted, Srgb::from_u8(200, 190, 180), 5)
            .with(SwatchKind::Vibrant, Srgb::from_u8(200, 20, 20), 50)
            .with(SwatchKind::DarkMuted, Srgb::from_u8(40, 40, 50), 10);

        let kinds: Vec<SwatchKind> = swatches.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SwatchKind::Vibrant,
                SwatchKind::DarkMuted,
                SwatchKind::LightMuted
            ]
        );
        assert_eq!(swatches.len(), 3);
    }

    #[test]
    fn test_empty_set() {
        let swatches = Swatches::new();
        assert!(swatches.is_empty());
        assert_eq!(swatches.len(), 0);
        assert!(swatches.get(SwatchKind::Vibrant).is_none());
    }

    #[test]
    fn test_insert_replaces_same_kind() {
        let mut swatches = Swatches::new().with(SwatchKind::Muted, Srgb::from_u8(1, 2, 3), 1);
        swatches.insert(RawSwatch {
            kind: SwatchKind::Muted,
            color: Srgb::from_u8(4, 5, 6),
            population: 2,
        });
        assert_eq!(swatches.len(), 1);
        assert_eq!(swatches.color(SwatchKind::Muted), Some(Srgb::from_u8(4, 5, 6)));
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<&str> = SwatchKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            vec![
                "Vibrant",
                "DarkVibrant",
                "LightVibrant",
                "Muted",
                "DarkMuted",
                "LightMuted"
            ]
        );
        assert_eq!(SwatchKind::DarkVibrant.to_string(), "DarkVibrant");
    }
}
