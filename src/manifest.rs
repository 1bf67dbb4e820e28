//! The icon sizes required by the iOS `AppIcon.appiconset` catalog.

/// Side length of the vector logo's native coordinate space.
pub const SOURCE_UNITS: f32 = 200.0;

/// A single square icon in the catalog.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct IconSpec {
    pub filename: &'static str,
    pub size: u32,
}

const fn icon(filename: &'static str, size: u32) -> IconSpec {
    IconSpec { filename, size }
}

/// Every icon the catalog declares. Some sizes appear under more than one
/// name; each name gets its own file.
pub const APP_ICONS: &[IconSpec] = &[
    icon("AppIcon-20x20@1x.png", 20),
    icon("AppIcon-20x20@2x.png", 40),
    icon("AppIcon-20x20@3x.png", 60),
    icon("AppIcon-29x29@1x.png", 29),
    icon("AppIcon-29x29@2x.png", 58),
    icon("AppIcon-29x29@3x.png", 87),
    icon("AppIcon-40x40@1x.png", 40),
    icon("AppIcon-40x40@2x.png", 80),
    icon("AppIcon-40x40@3x.png", 120),
    icon("AppIcon-60x60@2x.png", 120),
    icon("AppIcon-60x60@3x.png", 180),
    icon("AppIcon-76x76@1x.png", 76),
    icon("AppIcon-76x76@2x.png", 152),
    icon("AppIcon-83.5x83.5@2x.png", 167),
    icon("AppIcon-1024x1024@1x.png", 1024),
];
