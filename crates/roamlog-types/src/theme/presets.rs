use std::sync::LazyLock;

use uuid::Uuid;

use super::model::*;

pub const DEFAULT_THEME_SLUG: &str = "default";
pub const PASSPORT_THEME_SLUG: &str = "passport";
pub const RETRO_THEME_SLUG: &str = "retro";

/// Clean sans-serif look used when nothing else is selected
pub static DEFAULT_THEME: LazyLock<JournalTheme> = LazyLock::new(|| JournalTheme {
    id: Uuid::from_u128(0x0001),
    name: "Default".to_string(),
    slug: DEFAULT_THEME_SLUG.to_string(),
    description: Some("Clean and simple, lets your stories speak".to_string()),
    is_system: true,
    typography: ThemeTypography {
        title_font: "system".to_string(),
        body_font: "system".to_string(),
        caption_font: "system".to_string(),
        title_size: 22.0,
        body_size: 16.0,
        caption_size: 13.0,
    },
    colors: ThemeColors {
        background: "#FFFFFF".to_string(),
        surface: "#F5F5F7".to_string(),
        primary: "#1C1C1E".to_string(),
        secondary: "#3A3A3C".to_string(),
        accent: "#007AFF".to_string(),
        text: "#1C1C1E".to_string(),
        text_secondary: "#8E8E93".to_string(),
        border: "#E5E5EA".to_string(),
    },
    blocks: ThemeBlocks {
        moment: MomentBlockStyle {
            show_stamp: false,
            stamp_shape: StampShape::Circle,
            stamp_color: "#007AFF".to_string(),
            title_color: "#1C1C1E".to_string(),
        },
        recommendation: RecommendationBlockStyle {
            stay: CategoryBadgeStyle::new("#E3F2FD", "#1565C0"),
            eat: CategoryBadgeStyle::new("#FFF3E0", "#E65100"),
            do_: CategoryBadgeStyle::new("#E8F5E9", "#2E7D32"),
            shop: CategoryBadgeStyle::new("#F3E5F5", "#6A1B9A"),
            rating: RatingBadgeStyle {
                top: CategoryBadgeStyle::new("#34C759", "#FFFFFF"),
                middle: CategoryBadgeStyle::new("#FFCC00", "#1C1C1E"),
                low: CategoryBadgeStyle::new("#FF3B30", "#FFFFFF"),
            },
            show_price_level: true,
        },
        photo: PhotoBlockStyle {
            frame: PhotoFrame::Rounded,
            show_caption: true,
            allow_rotation: false,
            max_rotation: 0.0,
        },
        tip: TipBlockStyle {
            background: "#F2F8FF".to_string(),
            border: "#007AFF".to_string(),
            icon: "lightbulb".to_string(),
        },
        divider: DividerBlockStyle {
            pattern: DividerPattern::Line,
            color: "#E5E5EA".to_string(),
        },
    },
    style: ThemeStyle {
        corner_radius: 12.0,
        block_spacing: 16.0,
        shadow_opacity: 0.05,
        paper_texture: None,
    },
});

/// Stamps, serif type and ink colours of a travel document
pub static PASSPORT_THEME: LazyLock<JournalTheme> = LazyLock::new(|| JournalTheme {
    id: Uuid::from_u128(0x0002),
    name: "Passport".to_string(),
    slug: PASSPORT_THEME_SLUG.to_string(),
    description: Some("Ink stamps and visa pages for the well-travelled".to_string()),
    is_system: true,
    typography: ThemeTypography {
        title_font: "system-serif".to_string(),
        body_font: "system-serif".to_string(),
        caption_font: "system-mono".to_string(),
        title_size: 24.0,
        body_size: 16.0,
        caption_size: 12.0,
    },
    colors: ThemeColors {
        background: "#F4EFE3".to_string(),
        surface: "#FBF8F0".to_string(),
        primary: "#1F3A5F".to_string(),
        secondary: "#4A6B8A".to_string(),
        accent: "#B23A48".to_string(),
        text: "#2B2B2B".to_string(),
        text_secondary: "#6B6458".to_string(),
        border: "#D8CFBC".to_string(),
    },
    blocks: ThemeBlocks {
        moment: MomentBlockStyle {
            show_stamp: true,
            stamp_shape: StampShape::Circle,
            stamp_color: "#B23A48".to_string(),
            title_color: "#1F3A5F".to_string(),
        },
        recommendation: RecommendationBlockStyle {
            stay: CategoryBadgeStyle::new("#1F3A5F", "#F4EFE3"),
            eat: CategoryBadgeStyle::new("#B23A48", "#F4EFE3"),
            do_: CategoryBadgeStyle::new("#3E7C59", "#F4EFE3"),
            shop: CategoryBadgeStyle::new("#8A5A2B", "#F4EFE3"),
            rating: RatingBadgeStyle {
                top: CategoryBadgeStyle::new("#1F3A5F", "#FBF8F0"),
                middle: CategoryBadgeStyle::new("#4A6B8A", "#FBF8F0"),
                low: CategoryBadgeStyle::new("#6B6458", "#FBF8F0"),
            },
            show_price_level: true,
        },
        photo: PhotoBlockStyle {
            frame: PhotoFrame::Polaroid,
            show_caption: true,
            allow_rotation: true,
            max_rotation: 4.0,
        },
        tip: TipBlockStyle {
            background: "#FBF8F0".to_string(),
            border: "#B23A48".to_string(),
            icon: "seal".to_string(),
        },
        divider: DividerBlockStyle {
            pattern: DividerPattern::Dashed,
            color: "#D8CFBC".to_string(),
        },
    },
    style: ThemeStyle {
        corner_radius: 4.0,
        block_spacing: 20.0,
        shadow_opacity: 0.12,
        paper_texture: Some("paper-grain".to_string()),
    },
});

/// Warm seventies palette with rounded type
pub static RETRO_THEME: LazyLock<JournalTheme> = LazyLock::new(|| JournalTheme {
    id: Uuid::from_u128(0x0003),
    name: "Retro".to_string(),
    slug: RETRO_THEME_SLUG.to_string(),
    description: Some("Sun-faded colours from a seventies road trip".to_string()),
    is_system: true,
    typography: ThemeTypography {
        title_font: "Cooper Black".to_string(),
        body_font: "system-rounded".to_string(),
        caption_font: "system-rounded".to_string(),
        title_size: 26.0,
        body_size: 17.0,
        caption_size: 13.0,
    },
    colors: ThemeColors {
        background: "#FFF4E0".to_string(),
        surface: "#FFE8C2".to_string(),
        primary: "#D35400".to_string(),
        secondary: "#E67E22".to_string(),
        accent: "#16A085".to_string(),
        text: "#4A2C1A".to_string(),
        text_secondary: "#8C6A4F".to_string(),
        border: "#F0C987".to_string(),
    },
    blocks: ThemeBlocks {
        moment: MomentBlockStyle {
            show_stamp: true,
            stamp_shape: StampShape::Oval,
            stamp_color: "#D35400".to_string(),
            title_color: "#4A2C1A".to_string(),
        },
        recommendation: RecommendationBlockStyle {
            stay: CategoryBadgeStyle::new("#F39C12", "#4A2C1A"),
            eat: CategoryBadgeStyle::new("#D35400", "#FFF4E0"),
            do_: CategoryBadgeStyle::new("#16A085", "#FFF4E0"),
            shop: CategoryBadgeStyle::new("#C0392B", "#FFF4E0"),
            rating: RatingBadgeStyle {
                top: CategoryBadgeStyle::new("#16A085", "#FFF4E0"),
                middle: CategoryBadgeStyle::new("#F39C12", "#4A2C1A"),
                low: CategoryBadgeStyle::new("#C0392B", "#FFF4E0"),
            },
            show_price_level: false,
        },
        photo: PhotoBlockStyle {
            frame: PhotoFrame::Film,
            show_caption: true,
            allow_rotation: true,
            max_rotation: 8.0,
        },
        tip: TipBlockStyle {
            background: "#FFE8C2".to_string(),
            border: "#D35400".to_string(),
            icon: "sun.max".to_string(),
        },
        divider: DividerBlockStyle {
            pattern: DividerPattern::Ornament,
            color: "#E67E22".to_string(),
        },
    },
    style: ThemeStyle {
        corner_radius: 20.0,
        block_spacing: 18.0,
        shadow_opacity: 0.2,
        paper_texture: Some("sunburst".to_string()),
    },
});

impl JournalTheme {
    /// Built-in system themes, default first
    pub fn presets() -> [&'static JournalTheme; 3] {
        [&*DEFAULT_THEME, &*PASSPORT_THEME, &*RETRO_THEME]
    }

    /// Built-in theme with `slug`
    pub fn preset(slug: &str) -> Option<&'static JournalTheme> {
        match slug {
            DEFAULT_THEME_SLUG => Some(&*DEFAULT_THEME),
            PASSPORT_THEME_SLUG => Some(&*PASSPORT_THEME),
            RETRO_THEME_SLUG => Some(&*RETRO_THEME),
            _ => None,
        }
    }

    pub fn default_preset() -> &'static JournalTheme {
        &*DEFAULT_THEME
    }
}
