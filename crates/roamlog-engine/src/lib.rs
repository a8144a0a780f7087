// Engine module - pure transformations over the journal types
// Sits between the data model (types) and whatever renders or transports it

pub mod convert;
pub mod theme;

pub use convert::{
    location_to_place, place_to_location, preview_entries, preview_entry, to_editor_block,
    to_editor_content, FALLBACK_CATEGORY,
};
pub use theme::{
    price_label, resolve_block, resolve_font, resolve_photo_frame, resolve_recommendation,
    resolve_stamp, resolve_typography, BlockAppearance, DividerAppearance, FontCatalog,
    FontDescriptor, FontFamily, FontToken, FontWeight, MomentAppearance, PhotoAppearance,
    RecommendationAppearance, ResolvedTypography, StampAppearance, SystemFontsOnly,
    TipAppearance,
};

use roamlog_types::{EditorContent, JournalTheme};

// Façade API - stable entry points for app layers

/// Appearance of every block of a draft under `theme`, in sequence order
pub fn render_plan<'a>(
    content: &'a EditorContent,
    theme: &'a JournalTheme,
) -> Vec<BlockAppearance<'a>> {
    content
        .iter()
        .map(|block| resolve_block(block, theme))
        .collect()
}
