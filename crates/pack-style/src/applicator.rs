//! The bridge from style changes to a native widget.

use pack_core::{BackgroundColor, Color, Font, TextAlign};

/// Receives appearance changes from a [`Pack`](crate::Pack).
///
/// Implemented by widget backends. Layout-affecting properties never reach
/// the applicator; they only mark the style dirty.
pub trait Applicator {
    fn set_text_alignment(&mut self, alignment: TextAlign);

    /// `None` restores the platform default.
    fn set_color(&mut self, color: Option<Color>);

    /// `None` restores the platform default.
    fn set_background_color(&mut self, color: Option<BackgroundColor>);

    fn set_hidden(&mut self, hidden: bool);

    fn set_font(&mut self, font: &Font);
}

/// One applicator call, identified without its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ApplyTarget {
    TextAlignment,
    Color,
    BackgroundColor,
    Hidden,
    Font,
}

impl ApplyTarget {
    pub(crate) const ALL: [ApplyTarget; 5] = [
        ApplyTarget::TextAlignment,
        ApplyTarget::Color,
        ApplyTarget::BackgroundColor,
        ApplyTarget::Hidden,
        ApplyTarget::Font,
    ];
}
