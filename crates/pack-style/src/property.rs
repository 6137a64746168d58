//! The Pack property table.

use pack_core::font::{CURSIVE, FANTASY, MONOSPACE, SANS_SERIF, SERIF, SYSTEM};
use pack_core::{
    Alignment, Direction, Display, FontStyle, FontVariant, FontWeight, TextAlign, TextDirection,
    Visibility, SYSTEM_DEFAULT_FONT_SIZE,
};

use crate::choices::Choices;
use crate::value::StyleValue;

pub const NONE: &str = "none";
pub const TRANSPARENT: &str = "transparent";

const DISPLAY_CHOICES: Choices = Choices::new(Display::KEYWORDS);
const VISIBILITY_CHOICES: Choices = Choices::new(Visibility::KEYWORDS);
const DIRECTION_CHOICES: Choices = Choices::new(Direction::KEYWORDS);
const ALIGNMENT_CHOICES: Choices = Choices::new(Alignment::KEYWORDS);
const SIZE_CHOICES: Choices = Choices::new(&[NONE]).integer().non_negative();
const FLEX_CHOICES: Choices = Choices::new(&[]).number().non_negative();
const PADDING_CHOICES: Choices = Choices::new(&[]).integer().non_negative();
const COLOR_CHOICES: Choices = Choices::new(&[]).color();
const BACKGROUND_COLOR_CHOICES: Choices = Choices::new(&[TRANSPARENT]).color();
const TEXT_ALIGN_CHOICES: Choices = Choices::new(TextAlign::KEYWORDS);
const TEXT_DIRECTION_CHOICES: Choices = Choices::new(TextDirection::KEYWORDS);
const FONT_FAMILY_CHOICES: Choices =
    Choices::new(&[SYSTEM, SERIF, SANS_SERIF, CURSIVE, FANTASY, MONOSPACE]).string();
const FONT_STYLE_CHOICES: Choices = Choices::new(FontStyle::KEYWORDS);
const FONT_VARIANT_CHOICES: Choices = Choices::new(FontVariant::KEYWORDS);
const FONT_WEIGHT_CHOICES: Choices = Choices::new(FontWeight::KEYWORDS);
const FONT_SIZE_CHOICES: Choices = Choices::new(&[]).integer();

/// A single (non-shorthand) Pack property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    Display,
    Visibility,
    Direction,
    Alignment,
    Width,
    Height,
    Flex,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Color,
    BackgroundColor,
    TextAlign,
    TextDirection,
    FontFamily,
    FontStyle,
    FontVariant,
    FontWeight,
    FontSize,
}

/// What happens when a property changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Geometry may change; the style is marked dirty.
    Layout,
    /// Appearance changes; the applicator is notified.
    Apply,
    /// Both of the above.
    Both,
    /// Validated and stored; nothing reads it yet.
    Store,
}

/// A row of the property table.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDef {
    pub property: Property,
    pub name: &'static str,
    pub choices: Choices,
    pub effect: Effect,
}

const fn def(property: Property, name: &'static str, choices: Choices, effect: Effect) -> PropertyDef {
    PropertyDef {
        property,
        name,
        choices,
        effect,
    }
}

/// Every Pack property, in declaration order.
pub const PROPERTIES: &[PropertyDef] = &[
    def(Property::Display, "display", DISPLAY_CHOICES, Effect::Store),
    def(Property::Visibility, "visibility", VISIBILITY_CHOICES, Effect::Apply),
    def(Property::Direction, "direction", DIRECTION_CHOICES, Effect::Layout),
    def(Property::Alignment, "alignment", ALIGNMENT_CHOICES, Effect::Layout),
    def(Property::Width, "width", SIZE_CHOICES, Effect::Layout),
    def(Property::Height, "height", SIZE_CHOICES, Effect::Layout),
    def(Property::Flex, "flex", FLEX_CHOICES, Effect::Layout),
    def(Property::PaddingTop, "padding_top", PADDING_CHOICES, Effect::Layout),
    def(Property::PaddingRight, "padding_right", PADDING_CHOICES, Effect::Layout),
    def(Property::PaddingBottom, "padding_bottom", PADDING_CHOICES, Effect::Layout),
    def(Property::PaddingLeft, "padding_left", PADDING_CHOICES, Effect::Layout),
    def(Property::Color, "color", COLOR_CHOICES, Effect::Apply),
    def(Property::BackgroundColor, "background_color", BACKGROUND_COLOR_CHOICES, Effect::Apply),
    def(Property::TextAlign, "text_align", TEXT_ALIGN_CHOICES, Effect::Apply),
    def(Property::TextDirection, "text_direction", TEXT_DIRECTION_CHOICES, Effect::Both),
    def(Property::FontFamily, "font_family", FONT_FAMILY_CHOICES, Effect::Apply),
    def(Property::FontStyle, "font_style", FONT_STYLE_CHOICES, Effect::Apply),
    def(Property::FontVariant, "font_variant", FONT_VARIANT_CHOICES, Effect::Apply),
    def(Property::FontWeight, "font_weight", FONT_WEIGHT_CHOICES, Effect::Apply),
    def(Property::FontSize, "font_size", FONT_SIZE_CHOICES, Effect::Apply),
];

/// The aggregate padding property.
pub const PADDING: &str = "padding";

/// The four padding sides, in shorthand order.
pub const PADDING_SIDES: [Property; 4] = [
    Property::PaddingTop,
    Property::PaddingRight,
    Property::PaddingBottom,
    Property::PaddingLeft,
];

impl Property {
    /// Look up a property by name. Names may use `-` or `_`.
    pub fn from_name(name: &str) -> Option<Property> {
        let name = normalize(name);
        PROPERTIES
            .iter()
            .find(|def| def.name == name)
            .map(|def| def.property)
    }

    pub fn def(&self) -> &'static PropertyDef {
        // The table lists properties in enum order.
        &PROPERTIES[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.def().name
    }

    pub fn choices(&self) -> Choices {
        self.def().choices
    }

    pub fn effect(&self) -> Effect {
        self.def().effect
    }

    /// The value a property reads as before it is assigned, if any.
    pub fn initial(&self) -> Option<StyleValue> {
        let value = match self {
            Property::Display => Display::Pack.as_str().into(),
            Property::Visibility => Visibility::Visible.as_str().into(),
            Property::Direction => Direction::Row.as_str().into(),
            Property::Width | Property::Height => NONE.into(),
            Property::Flex => StyleValue::Number(0.0),
            Property::PaddingTop
            | Property::PaddingRight
            | Property::PaddingBottom
            | Property::PaddingLeft => StyleValue::Int(0),
            Property::TextDirection => TextDirection::Ltr.as_str().into(),
            Property::FontFamily => StyleValue::List(vec![SYSTEM.into()]),
            Property::FontStyle => FontStyle::Normal.as_str().into(),
            Property::FontVariant => FontVariant::Normal.as_str().into(),
            Property::FontWeight => FontWeight::Normal.as_str().into(),
            Property::FontSize => StyleValue::Int(SYSTEM_DEFAULT_FONT_SIZE.into()),
            Property::Alignment
            | Property::Color
            | Property::BackgroundColor
            | Property::TextAlign => return None,
        };
        Some(value)
    }

    /// True for the font properties, which are applied together.
    pub fn is_font(&self) -> bool {
        matches!(
            self,
            Property::FontFamily
                | Property::FontStyle
                | Property::FontVariant
                | Property::FontWeight
                | Property::FontSize
        )
    }
}

/// Canonical (underscore) spelling of a property name.
pub(crate) fn normalize(name: &str) -> String {
    name.replace('-', "_")
}

/// Expand 1 to 4 shorthand values into (top, right, bottom, left).
pub(crate) fn expand_shorthand<T: Copy>(values: &[T]) -> Option<[T; 4]> {
    match *values {
        [all] => Some([all, all, all, all]),
        [vertical, horizontal] => Some([vertical, horizontal, vertical, horizontal]),
        [top, horizontal, bottom] => Some([top, horizontal, bottom, horizontal]),
        [top, right, bottom, left] => Some([top, right, bottom, left]),
        _ => None,
    }
}
