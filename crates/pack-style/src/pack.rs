//! The Pack style declaration.

use std::fmt;

use indexmap::IndexSet;
use pack_core::{
    Alignment, BackgroundColor, Color, Direction, Display, Font, FontStyle, FontVariant, FontWeight,
    StyleError, TextAlign, TextDirection, Visibility, SYSTEM_DEFAULT_FONT_SIZE,
};
use pack_core::font::SYSTEM;
use tracing::{debug, trace};

use crate::applicator::{ApplyTarget, Applicator};
use crate::property::{
    expand_shorthand, normalize, Effect, Property, NONE, PADDING, PADDING_SIDES, TRANSPARENT,
};
use crate::value::StyleValue;

/// A box's style: how it lays out its children and how it looks.
///
/// Every property starts at its initial value. Assigning a property marks it
/// explicit; [`reset`](Pack::reset) returns it to the initial value. Geometry
/// properties mark the style dirty, appearance properties are pushed to the
/// [`Applicator`] if one is attached.
pub struct Pack {
    display: Display,
    visibility: Visibility,
    direction: Direction,
    alignment: Option<Alignment>,
    width: Option<i32>,
    height: Option<i32>,
    flex: f64,
    /// top, right, bottom, left
    padding: [i32; 4],
    color: Option<Color>,
    background_color: Option<BackgroundColor>,
    text_align: Option<TextAlign>,
    text_direction: TextDirection,
    font_family: Vec<String>,
    font_style: FontStyle,
    font_variant: FontVariant,
    font_weight: FontWeight,
    font_size: i32,

    explicit: IndexSet<Property>,
    dirty: bool,
    applicator: Option<Box<dyn Applicator>>,
    batch: Option<IndexSet<ApplyTarget>>,
}

impl Pack {
    /// Create a style with every property at its initial value.
    ///
    /// A new style is dirty: it has never been laid out.
    pub fn new() -> Self {
        Self {
            display: Display::Pack,
            visibility: Visibility::Visible,
            direction: Direction::Row,
            alignment: None,
            width: None,
            height: None,
            flex: 0.0,
            padding: [0; 4],
            color: None,
            background_color: None,
            text_align: None,
            text_direction: TextDirection::Ltr,
            font_family: vec![SYSTEM.to_string()],
            font_style: FontStyle::Normal,
            font_variant: FontVariant::Normal,
            font_weight: FontWeight::Normal,
            font_size: SYSTEM_DEFAULT_FONT_SIZE,
            explicit: IndexSet::new(),
            dirty: true,
            applicator: None,
            batch: None,
        }
    }

    // ----------------------------------------------------------------
    // Builders
    // ----------------------------------------------------------------

    pub fn with_display(mut self, display: Display) -> Self {
        self.set_display(display);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.set_visibility(visibility);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.set_direction(direction);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.set_alignment(alignment);
        self
    }

    /// # Panics
    ///
    /// Panics if `width` is negative.
    pub fn with_width(mut self, width: i32) -> Self {
        built(self.set_width(Some(width)));
        self
    }

    /// # Panics
    ///
    /// Panics if `height` is negative.
    pub fn with_height(mut self, height: i32) -> Self {
        built(self.set_height(Some(height)));
        self
    }

    /// # Panics
    ///
    /// Panics if `flex` is negative or not finite.
    pub fn with_flex(mut self, flex: f64) -> Self {
        built(self.set_flex(flex));
        self
    }

    /// Set padding from 1 to 4 values, CSS style.
    ///
    /// # Panics
    ///
    /// Panics on an empty or over-long list, or a negative value.
    pub fn with_padding(mut self, padding: &[i32]) -> Self {
        built(self.set_padding(padding));
        self
    }

    /// # Panics
    ///
    /// Panics if `padding` is negative.
    pub fn with_padding_top(mut self, padding: i32) -> Self {
        built(self.set_padding_top(padding));
        self
    }

    /// # Panics
    ///
    /// Panics if `padding` is negative.
    pub fn with_padding_right(mut self, padding: i32) -> Self {
        built(self.set_padding_right(padding));
        self
    }

    /// # Panics
    ///
    /// Panics if `padding` is negative.
    pub fn with_padding_bottom(mut self, padding: i32) -> Self {
        built(self.set_padding_bottom(padding));
        self
    }

    /// # Panics
    ///
    /// Panics if `padding` is negative.
    pub fn with_padding_left(mut self, padding: i32) -> Self {
        built(self.set_padding_left(padding));
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    pub fn with_background_color(mut self, color: impl Into<BackgroundColor>) -> Self {
        self.set_background_color(color.into());
        self
    }

    pub fn with_text_align(mut self, text_align: TextAlign) -> Self {
        self.set_text_align(text_align);
        self
    }

    pub fn with_text_direction(mut self, text_direction: TextDirection) -> Self {
        self.set_text_direction(text_direction);
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.set_font_family(vec![family.into()]);
        self
    }

    pub fn with_font_size(mut self, size: i32) -> Self {
        self.set_font_size(size);
        self
    }

    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.set_font_style(style);
        self
    }

    pub fn with_font_variant(mut self, variant: FontVariant) -> Self {
        self.set_font_variant(variant);
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.set_font_weight(weight);
        self
    }

    // ----------------------------------------------------------------
    // Typed access
    // ----------------------------------------------------------------

    pub fn display(&self) -> Display {
        self.display
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cross-axis alignment, if one was assigned.
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    /// Explicit width, or `None` to size from content.
    pub fn width(&self) -> Option<i32> {
        self.width
    }

    /// Explicit height, or `None` to size from content.
    pub fn height(&self) -> Option<i32> {
        self.height
    }

    pub fn flex(&self) -> f64 {
        self.flex
    }

    /// Padding as (top, right, bottom, left).
    pub fn padding(&self) -> (i32, i32, i32, i32) {
        let [top, right, bottom, left] = self.padding;
        (top, right, bottom, left)
    }

    pub fn padding_top(&self) -> i32 {
        self.padding[0]
    }

    pub fn padding_right(&self) -> i32 {
        self.padding[1]
    }

    pub fn padding_bottom(&self) -> i32 {
        self.padding[2]
    }

    pub fn padding_left(&self) -> i32 {
        self.padding[3]
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn background_color(&self) -> Option<BackgroundColor> {
        self.background_color
    }

    /// Text alignment, if one was assigned.
    pub fn text_align(&self) -> Option<TextAlign> {
        self.text_align
    }

    /// Text alignment with the direction-dependent default filled in.
    pub fn resolved_text_align(&self) -> TextAlign {
        self.text_align.unwrap_or(match self.text_direction {
            TextDirection::Rtl => TextAlign::Right,
            TextDirection::Ltr => TextAlign::Left,
        })
    }

    pub fn text_direction(&self) -> TextDirection {
        self.text_direction
    }

    pub fn font_family(&self) -> &[String] {
        &self.font_family
    }

    pub fn font_size(&self) -> i32 {
        self.font_size
    }

    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    pub fn font_variant(&self) -> FontVariant {
        self.font_variant
    }

    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// The font described by the five font properties.
    pub fn font(&self) -> Font {
        Font {
            family: self.font_family.clone(),
            size: self.font_size,
            style: self.font_style,
            variant: self.font_variant,
            weight: self.font_weight,
        }
    }

    pub fn set_display(&mut self, display: Display) {
        self.display = display;
        self.touch(Property::Display);
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
        self.touch(Property::Visibility);
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.touch(Property::Direction);
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = Some(alignment);
        self.touch(Property::Alignment);
    }

    pub fn set_width(&mut self, width: Option<i32>) -> Result<(), StyleError> {
        self.assign(Property::Width, &size_value(width))
    }

    pub fn set_height(&mut self, height: Option<i32>) -> Result<(), StyleError> {
        self.assign(Property::Height, &size_value(height))
    }

    pub fn set_flex(&mut self, flex: f64) -> Result<(), StyleError> {
        self.assign(Property::Flex, &StyleValue::Number(flex))
    }

    /// Set padding from 1 to 4 values, CSS style.
    pub fn set_padding(&mut self, padding: &[i32]) -> Result<(), StyleError> {
        let values = padding.iter().copied().map(StyleValue::from).collect();
        self.set_padding_value(&StyleValue::List(values))
    }

    pub fn set_padding_top(&mut self, padding: i32) -> Result<(), StyleError> {
        self.assign(Property::PaddingTop, &padding.into())
    }

    pub fn set_padding_right(&mut self, padding: i32) -> Result<(), StyleError> {
        self.assign(Property::PaddingRight, &padding.into())
    }

    pub fn set_padding_bottom(&mut self, padding: i32) -> Result<(), StyleError> {
        self.assign(Property::PaddingBottom, &padding.into())
    }

    pub fn set_padding_left(&mut self, padding: i32) -> Result<(), StyleError> {
        self.assign(Property::PaddingLeft, &padding.into())
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
        self.touch(Property::Color);
    }

    pub fn set_background_color(&mut self, color: BackgroundColor) {
        self.background_color = Some(color);
        self.touch(Property::BackgroundColor);
    }

    pub fn set_text_align(&mut self, text_align: TextAlign) {
        self.text_align = Some(text_align);
        self.touch(Property::TextAlign);
    }

    pub fn set_text_direction(&mut self, text_direction: TextDirection) {
        self.text_direction = text_direction;
        self.touch(Property::TextDirection);
    }

    /// Set the font families in fallback order. An empty list is ignored.
    pub fn set_font_family(&mut self, family: Vec<String>) {
        if family.is_empty() {
            return;
        }
        self.font_family = family;
        self.touch(Property::FontFamily);
    }

    pub fn set_font_size(&mut self, size: i32) {
        self.font_size = size;
        self.touch(Property::FontSize);
    }

    pub fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
        self.touch(Property::FontStyle);
    }

    pub fn set_font_variant(&mut self, variant: FontVariant) {
        self.font_variant = variant;
        self.touch(Property::FontVariant);
    }

    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_weight = weight;
        self.touch(Property::FontWeight);
    }

    // ----------------------------------------------------------------
    // Access by name
    // ----------------------------------------------------------------

    /// Read a property by name. Unassigned properties with no initial value
    /// read as `None`.
    pub fn get(&self, name: &str) -> Result<Option<StyleValue>, StyleError> {
        if normalize(name) == PADDING {
            let sides = self.padding.iter().map(|&side| side.into()).collect();
            return Ok(Some(StyleValue::List(sides)));
        }
        let property = lookup(name)?;
        Ok(self.read(property))
    }

    /// Validate and assign a property by name.
    pub fn set(&mut self, name: &str, value: impl Into<StyleValue>) -> Result<(), StyleError> {
        let value = value.into();
        if normalize(name) == PADDING {
            return self.set_padding_value(&value);
        }
        let property = lookup(name)?;
        self.assign(property, &value)
    }

    /// Return a property to its initial value and forget it was assigned.
    pub fn reset(&mut self, name: &str) -> Result<(), StyleError> {
        if normalize(name) == PADDING {
            for side in PADDING_SIDES {
                self.reset_property(side);
            }
            return Ok(());
        }
        let property = lookup(name)?;
        self.reset_property(property);
        Ok(())
    }

    /// Assign several properties, notifying the applicator once per target.
    ///
    /// Stops at the first invalid assignment; earlier assignments stay.
    pub fn update<K, V>(&mut self, properties: impl IntoIterator<Item = (K, V)>) -> Result<(), StyleError>
    where
        K: AsRef<str>,
        V: Into<StyleValue>,
    {
        let outermost = self.batch.is_none();
        if outermost {
            self.batch = Some(IndexSet::new());
        }

        let result = properties
            .into_iter()
            .try_for_each(|(name, value)| self.set(name.as_ref(), value));

        if outermost {
            if let Some(targets) = self.batch.take() {
                for target in targets {
                    self.dispatch(target);
                }
            }
        }
        result
    }

    /// True if the property was explicitly assigned.
    pub fn contains(&self, name: &str) -> bool {
        if normalize(name) == PADDING {
            return PADDING_SIDES.iter().any(|side| self.explicit.contains(side));
        }
        Property::from_name(name).map_or(false, |property| self.explicit.contains(&property))
    }

    /// Explicitly assigned properties and their values, in assignment order.
    pub fn items(&self) -> Vec<(&'static str, StyleValue)> {
        self.explicit
            .iter()
            .filter_map(|property| Some((property.name(), self.read(*property)?)))
            .collect()
    }

    // ----------------------------------------------------------------
    // Dirty tracking and applicator
    // ----------------------------------------------------------------

    /// True if a geometry property changed since the last layout.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Flag a geometry change that did not come from a property, such as a
    /// new intrinsic size or a changed child list.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Attach an applicator and push every appearance property to it.
    pub fn set_applicator(&mut self, applicator: impl Applicator + 'static) {
        self.applicator = Some(Box::new(applicator));
        for target in ApplyTarget::ALL {
            self.dispatch(target);
        }
    }

    pub fn take_applicator(&mut self) -> Option<Box<dyn Applicator>> {
        self.applicator.take()
    }

    pub fn has_applicator(&self) -> bool {
        self.applicator.is_some()
    }

    // ----------------------------------------------------------------
    // Internals
    // ----------------------------------------------------------------

    fn assign(&mut self, property: Property, value: &StyleValue) -> Result<(), StyleError> {
        let stored = validate(property, value).and_then(|normalized| self.store(property, normalized));
        if stored.is_none() {
            debug!(property = property.name(), value = %value, "rejected style value");
            return Err(invalid(property.name(), property.choices().to_string(), value));
        }
        self.touch(property);
        Ok(())
    }

    fn set_padding_value(&mut self, value: &StyleValue) -> Result<(), StyleError> {
        let values = match value {
            StyleValue::List(items) => items.as_slice(),
            single => std::slice::from_ref(single),
        };
        if !(1..=4).contains(&values.len()) {
            debug!(count = values.len(), "rejected padding shorthand");
            return Err(StyleError::InvalidShorthand {
                property: PADDING.to_string(),
                count: values.len(),
            });
        }

        let choices = Property::PaddingTop.choices();
        let mut sides = Vec::with_capacity(values.len());
        for item in values {
            let side = choices
                .validate(item)
                .as_ref()
                .and_then(StyleValue::as_int)
                .and_then(|side| i32::try_from(side).ok());
            match side {
                Some(side) => sides.push(side),
                None => {
                    debug!(value = %item, "rejected padding value");
                    return Err(invalid(PADDING, choices.to_string(), item));
                }
            }
        }

        if let Some(expanded) = expand_shorthand(sides.as_slice()) {
            for (index, side) in PADDING_SIDES.into_iter().enumerate() {
                self.padding[index] = expanded[index];
                self.touch(side);
            }
        }
        Ok(())
    }

    /// Write a validated value into its field. `None` if the value has the
    /// wrong shape for the property.
    fn store(&mut self, property: Property, value: StyleValue) -> Option<()> {
        match property {
            Property::Display => self.display = value.as_str()?.parse().ok()?,
            Property::Visibility => self.visibility = value.as_str()?.parse().ok()?,
            Property::Direction => self.direction = value.as_str()?.parse().ok()?,
            Property::Alignment => self.alignment = Some(value.as_str()?.parse().ok()?),
            Property::Width => self.width = size_from(&value)?,
            Property::Height => self.height = size_from(&value)?,
            Property::Flex => self.flex = value.as_number()?,
            Property::PaddingTop => self.padding[0] = int_from(&value)?,
            Property::PaddingRight => self.padding[1] = int_from(&value)?,
            Property::PaddingBottom => self.padding[2] = int_from(&value)?,
            Property::PaddingLeft => self.padding[3] = int_from(&value)?,
            Property::Color => match value {
                StyleValue::Color(color) => self.color = Some(color),
                _ => return None,
            },
            Property::BackgroundColor => {
                self.background_color = Some(match value {
                    StyleValue::Color(color) => BackgroundColor::Color(color),
                    StyleValue::Str(s) if s == TRANSPARENT => BackgroundColor::Transparent,
                    _ => return None,
                })
            }
            Property::TextAlign => self.text_align = Some(value.as_str()?.parse().ok()?),
            Property::TextDirection => self.text_direction = value.as_str()?.parse().ok()?,
            Property::FontFamily => match value {
                StyleValue::List(items) => {
                    self.font_family = items
                        .iter()
                        .map(|item| item.as_str().map(str::to_string))
                        .collect::<Option<Vec<_>>>()?
                }
                _ => return None,
            },
            Property::FontStyle => self.font_style = value.as_str()?.parse().ok()?,
            Property::FontVariant => self.font_variant = value.as_str()?.parse().ok()?,
            Property::FontWeight => self.font_weight = value.as_str()?.parse().ok()?,
            Property::FontSize => self.font_size = int_from(&value)?,
        }
        Some(())
    }

    fn read(&self, property: Property) -> Option<StyleValue> {
        let value = match property {
            Property::Display => self.display.as_str().into(),
            Property::Visibility => self.visibility.as_str().into(),
            Property::Direction => self.direction.as_str().into(),
            Property::Alignment => self.alignment?.as_str().into(),
            Property::Width => size_value(self.width),
            Property::Height => size_value(self.height),
            Property::Flex => StyleValue::Number(self.flex),
            Property::PaddingTop => self.padding[0].into(),
            Property::PaddingRight => self.padding[1].into(),
            Property::PaddingBottom => self.padding[2].into(),
            Property::PaddingLeft => self.padding[3].into(),
            Property::Color => StyleValue::Color(self.color?),
            Property::BackgroundColor => match self.background_color? {
                BackgroundColor::Transparent => TRANSPARENT.into(),
                BackgroundColor::Color(color) => StyleValue::Color(color),
            },
            Property::TextAlign => self.text_align?.as_str().into(),
            Property::TextDirection => self.text_direction.as_str().into(),
            Property::FontFamily => {
                StyleValue::List(self.font_family.iter().map(|f| f.as_str().into()).collect())
            }
            Property::FontStyle => self.font_style.as_str().into(),
            Property::FontVariant => self.font_variant.as_str().into(),
            Property::FontWeight => self.font_weight.as_str().into(),
            Property::FontSize => self.font_size.into(),
        };
        Some(value)
    }

    fn reset_property(&mut self, property: Property) {
        if !self.explicit.shift_remove(&property) {
            return;
        }
        match property {
            Property::Display => self.display = Display::Pack,
            Property::Visibility => self.visibility = Visibility::Visible,
            Property::Direction => self.direction = Direction::Row,
            Property::Alignment => self.alignment = None,
            Property::Width => self.width = None,
            Property::Height => self.height = None,
            Property::Flex => self.flex = 0.0,
            Property::PaddingTop => self.padding[0] = 0,
            Property::PaddingRight => self.padding[1] = 0,
            Property::PaddingBottom => self.padding[2] = 0,
            Property::PaddingLeft => self.padding[3] = 0,
            Property::Color => self.color = None,
            Property::BackgroundColor => self.background_color = None,
            Property::TextAlign => self.text_align = None,
            Property::TextDirection => self.text_direction = TextDirection::Ltr,
            Property::FontFamily => self.font_family = vec![SYSTEM.to_string()],
            Property::FontStyle => self.font_style = FontStyle::Normal,
            Property::FontVariant => self.font_variant = FontVariant::Normal,
            Property::FontWeight => self.font_weight = FontWeight::Normal,
            Property::FontSize => self.font_size = SYSTEM_DEFAULT_FONT_SIZE,
        }
        self.changed(property);
    }

    /// Record an assignment and propagate its effect.
    fn touch(&mut self, property: Property) {
        self.explicit.insert(property);
        self.changed(property);
    }

    fn changed(&mut self, property: Property) {
        let effect = property.effect();
        if matches!(effect, Effect::Layout | Effect::Both) {
            self.dirty = true;
        }
        if matches!(effect, Effect::Apply | Effect::Both) {
            if let Some(target) = apply_target(property) {
                self.apply(target);
            }
        }
    }

    fn apply(&mut self, target: ApplyTarget) {
        if self.applicator.is_none() {
            return;
        }
        match self.batch.as_mut() {
            Some(batch) => {
                batch.insert(target);
            }
            None => self.dispatch(target),
        }
    }

    fn dispatch(&mut self, target: ApplyTarget) {
        let Some(mut applicator) = self.applicator.take() else {
            return;
        };
        trace!(?target, "applying style");
        match target {
            ApplyTarget::TextAlignment => applicator.set_text_alignment(self.resolved_text_align()),
            ApplyTarget::Color => applicator.set_color(self.color),
            ApplyTarget::BackgroundColor => applicator.set_background_color(self.background_color),
            ApplyTarget::Hidden => applicator.set_hidden(self.visibility == Visibility::Hidden),
            ApplyTarget::Font => applicator.set_font(&self.font()),
        }
        self.applicator = Some(applicator);
    }
}

fn lookup(name: &str) -> Result<Property, StyleError> {
    Property::from_name(name).ok_or_else(|| StyleError::UnknownProperty {
        name: normalize(name),
    })
}

fn validate(property: Property, value: &StyleValue) -> Option<StyleValue> {
    let choices = property.choices();
    match (property, value) {
        (Property::FontFamily, StyleValue::List(items)) if !items.is_empty() => items
            .iter()
            .map(|item| choices.validate(item))
            .collect::<Option<Vec<_>>>()
            .map(StyleValue::List),
        (Property::FontFamily, single) => choices
            .validate(single)
            .map(|family| StyleValue::List(vec![family])),
        _ => choices.validate(value),
    }
}

fn apply_target(property: Property) -> Option<ApplyTarget> {
    match property {
        Property::TextAlign | Property::TextDirection => Some(ApplyTarget::TextAlignment),
        Property::Color => Some(ApplyTarget::Color),
        Property::BackgroundColor => Some(ApplyTarget::BackgroundColor),
        Property::Visibility => Some(ApplyTarget::Hidden),
        property if property.is_font() => Some(ApplyTarget::Font),
        _ => None,
    }
}

fn invalid(property: &str, choices: String, value: &StyleValue) -> StyleError {
    StyleError::InvalidValue {
        property: property.to_string(),
        value: value.quoted(),
        choices,
    }
}

fn size_value(size: Option<i32>) -> StyleValue {
    size.map_or_else(|| NONE.into(), StyleValue::from)
}

fn size_from(value: &StyleValue) -> Option<Option<i32>> {
    match value {
        StyleValue::Str(s) if s == NONE => Some(None),
        other => int_from(other).map(Some),
    }
}

fn int_from(value: &StyleValue) -> Option<i32> {
    i32::try_from(value.as_int()?).ok()
}

fn built(result: Result<(), StyleError>) {
    if let Err(err) = result {
        panic!("{err}");
    }
}

impl Default for Pack {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Pack {
    /// Copies the declarations. The applicator stays with `self`.
    fn clone(&self) -> Self {
        Self {
            display: self.display,
            visibility: self.visibility,
            direction: self.direction,
            alignment: self.alignment,
            width: self.width,
            height: self.height,
            flex: self.flex,
            padding: self.padding,
            color: self.color,
            background_color: self.background_color,
            text_align: self.text_align,
            text_direction: self.text_direction,
            font_family: self.font_family.clone(),
            font_style: self.font_style,
            font_variant: self.font_variant,
            font_weight: self.font_weight,
            font_size: self.font_size,
            explicit: self.explicit.clone(),
            dirty: self.dirty,
            applicator: None,
            batch: None,
        }
    }
}

impl fmt::Debug for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pack")
            .field("direction", &self.direction)
            .field("alignment", &self.alignment)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("flex", &self.flex)
            .field("padding", &self.padding)
            .field("text_direction", &self.text_direction)
            .field("display", &self.display)
            .field("visibility", &self.visibility)
            .field("dirty", &self.dirty)
            .field("applicator", &self.applicator.is_some())
            .finish_non_exhaustive()
    }
}

/// Renders the explicit declarations as `name: value; ...`, sorted by name.
impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items = self.items();
        items.sort_by(|a, b| a.0.cmp(b.0));
        for (i, (name, value)) in items.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", name.replace('_', "-"), value)?;
        }
        Ok(())
    }
}
