//! Icon design records.
//!
//! A design is an immutable bundle of colours and proportional constants.
//! Every length is a [`Ratio`] of the canvas size so the same record renders
//! consistently at any export size.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Colour;

/// Material primary purple used by the marketplace design.
pub const MARKETPLACE_PURPLE: Colour = Colour::rgb(103, 80, 164);

/// Material yellow used for the location pin.
pub const PIN_YELLOW: Colour = Colour::rgb(0xFD, 0xD8, 0x35);

/// Top colour of the arrow design gradient.
pub const GRADIENT_CYAN: Colour = Colour::rgb(91, 192, 222);

/// Bottom colour of the arrow design gradient.
pub const GRADIENT_GREEN: Colour = Colour::rgb(129, 199, 132);

/// A fraction of the canvas size, floored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    pub num: u32,
    pub den: u32,
}

impl Ratio {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// `1 / den` of the canvas.
    pub const fn per(den: u32) -> Self {
        Self::new(1, den)
    }

    /// Apply to a canvas size.
    pub fn of(self, size: u32) -> i32 {
        if self.den == 0 {
            return 0;
        }
        (size as u64 * self.num as u64 / self.den as u64) as i32
    }
}

/// A vertical two-colour gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: Colour,
    pub end: Colour,
}

/// What fills the canvas behind the artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Solid(Colour),
    Gradient(Gradient),
}

/// Shopping bag with two handles and a location pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BagStyle {
    /// Bag edge length.
    pub bag: Ratio,
    /// Handle outline width.
    pub handle_stroke: Ratio,
    /// Pin diameter.
    pub pin: Ratio,
    pub body_colour: Colour,
    pub pin_colour: Colour,
}

/// Where the arrow's drop shadow sits relative to the arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowLayering {
    /// Shadow blended first, arrow painted on top.
    #[default]
    Beneath,
    /// Arrow first, shadow pixels written over it unblended.
    Legacy,
}

/// Upward arrow with an offset drop shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowStyle {
    /// Overall arrow length.
    pub arrow: Ratio,
    /// Shadow offset on both axes.
    pub shadow_offset: Ratio,
    pub shadow_alpha: u8,
    pub colour: Colour,
    pub layering: ShadowLayering,
}

/// The foreground artwork of a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artwork {
    ShoppingBag(BagStyle),
    Arrow(ArrowStyle),
}

impl Artwork {
    fn with_layering(self, layering: ShadowLayering) -> Self {
        match self {
            Artwork::Arrow(style) => Artwork::Arrow(ArrowStyle { layering, ..style }),
            bag => bag,
        }
    }
}

/// A complete icon design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignSpec {
    pub name: &'static str,
    pub background: Background,
    /// Artwork on flat launcher icons.
    pub flat: Artwork,
    /// Artwork on adaptive foreground layers, confined to the safe area.
    pub adaptive: Artwork,
    /// Corner radius of the flat icon mask.
    pub corner: Ratio,
}

impl DesignSpec {
    /// Shopping bag and pin on solid purple.
    pub const fn marketplace() -> Self {
        let bag = BagStyle {
            bag: Ratio::per(3),
            handle_stroke: Ratio::per(20),
            pin: Ratio::per(8),
            body_colour: Colour::WHITE,
            pin_colour: PIN_YELLOW,
        };

        Self {
            name: "marketplace",
            background: Background::Solid(MARKETPLACE_PURPLE),
            flat: Artwork::ShoppingBag(bag),
            // 72px safe area on 108: bag 36, pin 12, stroke 108/25
            adaptive: Artwork::ShoppingBag(BagStyle {
                handle_stroke: Ratio::per(25),
                pin: Ratio::per(9),
                ..bag
            }),
            corner: Ratio::per(6),
        }
    }

    /// White upward arrow on a cyan to green gradient.
    pub const fn arrow() -> Self {
        Self {
            name: "arrow",
            background: Background::Gradient(Gradient {
                start: GRADIENT_CYAN,
                end: GRADIENT_GREEN,
            }),
            flat: Artwork::Arrow(ArrowStyle {
                arrow: Ratio::new(2, 5),
                shadow_offset: Ratio::per(40),
                shadow_alpha: 50,
                colour: Colour::WHITE,
                layering: ShadowLayering::Beneath,
            }),
            // 72px safe area on 108: arrow 36
            adaptive: Artwork::Arrow(ArrowStyle {
                arrow: Ratio::per(3),
                shadow_offset: Ratio::per(50),
                shadow_alpha: 30,
                colour: Colour::WHITE,
                layering: ShadowLayering::Beneath,
            }),
            corner: Ratio::per(6),
        }
    }

    /// The same design with a different shadow layering.
    pub fn with_shadow_layering(self, layering: ShadowLayering) -> Self {
        Self {
            flat: self.flat.with_layering(layering),
            adaptive: self.adaptive.with_layering(layering),
            ..self
        }
    }
}

/// Built-in design selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Design {
    Marketplace,
    Arrow,
}

impl Design {
    pub const ALL: [Design; 2] = [Design::Marketplace, Design::Arrow];

    pub fn spec(self) -> DesignSpec {
        match self {
            Design::Marketplace => DesignSpec::marketplace(),
            Design::Arrow => DesignSpec::arrow(),
        }
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

/// Which image of a design is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Complete launcher icon with rounded corners.
    Flat,
    /// Adaptive background layer, unmasked.
    Background,
    /// Adaptive foreground layer on transparency.
    Foreground,
}

/// Flat icon or adaptive layer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Flat,
    Adaptive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_floors() {
        assert_eq!(Ratio::per(3).of(48), 16);
        assert_eq!(Ratio::per(20).of(48), 2);
        assert_eq!(Ratio::per(40).of(39), 0);
        // floor(48 / 2.5)
        assert_eq!(Ratio::new(2, 5).of(48), 19);
        assert_eq!(Ratio::new(2, 5).of(144), 57);
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(Ratio::new(1, 0).of(100), 0);
    }

    #[test]
    fn test_adaptive_bag_matches_safe_area() {
        let spec = DesignSpec::marketplace();
        let Artwork::ShoppingBag(bag) = spec.adaptive else {
            panic!("expected bag artwork");
        };
        assert_eq!(bag.bag.of(108), 36);
        assert_eq!(bag.pin.of(108), 12);
        assert_eq!(bag.handle_stroke.of(108), 4);
    }

    #[test]
    fn test_adaptive_arrow_matches_safe_area() {
        let Artwork::Arrow(arrow) = DesignSpec::arrow().adaptive else {
            panic!("expected arrow artwork");
        };
        assert_eq!(arrow.arrow.of(108), 36);
        assert_eq!(arrow.shadow_offset.of(108), 2);
    }

    #[test]
    fn test_with_shadow_layering() {
        let spec = DesignSpec::arrow().with_shadow_layering(ShadowLayering::Legacy);
        let Artwork::Arrow(flat) = spec.flat else {
            panic!("expected arrow artwork");
        };
        assert_eq!(flat.layering, ShadowLayering::Legacy);

        // Bags have no shadow and are left untouched
        let bag = DesignSpec::marketplace();
        assert_eq!(bag.with_shadow_layering(ShadowLayering::Legacy), bag);
    }
}
