//! Icon composition.
//!
//! Builds one image of a design at a given pixel size. Composition is pure:
//! the same design, layer and size always produce the same pixels.

use crate::error::Result;
use crate::types::{
    ArrowStyle, Artwork, BBox, Background, BagStyle, Colour, DesignSpec, Layer, Point,
    ShadowLayering, ShapeSpec,
};

use super::{round_corners, Blend, Canvas};

/// Compose one layer of a design at `size x size` pixels.
pub fn compose(design: &DesignSpec, layer: Layer, size: u32) -> Result<Canvas> {
    match layer {
        Layer::Flat => {
            let background = render_background(&design.background, size)?;
            let mut canvas = round_corners(&background, design.corner.of(size))?;
            draw_artwork(&mut canvas, &design.flat)?;
            Ok(canvas)
        }
        Layer::Background => render_background(&design.background, size),
        Layer::Foreground => {
            let mut canvas = Canvas::new(size)?;
            draw_artwork(&mut canvas, &design.adaptive)?;
            Ok(canvas)
        }
    }
}

/// Fill a whole canvas with a background.
pub fn render_background(background: &Background, size: u32) -> Result<Canvas> {
    match background {
        Background::Solid(colour) => Canvas::filled(size, *colour),
        Background::Gradient(gradient) => gradient.render(size),
    }
}

/// Paint artwork centred on the canvas.
pub fn draw_artwork(canvas: &mut Canvas, artwork: &Artwork) -> Result<()> {
    let size = canvas.size();
    match artwork {
        Artwork::ShoppingBag(style) => canvas.draw_all(&bag_shapes(style, size), Blend::Over),
        Artwork::Arrow(style) => draw_arrow(canvas, style),
    }
}

/// Bag body, two handle rings and the location pin, in paint order.
pub fn bag_shapes(style: &BagStyle, size: u32) -> Vec<ShapeSpec> {
    let center = (size / 2) as i32;
    let bag = style.bag.of(size);
    let bag_x = center - bag / 2;
    let bag_y = center - bag / 4;

    let body = ShapeSpec::rounded_rect(
        BBox::new(bag_x, bag_y + bag / 4, bag_x + bag, bag_y + bag),
        bag / 8,
        style.body_colour,
    );

    let handle_w = bag / 6;
    let handle_h = bag / 3;
    let stroke = style.handle_stroke.of(size).max(1) as u32;
    let handle = |anchor: i32| {
        ShapeSpec::stroked_ellipse(
            BBox::new(
                anchor - handle_w / 2,
                bag_y,
                anchor + handle_w / 2,
                bag_y + handle_h,
            ),
            style.body_colour,
            stroke,
        )
    };

    let pin = style.pin.of(size);
    let pin_x = center + bag / 3;
    let pin_y = center - bag / 4;

    let pin_head = ShapeSpec::filled_ellipse(
        BBox::new(
            pin_x - pin / 2,
            pin_y - pin / 2,
            pin_x + pin / 2,
            pin_y + pin / 2,
        ),
        style.pin_colour,
    );
    let pin_point = ShapeSpec::polygon(
        vec![
            Point::new(pin_x, pin_y + pin / 2),
            Point::new(pin_x - pin / 4, pin_y),
            Point::new(pin_x + pin / 4, pin_y),
        ],
        style.pin_colour,
    );

    vec![
        body,
        handle(bag_x + bag / 4),
        handle(bag_x + 3 * bag / 4),
        pin_head,
        pin_point,
    ]
}

/// Arrow shaft and head, unshadowed.
pub fn arrow_shapes(style: &ArrowStyle, size: u32) -> Vec<ShapeSpec> {
    let center = (size / 2) as i32;
    let arrow = style.arrow.of(size);

    let shaft_w = arrow / 4;
    // floor(arrow / 1.5)
    let shaft_h = arrow * 2 / 3;
    let shaft_x1 = center - shaft_w / 2;
    let shaft_y1 = center + arrow / 6;
    let shaft = ShapeSpec::rounded_rect(
        BBox::new(shaft_x1, shaft_y1, center + shaft_w / 2, shaft_y1 + shaft_h),
        shaft_w / 4,
        style.colour,
    );

    let head = arrow / 2;
    let head_y = center - arrow / 4;
    let head = ShapeSpec::polygon(
        vec![
            Point::new(center, head_y - head / 2),
            Point::new(center - head / 2, head_y + head / 4),
            Point::new(center + head / 2, head_y + head / 4),
        ],
        style.colour,
    );

    vec![shaft, head]
}

fn draw_arrow(canvas: &mut Canvas, style: &ArrowStyle) -> Result<()> {
    let size = canvas.size();
    let arrow = arrow_shapes(style, size);

    let offset = style.shadow_offset.of(size);
    if offset <= 0 {
        return canvas.draw_all(&arrow, Blend::Over);
    }

    let shadow_colour = Colour::BLACK.with_alpha(style.shadow_alpha);
    let shadow: Vec<ShapeSpec> = arrow
        .iter()
        .map(|shape| shape.translate(offset, offset).recolour(shadow_colour))
        .collect();

    match style.layering {
        ShadowLayering::Beneath => {
            canvas.draw_all(&shadow, Blend::Over)?;
            canvas.draw_all(&arrow, Blend::Over)
        }
        ShadowLayering::Legacy => {
            canvas.draw_all(&arrow, Blend::Over)?;
            canvas.draw_all(&shadow, Blend::Replace)
        }
    }
}
