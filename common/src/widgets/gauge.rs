//! Radial speed gauge: tick marks plus a layered glowing arc.
//!
//! # Angles
//!
//! Angles follow the `embedded-graphics` convention: 0° points right (3
//! o'clock) and positive angles turn clockwise. The gauge spans 240°
//! starting at 150°, so it is symmetric about the top of the dial and leaves
//! a 120° opening at the bottom for the START button.
//!
//! # Tick Marks
//!
//! 40 ticks sit on the canvas edge, one every 6°. As progress sweeps past a
//! tick it disappears: tick `i` is hidden once `i <= floor(progress * 40)`
//! (at progress 0 every tick is shown). Every 5th tick is long.
//!
//! # Arc Layers
//!
//! The arc is drawn as a stack of round-capped strokes sharing one geometry,
//! later layers covering earlier ones:
//!
//! 1. **Glow** - 21 strokes, widest first, each a little narrower and a
//!    little more opaque. Rgb565 has no alpha, so each layer's color is the
//!    background pre-composited with the cumulative coverage of every glow
//!    layer at that width. Drawn opaque, the stack reproduces the blurred
//!    falloff exactly on a flat background.
//! 2. **Edge** - one solid stroke slightly wider than the fill.
//! 3. **Fill** - one stroke with a color gradient along the sweep.
//!
//! # Scaling
//!
//! All widths and lengths are given for an 800 px reference canvas and scaled
//! to the actual canvas side.

use embedded_graphics::geometry::Angle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder};
use heapless::Vec;
use micromath::F32;

use crate::colors::{GREEN_200, GREEN_500, GREEN_GRADIENT_END, GREEN_GRADIENT_START, LIGHT_COLOR, blend_rgb565};
use crate::metrics::clamp_progress;

// =============================================================================
// Gauge Constants
// =============================================================================

/// Total angular extent of the gauge.
pub const SWEEP_DEGREES: f32 = 240.0;

/// Angle of the zero end of the gauge (centered on the top of the dial).
pub const START_ANGLE_DEGREES: f32 = 270.0 - SWEEP_DEGREES / 2.0;

/// Number of tick marks.
pub const TICK_COUNT: u32 = 40;

/// Every Nth tick is drawn long.
pub const MAJOR_TICK_EVERY: u32 = 5;

/// Angle between neighbouring ticks.
pub const TICK_STEP_DEGREES: f32 = SWEEP_DEGREES / TICK_COUNT as f32;

/// Number of glow strokes under the arc.
pub const GLOW_LAYER_COUNT: usize = 21;

/// Total number of arc layers (glow + edge + fill).
pub const ARC_LAYER_COUNT: usize = GLOW_LAYER_COUNT + 2;

/// Opacity of glow layer `i` is `i / GLOW_ALPHA_DIVISOR`.
const GLOW_ALPHA_DIVISOR: f32 = 900.0;

/// Angular size of one gradient band.
const GRADIENT_STEP_DEGREES: f32 = 4.0;

/// Overlap between gradient bands so no seams show between them.
const GRADIENT_OVERLAP_DEGREES: f32 = 0.5;

// Reference-canvas dimensions (px on an 800 px canvas).
const REFERENCE_SIZE: f32 = 800.0;
const REF_TICK_LONG: f32 = 80.0;
const REF_TICK_SHORT: f32 = 30.0;
const REF_TICK_WIDTH: f32 = 8.0;
const REF_ARC_INSET: f32 = 50.0;
const REF_EDGE_WIDTH: f32 = 86.0;
const REF_FILL_WIDTH: f32 = 80.0;
const REF_GLOW_BASE_WIDTH: f32 = 80.0;
const REF_GLOW_STEP: f32 = 20.0;

// =============================================================================
// Pure Gauge Math
// =============================================================================

/// Angular extent of the filled arc for a progress value.
#[inline]
pub fn sweep_angle(progress: f32) -> f32 { SWEEP_DEGREES * clamp_progress(progress) }

/// Angle of tick `index`.
#[inline]
pub fn tick_angle(index: u32) -> f32 { START_ANGLE_DEGREES + index as f32 * TICK_STEP_DEGREES }

/// Whether tick `index` is a long tick.
#[inline]
pub const fn is_major_tick(index: u32) -> bool { index % MAJOR_TICK_EVERY == 0 }

/// Index of the last tick the arc has swept past, or `None` at progress 0.
fn last_hidden_tick(progress: f32) -> Option<u32> {
    let progress = clamp_progress(progress);
    if progress == 0.0 {
        None
    } else {
        Some((progress * TICK_COUNT as f32) as u32)
    }
}

/// Whether tick `index` is still drawn at `progress`.
pub fn is_tick_visible(index: u32, progress: f32) -> bool {
    index < TICK_COUNT && last_hidden_tick(progress).is_none_or(|hidden| index > hidden)
}

/// Number of ticks drawn at `progress`.
pub fn visible_tick_count(progress: f32) -> u32 {
    match last_hidden_tick(progress) {
        None => TICK_COUNT,
        Some(hidden) => (TICK_COUNT - 1).saturating_sub(hidden),
    }
}

/// Point at `radius` from `center` along `degrees`.
fn polar(center: Point, radius: f32, degrees: f32) -> Point {
    let radians = degrees * (core::f32::consts::PI / 180.0);
    let x = center.x as f32 + radius * F32(radians).cos().0;
    let y = center.y as f32 + radius * F32(radians).sin().0;
    Point::new(F32(x).round().0 as i32, F32(y).round().0 as i32)
}

// =============================================================================
// Geometry
// =============================================================================

/// Pixel geometry of a gauge drawn on a square canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeGeometry {
    center: Point,
    side: u32,
    scale: f32,
}

impl GaugeGeometry {
    /// Geometry for a square canvas with the given top-left corner and side.
    pub fn new(top_left: Point, side: u32) -> Self {
        let half = (side / 2) as i32;
        Self {
            center: top_left + Point::new(half, half),
            side,
            scale: side as f32 / REFERENCE_SIZE,
        }
    }

    /// Canvas center.
    #[inline]
    pub const fn center(&self) -> Point { self.center }

    /// Scale a reference length to pixels, never below 1.
    fn scaled(&self, reference: f32) -> u32 {
        let px = F32(reference * self.scale).round().0 as u32;
        px.max(1)
    }

    /// Outer radius of the tick ring (the canvas edge).
    #[inline]
    pub fn tick_radius(&self) -> f32 { self.side as f32 / 2.0 }

    /// Length of tick `index`.
    pub fn tick_length(&self, index: u32) -> u32 {
        if is_major_tick(index) {
            self.scaled(REF_TICK_LONG)
        } else {
            self.scaled(REF_TICK_SHORT)
        }
    }

    /// Stroke width of the tick lines.
    #[inline]
    pub fn tick_width(&self) -> u32 { self.scaled(REF_TICK_WIDTH) }

    /// End points of tick `index`, outer end first.
    pub fn tick_segment(&self, index: u32) -> (Point, Point) {
        let angle = tick_angle(index);
        let outer = self.tick_radius();
        let inner = outer - self.tick_length(index) as f32;
        (polar(self.center, outer, angle), polar(self.center, inner, angle))
    }

    /// Diameter of the arc's center line.
    pub fn arc_diameter(&self) -> u32 { self.side.saturating_sub(2 * self.scaled(REF_ARC_INSET)).max(1) }

    /// Point on the arc's center line at `degrees`.
    pub fn arc_point(&self, degrees: f32) -> Point { polar(self.center, self.arc_diameter() as f32 / 2.0, degrees) }
}

// =============================================================================
// Arc Layers
// =============================================================================

/// How one arc layer is colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerPaint {
    /// Single color.
    Solid(Rgb565),
    /// Color blended from `from` at the gauge's zero end to `to` at its full end.
    Gradient { from: Rgb565, to: Rgb565 },
}

/// One stroke of the arc stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArcLayer {
    /// Stroke width in pixels.
    pub width: u32,
    pub paint: LayerPaint,
}

/// Arc layers in draw order for a gauge on `background`.
pub fn arc_layers(geometry: &GaugeGeometry, background: Rgb565) -> Vec<ArcLayer, ARC_LAYER_COUNT> {
    let mut layers = Vec::new();

    // Fraction of the background still showing through after each glow layer
    let mut transmitted = 1.0f32;
    for i in 0..GLOW_LAYER_COUNT {
        let alpha = i as f32 / GLOW_ALPHA_DIVISOR;
        transmitted *= 1.0 - alpha;
        let width = REF_GLOW_BASE_WIDTH + (GLOW_LAYER_COUNT - 1 - i) as f32 * REF_GLOW_STEP;
        let _ = layers.push(ArcLayer {
            width: geometry.scaled(width),
            paint: LayerPaint::Solid(blend_rgb565(background, GREEN_200, 1.0 - transmitted)),
        });
    }

    let _ = layers.push(ArcLayer {
        width: geometry.scaled(REF_EDGE_WIDTH),
        paint: LayerPaint::Solid(GREEN_500),
    });
    let _ = layers.push(ArcLayer {
        width: geometry.scaled(REF_FILL_WIDTH),
        paint: LayerPaint::Gradient {
            from: GREEN_GRADIENT_START,
            to: GREEN_GRADIENT_END,
        },
    });

    layers
}

/// Gradient color at `offset` degrees into the gauge.
fn gradient_color(from: Rgb565, to: Rgb565, offset: f32) -> Rgb565 { blend_rgb565(from, to, offset / SWEEP_DEGREES) }

// =============================================================================
// Drawing
// =============================================================================

/// Draw the gauge for `progress` (clamped to `[0, 1]`).
///
/// Does not clear the canvas; the caller paints `background` first. The glow
/// colors are composited against `background`.
pub fn draw_gauge<D>(
    display: &mut D,
    geometry: &GaugeGeometry,
    progress: f32,
    background: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let progress = clamp_progress(progress);
    draw_ticks(display, geometry, progress);
    draw_arc(display, geometry, progress, background);
}

fn draw_ticks<D>(
    display: &mut D,
    geometry: &GaugeGeometry,
    progress: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(LIGHT_COLOR, geometry.tick_width());
    for index in (0..TICK_COUNT).filter(|&i| is_tick_visible(i, progress)) {
        let (outer, inner) = geometry.tick_segment(index);
        Line::new(outer, inner).into_styled(style).draw(display).ok();
    }
}

fn draw_arc<D>(
    display: &mut D,
    geometry: &GaugeGeometry,
    progress: f32,
    background: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let sweep = sweep_angle(progress);
    if sweep <= 0.0 {
        return;
    }

    for layer in arc_layers(geometry, background) {
        match layer.paint {
            // Fully transparent glow layers composite to the background itself
            LayerPaint::Solid(color) if color == background => {}
            LayerPaint::Solid(color) => {
                draw_round_arc(display, geometry, START_ANGLE_DEGREES, sweep, layer.width, color);
            }
            LayerPaint::Gradient { from, to } => draw_gradient_arc(display, geometry, sweep, layer.width, from, to),
        }
    }
}

/// Stroke an arc segment and cap both ends with discs.
fn draw_round_arc<D>(
    display: &mut D,
    geometry: &GaugeGeometry,
    start: f32,
    sweep: f32,
    width: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_arc_band(display, geometry, start, sweep, width, color);
    draw_cap(display, geometry, start, width, color);
    draw_cap(display, geometry, start + sweep, width, color);
}

fn draw_arc_band<D>(
    display: &mut D,
    geometry: &GaugeGeometry,
    start: f32,
    sweep: f32,
    width: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(width)
        .build();
    Arc::with_center(
        geometry.center(),
        geometry.arc_diameter(),
        Angle::from_degrees(start),
        Angle::from_degrees(sweep),
    )
    .into_styled(style)
    .draw(display)
    .ok();
}

fn draw_cap<D>(
    display: &mut D,
    geometry: &GaugeGeometry,
    degrees: f32,
    width: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(geometry.arc_point(degrees), width)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Fill stroke drawn as short bands, each colored by its position on the gauge.
fn draw_gradient_arc<D>(
    display: &mut D,
    geometry: &GaugeGeometry,
    sweep: f32,
    width: u32,
    from: Rgb565,
    to: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_cap(display, geometry, START_ANGLE_DEGREES, width, from);

    let mut offset = 0.0f32;
    while offset < sweep {
        let band = (sweep - offset).min(GRADIENT_STEP_DEGREES);
        let color = gradient_color(from, to, offset + band / 2.0);
        let overlap = if offset + band < sweep { GRADIENT_OVERLAP_DEGREES } else { 0.0 };
        draw_arc_band(display, geometry, START_ANGLE_DEGREES + offset, band + overlap, width, color);
        offset += GRADIENT_STEP_DEGREES;
    }

    draw_cap(display, geometry, START_ANGLE_DEGREES + sweep, width, gradient_color(from, to, sweep));
}

// =============================================================================
// Unit Tests
// =============================================================================
