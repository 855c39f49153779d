use std::io::Write;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::PathCommand;
use crate::error::{ChartError, ChartResult};
use crate::render::{AreaPrimitive, Color, Paint, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub areas_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` draw function).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders either to an owned offscreen image surface through
/// `Renderer::render` or in place on an external context through
/// `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Option<Color>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: None,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Background painted before each frame; `None` leaves the target as is.
    #[must_use]
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Option<Color>) -> ChartResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png<W: Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        if let Some(clear_color) = self.clear_color {
            apply_color(context, clear_color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
        }

        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        context.translate(frame.origin_x, frame.origin_y);
        let result = draw_primitives(context, frame);
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;

        self.last_stats = result?;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_primitives(context: &Context, frame: &RenderFrame) -> ChartResult<CairoRenderStats> {
    let mut stats = CairoRenderStats::default();

    for area in &frame.areas {
        draw_area(context, area)?;
        stats.areas_drawn += 1;
    }

    for line in &frame.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for text in &frame.texts {
        let layout = pangocairo::functions::create_layout(context);
        let mut font_description = FontDescription::new();
        font_description.set_family(&text.font_family);
        font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

        apply_color(context, text.color);
        context.move_to(x, text.y - baseline);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(stats)
}

fn draw_area(context: &Context, area: &AreaPrimitive) -> ChartResult<()> {
    context.new_path();
    for command in &area.path {
        match *command {
            PathCommand::MoveTo { x, y } => context.move_to(x, y),
            PathCommand::LineTo { x, y } => context.line_to(x, y),
            PathCommand::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => context.curve_to(c1x, c1y, c2x, c2y, x, y),
            PathCommand::Close => context.close_path(),
        }
    }

    apply_paint(context, &area.fill)?;
    match &area.stroke {
        Some(stroke) => {
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill area", err))?;
            apply_paint(context, stroke)?;
            context.set_line_width(area.stroke_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke area", err))
        }
        None => context
            .fill()
            .map_err(|err| map_backend_error("failed to fill area", err)),
    }
}

fn apply_paint(context: &Context, paint: &Paint) -> ChartResult<()> {
    match paint {
        Paint::Solid(color) => {
            apply_color(context, *color);
            Ok(())
        }
        Paint::LinearGradient(gradient) => {
            let pattern =
                cairo::LinearGradient::new(gradient.x1, gradient.y1, gradient.x2, gradient.y2);
            for stop in &gradient.stops {
                pattern.add_color_stop_rgba(
                    stop.offset,
                    stop.color.red,
                    stop.color.green,
                    stop.color.blue,
                    stop.color.alpha,
                );
            }
            context
                .set_source(&pattern)
                .map_err(|err| map_backend_error("failed to set gradient source", err))
        }
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
