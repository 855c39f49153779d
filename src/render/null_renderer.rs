use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer that validates and records frames instead of drawing.
///
/// Hosts without a drawing surface (tests, servers exporting frame JSON) can
/// inspect the last accepted frame through [`NullRenderer::last_frame`].
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_area_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    pub fn take_last_frame(&mut self) -> Option<RenderFrame> {
        self.last_frame.take()
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_area_count = frame.areas.len();
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
