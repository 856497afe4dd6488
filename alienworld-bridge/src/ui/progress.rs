//! The XP progress bar, drawn on a canvas.

use super::{faded, mix, BAR_BORDER, SEGMENT_EDGE, SEGMENT_GLOW};
use crate::helpers::segment_shade;

use alienworld_core::boot::{Segment, BAR_HEIGHT, BAR_WIDTH, SEGMENT_HEIGHT, SEGMENT_TOP};

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme};

#[derive(Debug, Clone)]
pub struct ProgressBar {
    pub segments: Vec<Segment>,
    pub opacity: f32,
}

impl<Message> canvas::Program<Message> for ProgressBar {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, frame.size(), faded(Color::BLACK, self.opacity));

        let rows = SEGMENT_HEIGHT as usize;
        for (x, width) in self.segments.iter().filter_map(Segment::clipped) {
            for row in 0..rows {
                let color = mix(SEGMENT_EDGE, SEGMENT_GLOW, segment_shade(row, rows));
                frame.fill_rectangle(
                    Point::new(x, SEGMENT_TOP + row as f32),
                    Size::new(width, 1.0),
                    faded(color, self.opacity),
                );
            }
        }

        let border = Path::rectangle(
            Point::new(0.5, 0.5),
            Size::new(BAR_WIDTH - 1.0, BAR_HEIGHT - 1.0),
        );
        frame.stroke(
            &border,
            Stroke::default()
                .with_color(faded(BAR_BORDER, self.opacity))
                .with_width(1.0),
        );

        vec![frame.into_geometry()]
    }
}
