use super::faded;

use alienworld_core::logon::HILLS;

use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::{mouse, Color, Point, Rectangle, Renderer, Theme};

/// Translucent hill silhouette stretched across the logon background.
#[derive(Debug, Clone, Copy)]
pub struct Hills {
    pub opacity: f32,
}

impl<Message> canvas::Program<Message> for Hills {
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
        let (w, h) = (bounds.width / 100.0, bounds.height / 100.0);

        let outline = Path::new(|b| {
            for (i, &(x, y)) in HILLS.iter().enumerate() {
                let p = Point::new(x * w, y * h);
                if i == 0 {
                    b.move_to(p);
                } else {
                    b.line_to(p);
                }
            }
            b.close();
        });
        frame.fill(&outline, faded(Color::WHITE, 0.1 * self.opacity));

        vec![frame.into_geometry()]
    }
}
