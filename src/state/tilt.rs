use crate::config::{TILT_DIVISOR, TILT_PERSPECTIVE_PX, TILT_SCALE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tilt {
    Neutral,
    Tilted { rotate_x: f64, rotate_y: f64 },
}

impl Tilt {
    /// Tilt for a card given the pointer position in viewport coordinates.
    pub fn at(pointer_x: f64, pointer_y: f64, rect: CardRect) -> Tilt {
        let x = pointer_x - rect.left;
        let y = pointer_y - rect.top;
        if x < 0.0 || x > rect.width || y < 0.0 || y > rect.height {
            return Tilt::Neutral;
        }
        let cx = rect.width / 2.0;
        let cy = rect.height / 2.0;
        Tilt::Tilted { rotate_x: (y - cy) / TILT_DIVISOR, rotate_y: (cx - x) / TILT_DIVISOR }
    }

    pub fn css(&self) -> String {
        match *self {
            Tilt::Neutral => format!(
                "perspective({TILT_PERSPECTIVE_PX}px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)"
            ),
            Tilt::Tilted { rotate_x, rotate_y } => format!(
                "perspective({TILT_PERSPECTIVE_PX}px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) scale3d({s}, {s}, {s})",
                s = TILT_SCALE
            ),
        }
    }
}
