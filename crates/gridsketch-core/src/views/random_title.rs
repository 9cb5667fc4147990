use egui::{Color32, Pos2, Vec2};
use rand::Rng;

use super::text_galley;

const RANDOM_POOL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Hold time before the reveal cursor starts advancing.
const SCRAMBLE_HOLD: f32 = 2.0;

/// Phase of the type-on reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeStatus {
    Random,
    ToFix,
    Fixed,
}

/// One line of text revealed with the series' type-on effect: every
/// glyph scrambles for two seconds, then a cursor sweeps left to right
/// fixing the real characters, then the line goes quiet.
#[derive(Debug)]
pub struct RandomTitleOneLine {
    text: String,
    font_size: f32,
    color: Color32,
    cursor_step: f32,
    pub alpha: f32,

    started: bool,
    status: TypeStatus,
    hold: f32,
    cursor: f32,
    disp: String,
}

impl RandomTitleOneLine {
    pub fn new(text: impl Into<String>, font_size: f32, color: Color32, cursor_step: f32) -> Self {
        let text = text.into();
        Self {
            disp: text.clone(),
            text,
            font_size,
            color,
            cursor_step,
            alpha: 1.0,
            started: false,
            status: TypeStatus::Random,
            hold: SCRAMBLE_HOLD,
            cursor: 0.0,
        }
    }

    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn status(&self) -> TypeStatus {
        self.status
    }

    pub fn is_fixed(&self) -> bool {
        self.status == TypeStatus::Fixed
    }

    pub fn update(&mut self, dt: f32) {
        if !self.started || self.status == TypeStatus::Fixed {
            return;
        }

        match self.status {
            TypeStatus::Random => {
                self.hold -= dt;
                if self.hold <= 0.0 {
                    self.status = TypeStatus::ToFix;
                    self.cursor = 0.0;
                }
            }
            TypeStatus::ToFix => {
                // one cursor step per frame, as the original ticker did
                self.cursor += self.cursor_step;
                if self.cursor.floor() as usize >= self.text.chars().count() {
                    self.status = TypeStatus::Fixed;
                }
            }
            TypeStatus::Fixed => {}
        }

        self.disp = match self.status {
            TypeStatus::Fixed => self.text.clone(),
            TypeStatus::Random => Self::random_string(&self.text, 0.0),
            TypeStatus::ToFix => Self::random_string(&self.text, self.cursor),
        };
    }

    pub fn measure(&self, painter: &egui::Painter) -> Vec2 {
        text_galley(
            painter,
            self.disp.clone(),
            self.font_size,
            self.color,
            self.alpha,
        )
        .size()
    }

    pub fn paint(&self, painter: &egui::Painter, pos: Pos2) {
        let galley = text_galley(
            painter,
            self.disp.clone(),
            self.font_size,
            self.color,
            self.alpha,
        );
        painter.galley(pos, galley, self.color);
    }

    /// The visible string with everything at or past `cursor` scrambled.
    fn random_string(value: &str, cursor: f32) -> String {
        value
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if (i as f32) < cursor.ceil() {
                    c
                } else {
                    Self::random_char()
                }
            })
            .collect()
    }

    fn random_char() -> char {
        let i = rand::thread_rng().gen_range(0..RANDOM_POOL.len());
        RANDOM_POOL[i] as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(title: &mut RandomTitleOneLine, frames: usize, dt: f32) {
        for _ in 0..frames {
            title.update(dt);
        }
    }

    #[test]
    fn does_not_animate_until_started() {
        let mut title = RandomTitleOneLine::new("ABC", 14.0, Color32::BLACK, 0.25);
        advance(&mut title, 100, 1.0 / 60.0);
        assert_eq!(title.status(), TypeStatus::Random);
    }

    #[test]
    fn scrambles_then_fixes_left_to_right() {
        let mut title = RandomTitleOneLine::new("ABCDEF", 14.0, Color32::BLACK, 0.25);
        title.start();
        // hold phase: still scrambling after one second
        advance(&mut title, 60, 1.0 / 60.0);
        assert_eq!(title.status(), TypeStatus::Random);
        // past the hold, the cursor starts fixing characters
        advance(&mut title, 61, 1.0 / 60.0);
        assert_eq!(title.status(), TypeStatus::ToFix);
        // 6 chars at 0.25 chars per frame needs 24 frames
        advance(&mut title, 30, 1.0 / 60.0);
        assert!(title.is_fixed());
        assert_eq!(title.disp, "ABCDEF");
    }

    #[test]
    fn random_string_keeps_prefix_before_cursor() {
        let s = RandomTitleOneLine::random_string("HELLO", 3.0);
        assert_eq!(&s[..3], "HEL");
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn full_cursor_returns_original() {
        let s = RandomTitleOneLine::random_string("HELLO", 5.0);
        assert_eq!(s, "HELLO");
    }
}
