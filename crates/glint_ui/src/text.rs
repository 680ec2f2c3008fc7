//! Contract with the font subsystem.
//!
//! Shaping and glyph atlases belong to the host. The engine only needs a
//! measured block size and the caret stops between characters, which is
//! what a [`TextLayouter`] returns.

use glint_shared::Vec2i;

/// Result of laying out one string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextLayout {
    /// Size of the laid-out block in physical pixels.
    pub size: Vec2i,
    /// Font size the block was laid out at.
    pub font_size: i32,
    /// Baseline position in front of every character, plus one past the end.
    pub carets: Vec<Vec2i>,
}

impl TextLayout {
    /// Baseline position of the caret in front of character `index`.
    ///
    /// Indices past the end clamp to the end of the text.
    #[must_use]
    pub fn caret_position(&self, index: usize) -> Vec2i {
        self.carets
            .get(index)
            .or_else(|| self.carets.last())
            .copied()
            .unwrap_or(Vec2i::new(0, self.font_size))
    }

    /// Caret index closest to `point` (block-local coordinates): nearest line
    /// first, then nearest stop on that line.
    #[must_use]
    pub fn pick(&self, point: Vec2i) -> usize {
        let half = self.font_size / 2;
        self.carets
            .iter()
            .enumerate()
            .min_by_key(|(_, caret)| {
                let line_center = caret.y - half;
                ((line_center - point.y).abs(), (caret.x - point.x).abs())
            })
            .map_or(0, |(index, _)| index)
    }
}

/// Font subsystem as seen by the engine.
pub trait TextLayouter {
    /// Lays out `text` at `font_size`.
    ///
    /// A non-zero `bounds.x` is the wrap width, a non-zero `bounds.y` the
    /// block height; zero components take the natural size. `editable`
    /// blocks belong to edit fields and may be re-laid-out every frame.
    fn layout(&mut self, text: &str, font_size: i32, bounds: Vec2i, editable: bool)
        -> TextLayout;
}

/// Fixed-advance layouter for headless hosts and tests.
///
/// Every glyph advances by half the font size, lines are one font size tall.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceLayouter;

impl MonospaceLayouter {
    /// Horizontal advance of one glyph.
    #[must_use]
    pub const fn advance(font_size: i32) -> i32 {
        if font_size / 2 > 0 {
            font_size / 2
        } else {
            1
        }
    }
}

impl TextLayouter for MonospaceLayouter {
    fn layout(
        &mut self,
        text: &str,
        font_size: i32,
        bounds: Vec2i,
        _editable: bool,
    ) -> TextLayout {
        let advance = Self::advance(font_size);
        let wrap = (bounds.x > 0).then_some(bounds.x);
        let mut carets = Vec::with_capacity(text.len() + 1);
        let mut line = 1;
        let mut x = 0;
        let mut widest = 0;

        for c in text.chars() {
            if c == '\n' {
                carets.push(Vec2i::new(x, line * font_size));
                widest = widest.max(x);
                line += 1;
                x = 0;
                continue;
            }
            if wrap.is_some_and(|width| x > 0 && x + advance > width) {
                widest = widest.max(x);
                line += 1;
                x = 0;
            }
            carets.push(Vec2i::new(x, line * font_size));
            x += advance;
        }
        carets.push(Vec2i::new(x, line * font_size));
        widest = widest.max(x);

        let natural = Vec2i::new(widest, line * font_size);
        let size = Vec2i::new(
            if bounds.x > 0 { bounds.x } else { natural.x },
            if bounds.y > 0 { bounds.y } else { natural.y },
        );
        TextLayout {
            size,
            font_size,
            carets,
        }
    }
}
