//! Built-in metrics for the standard PDF fonts `Helvetica` and `Helvetica-Bold`.
//!
//! Widths come from the Adobe core-font AFM files, in 1/1000 em. The tables
//! cover ASCII 0x20..=0x7E; index = (char as usize) - 32. Anything else falls
//! back to an average width, which over-estimates slightly for most Latin-1
//! letters and keeps wrapped lines inside the limit.

use crate::measure::{MeasureError, TextMeasurer};
use edumind_types::LengthUnit;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

const FALLBACK_WIDTH: u16 = 556;

/// Greedy word wrapper backed by the static Helvetica width tables.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StandardFontMetrics {
    unit: LengthUnit,
}

impl StandardFontMetrics {
    pub fn new(unit: LengthUnit) -> Self {
        Self { unit }
    }

    fn char_width(&self, c: char, font_size: f32, bold: bool) -> f32 {
        let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
        let code = c as usize;
        let em = if (32..=126).contains(&code) {
            table[code - 32]
        } else {
            FALLBACK_WIDTH
        };
        self.unit.from_points(em as f32 / 1000.0 * font_size)
    }

    fn str_width(&self, s: &str, font_size: f32, bold: bool) -> f32 {
        s.chars().map(|c| self.char_width(c, font_size, bold)).sum()
    }

    /// Splits a word wider than the line into chunks, each at least one character.
    fn break_word(&self, word: &str, max_width: f32, font_size: f32, bold: bool) -> Vec<(String, f32)> {
        let mut chunks = Vec::new();
        let mut chunk = String::new();
        let mut width = 0.0;
        for c in word.chars() {
            let w = self.char_width(c, font_size, bold);
            if !chunk.is_empty() && width + w > max_width {
                chunks.push((std::mem::take(&mut chunk), width));
                width = 0.0;
            }
            chunk.push(c);
            width += w;
        }
        if !chunk.is_empty() {
            chunks.push((chunk, width));
        }
        chunks
    }
}

fn check_font_size(font_size: f32) -> Result<(), MeasureError> {
    if font_size.is_finite() && font_size > 0.0 {
        Ok(())
    } else {
        Err(MeasureError::InvalidFontSize(font_size))
    }
}

impl TextMeasurer for StandardFontMetrics {
    fn wrap(
        &self,
        text: &str,
        max_width: f32,
        font_size: f32,
        bold: bool,
    ) -> Result<Vec<String>, MeasureError> {
        if !(max_width.is_finite() && max_width > 0.0) {
            return Err(MeasureError::InvalidWidth(max_width));
        }
        check_font_size(font_size)?;

        let space = self.char_width(' ', font_size, bold);
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let mut current = String::new();
            let mut current_width = 0.0;

            for word in paragraph.split_whitespace() {
                let word_width = self.str_width(word, font_size, bold);
                if !current.is_empty() {
                    if current_width + space + word_width <= max_width {
                        current.push(' ');
                        current.push_str(word);
                        current_width += space + word_width;
                        continue;
                    }
                    lines.push(std::mem::take(&mut current));
                    current_width = 0.0;
                }

                if word_width <= max_width {
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    let mut chunks = self.break_word(word, max_width, font_size, bold);
                    if let Some((last, last_width)) = chunks.pop() {
                        lines.extend(chunks.into_iter().map(|(chunk, _)| chunk));
                        current = last;
                        current_width = last_width;
                    }
                }
            }
            lines.push(current);
        }
        Ok(lines)
    }

    fn text_width(&self, text: &str, font_size: f32, bold: bool) -> Result<f32, MeasureError> {
        check_font_size(font_size)?;
        Ok(self.str_width(text, font_size, bold))
    }
}
