//! CPU rasterizer writing into a plain `Vec<u32>` scratch buffer.
//!
//! Rectangles clip against the frame, lines are integer Bresenham, text
//! comes from a built-in 5x7 uppercase bitmap font.

use crate::renderer::{LineCmd, RectCmd, Renderer, Rgba, TextCmd};

/// Dot columns per glyph; rows are 7, one byte each.
const FONT_W: i32 = 5;

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(0x00_00_00_00);
    }

    fn draw_rect(&mut self, cmd: &RectCmd) {
        let x0 = cmd.x.max(0);
        let y0 = cmd.y.max(0);
        let x1 = (cmd.x + cmd.w).min(self.width as i32);
        let y1 = (cmd.y + cmd.h).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let px = cmd.color.to_pixel();
        for y in y0..y1 {
            let row = y as usize * self.width;
            self.scratch[row + x0 as usize..row + x1 as usize].fill(px);
        }
    }

    fn draw_line(&mut self, cmd: &LineCmd) {
        let (mut x0, mut y0) = (cmd.x0, cmd.y0);
        let (x1, y1) = (cmd.x1, cmd.y1);
        let px = cmd.color.to_pixel();
        let thick = cmd.width.max(1);

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot_square(x0, y0, thick, px);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn draw_text(&mut self, cmd: &TextCmd) {
        let px = cmd.px.max(1);
        let pixel = cmd.color.to_pixel();
        let mut cx = cmd.x;
        for ch in cmd.text.chars() {
            if let Some(rows) = glyph(ch.to_ascii_uppercase()) {
                for (gy, bits) in rows.iter().enumerate() {
                    for gx in 0..FONT_W {
                        if bits & (0b1_0000 >> gx) != 0 {
                            self.plot_square(cx + gx * px, cmd.y + gy as i32 * px, px, pixel);
                        }
                    }
                }
            }
            cx += (FONT_W + 1) * px;
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

impl Software {
    /// Clipped `side` x `side` block with its top-left corner at (x, y).
    fn plot_square(&mut self, x: i32, y: i32, side: i32, pixel: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + side).min(self.width as i32);
        let y1 = (y + side).min(self.height as i32);
        for yy in y0..y1 {
            let row = yy as usize * self.width;
            for xx in x0..x1 {
                self.scratch[row + xx as usize] = pixel;
            }
        }
    }

    #[cfg(test)]
    fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.scratch[y * self.width + x]
    }
}

/// 5x7 dot matrix for the HUD charset. Each row is five bits, MSB left.
/// Lowercase input is folded to uppercase by the caller.
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        _ => return None,
    };
    Some(rows)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
