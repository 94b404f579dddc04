//! Drawing a filled grid as a PNG image.

use std::path::Path;

use ab_glyph::{Font, FontRef, PxScale};
use image::{ImageFormat, Rgba, RgbaImage};
use log::debug;

use crate::{letter_grid, Assignment, Error, Puzzle};

/// Width and height of one cell, in pixels.
pub const CELL_SIZE: u32 = 100;

/// Black margin left around the interior of each open cell.
pub const CELL_BORDER: u32 = 2;

const FONT_SIZE: f32 = 80.0;
const FONT: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Draw the grid: blocked cells black, open cells white with their letter
/// centred in black.
///
/// The image is `CELL_SIZE` pixels per cell in each direction.
pub fn draw(puzzle: &Puzzle, assignment: &Assignment) -> Result<RgbaImage, Error> {
    let font = FontRef::try_from_slice(FONT).map_err(Error::Font)?;
    let letters = letter_grid(puzzle, assignment);

    let mut img = RgbaImage::from_pixel(
        puzzle.width() as u32 * CELL_SIZE,
        puzzle.height() as u32 * CELL_SIZE,
        BLACK,
    );

    for (i, row) in letters.iter().enumerate() {
        for (j, letter) in row.iter().enumerate() {
            if !puzzle.is_open(i, j) {
                continue;
            }

            let x0 = j as u32 * CELL_SIZE;
            let y0 = i as u32 * CELL_SIZE;
            for y in y0 + CELL_BORDER..=y0 + CELL_SIZE - CELL_BORDER {
                for x in x0 + CELL_BORDER..=x0 + CELL_SIZE - CELL_BORDER {
                    img.put_pixel(x, y, WHITE);
                }
            }

            if let Some(c) = *letter {
                draw_letter(&mut img, &font, c, x0, y0);
            }
        }
    }

    Ok(img)
}

/// Draw the grid and write it to `path` as a PNG, whatever the extension.
pub fn save<P>(puzzle: &Puzzle, assignment: &Assignment, path: P) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let img = draw(puzzle, assignment)?;

    debug!(
        target: "draw",
        "writing {}x{} image to {}",
        img.width(),
        img.height(),
        path.display()
    );

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })
}

/// Blend one glyph into the cell whose top-left pixel is `(x0, y0)`.
fn draw_letter(img: &mut RgbaImage, font: &FontRef, c: char, x0: u32, y0: u32) {
    let glyph = font.glyph_id(c).with_scale(PxScale::from(FONT_SIZE));
    let outlined = match font.outline_glyph(glyph) {
        Some(outlined) => outlined,
        None => return,
    };

    let bounds = outlined.px_bounds();
    let half = CELL_SIZE as f32 / 2.0;
    let left = x0 as f32 + half - bounds.width() / 2.0;
    let top = y0 as f32 + half - bounds.height() / 2.0;

    let (width, height) = img.dimensions();
    outlined.draw(|x, y, coverage| {
        let px = (left + x as f32) as u32;
        let py = (top + y as f32) as u32;
        if px >= width || py >= height {
            return;
        }

        let shade = (255.0 * (1.0 - coverage.clamp(0.0, 1.0))).round() as u8;
        let pixel = img.get_pixel_mut(px, py);
        for channel in pixel.0[..3].iter_mut() {
            *channel = (*channel).min(shade);
        }
    });
}
