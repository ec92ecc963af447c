use sdl2::pixels::PixelFormatEnum;

use okto_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use okto_core::Pixels;

const SCALE: usize = 10;

/// # Display
/// An SDL2 window that rasterizes the interpreter's 64x32 monochrome pixel
/// grid at a fixed integer scale.
///
/// `render` only gets called when the interpreter reports a changed frame;
/// between frames the window just keeps its last contents.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
}

impl Display {
    /// Opens a window bound to an sdl2 context.
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let video = sdl.video()?;
        let window = video
            .window(
                "okto",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        Ok(Display { canvas })
    }

    /// Expands the pixel grid into an RGB24 texture row by row: each 0/1
    /// cell becomes three identical 0/255 color channels.
    fn pixels_to_texture(pixels: &Pixels) -> Vec<u8> {
        pixels
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|cell| std::iter::repeat(cell).take(3))
            .map(|cell| cell * 255)
            .collect()
    }

    /// Uploads the grid as a streaming texture and presents it.
    pub fn render(&mut self, pixels: &Pixels) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        texture.with_lock(None, |buffer: &mut [u8], _pitch: usize| {
            buffer.copy_from_slice(&Display::pixels_to_texture(pixels));
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_to_texture_triplicates_and_scales() {
        let mut pixels: Pixels = [[0; 64]; 32];
        pixels[0][0..2].copy_from_slice(&[0, 1]);
        pixels[1][0..2].copy_from_slice(&[1, 0]);
        let texture = Display::pixels_to_texture(&pixels);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(texture, expected);
    }
}
