// File: crates/lineplot-viewer/src/lib.rs
// Summary: Shows a finalized figure in a window; re-renders at the window size on resize.

use std::num::NonZeroU32;

use lineplot_core::{Figure, PlotError, RenderOptions};
use thiserror::Error;
use tracing::debug;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::{Window, WindowBuilder};

const MIN_WIDTH: f64 = 320.0;
const MIN_HEIGHT: f64 = 240.0;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to open window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("softbuffer: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
    #[error(transparent)]
    Render(#[from] PlotError),
}

/// Block until the window showing `figure` is closed (close button, Esc or Q).
pub fn show(figure: &Figure) -> Result<(), ViewerError> {
    show_with(figure, &figure.options)
}

pub fn show_with(figure: &Figure, opts: &RenderOptions) -> Result<(), ViewerError> {
    let mut event_loop = EventLoop::new();
    let title = if figure.title.is_empty() { "lineplot" } else { figure.title.as_str() };
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(LogicalSize::new(opts.width as f64, opts.height as f64))
        .with_min_inner_size(LogicalSize::new(MIN_WIDTH, MIN_HEIGHT))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }?;
    let mut frame = Frame::default();
    let mut failure = None;

    event_loop.run_return(|event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Escape | VirtualKeyCode::Q),
                            ..
                        },
                    ..
                } => *cf = ControlFlow::Exit,
                WindowEvent::Resized(_) => window.request_redraw(),
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = redraw(&window, &mut surface, &mut frame, figure, opts) {
                    failure = Some(e);
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Last rendered frame in softbuffer's 0RGB layout.
#[derive(Default)]
struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

fn redraw(
    window: &Window,
    surface: &mut softbuffer::Surface,
    frame: &mut Frame,
    figure: &Figure,
    opts: &RenderOptions,
) -> Result<(), ViewerError> {
    let size = window.inner_size();
    let (w, h) = (size.width.max(1), size.height.max(1));
    if (frame.width, frame.height) != (w, h) {
        let mut sized = opts.clone();
        sized.width = w as i32;
        sized.height = h as i32;
        let (rgba, _, _, _) = figure.render_to_rgba8(&sized)?;
        *frame = Frame { width: w, height: h, pixels: rgba_to_0rgb(&rgba) };
        debug!(width = w, height = h, "re-rendered figure for window");
    }

    surface.resize(
        NonZeroU32::new(w).unwrap_or(NonZeroU32::MIN),
        NonZeroU32::new(h).unwrap_or(NonZeroU32::MIN),
    )?;
    let mut buffer = surface.buffer_mut()?;
    let n = buffer.len().min(frame.pixels.len());
    buffer[..n].copy_from_slice(&frame.pixels[..n]);
    buffer.present()?;
    Ok(())
}

/// Pack RGBA bytes into softbuffer's `0x00RRGGBB` words.
fn rgba_to_0rgb(rgba: &[u8]) -> Vec<u32> {
    rgba.chunks_exact(4)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_pixels_ignoring_alpha() {
        let px = [255, 0, 0, 255, 18, 18, 20, 128];
        assert_eq!(rgba_to_0rgb(&px), vec![0x00ff_0000, 0x0012_1214]);
    }
}
