use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;

use crate::error::{Error, Result};

pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Quit,
    Resize(u32, u32),
    /// Left button pressed at a device position.
    PointerDown(i32, i32),
    /// Left button released at a device position.
    PointerUp(i32, i32),
    Screenshot,
    Clear,
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < FRAME_TARGET_TIME as u64 {
            let time_to_wait = (FRAME_TARGET_TIME as u64) - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    // Declared before `_texture_creator` so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    _texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
    frame_width: u32,
}

impl Window {
    /// Opens a resizable `width` x `height` window presenting frames of
    /// `frame_width` x `frame_height` pixels.
    pub fn new(
        title: &str,
        width: u32,
        height: u32,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(Error::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(Error::Sdl)?;
        let timer_subsystem = sdl_context.timer().map_err(Error::Sdl)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| Error::Sdl(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| Error::Sdl(e.to_string()))?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(Error::Sdl)?;

        // SAFETY: texture_creator is heap-allocated, never replaced, and
        // outlives texture by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, frame_width, frame_height)
            .map_err(|e| Error::Sdl(e.to_string()))?;

        log::info!("opened {width}x{height} window for a {frame_width}x{frame_height} frame");

        Ok(Self {
            texture,
            _texture_creator: texture_creator,
            canvas,
            event_pump,
            timer_subsystem,
            width,
            height,
            frame_width,
        })
    }

    /// Drains the SDL event queue.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            let translated = match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => Some(WindowEvent::Quit),
                Event::KeyDown {
                    keycode: Some(Keycode::S),
                    repeat: false,
                    ..
                } => Some(WindowEvent::Screenshot),
                Event::KeyDown {
                    keycode: Some(Keycode::C),
                    repeat: false,
                    ..
                } => Some(WindowEvent::Clear),
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => Some(WindowEvent::Resize(w as u32, h as u32)),
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => Some(WindowEvent::PointerDown(x, y)),
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => Some(WindowEvent::PointerUp(x, y)),
                _ => None,
            };
            if let Some(event) = translated {
                if let WindowEvent::Resize(w, h) = event {
                    self.width = w;
                    self.height = h;
                }
                events.push(event);
            }
        }
        events
    }

    /// Uploads an ARGB8888 frame and scales it into `dest` (device pixels).
    pub fn present(&mut self, buffer: &[u8], dest: (i32, i32, u32, u32)) -> Result<()> {
        self.texture
            .update(None, buffer, (self.frame_width * 4) as usize)
            .map_err(|e| Error::Sdl(e.to_string()))?;

        let (x, y, w, h) = dest;
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(x, y, w, h)))
            .map_err(Error::Sdl)?;
        self.canvas.present();
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
