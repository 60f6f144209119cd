use clipline::prelude::*;
use clipline::window::{FrameLimiter, Window, WindowEvent};

const INITIAL_WINDOW_WIDTH: u32 = 960;
const INITIAL_WINDOW_HEIGHT: u32 = 540;

fn main() -> Result<(), clipline::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::from_env()?;
    log::info!("clip window {}", config.clip_window);

    let mut window = Window::new(
        &config.title,
        INITIAL_WINDOW_WIDTH,
        INITIAL_WINDOW_HEIGHT,
        config.world_width,
        config.world_height,
    )?;
    let mut viewport = Viewport::fit(
        window.width(),
        window.height(),
        config.world_width,
        config.world_height,
    );
    let mut frame = FrameBuffer::new(config.world_width, config.world_height);
    let mut scene = Scene::new(config.clip_window, config.world_width, config.world_height);
    let mut frame_limiter = FrameLimiter::new(&window);

    // World position where the current drag started.
    let mut drag_source: Option<Point> = None;

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(w, h) => {
                    viewport = Viewport::fit(w, h, config.world_width, config.world_height);
                    log::debug!("viewport {}x{}", viewport.width(), viewport.height());
                }
                WindowEvent::PointerDown(x, y) => {
                    if viewport.contains(x, y, window.height()) {
                        drag_source = Some(viewport.to_world(x, y, window.height()));
                    } else {
                        log::warn!("ignoring press at ({x}, {y}) outside the viewport");
                    }
                }
                WindowEvent::PointerUp(x, y) => {
                    let Some(source) = drag_source.take() else {
                        continue;
                    };
                    if !viewport.contains(x, y, window.height()) {
                        log::warn!("ignoring release at ({x}, {y}) outside the viewport");
                        continue;
                    }
                    let destination = viewport.to_world(x, y, window.height());
                    match scene.add_segment(Segment::new(source, destination)) {
                        ClipResult::Accepted {
                            source,
                            destination,
                        } => log::info!("visible part {source} -> {destination}"),
                        ClipResult::Rejected => log::info!("segment is entirely outside"),
                    }
                }
                WindowEvent::Screenshot => match frame.save_png(&config.screenshot_path) {
                    Ok(()) => log::info!("saved {}", config.screenshot_path.display()),
                    Err(e) => log::warn!("screenshot failed: {e}"),
                },
                WindowEvent::Clear => scene.clear(),
            }
        }

        frame_limiter.wait_and_get_delta(&window);

        scene.render(&mut frame);
        window.present(frame.as_bytes(), viewport.dest_rect(window.height()))?;
    }

    Ok(())
}
