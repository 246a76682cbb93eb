use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::keys::is_supported;
use engine::input::KeyState;
use engine::renderer::{QuadBatch, Renderer};
use game::Game;

const WINDOW_TITLE: &str = "Tilewalk";
const CAMERA_ZOOM: f32 = 3.0;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Tilewalk...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    renderer.camera_mut().set_zoom(CAMERA_ZOOM);

    let keys = KeyState::shared();
    let mut game = Game::new(keys.clone());
    let mut game_loop = GameLoop::new();
    let mut batch = QuadBatch::new();

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                renderer.resize(physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(focused),
                ..
            } => {
                // The session sleeps while the window is in the background.
                if focused {
                    game_loop.resume();
                    game.resume();
                } else {
                    game_loop.pause();
                    game.pause();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    match event.state {
                        // Keys outside the bindable set never reach the registry.
                        ElementState::Pressed if !event.repeat && is_supported(code) => {
                            keys.borrow_mut().press(code)
                        }
                        ElementState::Released => keys.borrow_mut().release(code),
                        _ => {}
                    }
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let steps = game_loop.begin_frame();
                for _ in 0..steps {
                    game.update(game_loop.fixed_timestep());
                }
                if game_loop.frame_count() % 300 == 0 {
                    info!("FPS: {:.0}", game_loop.fps());
                }

                batch.clear();
                game.draw(&mut batch);
                renderer.camera_mut().set_position(game.camera_target());

                if let Err(err) = renderer.render(&batch) {
                    error!("Render error: {}", err);
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
