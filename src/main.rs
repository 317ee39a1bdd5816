use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod assets;
mod buff;
mod config;
mod economy;
mod error;
mod falling;
mod game;
mod gui;
mod input;
mod surface;
mod text;

use assets::{SdlImageLoader, SpriteBank};
use config::GameConfig;
use error::GameError;
use game::{FrameClock, FrameOutcome, Game};
use input::InputEvent;
use surface::SdlSurface;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn run() -> Result<(), GameError> {
    let config = GameConfig::load()?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let (width, height) = (config.window.width, config.window.height);
    let window = video_subsystem
        .window(&config.window.title, width, height)
        .position_centered()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;
    info!(width, height, fps = config.window.fps, "window created");

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;
    canvas
        .set_logical_size(width, height)
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    let texture_creator = canvas.texture_creator();
    let sprites = {
        let mut loader = SdlImageLoader::new(&mut canvas, &texture_creator);
        SpriteBank::load(&mut loader, &config)?
    };
    let mut surface = SdlSurface::new(canvas, sprites);
    let mut event_pump = sdl_context.event_pump()?;

    let mut clock = FrameClock::new(config.window.fps, config.window.max_dt);
    let mut game = Game::new(config, StdRng::from_entropy());

    loop {
        let frame = clock.tick();
        let events: Vec<InputEvent> = event_pump.poll_iter().filter_map(|e| InputEvent::from_sdl(&e)).collect();

        if game.frame(frame.now, frame.dt, events, &mut surface)? == FrameOutcome::Quit {
            break;
        }
    }

    info!(
        balance = game.economy().balance(),
        won = game.has_won(),
        "shutting down"
    );
    Ok(())
}

fn main() -> Result<(), GameError> {
    init_tracing();

    run().inspect_err(|err| error!(%err, "pickle clicker stopped with an error"))
}
