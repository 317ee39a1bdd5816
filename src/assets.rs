//! Sprite loading with procedural fallbacks
//!
//! Every sprite the game draws comes from an image file, but a missing or
//! broken file is not an error: the loader substitutes a filled circle of a
//! fixed colour and size instead. The substitution is an explicit branch on
//! the load result, and the outcome is recorded in [`SpriteOrigin`] so callers
//! (and tests) can see which path was taken.
//!
//! # Example
//!
//! ```rust,ignore
//! let texture_creator = canvas.texture_creator();
//! let mut loader = SdlImageLoader::new(&mut canvas, &texture_creator);
//! let sprites = SpriteBank::load(&mut loader, &config)?;
//! ```

use crate::config::GameConfig;
use crate::error::AssetError;
use crate::surface::SpriteId;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::image::LoadTexture;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use tracing::{debug, info, warn};

pub const PICKLE_GREEN: Color = Color::RGB(100, 200, 100);
pub const GOLD: Color = Color::RGB(255, 215, 0);

/// Placeholder drawn when an image cannot be loaded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackCircle {
    /// Diameter in pixels; the placeholder image is `size` x `size`
    pub size: u32,
    pub color: Color,
}

/// Where a sprite's pixels came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteOrigin {
    File,
    Fallback,
}

#[derive(Debug)]
pub struct LoadedSprite<I> {
    pub image: I,
    pub origin: SpriteOrigin,
}

/// Backend that decodes image files and draws placeholder circles
pub trait ImageLoader {
    type Image;

    fn load(&mut self, path: &str) -> Result<Self::Image, AssetError>;

    /// Builds a transparent image with a filled circle. Failing here means the
    /// renderer itself is broken, so it is reported as a hard error.
    fn circle(&mut self, fallback: &FallbackCircle) -> Result<Self::Image, String>;
}

/// Loads `path`, or draws `fallback` if the file cannot be decoded
pub fn load_or_fallback<L: ImageLoader>(
    loader: &mut L,
    path: &str,
    fallback: &FallbackCircle,
) -> Result<LoadedSprite<L::Image>, String> {
    match loader.load(path) {
        Ok(image) => {
            debug!(path, "loaded sprite");
            Ok(LoadedSprite {
                image,
                origin: SpriteOrigin::File,
            })
        }
        Err(err) => {
            warn!(%err, size = fallback.size, "using placeholder sprite");
            Ok(LoadedSprite {
                image: loader.circle(fallback)?,
                origin: SpriteOrigin::Fallback,
            })
        }
    }
}

/// The three sprites the game draws
pub struct SpriteSet<I> {
    pub main: LoadedSprite<I>,
    pub falling: LoadedSprite<I>,
    pub golden: LoadedSprite<I>,
}

pub type SpriteBank<'a> = SpriteSet<Texture<'a>>;

impl<I> SpriteSet<I> {
    pub fn load<L: ImageLoader<Image = I>>(loader: &mut L, config: &GameConfig) -> Result<Self, String> {
        let small = config.spawning.sprite_size;
        let main = load_or_fallback(
            loader,
            &config.assets.pickle_image,
            &FallbackCircle {
                size: config.widgets.main_sprite_size,
                color: PICKLE_GREEN,
            },
        )?;
        let falling = load_or_fallback(
            loader,
            &config.assets.pickle_image,
            &FallbackCircle {
                size: small,
                color: PICKLE_GREEN,
            },
        )?;
        let golden = load_or_fallback(
            loader,
            &config.assets.golden_image,
            &FallbackCircle { size: small, color: GOLD },
        )?;
        info!(
            main = ?main.origin,
            falling = ?falling.origin,
            golden = ?golden.origin,
            "sprites ready"
        );
        Ok(SpriteSet { main, falling, golden })
    }

    pub fn texture(&self, id: SpriteId) -> &I {
        match id {
            SpriteId::MainPickle => &self.main.image,
            SpriteId::FallingPickle => &self.falling.image,
            SpriteId::GoldenPickle => &self.golden.image,
        }
    }
}

/// SDL2_image loader that renders fallbacks into target textures
pub struct SdlImageLoader<'c, 'a> {
    canvas: &'c mut Canvas<Window>,
    texture_creator: &'a TextureCreator<WindowContext>,
}

impl<'c, 'a> SdlImageLoader<'c, 'a> {
    pub fn new(canvas: &'c mut Canvas<Window>, texture_creator: &'a TextureCreator<WindowContext>) -> Self {
        SdlImageLoader {
            canvas,
            texture_creator,
        }
    }
}

impl<'a> ImageLoader for SdlImageLoader<'_, 'a> {
    type Image = Texture<'a>;

    fn load(&mut self, path: &str) -> Result<Texture<'a>, AssetError> {
        self.texture_creator
            .load_texture(path)
            .map_err(|reason| AssetError {
                path: path.to_string(),
                reason,
            })
    }

    fn circle(&mut self, fallback: &FallbackCircle) -> Result<Texture<'a>, String> {
        let size = fallback.size.max(2);
        let mut texture = self
            .texture_creator
            .create_texture_target(PixelFormatEnum::RGBA8888, size, size)
            .map_err(|e| e.to_string())?;
        texture.set_blend_mode(BlendMode::Blend);

        let radius = (size / 2) as i16;
        let color = fallback.color;
        let mut drawn = Ok(());
        self.canvas
            .with_texture_canvas(&mut texture, |target| {
                target.set_draw_color(Color::RGBA(0, 0, 0, 0));
                target.clear();
                drawn = target.filled_circle(radius, radius, radius, color);
            })
            .map_err(|e| e.to_string())?;
        drawn?;

        Ok(texture)
    }
}
