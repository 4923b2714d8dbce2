//! Cardsmith composes invitation-card previews.
//!
//! A card is described by a [`CardSpec`] (theme, sprite density, background layers, border edge
//! and text). [`render_card`] turns it into a [`CardRender`]: seeded sprite placements, the
//! resolved background layer stack and the edge overlay, ready to be emitted as an HTML document.
//!
//! - Sprite placement is driven by an explicit [`XorShift32`] so identical seeds give identical
//!   layouts.
//! - Background layers follow a [`BackgroundMode`] visibility table.
//! - Border edges are built as [`BezPath`]s from a style/variant table and scaled to the canvas.
//! - Degradations (unknown names, missing assets, out-of-range values) are reported as warnings in
//!   [`WithWarnings`] instead of failing the render.
#![forbid(unsafe_code)]

mod assets;
mod background;
mod catalog;
mod demo;
mod edges;
mod foundation;
mod random;
mod scene;
mod sprites;
mod theme;

pub use kurbo::{Affine, BezPath, Point};

pub use crate::foundation::core::{Canvas, ColorHex};
pub use crate::foundation::error::{CardError, CardResult, WithWarnings};

pub use crate::random::xorshift::{DEFAULT_SEED, RngState, XorShift32};

pub use crate::theme::model::{FALLBACK_PALETTE, Theme, ThemeKey};

pub use crate::catalog::elements::{
    BackgroundDef, Category, DecorationDef, backgrounds, categorize, decoration_categories,
    decorations, decorations_in, find_background, find_decoration, search_decorations,
};

pub use crate::assets::store::{
    AssetSource, FsAssetSource, MemoryAssetSource, PreparedSvg, background_path, decoration_path,
    parse_svg,
};

pub use crate::sprites::library::{SpriteDef, SpriteLibrary};
pub use crate::sprites::placement::{
    AnimationMode, EVEN_BAND_OFFSET, MIN_SCALE_PERCENT, ODD_BAND_OFFSET, PLACEMENT_HEIGHT,
    PLACEMENT_WIDTH, SpriteInstance, generate_placements, place_decorations, scatter_decorations,
};

pub use crate::background::compositor::{
    BackgroundMode, BackgroundState, ImageLayer, ImageSpec, LayerStack, TextureLayer, TextureSpec,
    compute_layers,
};
pub use crate::background::texture::{MIN_TEXTURE_SCALE, TextureKind, texture_css};

pub use crate::edges::layer::EdgeSpec;
pub use crate::edges::path::{
    build_edge_frame, build_edge_frame_with, build_edge_path, build_edge_path_with,
    build_side_paths_with, edge_run_with, side_transform,
};
pub use crate::edges::style::{EdgeStyle, EdgeVariant, Side, resolve_edge};
pub use crate::edges::table::{TORN_JITTER, TORN_SEGMENTS, static_run};

pub use crate::scene::model::{
    CardSpec, CardText, DecorationPlacement, MAX_DENSITY, SpriteSettings,
};
pub use crate::scene::render::{CardRender, SymbolDef, render_card, render_card_with};

pub use crate::demo::auto_random::{AUTO_RANDOM_PERIOD, AutoRandom, RandomElements, RandomTexture};
pub use crate::demo::combination::{Combination, GradientTint, builtin_combinations};
pub use crate::demo::slideshow::{SLIDE_DURATION, Slideshow};
pub use crate::demo::timer::IntervalTimer;
