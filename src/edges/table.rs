//! Outer-edge runs per (style, variant), drawn over `0..100` along the edge.
//!
//! The perpendicular axis is in canvas units and points into the card.

use crate::edges::style::{EdgeStyle, EdgeVariant};

/// Number of jittered segments in a torn edge.
pub const TORN_SEGMENTS: usize = 20;
/// Torn joints are offset by at most this much either way.
pub const TORN_JITTER: f64 = 10.0;

const STRAIGHT: &str = "M0,0 L100,0";

/// Fixed path data for a static style; `None` for `none` and `torn`.
pub fn static_run(style: EdgeStyle, variant: EdgeVariant) -> Option<&'static str> {
    use EdgeVariant::*;
    let d = match style {
        EdgeStyle::None | EdgeStyle::Torn => return None,
        EdgeStyle::Border => STRAIGHT,
        EdgeStyle::Scalloped => match variant {
            Default => "M0,0 Q25,15 50,0 Q75,15 100,0",
            Rough => "M0,0 Q20,18 40,2 Q60,20 80,0 Q90,12 100,0",
            Smooth => "M0,0 Q30,12 60,0 Q80,15 100,0",
            Sharp => "M0,0 L25,20 L50,0 L75,20 L100,0",
            Soft => "M0,0 Q25,10 50,0 Q75,10 100,0",
        },
        EdgeStyle::Zigzag => match variant {
            Default => "M0,0 L25,15 L50,0 L75,15 L100,0",
            Rough => "M0,0 L20,18 L40,2 L60,20 L80,0 L100,18",
            Smooth => "M0,0 Q25,15 50,0 Q75,15 100,0",
            Sharp => "M0,0 L25,20 L50,0 L75,20 L100,0",
            Soft => "M0,0 Q25,12 50,0 Q75,12 100,0",
        },
        EdgeStyle::Wave => match variant {
            Default => "M0,0 Q25,10 50,0 Q75,10 100,0",
            Rough => "M0,0 Q20,12 40,0 Q60,15 80,0 Q90,8 100,0",
            Smooth => "M0,0 Q30,8 60,0 Q80,12 100,0",
            Sharp => "M0,0 L25,15 L50,0 L75,15 L100,0",
            Soft => "M0,0 Q25,6 50,0 Q75,6 100,0",
        },
        EdgeStyle::Spikes => match variant {
            Default => "M0,0 L25,20 L50,0 L75,20 L100,0",
            Rough => "M0,0 L20,22 L40,0 L60,25 L80,0 L100,18",
            Smooth => "M0,0 Q25,18 50,0 Q75,18 100,0",
            Sharp => "M0,0 L25,25 L50,0 L75,25 L100,0",
            Soft => "M0,0 Q25,15 50,0 Q75,15 100,0",
        },
        EdgeStyle::Dots => match variant {
            Default => "M0,0 Q25,5 50,0 Q75,5 100,0",
            Rough => "M0,0 Q20,8 40,0 Q60,10 80,0 Q90,3 100,0",
            Smooth => "M0,0 Q30,3 60,0 Q80,8 100,0",
            Sharp => "M0,0 L25,10 L50,0 L75,10 L100,0",
            Soft => "M0,0 Q25,4 50,0 Q75,4 100,0",
        },
        EdgeStyle::Geometric => match variant {
            Default => "M0,0 L25,15 L50,0 L75,15 L100,0",
            Rough => "M0,0 L20,18 L40,0 L60,20 L80,0 L100,18",
            Smooth => "M0,0 Q25,12 50,0 Q75,12 100,0",
            Sharp => "M0,0 L25,20 L50,0 L75,20 L100,0",
            Soft => "M0,0 Q25,10 50,0 Q75,10 100,0",
        },
        EdgeStyle::Organic => match variant {
            Default => "M0,0 Q25,8 50,0 Q75,8 100,0",
            Rough => "M0,0 Q20,12 40,0 Q60,15 80,0 Q90,6 100,0",
            Smooth => "M0,0 Q30,6 60,0 Q80,10 100,0",
            Sharp => "M0,0 L25,18 L50,0 L75,18 L100,0",
            Soft => "M0,0 Q25,8 50,0 Q75,8 100,0",
        },
        EdgeStyle::Vintage => match variant {
            Default => "M0,0 Q25,10 50,0 Q75,10 100,0",
            Rough => "M0,0 Q20,15 40,0 Q60,18 80,0 Q90,8 100,0",
            Smooth => "M0,0 Q30,8 60,0 Q80,12 100,0",
            Sharp => "M0,0 L25,20 L50,0 L75,20 L100,0",
            Soft => "M0,0 Q25,12 50,0 Q75,12 100,0",
        },
    };
    Some(d)
}
