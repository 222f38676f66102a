//! Scroll-driven glow parallax.
//!
//! Each glow layer interpolates its vertical offset, scale and opacity
//! linearly between a value at the top of the page (progress 0) and one at
//! the bottom (progress 1). The secondary layer travels less and stays
//! dimmer, which reads as depth.

/// Endpoints of one glow layer's animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowLayer {
    pub offset_y: (f64, f64),
    pub scale: (f64, f64),
    pub opacity: (f64, f64),
}

/// Style values of one glow layer at a given scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    pub offset_y: f64,
    pub scale: f64,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub primary: LayerStyle,
    pub secondary: LayerStyle,
}

pub const PRIMARY_GLOW: GlowLayer = GlowLayer {
    offset_y: (0.0, 140.0),
    scale: (1.0, 1.08),
    opacity: (0.26, 0.14),
};

pub const SECONDARY_GLOW: GlowLayer = GlowLayer {
    offset_y: (0.0, 90.0),
    scale: (1.0, 1.05),
    opacity: (0.14, 0.08),
};

// Written as a weighted sum so both endpoints come out exact.
fn lerp((from, to): (f64, f64), progress: f64) -> f64 {
    from * (1.0 - progress) + to * progress
}

impl GlowLayer {
    /// No clamping: progress outside [0, 1] extrapolates.
    pub fn at(&self, progress: f64) -> LayerStyle {
        LayerStyle {
            offset_y: lerp(self.offset_y, progress),
            scale: lerp(self.scale, progress),
            opacity: lerp(self.opacity, progress),
        }
    }
}

impl LayerStyle {
    /// Inline style for a glow element centered with `left: 50%`.
    pub fn to_css(&self) -> String {
        format!(
            "transform: translateX(-50%) translateY({}px) scale({}); opacity: {};",
            self.offset_y, self.scale, self.opacity
        )
    }
}

pub fn frame(progress: f64) -> ParallaxFrame {
    ParallaxFrame {
        primary: PRIMARY_GLOW.at(progress),
        secondary: SECONDARY_GLOW.at(progress),
    }
}

/// Normalized scroll position of the document, always within [0, 1].
/// A page that does not scroll sits at 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}
