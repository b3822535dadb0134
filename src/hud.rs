//! Heads-up display data: prompt and dialogue strings, screen layout and
//! the FPS window title.
//!
//! Everything here is plain data for a renderer to draw. Layout works in
//! framebuffer pixels with the origin at the top-left, except the crosshair,
//! which is in normalised device coordinates.

use glam::Vec2;

use crate::constants::FPS_SAMPLE_WINDOW;
use crate::interaction::{Dialogue, InteractionState};
use crate::numeric::truncate_to_u32;

/// Prompt shown while looking at the NPC.
pub const TALK_PROMPT: &str = "Press E to talk";
/// Window title prefix.
pub const TITLE_PREFIX: &str = "Exit Strategy";
/// Half length of each crosshair arm in pixels.
pub const CROSSHAIR_PX: f32 = 8.0;
/// Approximate glyph half-width used to centre the prompt.
const PROMPT_GLYPH_HALF_WIDTH: f32 = 4.0;

/// Strings the renderer should show this frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HudFrame {
    /// Talk prompt, when looking at the NPC and not yet talking.
    pub prompt: Option<String>,
    /// Dialogue line, while talking.
    pub npc_line: Option<String>,
    /// True when any NPC UI is on screen.
    pub ui_active: bool,
}

impl HudFrame {
    /// Derives the HUD strings from the conversation state.
    #[must_use]
    pub fn from_interaction(state: InteractionState, dialogue: &Dialogue) -> Self {
        match state {
            InteractionState::Idle => Self::default(),
            InteractionState::PromptVisible => Self {
                prompt: Some(TALK_PROMPT.to_owned()),
                npc_line: None,
                ui_active: true,
            },
            InteractionState::Talking { line } => Self {
                prompt: None,
                npc_line: dialogue.line(line).map(str::to_owned),
                ui_active: true,
            },
        }
    }
}

/// Framebuffer size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Framebuffer {
    /// Width over height for the projection, with a fallback for a zero height.
    #[must_use]
    pub fn aspect(self) -> f32 {
        crate::camera::aspect_ratio(self.width, self.height)
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "Framebuffer dimensions are far below f32's exact integer range."
    )]
    fn size(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Top-left anchor for the talk prompt, roughly centred and above the crosshair.
#[expect(
    clippy::cast_precision_loss,
    reason = "Prompt text is a handful of characters."
)]
#[must_use]
pub fn prompt_anchor(fb: Framebuffer, text: &str) -> Vec2 {
    let size = fb.size();
    Vec2::new(
        size.x * 0.5 - text.chars().count() as f32 * PROMPT_GLYPH_HALF_WIDTH,
        size.y * 0.28,
    )
}

/// Screen rectangle of the dialogue box and where its text starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialogueBox {
    /// Top-left corner.
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
    /// Top-left of the first text line.
    pub text_origin: Vec2,
}

impl DialogueBox {
    /// Lays the box along the bottom of `fb` with 5% margins and 22% height.
    #[must_use]
    pub fn layout(fb: Framebuffer) -> Self {
        let size = fb.size();
        let margin = size * 0.05;
        let bottom = size.y - margin.y;
        let min = Vec2::new(margin.x, bottom - size.y * 0.22);
        let max = Vec2::new(size.x - margin.x, bottom);
        Self {
            min,
            max,
            text_origin: min + Vec2::new(20.0, 24.0),
        }
    }
}

/// Crosshair as two NDC line segments: horizontal then vertical.
#[must_use]
pub fn crosshair_segments(fb: Framebuffer) -> [[Vec2; 2]; 2] {
    let half = fb.size() * 0.5;
    let sx = if half.x > 0.0 { CROSSHAIR_PX / half.x } else { 0.0 };
    let sy = if half.y > 0.0 { CROSSHAIR_PX / half.y } else { 0.0 };
    [
        [Vec2::new(-sx, 0.0), Vec2::new(sx, 0.0)],
        [Vec2::new(0.0, -sy), Vec2::new(0.0, sy)],
    ]
}

/// Frame-rate meter refreshed every [`FPS_SAMPLE_WINDOW`] seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FpsCounter {
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    /// Counts one frame of length `dt`; returns the new rate when the window closes.
    #[expect(
        clippy::cast_precision_loss,
        reason = "Frame counts within half a second are small."
    )]
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += dt.max(0.0);
        if self.elapsed < FPS_SAMPLE_WINDOW {
            return None;
        }
        self.fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    /// Most recently published rate.
    #[must_use]
    pub const fn fps(&self) -> f32 {
        self.fps
    }
}

/// Window title showing the whole-number frame rate.
///
/// # Examples
/// ```
/// use exit_strategy::hud::window_title;
/// assert_eq!(window_title(59.7), "Exit Strategy - FPS: 59");
/// ```
#[must_use]
pub fn window_title(fps: f32) -> String {
    format!("{TITLE_PREFIX} - FPS: {}", truncate_to_u32(fps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FB: Framebuffer = Framebuffer {
        width: 1280,
        height: 720,
    };

    #[test]
    fn hud_strings_follow_state() {
        let dialogue = Dialogue::default();
        assert_eq!(
            HudFrame::from_interaction(InteractionState::Idle, &dialogue),
            HudFrame::default()
        );
        let prompt = HudFrame::from_interaction(InteractionState::PromptVisible, &dialogue);
        assert_eq!(prompt.prompt.as_deref(), Some(TALK_PROMPT));
        assert!(prompt.ui_active);
        let talking = HudFrame::from_interaction(InteractionState::Talking { line: 2 }, &dialogue);
        assert_eq!(talking.npc_line.as_deref(), dialogue.line(2));
        assert!(talking.prompt.is_none());
    }

    #[test]
    fn dialogue_box_hugs_the_bottom() {
        let b = DialogueBox::layout(FB);
        assert_relative_eq!(b.min.x, 64.0);
        assert_relative_eq!(b.max.x, 1216.0);
        assert_relative_eq!(b.max.y, 684.0);
        assert_relative_eq!(b.min.y, 684.0 - 158.4, epsilon = 1e-3);
        assert_relative_eq!(b.text_origin.x, 84.0);
    }

    #[test]
    fn prompt_is_centred_on_its_length() {
        let anchor = prompt_anchor(FB, TALK_PROMPT);
        assert_relative_eq!(anchor.x, 640.0 - 15.0 * 4.0);
        assert_relative_eq!(anchor.y, 201.6, epsilon = 1e-3);
    }

    #[test]
    fn crosshair_is_eight_pixels_each_way() {
        let [h, v] = crosshair_segments(FB);
        assert_relative_eq!(h[1].x, 8.0 / 640.0);
        assert_relative_eq!(v[1].y, 8.0 / 360.0);
        let degenerate = crosshair_segments(Framebuffer { width: 0, height: 0 });
        assert_eq!(degenerate[0][1], Vec2::ZERO);
    }

    #[test]
    fn aspect_falls_back_when_minimised() {
        assert_relative_eq!(FB.aspect(), 16.0 / 9.0);
        assert_relative_eq!(
            Framebuffer {
                width: 800,
                height: 0
            }
            .aspect(),
            crate::camera::FALLBACK_ASPECT
        );
    }

    #[test]
    fn fps_publishes_each_half_second() {
        let mut counter = FpsCounter::default();
        let published: Vec<f32> = (0..60).filter_map(|_| counter.tick(0.031_25)).collect();
        assert_eq!(published.len(), 3);
        assert_relative_eq!(published[0], 32.0);
        assert_eq!(counter.fps(), published[2]);
    }
}
