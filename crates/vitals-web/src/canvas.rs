//! Canvas 2D surface for pages that draw the HUD over the game canvas.

use vitals_engine::{HeartIcon, HeartRowLayout, HudSurface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Path2d};

use crate::dom::{document, find_element, HEART_PATH};

/// Heart path coordinates span 0..24.
const PATH_BOX: f64 = 24.0;

/// Colors used by the canvas HUD.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasStyle {
    pub heart: String,
    pub heart_empty: String,
    pub text: String,
    pub font: String,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            heart: "#e63950".into(),
            heart_empty: "rgba(255, 255, 255, 0.25)".into(),
            text: "#fff".into(),
            font: "16px 'Courier New', monospace".into(),
        }
    }
}

/// Immediate-mode surface. Writes are buffered and painted together in `present`.
pub struct CanvasSurface {
    ctx: Option<CanvasRenderingContext2d>,
    heart: Option<Path2d>,
    width: f64,
    height: f64,
    layout: HeartRowLayout,
    style: CanvasStyle,
    hearts: Vec<HeartIcon>,
    score: u64,
    level: u32,
}

impl CanvasSurface {
    pub fn bind(canvas_id: &str, layout: HeartRowLayout) -> Self {
        let canvas = document()
            .and_then(|d| find_element(&d, canvas_id))
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok());

        let (ctx, width, height) = match &canvas {
            Some(c) => {
                let ctx = c
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
                (ctx, c.width() as f64, c.height() as f64)
            }
            None => (None, 0.0, 0.0),
        };
        if ctx.is_none() {
            log::warn!("vitals: canvas '{canvas_id}' has no 2d context, HUD disabled");
        }

        Self {
            ctx,
            heart: Path2d::new_with_path_string(HEART_PATH).ok(),
            width,
            height,
            layout,
            style: CanvasStyle::default(),
            hearts: Vec::new(),
            score: 0,
            level: 0,
        }
    }

    pub fn with_style(mut self, style: CanvasStyle) -> Self {
        self.style = style;
        self
    }

    fn draw_heart(&self, ctx: &CanvasRenderingContext2d, path: &Path2d, x: f64, y: f64, fill: f64) {
        let scale = self.layout.icon_size as f64 / PATH_BOX;
        ctx.save();
        let _ = ctx.translate(x, y);
        let _ = ctx.scale(scale, scale);

        ctx.set_fill_style_str(&self.style.heart_empty);
        ctx.fill_with_path_2d(path);

        // Filled part drains from the right.
        if fill > 0.0 {
            ctx.begin_path();
            ctx.rect(0.0, 0.0, PATH_BOX * fill, PATH_BOX);
            ctx.clip();
            ctx.set_fill_style_str(&self.style.heart);
            ctx.fill_with_path_2d(path);
        }
        ctx.restore();
    }
}

impl HudSurface for CanvasSurface {
    fn clear_hearts(&mut self) {
        self.hearts.clear();
    }

    fn push_heart(&mut self, icon: HeartIcon) {
        self.hearts.push(icon);
    }

    fn set_score(&mut self, score: u64) {
        self.score = score;
    }

    fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    fn present(&mut self) {
        let (Some(ctx), Some(path)) = (&self.ctx, &self.heart) else {
            return;
        };
        ctx.clear_rect(0.0, 0.0, self.width, self.height);

        for (icon, slot) in self.hearts.iter().zip(self.layout.slots(self.hearts.len())) {
            let fill = icon.damage_class.fill_ratio() as f64;
            self.draw_heart(ctx, path, slot.x as f64, slot.y as f64, fill);
        }

        let text_y = (self.layout.origin.y + self.layout.icon_size * 1.5) as f64;
        let text_x = self.layout.origin.x as f64;
        ctx.set_font(&self.style.font);
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(&self.style.text);
        let _ = ctx.fill_text(&format!("SCORE {}", self.score), text_x, text_y);
        let _ = ctx.fill_text(&format!("LEVEL {}", self.level), text_x, text_y + 20.0);
    }
}
