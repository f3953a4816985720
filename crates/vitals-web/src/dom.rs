//! DOM surface: hearts as inline SVG, score and level as text nodes.

use vitals_engine::{HeartIcon, HudSurface};
use web_sys::{Document, Element};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Heart outline in a 24×24 view box. Shared by the DOM and canvas surfaces.
pub const HEART_PATH: &str = "M12 21s-6.2-4.35-9.2-8.28C1 10.5 2.5 6 6.5 6c2.2 0 3.5 1.5 5.5 3.5C14 7.5 15.3 6 17.5 6c4 0 5.5 4.5 3.7 6.72C18.2 16.65 12 21 12 21z";

/// Element ids the page markup uses for the HUD and its overlays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomIds {
    pub lives: String,
    pub score: String,
    pub level: String,
    pub overlay: String,
    pub rotate_blocker: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            lives: "lives".into(),
            score: "score".into(),
            level: "level".into(),
            overlay: "overlay".into(),
            rotate_blocker: "rotateBlocker".into(),
        }
    }
}

pub(crate) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Look up an element, logging when the page does not have it.
pub(crate) fn find_element(document: &Document, id: &str) -> Option<Element> {
    let element = document.get_element_by_id(id);
    if element.is_none() {
        log::warn!("vitals: no element with id '{id}', slot disabled");
    }
    element
}

/// HUD surface backed by page elements.
///
/// Missing elements turn their slot into a no-op; the rest of the HUD keeps working.
pub struct DomSurface {
    document: Option<Document>,
    lives: Option<Element>,
    score: Option<Element>,
    level: Option<Element>,
}

impl DomSurface {
    /// Bind to the elements named in `ids` on the current page.
    pub fn bind(ids: &DomIds) -> Self {
        let Some(document) = document() else {
            log::warn!("vitals: no document, HUD disabled");
            return Self {
                document: None,
                lives: None,
                score: None,
                level: None,
            };
        };
        Self {
            lives: find_element(&document, &ids.lives),
            score: find_element(&document, &ids.score),
            level: find_element(&document, &ids.level),
            document: Some(document),
        }
    }

    /// Build `<svg class="svg-heart {class}"><path d=…/></svg>`.
    fn create_heart(document: &Document, icon: HeartIcon) -> Option<Element> {
        let svg = document.create_element_ns(Some(SVG_NS), "svg").ok()?;
        svg.set_attribute("viewBox", "0 0 24 24").ok()?;
        svg.class_list()
            .add_2("svg-heart", icon.damage_class.as_str())
            .ok()?;

        let path = document.create_element_ns(Some(SVG_NS), "path").ok()?;
        path.set_attribute("d", HEART_PATH).ok()?;
        svg.append_child(&path).ok()?;
        Some(svg)
    }
}

impl HudSurface for DomSurface {
    fn clear_hearts(&mut self) {
        if let Some(lives) = &self.lives {
            lives.set_inner_html("");
        }
    }

    fn push_heart(&mut self, icon: HeartIcon) {
        let (Some(document), Some(lives)) = (&self.document, &self.lives) else {
            return;
        };
        match Self::create_heart(document, icon) {
            Some(heart) => {
                let _ = lives.append_child(&heart);
            }
            None => log::warn!("vitals: could not build heart icon"),
        }
    }

    fn set_score(&mut self, score: u64) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(&score.to_string()));
        }
    }

    fn set_level(&mut self, level: u32) {
        if let Some(el) = &self.level {
            el.set_text_content(Some(&level.to_string()));
        }
    }
}
