use std::str::FromStr;

use wasm_bindgen::JsCast;
use web_sys as web;

use field_core::Variant;

use crate::constants::{
    ACTIVE_CLASS, PILL_METRIC_SELECTOR, PILL_ROW_SELECTOR, PILL_SELECTOR, REDUCED_MOTION_QUERY,
    TICKING_CLASS, VARIANT_ATTR,
};

pub struct Pill {
    pub element: web::Element,
    /// Raw `data-variant` value, kept even when it names no known variant
    /// so a misconfigured pill still activates the fallback.
    pub tag: Option<String>,
    pub variant: Option<Variant>,
}

/// The variant pill row, collected once at init. The core toggles markers
/// on these elements; it never creates or removes them.
pub struct PillRow {
    pills: Vec<Pill>,
    row: Option<web::Element>,
}

impl PillRow {
    pub fn collect(document: &web::Document) -> Self {
        let mut pills = Vec::new();
        if let Ok(list) = document.query_selector_all(PILL_SELECTOR) {
            for i in 0..list.length() {
                let Some(node) = list.get(i) else { continue };
                let Ok(element) = node.dyn_into::<web::Element>() else {
                    continue;
                };
                let tag = element.get_attribute(VARIANT_ATTR);
                let variant = tag.as_deref().and_then(|t| Variant::from_str(t).ok());
                pills.push(Pill {
                    element,
                    tag,
                    variant,
                });
            }
        }
        let row = document.query_selector(PILL_ROW_SELECTOR).ok().flatten();
        Self { pills, row }
    }

    pub fn pills(&self) -> &[Pill] {
        &self.pills
    }

    pub fn row(&self) -> Option<&web::Element> {
        self.row.as_ref()
    }

    /// Variant marked active in the markup, if any. A marked pill with an
    /// unknown tag yields `None` and the caller falls back to the default.
    pub fn initial_variant(&self) -> Option<Variant> {
        self.pills
            .iter()
            .find(|p| p.element.class_list().contains(ACTIVE_CLASS))
            .and_then(|p| p.variant)
    }

    /// Mirror the active variant onto the pills: `is-active` plus
    /// `aria-selected` true on exactly the matching pill.
    pub fn apply_selection(&self, active: Variant) {
        for pill in &self.pills {
            let selected = pill.variant == Some(active);
            _ = pill
                .element
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, selected);
            _ = pill
                .element
                .set_attribute("aria-selected", if selected { "true" } else { "false" });
        }
    }

    /// Restart the metric tick animation on the active pill.
    pub fn pulse_metric(&self, active: Variant) {
        let Some(pill) = self.pills.iter().find(|p| p.variant == Some(active)) else {
            return;
        };
        let Ok(Some(metric)) = pill.element.query_selector(PILL_METRIC_SELECTOR) else {
            return;
        };
        _ = metric.class_list().remove_1(TICKING_CLASS);
        // Reading layout forces a reflow so the animation restarts.
        if let Some(el) = metric.dyn_ref::<web::HtmlElement>() {
            _ = el.offset_width();
        }
        _ = metric.class_list().add_1(TICKING_CLASS);
    }
}

#[inline]
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}
