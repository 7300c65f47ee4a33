/// DOM contract shared with the page markup.
///
/// The core toggles markers on elements it finds through these selectors;
/// it never creates or removes elements.
// Canvas the field renders into.
pub const CANVAS_ID: &str = "cf-webgl-field";

// Variant trigger pills and the row that owns them.
pub const PILL_SELECTOR: &str = ".cf-fttb-pill";
pub const PILL_ROW_SELECTOR: &str = ".cf-fttb-pills";
pub const PILL_METRIC_SELECTOR: &str = ".cf-fttb-pill-metric";

// Attribute naming the variant a pill activates.
pub const VARIANT_ATTR: &str = "data-variant";

// Markers written back to the pills.
pub const ACTIVE_CLASS: &str = "is-active";
pub const TICKING_CLASS: &str = "is-ticking";

// Context names tried in order when acquiring WebGL.
pub const CONTEXT_NAMES: [&str; 2] = ["webgl", "experimental-webgl"];

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
