/// Pinned so that zooming grows the element around its middle.
pub const TRANSFORM_ORIGIN: &str = "center center";

/// Renders the CSS `transform` value: scale first, then translate, so the
/// translation is expressed in the element's unscaled pixels.
pub fn format_transform(scale: f64, translate: [f64; 2]) -> String {
    format!(
        "scale({}) translate({}px, {}px)",
        scale, translate[0], translate[1]
    )
}
