/// Page renderer for the descent-lab studio.
///
/// A single HTML template (`studio/assets/studio.html`) with placeholder
/// tokens like `{{TOKEN}}`, loaded at compile time. Global placeholders are
/// resolved here; anything left unfilled is blanked so a missed token never
/// leaks into the browser.

const TEMPLATE: &str = include_str!("assets/studio.html");

/// Renders the studio page.
///
/// # Arguments
/// - `learning_rate` — current session learning rate, shown in the input
/// - `running`       — whether the engine is in the Running phase
/// - `step`          — steps taken since the last reset
pub fn render_page(learning_rate: f64, running: bool, step: usize) -> String {
    let html = TEMPLATE
        .replace("{{LEARNING_RATE}}", &format!("{}", learning_rate))
        .replace("{{RUNNING}}", if running { "true" } else { "false" })
        .replace("{{STEP}}", &step.to_string())
        .replace(
            "{{TOGGLE_LABEL}}",
            if running { "Pause" } else { "Start" },
        );

    blank_remaining(html)
}

/// Replaces any `{{UPPERCASE_TOKEN}}` that wasn't substituted with an empty
/// string — a missed token should produce a clean page, not debug noise.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}
