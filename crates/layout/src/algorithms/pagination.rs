pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized logic to check if a unit fits below the cursor.
///
/// * `cursor_y`: The current baseline cursor on the page.
/// * `required`: The vertical extent the unit needs, including its last line's advance.
/// * `content_bottom`: The lowest position body content may reach.
pub fn check_fit(cursor_y: f32, required: f32, content_bottom: f32) -> BreakAnalysis {
    let available = (content_bottom - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    BreakAnalysis {
        should_break: required > available + EPSILON,
        remaining_height: available,
    }
}
