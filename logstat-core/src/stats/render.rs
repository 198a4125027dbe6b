use super::aggregation::Stats;

/// Render one protocol output line, without the trailing newline.
pub fn render_stats(stats: &Stats) -> String {
    format!(
        "Min: {}, Max: {}, Mean: {}",
        fixed6(stats.min),
        fixed6(stats.max),
        fixed6(stats.mean)
    )
}

fn fixed6(value: f32) -> String {
    if value.is_nan() {
        // Match the C-style lowercase spelling used for infinities.
        return "nan".to_string();
    }
    format!("{value:.6}")
}
