//! HTML result page generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use quizstore_core::report::ResultReport;
use quizstore_core::scoring::EffortLevel;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML result page.
pub fn generate_html(report: &ResultReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Quiz result: {}</title>\n",
        html_escape(&report.quiz_title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    if !report.icon.is_empty() {
        html.push_str(&format!(
            "<img class=\"icon\" src=\"{}\" alt=\"\">\n",
            html_escape(&report.icon)
        ));
    }
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&report.quiz_title)));
    html.push_str(&format!(
        "<p class=\"meta\">{} of {} questions answered | {}</p>\n",
        report.answered(),
        report.questions.len(),
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Score
    html.push_str(&format!(
        "<section class=\"score {}\">\n",
        level_class(report.level)
    ));
    html.push_str("<h2>You scored</h2>\n");
    html.push_str(&format!(
        "<p class=\"total\">{} <span>out of {}</span></p>\n",
        report.score, report.max_score
    ));
    html.push_str(&score_bar(report.score, report.max_score, report.level));
    html.push_str(&format!(
        "<p class=\"summary\">{}</p>\n",
        html_escape(&report.summary)
    ));
    html.push_str("</section>\n");

    // Answers
    html.push_str("<section class=\"answers\">\n");
    html.push_str("<h2>Your answers</h2>\n");
    html.push_str("<table>\n");
    html.push_str("<thead><tr><th>#</th><th>Question</th><th>Your answer</th><th>Points</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for q in &report.questions {
        let (class, chosen) = match &q.selected_answer {
            Some(a) => ("answered", html_escape(a)),
            None => ("skipped", "&ndash;".to_string()),
        };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            class,
            q.id,
            html_escape(&q.question),
            chosen,
            q.point.unwrap_or(0)
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML result page to a file.
pub fn write_html_report(report: &ResultReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn level_class(level: EffortLevel) -> &'static str {
    match level {
        EffortLevel::Low => "low",
        EffortLevel::Moderate => "moderate",
        EffortLevel::High => "high",
    }
}

fn score_bar(score: u32, max_score: u32, level: EffortLevel) -> String {
    let max_width = 400;
    let bar_height = 24;
    let ratio = if max_score == 0 {
        0.0
    } else {
        (score as f64 / max_score as f64).min(1.0)
    };
    let width = (ratio * max_width as f64) as usize;

    let color = match level {
        EffortLevel::High => "#22c55e",
        EffortLevel::Moderate => "#eab308",
        EffortLevel::Low => "#ef4444",
    };

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        max_width + 60,
        bar_height
    );
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{max_width}\" height=\"{bar_height}\" fill=\"var(--border)\" rx=\"4\"/>\n"
    ));
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{bar_height}\" fill=\"{color}\" rx=\"4\"/>\n"
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.0}%</text>\n",
        max_width + 8,
        bar_height / 2,
        ratio * 100.0
    ));
    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --muted: #6b7280; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 56rem; padding: 2rem; background: var(--bg); color: var(--fg); }
header { display: flex; flex-wrap: wrap; align-items: center; gap: 1rem; }
header .meta { flex-basis: 100%; color: var(--muted); }
.icon { width: 48px; height: 48px; }
.total { font-size: 4rem; font-weight: bold; margin: 0; }
.total span { font-size: 1rem; font-weight: normal; color: var(--muted); }
.score.low .total { color: #ef4444; }
.score.moderate .total { color: #eab308; }
.score.high .total { color: #22c55e; }
.summary { font-size: 1.1rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.skipped { color: var(--muted); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
"#;
