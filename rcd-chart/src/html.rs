//! Standalone HTML page for a rendered dashboard.
//!
//! Each region becomes a container `div`; each rendered chart becomes one
//! `Highcharts.chart(...)` call. Every call is wrapped in its own
//! try/catch so a chart that throws in the browser leaves the others alone.

use crate::options::Theme;
use crate::page::Page;
use std::io::{self, Write};

static HIGHCHARTS_SCRIPTS: &[&str] = &[
    "https://code.highcharts.com/highcharts.js",
    "https://code.highcharts.com/modules/drilldown.js",
    "https://code.highcharts.com/modules/exporting.js",
    "https://code.highcharts.com/modules/export-data.js",
];

/// Render the page to a string.
pub fn render_page(title: &str, page: &Page, theme: &Theme) -> String {
    let mut out = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_page(&mut out, title, page, theme);
    String::from_utf8_lossy(&out).into_owned()
}

/// Write the page to any writer.
pub fn write_page<W: Write>(writer: &mut W, title: &str, page: &Page, theme: &Theme) -> io::Result<()> {
    let title = escape_html(title);
    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html lang=\"en\">")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "    <meta charset=\"UTF-8\">")?;
    writeln!(writer, "    <title>{}</title>", title)?;
    for src in HIGHCHARTS_SCRIPTS {
        writeln!(writer, "    <script src=\"{}\"></script>", src)?;
    }
    writeln!(
        writer,
        "    <style>.chart-region {{ min-height: 400px; width: 100%; margin-bottom: 24px; }}</style>"
    )?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    writeln!(
        writer,
        "    <h1 style=\"color: {}; font-family: {};\">{}</h1>",
        escape_html(&theme.title_color),
        escape_html(&theme.title_font_family),
        title
    )?;

    for region in page.regions() {
        let state = if region.is_empty() { "empty" } else { "chart" };
        writeln!(
            writer,
            "    <div id=\"{}\" class=\"chart-region\" data-state=\"{}\"></div>",
            escape_html(region.id()),
            state
        )?;
    }

    writeln!(writer, "    <script>")?;
    writeln!(writer, "    document.addEventListener('DOMContentLoaded', function () {{")?;
    for region in page.regions() {
        if let Some(chart) = region.chart() {
            writeln!(writer, "        {}", chart_call(region.id(), &chart.options(theme).to_string()))?;
        }
    }
    writeln!(writer, "    }});")?;
    writeln!(writer, "    </script>")?;
    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;
    Ok(())
}

/// One guarded `Highcharts.chart` call.
fn chart_call(container_id: &str, options_json: &str) -> String {
    let id = script_safe(&serde_json::Value::from(container_id).to_string());
    format!(
        "try {{ Highcharts.chart({id}, {opts}); }} catch (e) {{ console.warn('chart ' + {id} + ' failed:', e); }}",
        id = id,
        opts = script_safe(options_json),
    )
}

/// Keep embedded JSON from closing the surrounding script element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
