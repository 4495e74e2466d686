use crate::config::ChartStyle;
use crate::report::{Report, chart_series};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::f64::consts::PI;
use std::path::Path;
use svg::Document;
use svg::node::Text as TextContent;
use svg::node::element::{Circle, Line, Path as SvgPath, Rectangle, Text, path::Data};

/// Renders the two-panel view of a report: a pie panel for per-category
/// share on the left and a bar panel for per-category magnitude on the
/// right. Both panels use the identical category ordering produced by
/// `chart_series`, so labels line up across the panels.
///
/// Style is an explicit value (dimensions, palette) rather than anything
/// process-global.
pub fn render_two_panel(report: &Report, style: &ChartStyle, out: &Path) -> Result<()> {
    let (labels, values) = chart_series(report);

    let doc = Document::new()
        .set("viewBox", (0.0, 0.0, style.width, style.height))
        .set("font-family", "sans-serif")
        .add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", style.width)
                .set("height", style.height)
                .set("fill", "white"),
        );

    let doc = draw_pie_panel(doc, style, &labels, &values, report.total_spent);
    let doc = draw_bar_panel(doc, style, &labels, &values);

    svg::save(out, &doc).with_context(|| format!("Failed to write chart {}", out.display()))?;
    Ok(())
}

fn color<'s>(style: &'s ChartStyle, i: usize) -> &'s str {
    &style.palette[i % style.palette.len()]
}

fn as_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

fn title(x: f64, y: f64, text: &str) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("text-anchor", "middle")
        .set("font-size", 18)
        .add(TextContent::new(text))
}

fn draw_pie_panel(
    mut doc: Document,
    style: &ChartStyle,
    labels: &[String],
    values: &[Decimal],
    total: Decimal,
) -> Document {
    let cx = style.width / 4.0;
    let cy = style.height / 2.0 - 30.0;
    let r = (style.height / 2.0 - 90.0).max(40.0);
    let total = as_f64(total);

    doc = doc.add(title(cx, 30.0, "Share of spending by category"));

    if labels.len() == 1 || total <= 0.0 {
        // A single slice (or a degenerate total) is just a full disc.
        doc = doc.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", r)
                .set("fill", color(style, 0)),
        );
    } else {
        let mut angle = -PI / 2.0;
        for (i, value) in values.iter().enumerate() {
            let sweep = as_f64(*value) / total * 2.0 * PI;
            let (x0, y0) = (cx + r * angle.cos(), cy + r * angle.sin());
            let end = angle + sweep;
            let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
            let large_arc = if sweep > PI { 1.0 } else { 0.0 };

            let data = Data::new()
                .move_to((cx, cy))
                .line_to((x0, y0))
                .elliptical_arc_to((r, r, 0.0, large_arc, 1.0, x1, y1))
                .close();
            doc = doc.add(
                SvgPath::new()
                    .set("fill", color(style, i))
                    .set("stroke", "white")
                    .set("stroke-width", 1.0)
                    .set("d", data),
            );
            angle = end;
        }
    }

    // Legend with the share each category holds, in label order.
    let mut ly = cy + r + 24.0;
    for (i, (label, value)) in labels.iter().zip(values).enumerate() {
        let share = if total > 0.0 {
            as_f64(*value) / total * 100.0
        } else {
            0.0
        };
        doc = doc
            .add(
                Rectangle::new()
                    .set("x", cx - r)
                    .set("y", ly - 10.0)
                    .set("width", 12.0)
                    .set("height", 12.0)
                    .set("fill", color(style, i)),
            )
            .add(
                Text::new()
                    .set("x", cx - r + 18.0)
                    .set("y", ly)
                    .set("font-size", 12)
                    .add(TextContent::new(format!("{label} {share:.1}%"))),
            );
        ly += 18.0;
    }

    doc
}

fn draw_bar_panel(
    mut doc: Document,
    style: &ChartStyle,
    labels: &[String],
    values: &[Decimal],
) -> Document {
    let left = style.width / 2.0 + 60.0;
    let right = style.width - 40.0;
    let top = 60.0;
    let bottom = style.height - 80.0;

    doc = doc.add(title(
        (left + right) / 2.0,
        30.0,
        "Total spending by category",
    ));

    let max = values.iter().copied().map(as_f64).fold(0.0_f64, f64::max);
    let scale = if max > 0.0 { (bottom - top) / max } else { 0.0 };

    let slot = (right - left) / labels.len() as f64;
    let bar_width = slot * 0.6;

    for (i, (label, value)) in labels.iter().zip(values).enumerate() {
        let v = as_f64(*value);
        let h = v * scale;
        let x = left + i as f64 * slot + (slot - bar_width) / 2.0;

        doc = doc
            .add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", bottom - h)
                    .set("width", bar_width)
                    .set("height", h)
                    .set("fill", color(style, i)),
            )
            .add(
                Text::new()
                    .set("x", x + bar_width / 2.0)
                    .set("y", bottom - h - 6.0)
                    .set("text-anchor", "middle")
                    .set("font-size", 12)
                    .add(TextContent::new(format!("${v:.0}"))),
            )
            .add(
                Text::new()
                    .set("x", x + bar_width / 2.0)
                    .set("y", bottom + 18.0)
                    .set("text-anchor", "middle")
                    .set("font-size", 12)
                    .add(TextContent::new(label.clone())),
            );
    }

    // Axes.
    doc.add(
        Line::new()
            .set("x1", left)
            .set("x2", left)
            .set("y1", top)
            .set("y2", bottom)
            .set("stroke", "black")
            .set("stroke-width", 1.5),
    )
    .add(
        Line::new()
            .set("x1", left)
            .set("x2", right)
            .set("y1", bottom)
            .set("y2", bottom)
            .set("stroke", "black")
            .set("stroke-width", 1.5),
    )
}
