use crate::models::NormalizedSeries;
use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::Once;

/// One-time registration for a fallback "sans-serif" font when using the
/// `ab_glyph` text path. Required because `ab_glyph` doesn't discover OS
/// fonts; the bytes are read from well-known locations and kept for the
/// lifetime of the process.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        const CANDIDATES: &[&str] = &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/Library/Fonts/Arial Unicode.ttf",
        ];
        for path in CANDIDATES {
            if let Ok(bytes) = std::fs::read(path) {
                let _ = plotters::style::register_font(
                    "sans-serif",
                    plotters::style::FontStyle::Normal,
                    Box::leak(bytes.into_boxed_slice()),
                );
                break;
            }
        }
    });
}

/// Render the normalized series as a line chart titled "Product CPI over
/// time": `values` against `periods` on the x-axis, y-axis labeled "CPI",
/// legend built from `series_id`.
///
/// The backend is chosen by the output extension: `.svg` renders an SVG,
/// anything else goes through the bitmap backend (PNG).
pub fn plot_series<P: AsRef<Path>>(
    series: &NormalizedSeries,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if series.values.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    if series.periods.len() != series.values.len() {
        return Err(anyhow!("periods and values are not index-aligned"));
    }

    ensure_fonts_registered();

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    let (mut min_val, mut max_val) = (
        series.values.iter().cloned().fold(f64::INFINITY, f64::min),
        series
            .values
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max),
    );
    if (max_val - min_val).abs() < f64::EPSILON {
        min_val -= 1.0;
        max_val += 1.0;
    }

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, series, min_val, max_val)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, series, min_val, max_val)?;
    }

    Ok(())
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    series: &NormalizedSeries,
    min_val: f64,
    max_val: f64,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let n = series.values.len();
    let x_max = (n as i32 - 1).max(1);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Product CPI over time", ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 96)
        .build_cartesian_2d(0..x_max, min_val..max_val)
        .map_err(|e| anyhow!("{:?}", e))?;

    // X positions are indexes into the period labels; rotate the labels so
    // long "<year> <periodName>" strings stay readable.
    let periods = &series.periods;
    let x_label_fmt = |idx: &i32| periods.get(*idx as usize).cloned().unwrap_or_default();
    let y_label_fmt = |v: &f64| format!("{:.1}", v);

    // Limit label counts to avoid overlap
    let x_label_count = n.min(12);
    let y_label_count = 10usize;

    chart
        .configure_mesh()
        .x_desc("Period")
        .y_desc("CPI")
        .x_labels(x_label_count)
        .y_labels(y_label_count)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style(("sans-serif", 14))
        .x_label_style(
            ("sans-serif", 12)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let line: Vec<(i32, f64)> = series
        .values
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, v)| (i as i32, v))
        .collect();

    let color = Palette99::pick(0).to_rgba();
    let style = ShapeStyle {
        color: color.clone(),
        filled: false,
        stroke_width: 2,
    };

    chart
        .draw_series(LineSeries::new(line, style))
        .map_err(|e| anyhow!("{:?}", e))?
        .label(series.series_id.join(", "))
        // Move the color into the closure; clone for each legend glyph draw
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], color.clone()));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.85))
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
