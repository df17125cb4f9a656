use leptos::prelude::*;
use plotters::coord::Shift;
use plotters::coord::ranged1d::SegmentValue;
use plotters::element::Pie;
use plotters::prelude::{
    AreaSeries, ChartBuilder, Circle, Color, DrawingArea, IntoDrawingArea, IntoFont,
    IntoSegmentedCoord, LineSeries, RGBColor, Rectangle, SVGBackend, WHITE,
};

use super::palette::{EMPTY_CHART, format_value, palette_color};
use crate::application::ports::ChartRenderer;
use crate::domain::{ChartKind, ChartSeries};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 320;
const PIE_RADIUS: f64 = 110.0;

/// Inline SVG charts drawn through plotters. The preferred backend.
#[derive(Debug, Default)]
pub struct SvgChartRenderer;

impl SvgChartRenderer {
    fn draw(series: &ChartSeries, kind: ChartKind, buf: &mut String) -> anyhow::Result<()> {
        let root = SVGBackend::with_string(buf, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        match kind {
            ChartKind::Pie => Self::pie(series, &root)?,
            _ => Self::cartesian(series, kind, &root)?,
        }

        root.present()?;
        Ok(())
    }

    fn cartesian(
        series: &ChartSeries,
        kind: ChartKind,
        root: &DrawingArea<SVGBackend<'_>, Shift>,
    ) -> anyhow::Result<()> {
        let count = series.points.len() as u32;
        let top = (series.max_value() * 1.15).max(1.0);
        let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
        let label_for = |value: &SegmentValue<u32>| match value {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i as usize).map(|l| l.to_string()).unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        };

        let mut chart = ChartBuilder::on(root)
            .margin(12)
            .x_label_area_size(36)
            .y_label_area_size(48)
            .build_cartesian_2d((0u32..count).into_segmented(), 0f64..top)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(count as usize)
            .x_label_formatter(&label_for)
            .y_label_formatter(&|v| format_value(*v))
            .draw()?;

        match kind {
            ChartKind::Bar => {
                chart.draw_series(series.points.iter().enumerate().map(|(i, point)| {
                    let x = i as u32;
                    let mut bar = Rectangle::new(
                        [
                            (SegmentValue::Exact(x), 0.0),
                            (SegmentValue::Exact(x + 1), point.value.max(0.0)),
                        ],
                        palette_color(i).filled(),
                    );
                    bar.set_margin(0, 0, 8, 8);
                    bar
                }))?;
            }
            _ => {
                let stroke = palette_color(0);
                let points: Vec<(SegmentValue<u32>, f64)> = series
                    .points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (SegmentValue::CenterOf(i as u32), p.value.max(0.0)))
                    .collect();

                if kind == ChartKind::Area {
                    chart.draw_series(
                        AreaSeries::new(points.clone(), 0.0, stroke.mix(0.3))
                            .border_style(stroke.stroke_width(2)),
                    )?;
                } else {
                    chart.draw_series(LineSeries::new(points.clone(), stroke.stroke_width(2)))?;
                }
                chart.draw_series(
                    points
                        .into_iter()
                        .map(|(x, y)| Circle::new((x, y), 3, stroke.filled())),
                )?;
            }
        }

        Ok(())
    }

    fn pie(
        series: &ChartSeries,
        root: &DrawingArea<SVGBackend<'_>, Shift>,
    ) -> anyhow::Result<()> {
        let sizes: Vec<f64> = series.points.iter().map(|p| p.value.max(0.0)).collect();
        let total: f64 = sizes.iter().sum();
        if total <= 0.0 {
            return Ok(());
        }

        let colors: Vec<RGBColor> = (0..sizes.len()).map(palette_color).collect();
        let labels: Vec<String> = series
            .points
            .iter()
            .zip(&sizes)
            .map(|(p, size)| format!("{} ({:.1}%)", p.label, size / total * 100.0))
            .collect();
        let center = ((WIDTH / 2) as i32, (HEIGHT / 2) as i32);

        let mut pie = Pie::new(&center, &PIE_RADIUS, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 13).into_font());
        root.draw(&pie)?;
        Ok(())
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn render(&self, series: &ChartSeries, kind: ChartKind) -> String {
        let mut svg = String::new();
        let drawn = !series.is_empty()
            && match Self::draw(series, kind, &mut svg) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(chart = kind.as_str(), "Failed to draw chart: {}", e);
                    false
                }
            };

        let body = if drawn {
            view! { <div class="chart-canvas" inner_html={svg}></div> }.into_any()
        } else {
            view! { <p class="chart-empty">{EMPTY_CHART}</p> }.into_any()
        };

        view! {
            <figure class={format!("chart chart-{}", kind.as_str())}>
                <figcaption>{series.title.clone()}</figcaption>
                {body}
            </figure>
        }
        .to_html()
    }
}
