use leptos::prelude::*;

use super::palette::{EMPTY_CHART, format_value, palette_hex};
use crate::application::ports::ChartRenderer;
use crate::domain::{ChartKind, ChartSeries};

/// Plain HTML/CSS charts used when the SVG backend is not built in or not
/// selected. Understands the same chart kinds.
#[derive(Debug, Default)]
pub struct HtmlChartRenderer;

impl HtmlChartRenderer {
    fn bar_rows(series: &ChartSeries, variant: &'static str) -> AnyView {
        let max = series.max_value();
        series
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let width = if max > 0.0 {
                    point.value.max(0.0) / max * 100.0
                } else {
                    0.0
                };
                let fill = format!("width:{:.1}%;background:{}", width, palette_hex(i));
                view! {
                    <div class={format!("hbar-row {}", variant)}>
                        <span class="hbar-label">{point.label.clone()}</span>
                        <div class="hbar-track"><div class="hbar-fill" style={fill}></div></div>
                        <span class="hbar-value">{format_value(point.value)}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    }

    fn share_table(series: &ChartSeries) -> AnyView {
        let total: f64 = series.points.iter().map(|p| p.value.max(0.0)).sum();
        let rows = series
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let share = if total > 0.0 {
                    point.value.max(0.0) / total * 100.0
                } else {
                    0.0
                };
                view! {
                    <tr>
                        <td>
                            <span class="swatch" style={format!("background:{}", palette_hex(i))}></span>
                            {point.label.clone()}
                        </td>
                        <td>{format_value(point.value)}</td>
                        <td>{format!("{:.1}%", share)}</td>
                    </tr>
                }
            })
            .collect_view();

        view! {
            <table class="chart-table">
                <thead><tr><th></th><th>"القيمة"</th><th>"النسبة"</th></tr></thead>
                <tbody>{rows}</tbody>
            </table>
        }
        .into_any()
    }
}

impl ChartRenderer for HtmlChartRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, series: &ChartSeries, kind: ChartKind) -> String {
        let body = if series.is_empty() {
            view! { <p class="chart-empty">{EMPTY_CHART}</p> }.into_any()
        } else {
            match kind {
                ChartKind::Bar => Self::bar_rows(series, "hbar-solid"),
                ChartKind::Line => Self::bar_rows(series, "hbar-marker"),
                ChartKind::Area => Self::bar_rows(series, "hbar-soft"),
                ChartKind::Pie => Self::share_table(series),
            }
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
