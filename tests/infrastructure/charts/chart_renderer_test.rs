use khabar::application::ports::ChartRenderer;
use khabar::domain::{ChartKind, ChartPoint, ChartSeries};
use khabar::infrastructure::charts::{ChartBackendFactory, HtmlChartRenderer};
use khabar::presentation::config::ChartBackend;

fn series() -> ChartSeries {
    ChartSeries::new(
        "توزيع",
        vec![
            ChartPoint {
                label: "رياضة".to_string(),
                value: 3.0,
            },
            ChartPoint {
                label: "<script>".to_string(),
                value: 1.0,
            },
        ],
    )
}

#[test]
fn given_empty_series_when_rendering_then_shows_placeholder() {
    let html = HtmlChartRenderer.render(&ChartSeries::new("فارغ", vec![]), ChartKind::Bar);

    assert!(html.contains("chart-empty"));
    assert!(html.contains("<figcaption>فارغ</figcaption>"));
}

#[test]
fn given_pie_kind_when_rendering_html_then_shows_shares() {
    let html = HtmlChartRenderer.render(&series(), ChartKind::Pie);

    assert!(html.contains("chart-pie"));
    assert!(html.contains("75.0%"));
    assert!(html.contains("25.0%"));
}

#[test]
fn given_markup_in_labels_when_rendering_html_then_labels_are_escaped() {
    for kind in ChartKind::ALL {
        let html = HtmlChartRenderer.render(&series(), kind);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

#[test]
fn given_html_backend_when_creating_then_html_renderer_is_selected() {
    let renderer = ChartBackendFactory::create(ChartBackend::Html);

    assert_eq!(renderer.name(), "html");
}

#[cfg(feature = "svg-charts")]
mod svg {
    use super::*;
    use khabar::infrastructure::charts::SvgChartRenderer;

    #[test]
    fn given_svg_backend_when_creating_then_svg_renderer_is_selected() {
        assert_eq!(ChartBackendFactory::create(ChartBackend::Svg).name(), "svg");
    }

    #[test]
    fn given_each_kind_when_rendering_then_draws_matching_shapes() {
        let renderer = SvgChartRenderer;

        assert!(renderer.render(&series(), ChartKind::Bar).contains("<rect"));
        assert!(renderer.render(&series(), ChartKind::Line).contains("<polyline"));
        assert!(renderer.render(&series(), ChartKind::Area).contains("<polygon"));
        assert!(renderer.render(&series(), ChartKind::Pie).contains("<polygon"));
    }

    #[test]
    fn given_markup_in_labels_when_rendering_svg_then_labels_are_escaped() {
        for kind in ChartKind::ALL {
            assert!(!SvgChartRenderer.render(&series(), kind).contains("<script>"));
        }
        let pie = SvgChartRenderer.render(&series(), ChartKind::Pie);
        assert!(pie.contains("&lt;script&gt; (25.0%)"));
    }

    #[test]
    fn given_single_slice_when_rendering_pie_then_slice_takes_whole_share() {
        let single = ChartSeries::new(
            "واحد",
            vec![ChartPoint {
                label: "كل".to_string(),
                value: 5.0,
            }],
        );

        let svg = SvgChartRenderer.render(&single, ChartKind::Pie);

        assert!(svg.contains("<polygon"));
        assert!(svg.contains("كل (100.0%)"));
    }

    #[test]
    fn given_empty_series_when_rendering_svg_then_shows_placeholder() {
        let html = SvgChartRenderer.render(&ChartSeries::new("فارغ", vec![]), ChartKind::Line);

        assert!(html.contains("chart-empty"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn given_all_zero_values_when_rendering_then_output_stays_finite() {
        let zeros = ChartSeries::new(
            "صفر",
            vec![ChartPoint {
                label: "a".to_string(),
                value: 0.0,
            }],
        );

        for kind in ChartKind::ALL {
            let svg = SvgChartRenderer.render(&zeros, kind);
            assert!(!svg.contains("NaN"));
            assert!(!svg.contains("inf"));
        }
    }
}
