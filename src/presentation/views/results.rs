use leptos::prelude::*;

use super::metrics_panel::MetricCard;
use super::notices::notice_view;
use crate::application::ports::ChartRenderer;
use crate::application::services::{
    AnalysisReport, ClassificationView, ComprehensiveReport, EntitiesView, SectionOutcome,
    SummaryView,
};
use crate::domain::{ChartKind, DisplayOptions, Entity, Notice, WORD_CLOUD_TITLE};

const NO_ENTITIES: &str = "لم يتم العثور على كيانات في النص";
const NO_ENTITIES_SHORT: &str = "لم يتم العثور على كيانات";

/// Chart markup produced by a [`ChartRenderer`], inserted as-is.
fn chart(html: String) -> AnyView {
    view! { <div class="chart-slot" inner_html={html}></div> }.into_any()
}

pub fn report_view(
    report: &AnalysisReport,
    options: &DisplayOptions,
    charts: &dyn ChartRenderer,
) -> AnyView {
    let body = match report {
        AnalysisReport::Classification(outcome) => {
            outcome_view(outcome, |view| classification(view, options, charts))
        }
        AnalysisReport::Summarization(outcome) => outcome_view(outcome, summary),
        AnalysisReport::Entities(outcome) => {
            outcome_view(outcome, |view| entities(view, options, charts))
        }
        AnalysisReport::Comprehensive(report) => comprehensive(report, charts),
    };

    view! {
        <section class="results">
            <h2>{report.mode().heading()}</h2>
            {body}
        </section>
    }
    .into_any()
}

/// Unavailable and failed sections collapse into an error notice.
fn outcome_view<T>(outcome: &SectionOutcome<T>, ready: impl FnOnce(&T) -> AnyView) -> AnyView {
    match outcome {
        SectionOutcome::Ready(view) => ready(view),
        SectionOutcome::Unavailable(message) | SectionOutcome::Failed(message) => {
            notice_view(&Notice::error(message.clone()))
        }
    }
}

fn confidence_bar(confidence: Option<f64>) -> Option<AnyView> {
    confidence.map(|confidence| {
        view! {
            <progress value={format!("{:.4}", confidence)} max="1"></progress>
            <p>{format!("مستوى الثقة: {:.2}%", confidence * 100.0)}</p>
        }
        .into_any()
    })
}

fn classification(
    view: &ClassificationView,
    options: &DisplayOptions,
    charts: &dyn ChartRenderer,
) -> AnyView {
    let category = notice_view(&Notice::success(format!("الفئة المتوقعة: {}", view.category)));
    let probabilities = view
        .probabilities
        .as_ref()
        .map(|series| chart(charts.render(series, options.chart_kind)));

    view! {
        <div class="columns">
            <div class="col-narrow">{category}{confidence_bar(view.confidence)}</div>
            <div class="col-narrow">{probabilities}</div>
        </div>
    }
    .into_any()
}

fn summary(view: &SummaryView) -> AnyView {
    let stats = view.stats.as_ref().map(|s| {
        view! {
            <MetricCard label="الطول الأصلي" value={format!("{} كلمة", s.original_words)}/>
            <MetricCard label="طول الملخص" value={format!("{} كلمة", s.summary_words)}/>
            <MetricCard label="نسبة الضغط" value={format!("{:.1}%", s.compression_ratio)}/>
        }
    });

    view! {
        <div class="columns">
            <div class="col-wide">
                <h3>"الملخص:"</h3>
                <p dir="auto">{view.summary.clone()}</p>
            </div>
            <div class="col-narrow">{stats}</div>
        </div>
    }
    .into_any()
}

fn entities(view: &EntitiesView, options: &DisplayOptions, charts: &dyn ChartRenderer) -> AnyView {
    if view.is_empty() {
        return notice_view(&Notice::info(NO_ENTITIES));
    }

    let labels = view
        .label_chart
        .as_ref()
        .map(|series| chart(charts.render(series, options.chart_kind)));

    view! { {entity_table(&view.entities)}{labels} }.into_any()
}

/// Optional columns appear only when some entity carries them.
fn entity_table(entities: &[Entity]) -> AnyView {
    let has_text = entities.iter().any(|e| e.text.is_some());
    let has_span = entities.iter().any(|e| e.start.is_some() || e.end.is_some());
    let has_score = entities.iter().any(|e| e.score.is_some());

    let rows = entities
        .iter()
        .map(|e| {
            let text = has_text.then(|| view! { <td>{e.text.clone().unwrap_or_default()}</td> });
            let span = has_span.then(|| {
                view! { <td>{optional(e.start)}</td><td>{optional(e.end)}</td> }
            });
            let score = has_score.then(|| {
                view! { <td>{e.score.map(|s| format!("{:.3}", s)).unwrap_or_default()}</td> }
            });
            view! { <tr>{text}<td>{e.label.clone()}</td>{span}{score}</tr> }
        })
        .collect_view();

    view! {
        <table class="entities">
            <thead>
                <tr>
                    {has_text.then(|| view! { <th>"النص"</th> })}
                    <th>"النوع"</th>
                    {has_span.then(|| view! { <th>"البداية"</th><th>"النهاية"</th> })}
                    {has_score.then(|| view! { <th>"الثقة"</th> })}
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}

fn optional(value: Option<usize>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn comprehensive(report: &ComprehensiveReport, charts: &dyn ChartRenderer) -> AnyView {
    let classification = outcome_view(&report.classification, |view| {
        view! {
            {notice_view(&Notice::success(format!("الفئة: {}", view.category)))}
            {confidence_bar(view.confidence)}
        }
        .into_any()
    });

    let summary = outcome_view(&report.summary, |view| {
        view! { <p dir="auto">{view.summary.clone()}</p> }.into_any()
    });

    let entities = outcome_view(&report.entities, |view| {
        if view.is_empty() {
            notice_view(&Notice::info(NO_ENTITIES_SHORT))
        } else {
            entity_table(&view.entities)
        }
    });

    let word_cloud = report.word_cloud.as_ref().map(|outcome| {
        outcome_view(outcome, |image| {
            view! {
                <figure>
                    <figcaption>{WORD_CLOUD_TITLE}</figcaption>
                    <img
                        class="word-cloud"
                        src={image.data_uri.clone()}
                        width={image.width.to_string()}
                        height={image.height.to_string()}
                        alt={WORD_CLOUD_TITLE}
                    />
                </figure>
            }
            .into_any()
        })
    });

    let top_words = chart(charts.render(&report.top_words, ChartKind::Bar));

    view! {
        <div class="tabs">
            <div class="tab"><h3>"التصنيف"</h3>{classification}</div>
            <div class="tab"><h3>"التلخيص"</h3>{summary}</div>
            <div class="tab"><h3>"الكيانات"</h3>{entities}</div>
            <div class="tab"><h3>"إحصائيات إضافية"</h3>{top_words}{word_cloud}</div>
        </div>
    }
    .into_any()
}
