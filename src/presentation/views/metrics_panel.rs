use leptos::prelude::*;

use crate::domain::TextMetrics;

#[component]
pub fn MetricCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="metric-card">
            <div class="metric-label">{label}</div>
            <div class="metric-value">{value}</div>
        </div>
    }
}

/// Quick metrics column. Empty when there is no text.
#[component]
pub fn MetricsPanel(metrics: Option<TextMetrics>) -> impl IntoView {
    let body = metrics.map(|m| {
        view! {
            <MetricCard label="عدد الكلمات" value={m.word_count.to_string()}/>
            <MetricCard label="عدد الأحرف" value={m.char_count.to_string()}/>
            <MetricCard label="عدد الجمل" value={m.sentence_count.to_string()}/>
            <p>
                <strong>"سهولة القراءة:"</strong>
                " "
                <span style={format!("color: {}", m.readability.color())}>{m.readability.label()}</span>
            </p>
        }
    });

    view! {
        <section class="col-narrow" id="quick-metrics">
            <h2>"📊 المقاييس السريعة"</h2>
            {body}
        </section>
    }
}
