use leptos::prelude::*;

use crate::domain::{AnalysisMode, ChartKind, DisplayOptions};

const FEATURES: [&str; 6] = [
    "تصنيف الأخبار إلى فئات مختلفة",
    "تلخيص النصوص الطويلة",
    "استخراج الكيانات المسماة",
    "تحليل شامل للنصوص",
    "سحابة الكلمات",
    "إحصائيات تفصيلية",
];

#[component]
pub fn Sidebar(mode: AnalysisMode, options: DisplayOptions) -> impl IntoView {
    let mode_options = AnalysisMode::ALL
        .iter()
        .map(|m| {
            view! { <option value={m.as_str()} selected={*m == mode}>{m.label()}</option> }
        })
        .collect_view();

    let chart_options = ChartKind::ALL
        .iter()
        .map(|k| {
            view! {
                <option value={k.as_str()} selected={*k == options.chart_kind}>{k.label()}</option>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <h2>"🎛️ لوحة التحكم"</h2>
            <hr/>
            <label for="mode">"نوع التحليل"</label>
            <select id="mode" name="mode">{mode_options}</select>
            <h3>"⚙️ الإعدادات"</h3>
            <label>
                <input type="checkbox" name="show_confidence" value="on" checked={options.show_confidence}/>
                " عرض مستوى الثقة"
            </label>
            <br/>
            <label>
                <input type="checkbox" name="show_stats" value="on" checked={options.show_stats}/>
                " عرض الإحصائيات"
            </label>
            <br/>
            <label>
                <input type="checkbox" name="show_visualizations" value="on" checked={options.show_visualizations}/>
                " عرض المخططات"
            </label>
            <br/>
            <label for="chart_kind">"نوع المخطط"</label>
            <select id="chart_kind" name="chart_kind">{chart_options}</select>
            <hr/>
            <h3>"📊 حول التطبيق"</h3>
            <div class="notice notice-info">
                <strong>"المميزات:"</strong>
                <ul>{FEATURES.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}</ul>
            </div>
        </aside>
    }
}
