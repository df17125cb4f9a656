use leptos::prelude::*;

use super::input_panel::InputPanel;
use super::metrics_panel::MetricsPanel;
use super::notices::Notices;
use super::results::report_view;
use super::sidebar::Sidebar;
use super::styles::{ANALYZE_TOGGLE_SCRIPT, STYLESHEET};
use crate::application::ports::ChartRenderer;
use crate::application::services::AnalysisReport;
use crate::domain::{Notice, TextMetrics};
use crate::presentation::handlers::FormState;

const PAGE_TITLE: &str = "محلل الأخبار الذكي";

const USAGE_TIPS: [(&str, &str); 5] = [
    ("للحصول على أفضل النتائج:", "استخدم نصوص واضحة ومكتملة"),
    ("التصنيف:", "يعمل بشكل أفضل مع المقالات الإخبارية الكاملة"),
    ("التلخيص:", "مناسب للنصوص الطويلة (أكثر من 100 كلمة)"),
    ("استخراج الكيانات:", "يتعرف على الأشخاص، الأماكن، والمنظمات"),
    ("الأداء:", "قد يستغرق التحليل بضع ثوان حسب طول النص"),
];

#[component]
fn Footer() -> impl IntoView {
    let tips = USAGE_TIPS
        .iter()
        .map(|(topic, tip)| view! { <li><strong>{*topic}</strong>{format!(" {}", tip)}</li> })
        .collect_view();

    view! {
        <footer>
            <h3>"💡 نصائح للاستخدام"</h3>
            <details>
                <summary>"اضغط لعرض النصائح"</summary>
                <ul>{tips}</ul>
            </details>
            <hr/>
            <p><strong>"تم تطويره بواسطة:"</strong>" فريق تطوير محلل الأخبار الذكي"</p>
        </footer>
    }
}

/// Everything one render of the dashboard shows.
pub struct DashboardPage {
    pub form: FormState,
    pub notices: Vec<Notice>,
    pub metrics: Option<TextMetrics>,
    pub report: Option<AnalysisReport>,
}

impl DashboardPage {
    /// The trigger stays disabled until there is text to analyse, whichever
    /// way it arrived. A freshly picked file enables it client-side.
    pub fn can_analyze(&self) -> bool {
        !self.form.text.is_empty()
    }

    pub fn render(&self, charts: &dyn ChartRenderer) -> String {
        let form = self.form.clone();
        let notices = self.notices.clone();
        let metrics = self.metrics.clone();
        let results = self
            .report
            .as_ref()
            .map(|report| report_view(report, &self.form.options, charts));
        let disabled = !self.can_analyze();

        let body = Owner::new().with(|| {
            view! {
                <html lang="ar" dir="rtl">
                    <head>
                        <meta charset="utf-8"/>
                        <meta name="viewport" content="width=device-width, initial-scale=1"/>
                        <title>{PAGE_TITLE}</title>
                        <style inner_html={STYLESHEET}></style>
                    </head>
                    <body>
                        <form id="dashboard" method="post" action="/" enctype="multipart/form-data">
                            <div class="layout">
                                <Sidebar mode={form.mode} options={form.options}/>
                                <main class="main">
                                    <h1 class="main-header">{format!("📰 {}", PAGE_TITLE)}</h1>
                                    <hr/>
                                    <Notices notices={notices}/>
                                    <div class="columns">
                                        <InputPanel form={form}/>
                                        <MetricsPanel metrics={metrics}/>
                                    </div>
                                    <p>
                                        <button
                                            type="submit"
                                            id="analyze"
                                            name="analyze"
                                            value="1"
                                            class="primary"
                                            disabled={disabled}
                                        >
                                            "🚀 بدء التحليل"
                                        </button>
                                    </p>
                                    {results}
                                    <Footer/>
                                </main>
                            </div>
                        </form>
                        <script inner_html={ANALYZE_TOGGLE_SCRIPT}></script>
                    </body>
                </html>
            }
            .to_html()
        });

        format!("<!DOCTYPE html>{}", body)
    }
}
