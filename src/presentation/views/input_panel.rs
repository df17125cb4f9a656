use leptos::prelude::*;

use crate::domain::InputMethod;
use crate::presentation::handlers::{FormState, UPLOADED_TEXT_FIELD};

#[component]
pub fn InputPanel(form: FormState) -> impl IntoView {
    let methods = InputMethod::ALL
        .iter()
        .map(|m| {
            view! {
                <label>
                    <input type="radio" name="input_method" value={m.as_str()} checked={*m == form.method}/>
                    {format!(" {} ", m.label())}
                </label>
            }
        })
        .collect_view();

    let widget = match form.method {
        InputMethod::Direct => view! {
            <label for="text">"أدخل النص للتحليل:"</label>
            <textarea id="text" name="text" dir="auto" placeholder="اكتب أو الصق النص هنا...">
                {form.text.clone()}
            </textarea>
        }
        .into_any(),
        InputMethod::Upload => {
            let carried = (!form.text.is_empty()).then(|| {
                view! {
                    <input type="hidden" name={UPLOADED_TEXT_FIELD} value={form.text.clone()}/>
                    <details>
                        <summary>"معاينة النص"</summary>
                        <pre dir="auto">{form.text.clone()}</pre>
                    </details>
                }
            });
            view! {
                <label for="file">"اختر ملف نصي"</label>
                <input type="file" id="file" name="file" accept=".txt,.docx,.pdf"/>
                {carried}
            }
            .into_any()
        }
        InputMethod::Url => view! {
            <label for="url">"أدخل رابط المقال:"</label>
            <input type="url" id="url" name="url" value={form.url.clone()}/>
            <button type="submit" name="fetch_url" value="1">"استخراج النص من URL"</button>
        }
        .into_any(),
    };

    view! {
        <section class="col-wide">
            <h2>"📝 إدخال النص"</h2>
            <fieldset>
                <legend>"طريقة الإدخال:"</legend>
                {methods}
            </fieldset>
            {widget}
        </section>
    }
}
