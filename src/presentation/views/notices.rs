use leptos::prelude::*;

use crate::domain::Notice;

pub fn notice_view(notice: &Notice) -> AnyView {
    view! {
        <div class={format!("notice notice-{}", notice.level.as_str())} role="status">
            {notice.message.clone()}
        </div>
    }
    .into_any()
}

#[component]
pub fn Notices(notices: Vec<Notice>) -> impl IntoView {
    notices.iter().map(notice_view).collect_view()
}
