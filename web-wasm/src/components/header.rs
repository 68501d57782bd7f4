//! ヘッダーコンポーネント

use leptos::prelude::*;
use voucher_reader_common::messages;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>{messages::TITLE}</h1>
        </header>
    }
}
