//! プレビューコンポーネント
//!
//! サムネイルをクリックすると拡大表示のモーダルを開く

use leptos::prelude::*;
use voucher_reader_common::{messages, PreviewKind};

/// 画像は `<img>`、それ以外は `<embed>` で描画
fn preview_media(url: String, kind: PreviewKind, alt: &'static str, class: &'static str) -> AnyView {
    match kind {
        PreviewKind::Image => view! { <img src=url alt=alt class=class /> }.into_any(),
        PreviewKind::Document => {
            view! { <embed src=url type={PreviewKind::EMBED_TYPE} class=class /> }.into_any()
        }
    }
}

#[component]
pub fn FilePreview<F>(
    file_name: String,
    kind: PreviewKind,
    url: String,
    on_open: F,
) -> impl IntoView
where
    F: Fn(()) + 'static,
{
    view! {
        <div class="file-preview">
            <p>
                <strong>{messages::SELECTED_FILE}</strong>
                " "
                {file_name}
            </p>
            <p>{messages::PREVIEW}</p>
            <div class="preview-thumb" on:click=move |_| on_open(())>
                {preview_media(url, kind, messages::PREVIEW_ALT, "preview-small")}
            </div>
        </div>
    }
}

/// 拡大表示
///
/// 背景か閉じるボタンで閉じる。中身のクリックは背景に伝えない
#[component]
pub fn PreviewModal<F>(kind: PreviewKind, url: String, on_close: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let on_close_button = on_close.clone();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close(())>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| on_close_button(())>
                    "×"
                </button>
                {preview_media(url, kind, messages::PREVIEW_ZOOM_ALT, "preview-large")}
            </div>
        </div>
    }
}
