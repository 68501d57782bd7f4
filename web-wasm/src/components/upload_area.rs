//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップまたはクリックでファイルを1件選ぶ

use leptos::html;
use leptos::prelude::*;
use voucher_reader_common::{messages, AcceptPolicy, SelectedFile};
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

/// FileList を配列にする
pub fn files_of(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// ブラウザの File を選択ファイルにする
pub fn selected_from_file(file: File) -> SelectedFile<File> {
    let name = file.name();
    let mime_type = file.type_();
    let size_bytes = file.size() as u64;
    SelectedFile::new(name, mime_type, size_bytes, file)
}

fn drop_zone_class(is_dragover: bool) -> &'static str {
    if is_dragover {
        "upload-area dragover"
    } else {
        "upload-area"
    }
}

#[component]
pub fn UploadArea<F>(policy: AcceptPolicy, on_files: F) -> impl IntoView
where
    F: Fn(Vec<File>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let on_drop = {
        let on_files = on_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                on_files(files_of(&files));
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // 隠しinputに委譲
    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            on_files(files_of(&files));
        }
        // 同じファイルを選び直せるように
        input.set_value("");
    };

    view! {
        <div
            class=move || drop_zone_class(is_dragover.get())
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"🧾"</div>
            <p>
                <strong>{messages::DROP_PROMPT_STRONG}</strong>
                " "
                {messages::DROP_PROMPT}
            </p>
            <p class="text-muted">{policy.hint()}</p>
        </div>
        <input
            type="file"
            class="hidden"
            accept=policy.accept_attr()
            node_ref=input_ref
            on:change=on_change
        />
    }
}
