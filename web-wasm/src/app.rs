//! メインアプリケーションコンポーネント
//!
//! 選択 → 抽出 → 結果表示 → コピー・保存 の流れをまとめる。
//! 状態は `UploadSession` ひとつに持たせ、画面はそこから導出する

use leptos::prelude::*;
use leptos::task::spawn_local;
use voucher_reader_common::{
    extract_with_retry, messages, save_fields, AcceptPolicy, PreviewKind, UploadSession,
};
use web_sys::{File, Url};

use crate::api::{FetchVoucherApi, NavigatorClipboard};
use crate::components::{
    file_info::FileInfo,
    file_preview::{FilePreview, PreviewModal},
    header::Header,
    upload_area::{selected_from_file, UploadArea},
};

/// web_sys::File を含むのでスレッドローカルに置く
pub type SessionSignal = RwSignal<UploadSession<File>, LocalStorage>;

fn object_url(file: &File) -> Option<String> {
    Url::create_object_url_with_blob(file).ok()
}

fn revoke_object_url(url: Option<String>) {
    if let Some(url) = url {
        let _ = Url::revoke_object_url(&url);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let policy = AcceptPolicy::default();
    let session: SessionSignal = RwSignal::new_local(UploadSession::new(policy));
    // プレビュー用のオブジェクトURL（ファイルを差し替えたら解放）
    let preview_url = RwSignal::new(None::<String>);

    let selected = Memo::new(move |_| {
        session.with(|s| {
            s.file()
                .map(|f| (f.name.clone(), PreviewKind::for_mime(&f.mime_type)))
        })
    });
    let result = Memo::new(move |_| session.with(|s| s.result().cloned()));
    let is_preview_open = Memo::new(move |_| session.with(|s| s.is_preview_open()));
    let is_uploading = Signal::derive(move || session.with(|s| s.is_uploading()));

    let error_message = move || session.with(|s| s.error().map(|e| e.message.clone()));
    let clipboard_message = move || session.with(|s| s.clipboard_error().map(|e| e.message.clone()));
    let notice = move || session.with(|s| s.notice().map(str::to_string));

    // ファイル選択ハンドラ
    let on_files = move |files: Vec<File>| {
        let candidates = files.into_iter().map(selected_from_file).collect::<Vec<_>>();
        if session.try_update(|s| s.accept(candidates)).unwrap_or(false) {
            let url = session.with_untracked(|s| s.file().and_then(|f| object_url(&f.handle)));
            revoke_object_url(preview_url.get_untracked());
            preview_url.set(url);
        }
    };

    // 抽出ハンドラ（Extraer / Actualizar）
    let on_extract = move |_: ()| {
        let Some(request) = session.try_update(|s| s.begin_extraction()).flatten() else {
            return;
        };
        spawn_local(async move {
            let api = FetchVoucherApi::default();
            let outcome = extract_with_retry(&api, &request.file, request.retry_available).await;
            session.update(|s| s.finish_extraction(&request, outcome));
        });
    };

    // コピー・保存ハンドラ
    let on_copy = move |_: ()| {
        let Some(data) = session.try_update(|s| s.begin_save()).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = save_fields(&FetchVoucherApi::default(), &NavigatorClipboard, &data).await;
            session.update(|s| s.finish_save(outcome));
        });
    };

    // 破棄ハンドラ
    let on_remove = move |_: ()| {
        session.update(|s| s.discard());
        revoke_object_url(preview_url.get_untracked());
        preview_url.set(None);
    };

    let on_open_preview = move |_: ()| {
        session.update(|s| {
            s.open_preview();
        });
    };

    let on_close_preview = move |_: ()| {
        session.update(|s| s.close_preview());
    };

    view! {
        <div class="container">
            <Header />

            <main class="voucher-upload">
                {move || error_message().map(|msg| view! { <div class="alert alert-error">{msg}</div> })}
                {move || clipboard_message().map(|msg| view! { <div class="alert alert-warning">{msg}</div> })}
                {move || notice().map(|msg| view! { <div class="alert alert-success">{msg}</div> })}

                {move || match selected.get() {
                    Some((name, kind)) => view! {
                        <FilePreview
                            file_name=name
                            kind=kind
                            url=preview_url.get().unwrap_or_default()
                            on_open=on_open_preview
                        />
                    }
                    .into_any(),
                    None => view! { <UploadArea policy=policy on_files=on_files /> }.into_any(),
                }}

                {move || match result.get() {
                    Some(data) => view! {
                        <FileInfo
                            result=data
                            is_uploading=is_uploading
                            on_remove=on_remove
                            on_refresh=on_extract
                            on_copy=on_copy
                        />
                    }
                    .into_any(),
                    None if selected.with(Option::is_some) => view! {
                        <div class="actions">
                            <button class="btn btn-danger" on:click=move |_| on_remove(())>
                                {messages::ACTION_REMOVE}
                            </button>
                            <button
                                class="btn btn-primary"
                                disabled=move || is_uploading.get()
                                on:click=move |_| on_extract(())
                            >
                                {move || {
                                    if is_uploading.get() {
                                        messages::ACTION_EXTRACTING
                                    } else {
                                        messages::ACTION_EXTRACT
                                    }
                                }}
                            </button>
                        </div>
                    }
                    .into_any(),
                    None => ().into_any(),
                }}

                {move || match (is_preview_open.get(), selected.get(), preview_url.get()) {
                    (true, Some((_, kind)), Some(url)) => Some(view! {
                        <PreviewModal kind=kind url=url on_close=on_close_preview />
                    }),
                    _ => None,
                }}
            </main>
        </div>
    }
}
