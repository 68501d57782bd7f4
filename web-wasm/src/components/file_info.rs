//! 抽出結果パネル

use leptos::prelude::*;
use voucher_reader_common::{messages, ExtractionResult};

#[component]
pub fn FileInfo<FR, FU, FC>(
    result: ExtractionResult,
    is_uploading: Signal<bool>,
    on_remove: FR,
    on_refresh: FU,
    on_copy: FC,
) -> impl IntoView
where
    FR: Fn(()) + 'static,
    FU: Fn(()) + 'static,
    FC: Fn(()) + 'static,
{
    let rows = result
        .fields()
        .into_iter()
        .map(|(label, value)| {
            let value = value.to_string();
            view! {
                <div class="field-row">
                    <span class="field-label">{label}</span>
                    <span class="field-value">{value}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="file-info">
            <h3>{messages::FILE_INFO}</h3>
            <div class="fields">{rows}</div>

            <div class="actions">
                <button class="btn btn-danger" on:click=move |_| on_remove(())>
                    {messages::ACTION_REMOVE}
                </button>
                <button
                    class="btn btn-secondary"
                    disabled=move || is_uploading.get()
                    on:click=move |_| on_refresh(())
                >
                    {move || {
                        if is_uploading.get() {
                            messages::ACTION_EXTRACTING
                        } else {
                            messages::ACTION_REFRESH
                        }
                    }}
                </button>
                <button class="btn btn-primary" on:click=move |_| on_copy(())>
                    {messages::ACTION_COPY}
                </button>
            </div>
        </div>
    }
}
