//! 端末用の結果パネル
//!
//! 抽出結果の表示と、Copiar / Actualizar / Remover の選択

use crate::error::Result;
use dialoguer::Select;
use voucher_reader_common::{messages, ExtractionResult, Phase, UploadSession};

/// 利用者の操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Extract,
    Refresh,
    Copy,
    Remove,
    Quit,
}

impl PanelAction {
    pub fn label(&self) -> &'static str {
        match self {
            PanelAction::Extract => messages::ACTION_EXTRACT,
            PanelAction::Refresh => messages::ACTION_REFRESH,
            PanelAction::Copy => messages::ACTION_COPY,
            PanelAction::Remove => messages::ACTION_REMOVE,
            PanelAction::Quit => "Salir",
        }
    }

    /// 状態ごとに選べる操作
    pub fn available(phase: Phase) -> Vec<PanelAction> {
        match phase {
            Phase::ResultReady => vec![
                PanelAction::Copy,
                PanelAction::Refresh,
                PanelAction::Remove,
                PanelAction::Quit,
            ],
            Phase::FileSelected => vec![PanelAction::Extract, PanelAction::Remove, PanelAction::Quit],
            Phase::Empty | Phase::Extracting => vec![PanelAction::Quit],
        }
    }
}

/// 4項目を表示用に整形
pub fn render_result(result: &ExtractionResult) -> String {
    let mut lines = vec![messages::FILE_INFO.to_string()];
    for (label, value) in result.fields() {
        lines.push(format!("  {}: {}", label, value));
    }
    lines.join("\n")
}

/// 通知・エラー枠を表示用に整形（何もなければ空）
pub fn render_status<H>(session: &UploadSession<H>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(notice) = session.notice() {
        lines.push(format!("✔ {}", notice));
    }
    if let Some(error) = session.clipboard_error() {
        lines.push(format!("✖ {}", error.message));
    }
    if let Some(error) = session.error() {
        lines.push(format!("✖ {}", error.message));
    }
    lines
}

/// 操作を選ばせる（Esc は終了扱い）
pub fn choose_action(phase: Phase) -> Result<PanelAction> {
    let actions = PanelAction::available(phase);
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("Acción")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection
        .and_then(|i| actions.get(i).copied())
        .unwrap_or(PanelAction::Quit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use voucher_reader_common::SelectedFile;

    #[test]
    fn test_render_result_verbatim() {
        let result = ExtractionResult {
            name: "Juan".to_string(),
            amount: "100.00".to_string(),
            date: "2024-01-01".to_string(),
            operation_number: "OP123".to_string(),
        };
        let text = render_result(&result);
        assert!(text.contains("Nombre: Juan"));
        assert!(text.contains("Monto: 100.00"));
        assert!(text.contains("Fecha: 2024-01-01"));
        assert!(text.contains("Número de operación: OP123"));
    }

    #[test]
    fn test_available_actions() {
        assert_eq!(PanelAction::available(Phase::ResultReady)[0], PanelAction::Copy);
        assert!(PanelAction::available(Phase::FileSelected).contains(&PanelAction::Extract));
        assert!(!PanelAction::available(Phase::FileSelected).contains(&PanelAction::Copy));
        assert_eq!(PanelAction::available(Phase::Empty), vec![PanelAction::Quit]);
    }

    #[test]
    fn test_render_status_shows_validation_error() {
        let mut session = UploadSession::default();
        session.accept(vec![SelectedFile::new("a.txt", "text/plain", 1, ())]);
        let lines = render_status(&session);
        assert_eq!(lines, vec![format!("✖ {}", messages::TYPE_NOT_ALLOWED)]);
    }
}
