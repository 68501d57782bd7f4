//! arboardによるシステムクリップボード書き込み

use std::cell::RefCell;
use std::time::Duration;
use voucher_reader_common::{ClipboardWriter, Error, Result};

/// コピーした内容をこのプロセス自身が配信する環境か
///
/// Linux(X11/Wayland)ではプロセスが終わると内容も消える
pub const SERVES_SELECTION: bool = cfg!(target_os = "linux");

/// システムクリップボード
///
/// ハンドルは値が生きている間だけ保持する。
/// 単発コマンドでは終了前に [`SystemClipboard::keep_alive`] を呼ぶ
#[derive(Default)]
pub struct SystemClipboard {
    inner: RefCell<Option<arboard::Clipboard>>,
    last_text: RefCell<Option<String>>,
}

impl SystemClipboard {
    /// 一度でもコピーに成功したか
    pub fn has_text(&self) -> bool {
        self.last_text.borrow().is_some()
    }

    /// 最後にコピーした内容を配信し続ける
    ///
    /// 他のアプリがクリップボードを取得する（クリップボードマネージャを含む）か
    /// `timeout` が過ぎるまで戻らない。Linux以外、または未コピーなら何もしない
    pub fn keep_alive(&self, timeout: Duration) -> Result<()> {
        let Some(text) = self.last_text.borrow().clone() else {
            return Ok(());
        };
        hold_selection(text, timeout)
    }
}

impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let mut slot = self.inner.borrow_mut();
        if slot.is_none() {
            *slot = Some(arboard::Clipboard::new().map_err(clipboard_error)?);
        }
        if let Some(clipboard) = slot.as_mut() {
            clipboard.set_text(text.to_owned()).map_err(clipboard_error)?;
        }
        *self.last_text.borrow_mut() = Some(text.to_owned());
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn hold_selection(text: String, timeout: Duration) -> Result<()> {
    use arboard::SetExtLinux;
    use std::sync::mpsc;

    // 所有権を失うまで戻らないので別スレッドで配信し、呼び出し側は時間で打ち切る
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let outcome = arboard::Clipboard::new().and_then(|mut c| c.set().wait().text(text));
        let _ = tx.send(outcome);
    });

    match rx.recv_timeout(timeout) {
        Ok(outcome) => outcome.map_err(clipboard_error),
        Err(_) => {
            tracing::debug!("clipboard hold timed out");
            Ok(())
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn hold_selection(_text: String, _timeout: Duration) -> Result<()> {
    Ok(())
}

fn clipboard_error(e: arboard::Error) -> Error {
    Error::Clipboard(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_alive_without_copy_returns_immediately() {
        let clipboard = SystemClipboard::default();
        assert!(!clipboard.has_text());

        let started = std::time::Instant::now();
        clipboard.keep_alive(Duration::from_secs(30)).unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
