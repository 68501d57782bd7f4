//! 画面表示メッセージ（スペイン語）
//!
//! Webとコマンドラインで同じ文言を使う

/// 画像以外のファイルを拒否したとき
pub const TYPE_NOT_ALLOWED: &str = "Solo se permiten archivos de imagen (JPG, PNG)";

/// PDF許可時に画像・PDF以外を拒否したとき
pub const TYPE_NOT_ALLOWED_WITH_PDF: &str =
    "Solo se permiten archivos de imagen o PDF (JPG, PNG, PDF)";

/// ファイル未選択
pub const NO_FILE: &str = "No se seleccionó ningún archivo";

/// HTTPステータスが2xx以外
pub const SERVER_RESPONSE_ERROR: &str = "Error en la respuesta del servidor";

/// 接続失敗
pub const CONNECTION_FAILED: &str =
    "No se pudo conectar con el servidor. Por favor, inténtelo de nuevo más tarde.";

/// 抽出失敗（メッセージなし）
pub const UPLOAD_FAILED: &str = "Error al subir el archivo";

/// 保存失敗（メッセージなし）
pub const SAVE_FAILED: &str = "Error al guardar la información";

/// クリップボード書き込み失敗
pub const CLIPBOARD_FAILED: &str = "Error al copiar la información al portapapeles";

/// クリップボード書き込み成功
pub const CLIPBOARD_COPIED: &str = "Información copiada al portapapeles exitosamente";

/// 再試行のきっかけになるサーバーメッセージ
pub const RETRY_SENTINEL: &str =
    "Información Soportada no Encontrada (nombre, monto, fecha y número de operación)";

pub const TITLE: &str = "Subida de Facturas";
pub const DROP_PROMPT_STRONG: &str = "Arrastra y suelta un archivo aquí,";
pub const DROP_PROMPT: &str = "o haz clic para seleccionar un archivo";
pub const SELECTED_FILE: &str = "Archivo seleccionado:";
pub const PREVIEW: &str = "Vista previa:";
pub const PREVIEW_ALT: &str = "Vista previa";
pub const PREVIEW_ZOOM_ALT: &str = "Vista previa ampliada";
pub const FILE_INFO: &str = "Información del archivo:";

pub const ACTION_REMOVE: &str = "Remover";
pub const ACTION_EXTRACT: &str = "Extraer";
pub const ACTION_EXTRACTING: &str = "Extrayendo...";
pub const ACTION_REFRESH: &str = "Actualizar";
pub const ACTION_COPY: &str = "Copiar";

pub const LABEL_NAME: &str = "Nombre";
pub const LABEL_AMOUNT: &str = "Monto";
pub const LABEL_DATE: &str = "Fecha";
pub const LABEL_OPERATION_NUMBER: &str = "Número de operación";
