use thiserror::Error;

// Everything that can go wrong during a fetch. None of these escape the
// fetch boundary as Err; they travel as the advisory half of a FetchOutcome
// so the display layer can show them next to whatever result survived.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("APIキーが設定されていません")]
    Auth,
    #[error("チャットAPIの呼び出しに失敗しました: {0}")]
    Transport(String),
    #[error("イベントデータの解析に失敗しました: {0}")]
    Parse(String),
}
