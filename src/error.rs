use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("TCPヘッダの長さが不足しています: {provided}バイト (最低{minimum}バイト必要)")]
    BufferTooShort { provided: usize, minimum: usize },
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("16進数の解析に失敗しました: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Base64の解析に失敗しました: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

#[derive(Error, Debug)]
pub enum InitProcessError {
    #[error("ロガーのセットアップに失敗しました: {0}")]
    LoggerError(String),

    #[error("環境変数の解析に失敗しました: {0}")]
    EnvVarParseError(String),
}
