use crate::error::InputError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const BASE64_PREFIX: &str = "base64:";

/// コマンドライン引数をヘッダのバイト列に変換する。
///
/// `base64:` で始まる場合はBase64、それ以外は16進数として扱う。
/// 16進数では空白と `:` の区切り、先頭の `0x` を許容する。
/// 長さの検査は HeaderView に任せる。
pub fn parse_header_arg(arg: &str) -> Result<Vec<u8>, InputError> {
    let arg = arg.trim();

    if let Some(encoded) = arg.strip_prefix(BASE64_PREFIX) {
        return Ok(STANDARD.decode(encoded.trim())?);
    }

    let arg = arg
        .strip_prefix("0x")
        .or_else(|| arg.strip_prefix("0X"))
        .unwrap_or(arg);
    let digits: String = arg
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    Ok(hex::decode(digits)?)
}
