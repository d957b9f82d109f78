//! # 维吉尼亚密码模块
//!
//! 基于关键字的多表替换密码。字母按关键字逐位移位，
//! 非字母字符原样通过且不推进关键字游标，大小写保持不变。

use crate::error::StegoError;

enum Mode {
    Encrypt,
    Decrypt,
}

/// 用关键字加密明文。
///
/// # Errors
///
/// 关键字为空或含有非字母字符时返回 [`StegoError::InvalidKey`]。
pub fn encode(text: &str, keyword: &str) -> Result<String, StegoError> {
    transform(text, keyword, Mode::Encrypt)
}

/// 用加密时的关键字解密密文。
///
/// 对任意文本和合法关键字满足 `decode(encode(t, k), k) == t`。
///
/// # Errors
///
/// 关键字为空或含有非字母字符时返回 [`StegoError::InvalidKey`]。
pub fn decode(text: &str, keyword: &str) -> Result<String, StegoError> {
    transform(text, keyword, Mode::Decrypt)
}

fn transform(text: &str, keyword: &str, mode: Mode) -> Result<String, StegoError> {
    if keyword.is_empty() || !keyword.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(StegoError::InvalidKey);
    }

    let key: Vec<u8> = keyword.bytes().map(|b| b.to_ascii_uppercase()).collect();
    let mut key_index = 0usize;
    let mut result = String::with_capacity(text.len());

    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
            let plain = i32::from(ch.to_ascii_uppercase() as u8 - b'A');
            let shift = i32::from(key[key_index] - b'A');

            let moved = match mode {
                Mode::Encrypt => plain + shift,
                Mode::Decrypt => plain - shift,
            }
            .rem_euclid(26);

            result.push((base + moved as u8) as char);

            // 游标仅在消耗了一个字母时前进。
            key_index = (key_index + 1) % key.len();
        } else {
            result.push(ch);
        }
    }

    Ok(result)
}
