//! # prime_hide 库
//!
//! 本库包含素数列隐写工具的核心逻辑：维吉尼亚密码编解码
//! 与 BMP 像素流的原地改写。

// 声明库包含的所有模块。

pub mod bitmap;
pub mod cipher;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;
