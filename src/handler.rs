//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `recover` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心算法以及向用户报告结果。

use crate::bitmap::BmpHandle;
use crate::cipher;
use crate::cli::{HideArgs, RecoverArgs};
use crate::steganography::{self, ThreadRandom};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;

/// 处理 'Hide' 命令的执行逻辑。
///
/// 先用关键字加密消息（关键字非法时在图像被触碰之前失败），
/// 随后打开目标图像、解析头部，并把加密后的字节原地写入
/// 素数索引列像素的红色通道，最后向用户打印恢复提示。
///
/// # Arguments
///
/// * `args` - 包含图像路径、消息、关键字等的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 关键字为空或含有非字母字符。
/// * 无法复制输入图像到输出路径，或无法以读写方式打开目标图像。
/// * 头部字段不完整或宽度非正。
/// * 嵌入扫描过程中发生 I/O 失败。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    // 加密先于任何文件操作，保证非法关键字不会触碰图像。
    let encoded = cipher::encode(&args.message, &args.key).with_context(|| {
        format!(
            "Unable to encode the message with key: {}",
            args.key.red().bold()
        )
    })?;
    let payload = encoded.into_bytes();

    // 提供输出路径时先复制载体，再对副本原地改写；
    // 否则直接原地改写输入图像。
    let target = match &args.dest {
        Some(dest) => {
            fs::copy(&args.image, dest).with_context(|| {
                format!(
                    "Unable to copy image file '{}' to '{}'",
                    args.image.to_string_lossy().red().bold(),
                    dest.to_string_lossy().red().bold()
                )
            })?;
            dest.clone()
        }
        None => args.image.clone(),
    };

    let mut handle = BmpHandle::open(&target).with_context(|| {
        format!(
            "Unable to open image file for embedding: {}",
            target.to_string_lossy().red().bold()
        )
    })?;

    let header = handle.read_header().with_context(|| {
        format!(
            "Unable to parse the BMP header of '{}'. \nOnly uncompressed 24-bit BMP images are supported.",
            target.to_string_lossy().red().bold()
        )
    })?;

    let report = steganography::embed(&mut handle, &header, &payload, &mut ThreadRandom, args.verbose)
        .with_context(|| {
            format!(
                "Failed to embed the message into '{}'. \nThe image may have been rewritten only partially.",
                target.to_string_lossy().red().bold()
            )
        })?;

    println!("Here is your clue: {}", report.hint.green().bold());
    println!(
        "The message ({} bytes) has been successfully hidden in: {}",
        report.payload_length.to_string().green(),
        target.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 按嵌入时相同的遍历顺序读回素数列像素的红色字节，
/// 用关键字解密，并把明文写入输出文件或打印到控制台。
///
/// # Arguments
///
/// * `args` - 包含图像路径、关键字和载荷长度的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法打开输入的图像文件，或头部不完整。
/// * 读回的字节不是合法的 UTF-8 文本。
/// * 关键字为空或含有非字母字符。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let mut handle = BmpHandle::open(&args.image).with_context(|| {
        format!(
            "Unable to open image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let header = handle.read_header().with_context(|| {
        format!(
            "Unable to parse the BMP header of '{}'. \nThe image may not be an uncompressed 24-bit BMP.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = steganography::extract(&mut handle, &header, args.length).with_context(|| {
        format!(
            "Failed to read the hidden bytes back from '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let encoded = String::from_utf8(payload).context(
        "The recovered bytes are not valid text. \nThe image may not contain a hidden message, or the length is wrong.",
    )?;

    let text = cipher::decode(&encoded, &args.key).with_context(|| {
        format!(
            "Unable to decode the message with key: {}",
            args.key.red().bold()
        )
    })?;

    match &args.text {
        Some(path) => {
            fs::write(path, &text).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The text has been successfully recovered and saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
        None => {
            println!("Recovered message: {}", text.green().bold());
        }
    }

    Ok(())
}
