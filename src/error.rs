//! # 错误类型模块
//!
//! 定义库层统一的错误枚举。上层处理逻辑通过 `anyhow` 附加上下文。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 隐写流程中可能出现的所有致命错误。
///
/// 载荷超出可用素数列容量、或图像在遍历途中提前结束，
/// 均按部分嵌入处理，不属于错误。
#[derive(Debug, Error)]
pub enum StegoError {
    /// 无法以读写方式打开图像文件。
    #[error("Unable to access image file '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 头部字段不完整，或宽度字段非正。
    /// 在任何像素被改写之前抛出。
    #[error("Malformed BMP header: {0}")]
    MalformedHeader(String),

    /// 关键字为空或含有非字母字符。
    /// 在图像被打开之前抛出，保证文件不被触碰。
    #[error("Invalid cipher key: the keyword must be non-empty and contain only alphabetic characters")]
    InvalidKey,

    /// 遍历过程中的读/写/定位失败。
    /// 某一行一旦开始改写，此类失败不可回滚。
    #[error("I/O failure while traversing pixel data: {0}")]
    Io(#[from] io::Error),
}
