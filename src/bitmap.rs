//! # BMP 文件访问模块
//!
//! 提供带显式游标的文件句柄 [`BmpHandle`] 与头部解析。
//! 所有读写都先定位到句柄自身记录的游标位置，
//! 不依赖操作系统文件指针的隐式状态。

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::constants::{DATA_OFFSET_FIELD, FILE_SIZE_OFFSET, HEIGHT_OFFSET, WIDTH_OFFSET};
use crate::error::StegoError;

/// 从固定偏移读出的 BMP 头部字段。
/// 只读一次，嵌入过程中不再改动。
#[derive(Debug, Clone, Copy)]
pub struct BitmapHeader {
    /// 文件总字节数 (偏移 2，小端)。
    pub file_size: u32,
    /// 像素数据起始偏移 (偏移 10，小端)。
    pub pixel_data_offset: u32,
    /// 图像宽度 (偏移 18，小端)，必须为正。
    pub width: i32,
    /// 图像高度 (偏移 22，小端)。
    pub height: i32,
}

/// 以读写模式打开的图像文件句柄。
///
/// 文件本身就是持久存储：嵌入过程原地改写像素字节，
/// 不产生单独的输出缓冲，文件大小始终不变。
#[derive(Debug)]
pub struct BmpHandle {
    file: std::fs::File,
    cursor: u64,
}

impl BmpHandle {
    /// 以读写模式打开图像文件，不截断、不改变文件大小。
    ///
    /// # Errors
    ///
    /// 文件无法打开时返回 [`StegoError::FileAccess`]。
    pub fn open(path: &Path) -> Result<Self, StegoError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| StegoError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self { file, cursor: 0 })
    }

    /// 当前游标位置 (从文件头起算的字节偏移)。
    pub fn position(&self) -> u64 {
        self.cursor
    }

    /// 将游标移动到绝对位置。
    pub fn seek_to(&mut self, position: u64) {
        self.cursor = position;
    }

    /// 将游标向前跳过 `count` 字节，用于越过行尾填充。
    pub fn skip(&mut self, count: u64) {
        self.cursor += count;
    }

    /// 从游标处完整读入 `buf.len()` 字节并推进游标。
    ///
    /// 文件在读满之前结束时返回 `Ok(false)` 且游标不变，
    /// 供遍历循环优雅终止；其余 I/O 失败按错误返回。
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<bool, StegoError> {
        self.file.seek(SeekFrom::Start(self.cursor))?;

        match self.file.read_exact(buf) {
            Ok(()) => {
                self.cursor += buf.len() as u64;
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
            Err(e) => Err(StegoError::Io(e)),
        }
    }

    /// 在游标处完整写出 `buf` 并推进游标。
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), StegoError> {
        self.file.seek(SeekFrom::Start(self.cursor))?;
        self.file.write_all(buf)?;
        self.cursor += buf.len() as u64;
        Ok(())
    }

    /// 把缓冲的写入冲刷到底层文件。
    pub fn flush(&mut self) -> Result<(), StegoError> {
        self.file.flush()?;
        Ok(())
    }

    /// 解析头部的四个固定偏移字段。
    ///
    /// # Errors
    ///
    /// 任一字段读不满 4 字节、或宽度字段非正时，
    /// 返回 [`StegoError::MalformedHeader`]。此时尚未发生任何改写。
    pub fn read_header(&mut self) -> Result<BitmapHeader, StegoError> {
        let file_size = self.read_u32_at(FILE_SIZE_OFFSET)?;
        let pixel_data_offset = self.read_u32_at(DATA_OFFSET_FIELD)?;
        let width = self.read_u32_at(WIDTH_OFFSET)? as i32;
        let height = self.read_u32_at(HEIGHT_OFFSET)? as i32;

        if width <= 0 {
            return Err(StegoError::MalformedHeader(format!(
                "image width must be positive, got {width}"
            )));
        }

        Ok(BitmapHeader {
            file_size,
            pixel_data_offset,
            width,
            height,
        })
    }

    /// 读取 `offset` 处的小端 32 位整数。
    fn read_u32_at(&mut self, offset: u64) -> Result<u32, StegoError> {
        self.seek_to(offset);

        let mut bytes = [0u8; 4];
        if !self.read_exact(&mut bytes)? {
            return Err(StegoError::MalformedHeader(format!(
                "file too short to read the 4-byte field at offset {offset}"
            )));
        }

        Ok(u32::from_le_bytes(bytes))
    }
}
