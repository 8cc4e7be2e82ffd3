//! 错误类型定义

use thiserror::Error;

/// 地名表加载错误
///
/// 加载是全有或全无的：任何一条记录出错都会使整个加载失败，
/// 不会留下半加载状态的索引。
#[derive(Debug, Error)]
pub enum LoadError {
    /// 记录引用了尚未加载的上级编码（上级必须先于下级出现）
    #[error("record `{code}` references unknown parent code `{parent}`")]
    UnknownParent { code: String, parent: String },

    /// 记录字段数不对
    #[error("malformed gazetteer record: {0}")]
    MalformedRecord(String),

    /// 无法识别的行政级别
    #[error("unknown location kind: {0}")]
    UnknownKind(String),
}
