//! # locrec - Location Mention Recognizer
//!
//! 中文地名提及识别库，从自由文本中找出省、市、区的提及并补全其
//! 行政层级。
//!
//! ## 功能特性
//!
//! - 基于前缀树的贪心最长匹配切分，从任意文本中找出地名
//! - 命中的地名沿上级链展开，提到区县即可补全所属的市和省
//! - 按提及频次为每个行政级别挑选最佳地名
//! - 支持加载自定义地名表（`code,name,type[,parent_code]` 格式）
//! - 内置一份常用行政区划数据
//!
//! ## 快速开始
//!
//! ```rust
//! let result = locrec::identify("下周去浙江杭州出差，顺便逛逛西湖");
//! assert_eq!(result.province.as_deref(), Some("浙江"));
//! assert_eq!(result.city.as_deref(), Some("杭州"));
//! assert_eq!(result.area.as_deref(), Some("西湖"));
//!
//! // 识别不出地名时返回空结果，从不报错
//! assert!(locrec::identify("").is_empty());
//! assert!(locrec::identify("毫无地名的文本").is_empty());
//! ```
//!
//! ## 自定义地名表
//!
//! ```rust
//! use locrec::{parse_gazetteer, LocationIndex};
//!
//! let records = parse_gazetteer("33,浙江,province\n3301,杭州,city,33").unwrap();
//! let index = LocationIndex::from_records(records).unwrap();
//! let result = index.identify("浙江杭州");
//! assert_eq!(result.city.as_deref(), Some("杭州"));
//! ```

mod data;
mod error;
mod index;
mod record;
mod trie;

pub use data::parse_gazetteer;
pub use error::LoadError;
pub use index::LocationIndex;
pub use record::{Location, LocationKind, Recognition};
pub use trie::PrefixTrie;

/// 便捷函数：使用全局索引识别文本中的行政区划
///
/// ```rust
/// let result = locrec::identify("深圳南山的天气");
/// assert_eq!(result.city.as_deref(), Some("深圳"));
/// ```
pub fn identify(text: &str) -> Recognition {
    LocationIndex::global().identify(text)
}
