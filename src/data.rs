//! 地名表的解析与内置数据

use crate::error::LoadError;
use crate::record::{Location, LocationKind};

/// 内置的行政区划数据（编译时包含）
const LOCATION_DATA: &str = include_str!("../data/locations.csv");

/// 解析 `code,name,type[,parent_code]` 格式的地名表文本
///
/// 每行一条记录，空行跳过。字段数不是 3 或 4、级别字符串无法识别
/// 都会返回 [`LoadError`]。这里只校验单条记录的形状，上级编码是否
/// 已加载由索引在注册时校验。
///
/// ```rust
/// use locrec::parse_gazetteer;
///
/// let records = parse_gazetteer("33,浙江,province\n3301,杭州,city,33\n").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].parent.as_deref(), Some("33"));
/// ```
pub fn parse_gazetteer(data: &str) -> Result<Vec<Location>, LoadError> {
    let mut records = Vec::new();

    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let (code, name, kind, parent) = match fields.as_slice() {
            [code, name, kind] => (*code, *name, *kind, None),
            [code, name, kind, parent] => (*code, *name, *kind, Some(parent.to_string())),
            _ => return Err(LoadError::MalformedRecord(line.to_string())),
        };

        if code.is_empty() || name.is_empty() {
            return Err(LoadError::MalformedRecord(line.to_string()));
        }

        let kind: LocationKind = kind.parse()?;
        records.push(Location::new(code, name, kind, parent));
    }

    Ok(records)
}

/// 内置地名表的记录，按上级先于下级的顺序排列
pub(crate) fn builtin_locations() -> Result<Vec<Location>, LoadError> {
    parse_gazetteer(LOCATION_DATA)
}
