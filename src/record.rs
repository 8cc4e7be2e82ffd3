//! 行政区划记录与识别结果的数据结构

use crate::error::LoadError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 行政区划级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LocationKind {
    /// 省级（含直辖市、自治区、特别行政区）
    Province,
    /// 地级市
    City,
    /// 区县
    Area,
}

impl LocationKind {
    /// 级别的标准文本形式，与地名表中的 type 字段一致
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Province => "province",
            LocationKind::City => "city",
            LocationKind::Area => "area",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationKind {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "province" => Ok(LocationKind::Province),
            "city" => Ok(LocationKind::City),
            "area" => Ok(LocationKind::Area),
            other => Err(LoadError::UnknownKind(other.to_string())),
        }
    }
}

/// 行政区划记录
///
/// 加载完成后不再变更。`parent` 只保存上级的编码，使用时一律通过
/// 编码表重新取出规范记录，不持有对象引用。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// 行政区划编码，唯一
    pub code: String,
    /// 地名，作为文本匹配的 key
    pub name: String,
    /// 级别
    pub kind: LocationKind,
    /// 上级行政区划的编码（省级没有上级）
    pub parent: Option<String>,
}

impl Location {
    /// 创建新的行政区划记录
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        kind: LocationKind,
        parent: Option<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            kind,
            parent,
        }
    }
}

/// 识别结果：每个行政级别至多保留一个最佳地名
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recognition {
    /// 省级
    pub province: Option<String>,
    /// 地级市
    pub city: Option<String>,
    /// 区县
    pub area: Option<String>,
}

impl Recognition {
    /// 创建空的识别结果
    pub fn empty() -> Self {
        Self::default()
    }

    /// 取某个级别的地名
    pub fn get(&self, kind: LocationKind) -> Option<&str> {
        match kind {
            LocationKind::Province => self.province.as_deref(),
            LocationKind::City => self.city.as_deref(),
            LocationKind::Area => self.area.as_deref(),
        }
    }

    /// 仅当该级别还是空位时填入地名
    pub(crate) fn fill(&mut self, kind: LocationKind, name: &str) {
        let slot = match kind {
            LocationKind::Province => &mut self.province,
            LocationKind::City => &mut self.city,
            LocationKind::Area => &mut self.area,
        };
        if slot.is_none() {
            *slot = Some(name.to_string());
        }
    }

    /// 是否一个地名都没识别出来
    pub fn is_empty(&self) -> bool {
        self.province.is_none() && self.city.is_none() && self.area.is_none()
    }

    /// 是否省市区三级都识别出来了
    pub fn is_complete(&self) -> bool {
        self.province.is_some() && self.city.is_some() && self.area.is_some()
    }

    /// 遍历已填充的级别，按省、市、区的顺序
    pub fn iter(&self) -> impl Iterator<Item = (LocationKind, &str)> {
        [
            (LocationKind::Province, self.province.as_deref()),
            (LocationKind::City, self.city.as_deref()),
            (LocationKind::Area, self.area.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, name)| name.map(|n| (kind, n)))
    }
}
