//! 地名索引：加载地名表并从文本中识别行政区划

use crate::data::builtin_locations;
use crate::error::LoadError;
use crate::record::{Location, Recognition};
use crate::trie::PrefixTrie;
use log::{debug, warn};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 全局索引实例，使用内置地名表
static GLOBAL_INDEX: Lazy<LocationIndex> = Lazy::new(|| {
    LocationIndex::builtin().expect("builtin gazetteer is well-formed")
});

/// 地名索引
///
/// 持有按编码和按名称两张查找表，以及由全部地名构建的前缀树。
/// 加载完成后只读，[`identify`](LocationIndex::identify) 可以在多个
/// 线程上并发调用。
#[derive(Debug)]
pub struct LocationIndex {
    /// 编码 -> 记录，规范表
    by_code: HashMap<String, Location>,
    /// 名称 -> 编码，重名时后加载的覆盖先加载的
    by_name: HashMap<String, String>,
    /// 全部地名构成的前缀树
    trie: PrefixTrie,
}

impl LocationIndex {
    /// 从记录序列构建索引
    ///
    /// 记录必须按上级先于下级的顺序排列：某条记录引用的上级编码
    /// 还没出现过时，返回 [`LoadError::UnknownParent`]，索引不会以
    /// 半加载状态存在。
    ///
    /// ```rust
    /// use locrec::{parse_gazetteer, LocationIndex};
    ///
    /// let records = parse_gazetteer("33,浙江,province\n3301,杭州,city,33").unwrap();
    /// let index = LocationIndex::from_records(records).unwrap();
    ///
    /// let result = index.identify("浙江杭州");
    /// assert_eq!(result.province.as_deref(), Some("浙江"));
    /// assert_eq!(result.city.as_deref(), Some("杭州"));
    /// ```
    pub fn from_records(
        records: impl IntoIterator<Item = Location>,
    ) -> Result<Self, LoadError> {
        let mut index = Self {
            by_code: HashMap::new(),
            by_name: HashMap::new(),
            trie: PrefixTrie::new(),
        };

        for record in records {
            if let Some(parent) = record.parent.as_deref() {
                if !index.by_code.contains_key(parent) {
                    return Err(LoadError::UnknownParent {
                        code: record.code.clone(),
                        parent: parent.to_string(),
                    });
                }
            }
            index.trie.insert(&record.name);
            index.by_name.insert(record.name.clone(), record.code.clone());
            index.by_code.insert(record.code.clone(), record);
        }

        Ok(index)
    }

    /// 使用内置地名表构建索引
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_records(builtin_locations()?)
    }

    /// 获取全局索引实例
    pub fn global() -> &'static LocationIndex {
        &GLOBAL_INDEX
    }

    /// 按编码查找记录
    pub fn by_code(&self, code: &str) -> Option<&Location> {
        self.by_code.get(code)
    }

    /// 按名称查找记录（重名时是最后加载的那条）
    pub fn by_name(&self, name: &str) -> Option<&Location> {
        self.by_name.get(name).and_then(|code| self.by_code.get(code))
    }

    /// 识别文本中提及的行政区划
    ///
    /// 对文本做贪心切分，把命中地名表的片段沿上级链展开，按出现
    /// 频次取每个级别最常被指向的地名。本方法从不失败：识别不出
    /// 任何地名时返回空结果。
    ///
    /// ```rust
    /// let result = locrec::LocationIndex::global().identify("我在浙江杭州的西湖边");
    /// assert_eq!(result.province.as_deref(), Some("浙江"));
    /// assert_eq!(result.city.as_deref(), Some("杭州"));
    /// assert_eq!(result.area.as_deref(), Some("西湖"));
    /// ```
    pub fn identify(&self, text: &str) -> Recognition {
        let mut result = Recognition::empty();
        if text.is_empty() {
            return result;
        }

        let matches = self.expand_matches(text);

        // 按编码计频次：直接命中和经由下级展开到达都各计一次
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for location in &matches {
            *counts.entry(location.code.as_str()).or_insert(0) += 1;
        }

        // 频次降序，同频按编码字典序，保证结果可复现
        let mut ranked: Vec<&str> = counts.keys().copied().collect();
        ranked.sort_by(|a, b| counts[b].cmp(&counts[a]).then(a.cmp(b)));

        for code in ranked {
            match self.by_code.get(code) {
                Some(location) => result.fill(location.kind, &location.name),
                None => warn!("ranked code {code} missing from index"),
            }
        }

        debug!("identify: text = {text:?}, result = {result:?}");
        result
    }

    /// 切分文本并沿上级链展开命中的记录
    ///
    /// 工作表会继续展开已追加的上级，因此一条下级记录的整条祖先链
    /// 上，越高的层级被计到的次数越多。
    fn expand_matches(&self, text: &str) -> Vec<&Location> {
        let mut matches: Vec<&Location> = self
            .trie
            .segment(text)
            .iter()
            .filter_map(|segment| self.by_name(segment))
            .collect();

        let mut i = 0;
        while i < matches.len() {
            let mut current = matches[i];
            while let Some(parent) = current.parent.as_deref() {
                match self.by_code.get(parent) {
                    Some(ancestor) => {
                        matches.push(ancestor);
                        current = ancestor;
                    }
                    None => {
                        warn!(
                            "record {} references dangling parent {parent}",
                            current.code
                        );
                        break;
                    }
                }
            }
            i += 1;
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_gazetteer;
    use crate::record::LocationKind;

    fn sample_index() -> LocationIndex {
        let records = parse_gazetteer(
            "33,浙江,province\n\
             3301,杭州,city,33\n\
             3302,宁波,city,33\n\
             330106,西湖,area,3301\n\
             330108,滨江,area,3301",
        )
        .unwrap();
        LocationIndex::from_records(records).unwrap()
    }

    #[test]
    fn test_identify_province_and_city() {
        let index = sample_index();
        let result = index.identify("浙江杭州");

        assert_eq!(result.province.as_deref(), Some("浙江"));
        assert_eq!(result.city.as_deref(), Some("杭州"));
        assert_eq!(result.area, None);
    }

    #[test]
    fn test_identify_area_expands_full_chain() {
        // 只提到区县，省和市由上级链补全
        let index = sample_index();
        let result = index.identify("西湖");

        assert_eq!(result.province.as_deref(), Some("浙江"));
        assert_eq!(result.city.as_deref(), Some("杭州"));
        assert_eq!(result.area.as_deref(), Some("西湖"));
        assert!(result.is_complete());
    }

    #[test]
    fn test_identify_in_surrounding_text() {
        let index = sample_index();
        let result = index.identify("今天从滨江出发去宁波开会");

        assert_eq!(result.province.as_deref(), Some("浙江"));
        assert_eq!(result.area.as_deref(), Some("滨江"));
        // 滨江属于杭州，但直接提及的宁波同频，编码字典序取杭州
        assert_eq!(result.city.as_deref(), Some("杭州"));
    }

    #[test]
    fn test_identify_empty_input() {
        let index = sample_index();
        assert!(index.identify("").is_empty());
    }

    #[test]
    fn test_identify_no_match() {
        let index = sample_index();
        assert!(index.identify("完全无关的文本 hello мир 🌍").is_empty());
    }

    #[test]
    fn test_identify_frequency_wins() {
        // 杭州被直接提及且被两个区县指向，宁波只被直接提及一次
        let index = sample_index();
        let result = index.identify("西湖和滨江都在杭州，宁波不是");

        assert_eq!(result.city.as_deref(), Some("杭州"));
        assert_eq!(result.province.as_deref(), Some("浙江"));
    }

    #[test]
    fn test_load_unknown_parent() {
        let records = parse_gazetteer("3301,杭州,city,33").unwrap();
        let err = LocationIndex::from_records(records).unwrap_err();

        match err {
            LoadError::UnknownParent { code, parent } => {
                assert_eq!(code, "3301");
                assert_eq!(parent, "33");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_name_collision_last_write_wins() {
        // 北京和长春都有朝阳区：by_name 取后加载的，by_code 两条都在
        let records = parse_gazetteer(
            "11,北京,province\n\
             22,吉林,province\n\
             2201,长春,city,22\n\
             110105,朝阳,area,11\n\
             220104,朝阳,area,2201",
        )
        .unwrap();
        let index = LocationIndex::from_records(records).unwrap();

        assert_eq!(index.by_name("朝阳").unwrap().code, "220104");
        assert_eq!(index.by_code("110105").unwrap().name, "朝阳");
        assert_eq!(index.by_code("220104").unwrap().name, "朝阳");

        let result = index.identify("朝阳");
        assert_eq!(result.province.as_deref(), Some("吉林"));
        assert_eq!(result.city.as_deref(), Some("长春"));
        assert_eq!(result.area.as_deref(), Some("朝阳"));
    }

    #[test]
    fn test_lookup_helpers() {
        let index = sample_index();

        let hangzhou = index.by_name("杭州").unwrap();
        assert_eq!(hangzhou.code, "3301");
        assert_eq!(hangzhou.kind, LocationKind::City);
        assert_eq!(hangzhou.parent.as_deref(), Some("33"));

        assert!(index.by_name("苏州").is_none());
        assert!(index.by_code("99").is_none());
    }

    #[test]
    fn test_builtin_index() {
        let index = LocationIndex::builtin().unwrap();
        let result = index.identify("浙江杭州");

        assert_eq!(result.province.as_deref(), Some("浙江"));
        assert_eq!(result.city.as_deref(), Some("杭州"));
    }

    #[test]
    fn test_global_index_reusable() {
        let first = LocationIndex::global().identify("深圳南山");
        let second = LocationIndex::global().identify("深圳南山");

        assert_eq!(first, second);
        assert_eq!(first.province.as_deref(), Some("广东"));
        assert_eq!(first.city.as_deref(), Some("深圳"));
        assert_eq!(first.area.as_deref(), Some("南山"));
    }
}
