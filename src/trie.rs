//! 前缀树实现，用于地名的贪心最长匹配切分

use std::collections::{HashMap, HashSet};

/// 前缀树节点
///
/// 节点本身不存储任何值，是否构成一个完整词完全由 `is_end` 标记决定。
#[derive(Debug, Default)]
struct TrieNode {
    /// 子节点映射（字符 -> 子节点）
    children: HashMap<char, TrieNode>,
    /// 是否是词的结尾
    is_end: bool,
}

/// 前缀树，存储一组字符串并支持精确查找和贪心切分
#[derive(Debug, Default)]
pub struct PrefixTrie {
    root: TrieNode,
}

impl PrefixTrie {
    /// 创建空的前缀树
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个词（重复插入同一个词是无害的幂等操作）
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.is_end = true;
    }

    /// 精确匹配：词必须完整插入过才算存在，前缀不算
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for ch in word.chars() {
            match node.children.get(&ch) {
                Some(n) => node = n,
                None => return false,
            }
        }
        node.is_end
    }

    /// 按树中能匹配到的最长字符串贪心切分文本
    ///
    /// 从左到右扫描：能沿树下降就继续累积；遇到无法下降的字符时，
    /// 若累积串非空则先产出累积串、回到根节点并用同一个字符重新
    /// 尝试匹配，否则把该字符单独产出并前进。扫描结束后产出残留的
    /// 累积串（即使它只是某个词的前缀，由下游的名称查找负责过滤）。
    ///
    /// 结果是去重的集合，不保留出现位置和顺序。一旦沿树下降就不再
    /// 回退，局部的贪心延伸可能错过更优的切分，对地名场景可接受。
    ///
    /// ```rust
    /// use locrec::PrefixTrie;
    ///
    /// let mut trie = PrefixTrie::new();
    /// trie.insert("浙江");
    /// trie.insert("杭州");
    /// let segments = trie.segment("浙江杭州");
    /// assert!(segments.contains("浙江"));
    /// assert!(segments.contains("杭州"));
    /// assert_eq!(segments.len(), 2);
    /// ```
    pub fn segment(&self, text: &str) -> HashSet<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut result = HashSet::new();
        let mut node = &self.root;
        let mut current = String::new();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            if let Some(child) = node.children.get(&ch) {
                current.push(ch);
                node = child;
                i += 1;
            } else {
                if current.is_empty() {
                    result.insert(ch.to_string());
                    i += 1;
                } else {
                    // 不前进：失败字符下一轮从根节点重新匹配
                    result.insert(std::mem::take(&mut current));
                }
                node = &self.root;
            }
        }

        if !current.is_empty() {
            result.insert(current);
        }
        result
    }
}
