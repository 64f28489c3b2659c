use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 报告段落
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub content: String,
}

/// 有序的 段落名 -> 内容 映射
///
/// 顺序为首次插入的顺序；重复插入同名段落会覆盖内容但保持原位置。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultStore {
    sections: Vec<Section>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆盖段落内容
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        let content = content.into();
        match self.sections.iter_mut().find(|s| s.name == name) {
            Some(section) => section.content = content,
            None => self.sections.push(Section { name, content }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.content.as_str())
    }

    /// 用户编辑，仅对已存在的段落生效
    pub fn set_content(&mut self, name: &str, content: impl Into<String>) -> bool {
        match self.sections.iter_mut().find(|s| s.name == name) {
            Some(section) => {
                section.content = content.into();
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections
            .iter()
            .map(|s| (s.name.as_str(), s.content.as_str()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for ResultStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.name, &section.content)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ResultStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StoreVisitor;

        impl<'de> Visitor<'de> for StoreVisitor {
            type Value = ResultStore;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of section names to text")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut store = ResultStore::new();
                while let Some((name, content)) = access.next_entry::<String, String>()? {
                    store.insert(name, content);
                }
                Ok(store)
            }
        }

        deserializer.deserialize_map(StoreVisitor)
    }
}
