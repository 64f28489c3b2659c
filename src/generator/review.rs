use anyhow::{Context, Result};

use crate::store::ResultStore;

/// 段落编辑器，返回 None 表示保持原内容
pub trait SectionEditor {
    fn edit(&self, name: &str, content: &str) -> Result<Option<String>>;
}

/// 使用 $EDITOR 编辑每个段落
#[derive(Default)]
pub struct ExternalEditor;

impl SectionEditor for ExternalEditor {
    fn edit(&self, name: &str, content: &str) -> Result<Option<String>> {
        println!("✏️ Edit {}", name);
        dialoguer::Editor::new()
            .trim_newlines(true)
            .edit(content)
            .context(format!("Failed to open editor for section: {}", name))
    }
}

/// 按顺序逐段编辑，段落与顺序保持不变
pub fn review(store: &mut ResultStore, editor: &dyn SectionEditor) -> Result<usize> {
    let sections: Vec<(String, String)> = store
        .iter()
        .map(|(name, content)| (name.to_string(), content.to_string()))
        .collect();

    let mut changed = 0;
    for (name, content) in sections {
        if let Some(edited) = editor.edit(&name, &content)?
            && edited != content
        {
            store.set_content(&name, edited);
            changed += 1;
        }
    }

    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct UppercaseEditor {
        seen: RefCell<Vec<String>>,
    }

    impl SectionEditor for UppercaseEditor {
        fn edit(&self, name: &str, content: &str) -> Result<Option<String>> {
            self.seen.borrow_mut().push(name.to_string());
            if name == "Idea Summary" {
                Ok(Some(content.to_uppercase()))
            } else {
                Ok(None)
            }
        }
    }

    struct FailingEditor;

    impl SectionEditor for FailingEditor {
        fn edit(&self, _name: &str, _content: &str) -> Result<Option<String>> {
            anyhow::bail!("editor exited with status 1")
        }
    }

    fn sample_store() -> ResultStore {
        let mut store = ResultStore::new();
        store.insert("Idea Summary", "parking marketplace");
        store.insert("Monetization Options", "commission");
        store
    }

    #[test]
    fn test_review_applies_edits_in_order() {
        let mut store = sample_store();
        let editor = UppercaseEditor {
            seen: RefCell::new(vec![]),
        };

        let changed = review(&mut store, &editor).unwrap();

        assert_eq!(changed, 1);
        assert_eq!(
            *editor.seen.borrow(),
            vec!["Idea Summary", "Monetization Options"]
        );
        assert_eq!(store.get("Idea Summary"), Some("PARKING MARKETPLACE"));
        assert_eq!(store.get("Monetization Options"), Some("commission"));
        assert_eq!(store.names(), vec!["Idea Summary", "Monetization Options"]);
    }

    #[test]
    fn test_review_propagates_editor_failure() {
        let mut store = sample_store();
        assert!(review(&mut store, &FailingEditor).is_err());
        assert_eq!(store, sample_store());
    }
}
