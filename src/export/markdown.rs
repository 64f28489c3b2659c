use crate::store::ResultStore;

/// 一级标题 + 每个段落一个二级标题
pub fn to_markdown(store: &ResultStore, title: &str) -> String {
    let mut markdown = format!("# {}\n\n", title);
    for (name, content) in store.iter() {
        markdown.push_str(&format!("## {}\n\n{}\n\n", name, content));
    }
    markdown
}
