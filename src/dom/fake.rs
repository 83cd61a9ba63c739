//! In-memory page for unit tests.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use super::{Host, PreferenceStore};
use crate::config::ScrollBehavior;
use crate::error::SiteError;

pub(crate) type NodeId = usize;

#[derive(Debug, Default, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attrs: HashMap<String, String>,
    text: String,
}

#[derive(Debug, Default)]
pub(crate) struct FakePage {
    nodes: RefCell<Vec<Node>>,
    body: Option<NodeId>,
    pub scrolled: RefCell<Vec<(NodeId, ScrollBehavior)>>,
    pub alerts: RefCell<Vec<String>>,
}

impl FakePage {
    /// Page with a <body> and nothing else
    pub fn new() -> Self {
        let mut page = Self::default();
        page.body = Some(page.push(Node {
            tag: "body".to_string(),
            ..Node::default()
        }));
        page
    }

    /// Page without a <body> element
    pub fn without_body() -> Self {
        Self::default()
    }

    fn push(&self, node: Node) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        nodes.len() - 1
    }

    pub fn add(&self, tag: &str, id: Option<&str>, classes: &[&str]) -> NodeId {
        self.push(Node {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Node::default()
        })
    }

    pub fn add_anchor(&self, href: &str) -> NodeId {
        let node = self.add("a", None, &[]);
        self.nodes.borrow_mut()[node]
            .attrs
            .insert("href".to_string(), href.to_string());
        node
    }

    pub fn text(&self, node: NodeId) -> String {
        self.nodes.borrow()[node].text.clone()
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes.borrow()[node].classes.iter().cloned().collect()
    }

    fn matches(node: &Node, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            return node.classes.contains(class);
        }
        if let Some(id) = selector.strip_prefix('#') {
            return node.id.as_deref() == Some(id);
        }
        // tag[attr^="prefix"]
        if let Some((tag, rest)) = selector.split_once('[') {
            let Some((attr, prefix)) = rest.trim_end_matches(']').split_once("^=") else {
                return false;
            };
            let prefix = prefix.trim_matches('"');
            return node.tag == tag
                && node
                    .attrs
                    .get(attr)
                    .is_some_and(|value| value.starts_with(prefix));
        }
        node.tag == selector
    }
}

impl Host for FakePage {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>, SiteError> {
        Ok(self
            .nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| Self::matches(n, selector))
            .map(|(i, _)| i)
            .collect())
    }

    fn body(&self) -> Option<NodeId> {
        self.body
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.nodes.borrow_mut()[*element].text = text.to_string();
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[*element].attrs.get(name).cloned()
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[*element].classes.contains(class)
    }

    fn add_class(&self, element: &NodeId, class: &str) -> Result<(), SiteError> {
        self.nodes.borrow_mut()[*element]
            .classes
            .insert(class.to_string());
        Ok(())
    }

    fn toggle_class(&self, element: &NodeId, class: &str) -> Result<bool, SiteError> {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*element].classes;
        if classes.remove(class) {
            Ok(false)
        } else {
            classes.insert(class.to_string());
            Ok(true)
        }
    }

    fn scroll_into_view(&self, element: &NodeId, behavior: ScrollBehavior) {
        self.scrolled.borrow_mut().push((*element, behavior));
    }

    fn alert(&self, message: &str) -> Result<(), SiteError> {
        self.alerts.borrow_mut().push(message.to_string());
        Ok(())
    }
}

/// Store whose writes always fail, like a full or locked-down localStorage.
#[derive(Debug, Default)]
pub(crate) struct ReadOnlyStore {
    pub value: Option<String>,
}

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.value.clone())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), SiteError> {
        Err(SiteError::StorageUnavailable("QuotaExceededError".to_string()))
    }
}
