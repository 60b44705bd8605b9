//! アリーナ方式のドキュメントツリー
//!
//! ブラウザ DOM のうち翻訳エンジンが必要とする部分（要素・テキストノード・属性・
//! 変更通知）だけを持つ。ノードは `Vec` に格納し、`NodeId` で参照する。

use tokio::sync::mpsc::{
    UnboundedReceiver,
    UnboundedSender,
    unbounded_channel,
};

use super::mutation::MutationRecord;
use super::node::{
    ElementData,
    NodeData,
    NodeId,
    NodeKind,
};

/// The document node always lives in slot 0.
const ROOT: NodeId = NodeId(0);

/// ドキュメントツリー
#[derive(Debug)]
pub struct Document {
    /// ノードのアリーナ
    nodes: Vec<NodeData>,
    /// 変更通知の送信先（`observe` で登録）
    observer: Option<UnboundedSender<MutationRecord>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// `<html><head></head><body></body></html>` だけを持つドキュメントを作成
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self::empty();
        let html = doc.create_element("html");
        let head = doc.create_element("head");
        let body = doc.create_element("body");
        doc.append_child(ROOT, html);
        doc.append_child(html, head);
        doc.append_child(html, body);
        doc
    }

    /// ドキュメントノードのみの空ドキュメントを作成
    #[must_use]
    pub fn empty() -> Self {
        Self { nodes: vec![NodeData::new(NodeKind::Document)], observer: None }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        ROOT
    }

    /// 変更通知の購読を開始する
    ///
    /// 購読者は一つだけ。再度呼ぶと以前の受信側は切断される。
    pub fn observe(&mut self) -> UnboundedReceiver<MutationRecord> {
        let (tx, rx) = unbounded_channel();
        self.observer = Some(tx);
        rx
    }

    /// 変更通知の購読を解除する
    pub fn disconnect_observer(&mut self) {
        self.observer = None;
    }

    fn notify(&mut self, record: MutationRecord) {
        if let Some(tx) = &self.observer
            && tx.send(record).is_err()
        {
            // 受信側が破棄されている
            self.observer = None;
        }
    }

    fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id.0)
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(kind));
        id
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(ElementData::new(tag)))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Comment(text.to_string()))
    }

    pub(crate) fn create_doctype(&mut self, name: &str) -> NodeId {
        self.push(NodeKind::Doctype(name.to_string()))
    }

    /// `child` を `parent` の末尾に追加する
    ///
    /// `child` が別の親に属している場合はそこから取り外される。
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.node(parent).is_none() || self.node(child).is_none() {
            return;
        }
        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        self.notify(MutationRecord::ChildList { target: parent, added: vec![child], removed: 0 });
    }

    /// ノードを親から取り外す（ノード自体はアリーナに残る）
    pub fn remove(&mut self, id: NodeId) {
        if let Some(parent) = self.detach(id) {
            self.notify(MutationRecord::ChildList { target: parent, added: Vec::new(), removed: 1 });
        }
    }

    fn detach(&mut self, id: NodeId) -> Option<NodeId> {
        let parent = self.node_mut(id)?.parent.take()?;
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|c| *c != id);
        }
        Some(parent)
    }

    /// 子ノードをすべて単一のテキストノードに置き換える
    fn replace_children_with_text(&mut self, id: NodeId, text: &str) {
        let removed = self.children(id).to_vec();
        for child in &removed {
            if let Some(node) = self.node_mut(*child) {
                node.parent = None;
            }
        }
        let text_node = self.create_text(text);
        if let Some(node) = self.node_mut(text_node) {
            node.parent = Some(id);
        }
        if let Some(node) = self.node_mut(id) {
            node.children = vec![text_node];
        }
        self.notify(MutationRecord::ChildList {
            target: id,
            added: vec![text_node],
            removed: removed.len(),
        });
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).map(|n| &n.kind)
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.kind(id)? {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    #[must_use]
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attribute(name)
    }

    #[must_use]
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// 属性を設定する
    ///
    /// 値が変わった場合のみ `true` を返し、変更通知を送る。
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> bool {
        let Some(element) = self.element_mut(id) else {
            return false;
        };
        match element.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, current)) if current == value => return false,
            Some((_, current)) => *current = value.to_string(),
            None => element.attributes.push((name.to_string(), value.to_string())),
        }
        self.notify(MutationRecord::Attribute { target: id, name: name.to_string() });
        true
    }

    /// テキストノードの値
    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// テキストノードの値を書き換える（変更通知なし）
    pub fn set_text(&mut self, id: NodeId, value: &str) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        match &mut node.kind {
            NodeKind::Text(text) if text != value => {
                value.clone_into(text);
                true
            }
            _ => false,
        }
    }

    /// 子孫ノードを文書順に列挙する（`id` 自身を含む）
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if self.node(current).is_none() {
                continue;
            }
            result.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        result
    }

    /// ドキュメント内の全要素を文書順に列挙する
    #[must_use]
    pub fn elements(&self) -> Vec<NodeId> {
        self.descendants(ROOT).into_iter().filter(|id| self.is_element(*id)).collect()
    }

    /// 子孫テキストノード
    #[must_use]
    pub fn text_nodes(&self, id: NodeId) -> Vec<NodeId> {
        self.descendants(id).into_iter().filter(|n| self.text(*n).is_some()).collect()
    }

    /// 子孫テキストの連結（`textContent` 相当）
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        self.text_nodes(id).into_iter().filter_map(|n| self.text(n)).collect()
    }

    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(ROOT).iter().copied().find(|c| self.is_element(*c))
    }

    #[must_use]
    pub fn body(&self) -> Option<NodeId> {
        self.first_by_tag("body")
    }

    #[must_use]
    pub fn first_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.descendants(ROOT).into_iter().find(|id| self.tag_name(*id) == Some(tag))
    }

    #[must_use]
    pub fn element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants(ROOT).into_iter().find(|id| self.attribute(*id, "id") == Some(element_id))
    }

    /// 子要素（アイコン等）を残したまま要素のテキストを置き換える
    ///
    /// - 子要素がない場合: テキスト全体を置き換える
    /// - 子要素がある場合: 最初の空白でないテキストノードを置き換え、残りを空にする。
    ///   直下になければ子孫の最初のテキストを置き換え、それもなければ末尾に追加する
    ///
    /// テキストノード前後の空白は保持する。変更があった場合のみ `true`。
    pub fn replace_text(&mut self, id: NodeId, value: &str) -> bool {
        self.replace_text_inner(id, value, None)
    }

    /// [`Self::replace_text`] と同じだが、`marker` 属性を持つ子孫要素の中のテキストには触れない
    ///
    /// 入れ子になったキー付き要素が互いのテキストを上書きしないようにする。
    pub fn replace_text_except(&mut self, id: NodeId, value: &str, marker: &str) -> bool {
        self.replace_text_inner(id, value, Some(marker))
    }

    /// `node` と `root` の間（`root` を除く）に `marker` 属性を持つ要素があるか
    fn is_under_marked(&self, node: NodeId, root: NodeId, marker: &str) -> bool {
        let mut current = self.parent(node);
        while let Some(ancestor) = current
            && ancestor != root
        {
            if self.has_attribute(ancestor, marker) {
                return true;
            }
            current = self.parent(ancestor);
        }
        false
    }

    /// テキスト置き換えの本体
    fn replace_text_inner(&mut self, id: NodeId, value: &str, marker: Option<&str>) -> bool {
        if !self.is_element(id) {
            return false;
        }
        let children = self.children(id).to_vec();
        let has_elements = children.iter().any(|c| self.is_element(*c));
        let text_children: Vec<NodeId> =
            children.iter().copied().filter(|c| self.text(*c).is_some()).collect();

        if !has_elements {
            return match text_children.as_slice() {
                [only] if children.len() == 1 => {
                    let padded = repad(self.text(*only).unwrap_or_default(), value);
                    self.set_text(*only, &padded)
                }
                _ if self.text_content(id) == value => false,
                _ => {
                    self.replace_children_with_text(id, value);
                    true
                }
            };
        }

        let mut meaningful = text_children
            .into_iter()
            .filter(|c| self.text(*c).is_some_and(|t| !t.trim().is_empty()));
        let Some(first) = meaningful.next() else {
            // ラベルが子要素（`<span>` 等）の中にある場合はそのテキストを置き換える
            let nested = self
                .text_nodes(id)
                .into_iter()
                .filter(|n| marker.is_none_or(|m| !self.is_under_marked(*n, id, m)))
                .find(|n| self.text(*n).is_some_and(|t| !t.trim().is_empty()));
            if let Some(nested) = nested {
                let padded = repad(self.text(nested).unwrap_or_default(), value);
                return self.set_text(nested, &padded);
            }
            let text_node = self.create_text(value);
            self.append_child(id, text_node);
            return true;
        };
        let rest: Vec<NodeId> = meaningful.collect();

        let padded = repad(self.text(first).unwrap_or_default(), value);
        let mut changed = self.set_text(first, &padded);
        for node in rest {
            changed |= self.set_text(node, "");
        }
        changed
    }
}

/// `original` の前後の空白を `replacement` に付け直す
pub(crate) fn repad(original: &str, replacement: &str) -> String {
    let trimmed = original.trim();
    if trimmed.is_empty() {
        return replacement.to_string();
    }
    let leading = original.len() - original.trim_start().len();
    let trailing = original.len() - original.trim_end().len();
    let prefix = original.get(..leading).unwrap_or_default();
    let suffix = original.get(original.len() - trailing..).unwrap_or_default();
    format!("{prefix}{replacement}{suffix}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn button_with_icon(doc: &mut Document) -> (NodeId, NodeId) {
        let body = doc.body().unwrap();
        let button = doc.create_element("button");
        let icon = doc.create_element("i");
        doc.set_attribute(icon, "class", "fas fa-user");
        let label = doc.create_text(" Login ");
        doc.append_child(button, icon);
        doc.append_child(button, label);
        doc.append_child(body, button);
        (button, icon)
    }

    #[googletest::test]
    fn new_document_has_html_head_body() {
        let doc = Document::new();

        let html = doc.document_element().unwrap();
        expect_that!(doc.tag_name(html), some(eq("html")));
        expect_that!(doc.body(), some(anything()));
        expect_that!(doc.first_by_tag("head"), some(anything()));
    }

    #[googletest::test]
    fn set_attribute_reports_change_only_when_value_differs() {
        let mut doc = Document::new();
        let body = doc.body().unwrap();

        expect_that!(doc.set_attribute(body, "class", "a"), eq(true));
        expect_that!(doc.set_attribute(body, "class", "a"), eq(false));
        expect_that!(doc.set_attribute(body, "class", "b"), eq(true));
        expect_that!(doc.attribute(body, "class"), some(eq("b")));
    }

    #[googletest::test]
    fn replace_text_keeps_icon_child() {
        let mut doc = Document::new();
        let (button, icon) = button_with_icon(&mut doc);

        let changed = doc.replace_text(button, "تسجيل الدخول");

        expect_that!(changed, eq(true));
        expect_that!(doc.children(button).len(), eq(2));
        expect_that!(doc.children(button)[0], eq(icon));
        expect_that!(doc.attribute(icon, "class"), some(eq("fas fa-user")));
        expect_that!(doc.text_content(button), eq(" تسجيل الدخول "));
    }

    #[googletest::test]
    fn replace_text_is_idempotent() {
        let mut doc = Document::new();
        let (button, _) = button_with_icon(&mut doc);

        doc.replace_text(button, "Sign in");
        let second = doc.replace_text(button, "Sign in");

        expect_that!(second, eq(false));
        expect_that!(doc.text_content(button).trim(), eq("Sign in"));
    }

    #[googletest::test]
    fn replace_text_uses_nested_label() {
        let mut doc = Document::new();
        let (button, icon) = button_with_icon(&mut doc);
        let label = doc.children(button)[1];
        doc.remove(label);
        let span = doc.create_element("span");
        let span_text = doc.create_text("English");
        doc.append_child(span, span_text);
        doc.append_child(button, span);

        expect_that!(doc.replace_text(button, "العربية"), eq(true));
        expect_that!(doc.text(span_text), some(eq("العربية")));
        expect_that!(doc.children(button), elements_are![eq(&icon), eq(&span)]);
    }

    #[googletest::test]
    fn replace_text_except_skips_marked_descendants() {
        let mut doc = Document::new();
        let body = doc.body().unwrap();
        let outer = doc.create_element("div");
        doc.set_attribute(outer, "data-i18n", "courseDetails");
        let inner = doc.create_element("span");
        doc.set_attribute(inner, "data-i18n", "level");
        let inner_text = doc.create_text("Level");
        doc.append_child(inner, inner_text);
        doc.append_child(outer, inner);
        doc.append_child(body, outer);

        expect_that!(doc.replace_text_except(outer, "Course Details", "data-i18n"), eq(true));
        expect_that!(doc.text(inner_text), some(eq("Level")));
        expect_that!(doc.text_content(outer), eq("LevelCourse Details"));
        expect_that!(doc.replace_text_except(outer, "Course Details", "data-i18n"), eq(false));
    }

    #[googletest::test]
    fn replace_text_on_empty_element_appends_text() {
        let mut doc = Document::new();
        let body = doc.body().unwrap();
        let span = doc.create_element("span");
        doc.append_child(body, span);

        expect_that!(doc.replace_text(span, "English"), eq(true));
        expect_that!(doc.text_content(span), eq("English"));
        expect_that!(doc.replace_text(span, "English"), eq(false));
    }

    #[googletest::test]
    fn mutations_are_reported_to_observer() {
        let mut doc = Document::new();
        let mut rx = doc.observe();
        let body = doc.body().unwrap();

        let div = doc.create_element("div");
        doc.append_child(body, div);
        doc.set_attribute(div, "title", "Home");
        let text = doc.create_text("x");
        doc.append_child(div, text);
        doc.set_text(text, "y");

        let mut records = Vec::new();
        while let Ok(record) = rx.try_recv() {
            records.push(record);
        }

        expect_that!(records.len(), eq(3));
        expect_that!(records[0].target(), eq(body));
        expect_that!(
            records[1],
            eq(&MutationRecord::Attribute { target: div, name: "title".to_string() })
        );
    }

    #[googletest::test]
    fn removed_nodes_are_not_traversed() {
        let mut doc = Document::new();
        let (button, _) = button_with_icon(&mut doc);

        doc.remove(button);

        expect_that!(doc.elements().contains(&button), eq(false));
        expect_that!(doc.parent(button), none());
    }

    #[rstest]
    #[case(" Login ", "دخول", " دخول ")]
    #[case("Login", "دخول", "دخول")]
    #[case("\n  Home", "Start", "\n  Start")]
    #[case("   ", "Start", "Start")]
    fn repad_preserves_surrounding_whitespace(
        #[case] original: &str,
        #[case] replacement: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(repad(original, replacement), expected);
    }
}
