//! Meta tag accumulator

use std::fmt;

/// A single `<meta property="..." content="...">` tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub namespace: String,
    pub property: String,
    pub content: String,
}

impl MetaTag {
    pub fn new(namespace: &str, property: &str, content: impl fmt::Display) -> Self {
        MetaTag {
            namespace: namespace.to_string(),
            property: property.to_string(),
            content: content.to_string(),
        }
    }

    /// Full property name, e.g. `og:image:width`, or the bare namespace
    /// when the property is empty (`article:author`)
    pub fn name(&self) -> String {
        if self.property.is_empty() {
            self.namespace.clone()
        } else {
            format!("{}:{}", self.namespace, self.property)
        }
    }
}

impl fmt::Display for MetaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<meta property="{}" content="{}">"#,
            self.name(),
            self.content
        )
    }
}

/// Ordered list of meta tags built up by the object builders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaList {
    tags: Vec<MetaTag>,
}

impl MetaList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one tag
    pub fn add(&mut self, namespace: &str, property: &str, content: impl fmt::Display) -> &mut Self {
        self.tags.push(MetaTag::new(namespace, property, content));
        self
    }

    /// Append every tag of `other`, keeping its order
    pub fn include(&mut self, other: MetaList) -> &mut Self {
        self.tags.extend(other.tags);
        self
    }

    pub fn tags(&self) -> &[MetaTag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetaTag> {
        self.tags.iter()
    }

    /// Render the tags as HTML, one per line
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MetaList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tag) in self.tags.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}

impl IntoIterator for MetaList {
    type Item = MetaTag;
    type IntoIter = std::vec::IntoIter<MetaTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a> IntoIterator for &'a MetaList {
    type Item = &'a MetaTag;
    type IntoIter = std::slice::Iter<'a, MetaTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_name_with_property() {
        let tag = MetaTag::new("og", "image:width", 1200);
        assert_eq!(tag.name(), "og:image:width");
        assert_eq!(tag.content, "1200");
    }

    #[test]
    fn test_tag_name_without_property() {
        let tag = MetaTag::new("article:author", "", "http://example.com/me");
        assert_eq!(tag.name(), "article:author");
        assert_eq!(
            tag.to_string(),
            r#"<meta property="article:author" content="http://example.com/me">"#
        );
    }

    #[test]
    fn test_add_and_include_keep_order() {
        let mut nested = MetaList::new();
        nested.add("og", "image", "a.jpg").add("og", "image:width", 10);

        let mut list = MetaList::new();
        list.add("og", "type", "website");
        list.include(nested);
        list.add("og", "site_name", "Example");

        let names: Vec<String> = list.iter().map(MetaTag::name).collect();
        assert_eq!(
            names,
            vec!["og:type", "og:image", "og:image:width", "og:site_name"]
        );
    }

    #[test]
    fn test_html_joins_with_newlines() {
        let mut list = MetaList::new();
        list.add("og", "title", "Example").add("og", "url", "http://example.com");
        assert_eq!(
            list.to_html(),
            "<meta property=\"og:title\" content=\"Example\">\n\
             <meta property=\"og:url\" content=\"http://example.com\">"
        );
    }

    #[test]
    fn test_empty_list_renders_empty_string() {
        let list = MetaList::new();
        assert!(list.is_empty());
        assert_eq!(list.to_html(), "");
    }

    #[test]
    fn test_content_is_not_escaped() {
        let mut list = MetaList::new();
        list.add("og", "title", "Tom & \"Jerry\"");
        assert_eq!(
            list.to_html(),
            r#"<meta property="og:title" content="Tom & "Jerry"">"#
        );
    }
}
