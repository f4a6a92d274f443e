use serde::Deserialize;

/// Spring-style page envelope returned by the `pagesFiltered` endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(rename = "totalElements", default)]
    pub total_elements: u64,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u64,
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub size: u64,
}

impl<T> Page<T> {
    /// Map the page content, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
        }
    }

    pub fn footer(&self) -> String {
        format!(
            "page {}/{} ({} total)",
            self.number + 1,
            self.total_pages.max(1),
            self.total_elements
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_deserializes_spring_envelope() {
        let raw = r#"{"content":[1,2,3],"totalElements":10,"totalPages":4,"number":0,"size":3}"#;
        let page: Page<i32> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_elements, 10);
        assert_eq!(page.footer(), "page 1/4 (10 total)");
    }

    #[test]
    fn missing_content_defaults_empty() {
        let page: Page<i32> = serde_json::from_str(r#"{"totalElements":0}"#).unwrap();
        assert!(page.content.is_empty());
    }
}
