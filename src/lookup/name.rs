/// The name currently driving the lookup.
///
/// Every `replace`/`clear` bumps a revision, so resubmitting the same text
/// still counts as a change for anything watching it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentName {
    value: String,
    revision: u64,
}

impl CurrentName {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            revision: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn replace(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.replace(String::new());
    }
}
