use element::Element;
use serde::{Deserialize, Serialize};

/// Everything on the canvas at the moment of submission, in order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub elements: Vec<Element>,
}

impl Submission {
    pub fn new(elements: &[Element]) -> Self {
        Self {
            elements: elements.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
