#[derive(Debug, Clone, PartialEq)]
pub struct CompositionRecord {
    pub id: String,
    pub composition: String,
    pub target: f64,
}

impl CompositionRecord {
    pub fn new(id: impl Into<String>, composition: impl Into<String>, target: f64) -> Self {
        Self {
            id: id.into(),
            composition: composition.into(),
            target,
        }
    }
}
