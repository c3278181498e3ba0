use base::Vec2;

/// One decoded symbol: its text and the polygon it occupies in the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSymbol {
    pub payload: String,
    pub boundary: Vec<Vec2<i32>>,
}

impl DecodedSymbol {
    pub fn new(payload: impl Into<String>, boundary: Vec<Vec2<i32>>) -> Self {
        Self {
            payload: payload.into(),
            boundary,
        }
    }
}
