use serde_derive::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct Row {
    pub cells: Vec<String>,
}
