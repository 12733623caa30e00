/// One plotted series: values, optional category labels and a name
#[derive(Debug, Clone, PartialEq)]
pub struct DataSeries {
    pub name: Option<String>,
    pub values: DataReference,
    pub categories: Option<DataReference>,
}

impl DataSeries {
    pub fn new(values: DataReference) -> Self {
        Self {
            name: None,
            values,
            categories: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_categories(mut self, labels: DataReference) -> Self {
        self.categories = Some(labels);
        self
    }
}

/// Chart data held inline rather than read from cells
#[derive(Debug, Clone, PartialEq)]
pub enum DataReference {
    Numbers(Vec<f64>),
    Strings(Vec<String>),
}

impl DataReference {
    pub fn numbers(values: Vec<f64>) -> Self {
        Self::Numbers(values)
    }

    pub fn strings(labels: Vec<String>) -> Self {
        Self::Strings(labels)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Numbers(values) => values.len(),
            Self::Strings(labels) => labels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
