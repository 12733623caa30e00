//! Column schemas derived from record types
//!
//! A type becomes exportable by implementing [`Record`]: it lists its fields
//! in declaration order, each with an accessor and an optional
//! [`FieldDisplay`] annotation. [`ColumnSchema::derive`] turns that list into
//! the ordered columns of a table.
//!
//! The [`record!`](crate::record) macro writes the impl for plain structs:
//!
//! ```rust
//! use gridwriter::{record, ColumnSchema, FieldDisplay};
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//!     internal_id: u64,
//! }
//!
//! record!(Person {
//!     name => FieldDisplay::titled("Full name"),
//!     age,
//!     internal_id => FieldDisplay::excluded(),
//! });
//!
//! let schema = ColumnSchema::<Person>::derive();
//! let titles: Vec<_> = schema.columns().map(|c| c.display_name()).collect();
//! assert_eq!(titles, ["Full name", "age"]);
//! ```

use std::fmt;

/// Per-field display annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDisplay {
    title: String,
    format: Option<String>,
    include: bool,
}

impl FieldDisplay {
    /// Include the field under `title` (an empty title keeps the field name)
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            format: None,
            include: true,
        }
    }

    /// Attach a format code, handed to the session's cell formatter
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Include or exclude the field, keeping its name as title
    pub fn included(include: bool) -> Self {
        Self {
            title: String::new(),
            format: None,
            include,
        }
    }

    /// Leave the field out of tables
    pub fn excluded() -> Self {
        Self::included(false)
    }

    /// Override inclusion; an excluded field's title is ignored
    pub fn with_included(mut self, include: bool) -> Self {
        self.include = include;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn is_included(&self) -> bool {
        self.include
    }
}

/// A readable field of a record type
pub struct Field<T> {
    name: &'static str,
    display: Option<FieldDisplay>,
    get: fn(&T) -> String,
}

impl<T> Field<T> {
    /// Describe a field by name and text accessor
    pub fn new(name: &'static str, get: fn(&T) -> String) -> Self {
        Self {
            name,
            display: None,
            get,
        }
    }

    /// Annotate the field
    pub fn with_display(mut self, display: FieldDisplay) -> Self {
        self.display = Some(display);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn display(&self) -> Option<&FieldDisplay> {
        self.display.as_ref()
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("display", &self.display)
            .finish()
    }
}

/// A type whose values can be written as table rows
pub trait Record: Sized {
    /// Readable fields in declaration order
    fn fields() -> Vec<Field<Self>>;
}

/// One column of a table
pub struct SchemaColumn<T> {
    source_field: &'static str,
    display_name: String,
    format: Option<String>,
    included: bool,
    get: fn(&T) -> String,
}

impl<T> SchemaColumn<T> {
    fn from_field(field: Field<T>) -> Self {
        let (display_name, format, included) = match field.display {
            None => (field.name.to_string(), None, true),
            Some(display) => {
                let name = if display.title.is_empty() {
                    field.name.to_string()
                } else {
                    display.title
                };
                (name, display.format, display.include)
            }
        };

        Self {
            source_field: field.name,
            display_name,
            format,
            included,
            get: field.get,
        }
    }

    /// Name of the field the column reads
    pub fn source_field(&self) -> &'static str {
        self.source_field
    }

    /// Header text
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn is_included(&self) -> bool {
        self.included
    }

    /// The column's text for one record
    pub fn value(&self, record: &T) -> String {
        (self.get)(record)
    }
}

impl<T> fmt::Debug for SchemaColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaColumn")
            .field("source_field", &self.source_field)
            .field("display_name", &self.display_name)
            .field("format", &self.format)
            .field("included", &self.included)
            .finish()
    }
}

/// Ordered columns of a record type
///
/// Every declared field is kept; [`columns`](Self::columns) yields the
/// included ones in declaration order.
#[derive(Debug)]
pub struct ColumnSchema<T> {
    fields: Vec<SchemaColumn<T>>,
}

impl<T: Record> ColumnSchema<T> {
    /// Build the schema of `T`
    pub fn derive() -> Self {
        Self {
            fields: T::fields().into_iter().map(SchemaColumn::from_field).collect(),
        }
    }
}

impl<T> ColumnSchema<T> {
    /// Included columns in declaration order
    pub fn columns(&self) -> impl Iterator<Item = &SchemaColumn<T>> {
        self.fields.iter().filter(|c| c.included)
    }

    /// Every declared field, excluded ones too
    pub fn all_fields(&self) -> &[SchemaColumn<T>] {
        &self.fields
    }

    /// Number of included columns
    pub fn len(&self) -> usize {
        self.columns().count()
    }

    /// True when no field qualifies as a column
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Implement [`Record`] for a struct from its field list
///
/// Fields are listed in the order the columns should appear. Each entry is a
/// field name, optionally followed by `=> <FieldDisplay expression>`. Field
/// values are rendered with [`ToString`].
#[macro_export]
macro_rules! record {
    ($ty:ty { $($field:ident $(=> $display:expr)?),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn fields() -> ::std::vec::Vec<$crate::Field<Self>> {
                ::std::vec![
                    $(
                        $crate::Field::<Self>::new(::std::stringify!($field), |record| {
                            ::std::string::ToString::to_string(&record.$field)
                        })
                        $(.with_display($display))?
                    ),*
                ]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Item {
        sku: String,
        qty: u32,
        price: f64,
        secret: bool,
    }

    crate::record!(Item {
        sku => FieldDisplay::titled(""),
        qty => FieldDisplay::titled("Quantity").with_format("0"),
        price => FieldDisplay::included(true),
        secret => FieldDisplay::titled("Shown?"),
    });

    struct Hidden {
        a: i32,
    }

    crate::record!(Hidden {
        a => FieldDisplay::excluded(),
    });

    #[test]
    fn test_derive_follows_declaration_order() {
        let schema = ColumnSchema::<Item>::derive();
        let names: Vec<_> = schema.columns().map(|c| c.display_name().to_string()).collect();
        assert_eq!(names, vec!["sku", "Quantity", "price", "Shown?"]);

        let qty = schema.columns().nth(1).unwrap();
        assert_eq!(qty.source_field(), "qty");
        assert_eq!(qty.format(), Some("0"));
    }

    #[test]
    fn test_values_are_text() {
        let item = Item {
            sku: "A-1".into(),
            qty: 3,
            price: 2.5,
            secret: true,
        };
        let schema = ColumnSchema::<Item>::derive();
        let values: Vec<_> = schema.columns().map(|c| c.value(&item)).collect();
        assert_eq!(values, vec!["A-1", "3", "2.5", "true"]);
    }

    #[test]
    fn test_exclusion_wins_over_title() {
        let schema = ColumnSchema::<Hidden>::derive();
        assert!(schema.is_empty());
        assert_eq!(schema.all_fields().len(), 1);
        assert!(!schema.all_fields()[0].is_included());

        let titled_but_excluded = SchemaColumn::<Hidden>::from_field(
            Field::new("a", |h: &Hidden| h.a.to_string())
                .with_display(FieldDisplay::titled("Visible?").with_included(false)),
        );
        assert!(!titled_but_excluded.is_included());
    }

    #[test]
    fn test_schema_is_deterministic() {
        let first: Vec<_> = ColumnSchema::<Item>::derive()
            .columns()
            .map(|c| c.source_field())
            .collect();
        let second: Vec<_> = ColumnSchema::<Item>::derive()
            .columns()
            .map(|c| c.source_field())
            .collect();
        assert_eq!(first, second);
    }
}
