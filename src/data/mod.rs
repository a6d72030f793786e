pub mod document;

/// Columns of the code table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Explanation,
    Watch,
    Link,
    Date,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Explanation,
        Field::Watch,
        Field::Link,
        Field::Date,
    ];

    /// Internal key of the column
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Explanation => "Explanation",
            Field::Watch => "Watch",
            Field::Link => "Link",
            Field::Date => "Date",
        }
    }

    /// Text shown next to the input box
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name Link",
            Field::Explanation => "Explanation Link",
            Field::Watch => "Watch Link",
            Field::Link => "Link",
            Field::Date => "Date",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// One submitted table entry. Values are kept verbatim, empty strings included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: [String; 5],
}

impl Record {
    pub fn new(values: [String; 5]) -> Self {
        Self { values }
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Fields with their values in column order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.iter().map(move |&field| (field, self.get(field)))
    }
}
