use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DictionaryKind {
    Company,
    Department,
    JobTitle,
    City,
    CompanyStructure,
}

impl DictionaryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Department => "department",
            Self::JobTitle => "job title",
            Self::City => "city",
            Self::CompanyStructure => "company structure",
        }
    }
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
