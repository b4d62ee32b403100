/// A request value that the sheet template places into a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelField {
    UnitNumber,
    DocNumber,
    DocTitle,
    Department,
    Year,
    ProjectNumber,
    TestNumber,
    Writer,
    /// `"[{project_number}] {test_number}"` in the project summary block
    ProjectHeading,
}

impl LabelField {
    /// Request key the value is read from
    pub fn key(&self) -> &'static str {
        match self {
            LabelField::UnitNumber => "unit_number",
            LabelField::DocNumber => "doc_number",
            LabelField::DocTitle => "doc_title",
            LabelField::Department => "department",
            LabelField::Year => "year",
            LabelField::ProjectNumber => "project_number",
            LabelField::TestNumber => "test_number",
            LabelField::Writer => "writer",
            LabelField::ProjectHeading => "project_heading",
        }
    }
}
