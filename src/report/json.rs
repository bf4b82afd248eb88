use crate::types::report::ProfileReport;

pub fn to_json(report: &ProfileReport, include_categories: bool) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(report)?;
    if !include_categories {
        if let Some(object) = value.as_object_mut() {
            object.remove("categories");
        }
    }
    serde_json::to_string_pretty(&value)
}
